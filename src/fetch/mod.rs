// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::{
    header::{CACHE_CONTROL, PRAGMA},
    Client,
};
use tracing::debug;
use url::Url;

/// GET the published sheet and return its body as text.
///
/// Caches are bypassed so a re-published sheet shows up on the next load.
/// Non-2xx statuses are errors, so an error page is never parsed as a
/// sheet (a plain browser `fetch` would hand its body over). No timeout
/// and no retry: a hung request stalls only this call.
pub async fn fetch_sheet(client: &Client, url: &Url) -> Result<String> {
    debug!(%url, "fetching sheet");
    let text = client
        .get(url.clone())
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))?;
    debug!(%url, bytes = text.len(), "fetched sheet");
    Ok(text)
}
