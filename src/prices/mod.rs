// src/prices/mod.rs

use reqwest::Client;
use tracing::{error, info, warn};
use url::Url;

use crate::{
    fetch::fetch_sheet,
    process::{parse_csv, RawTable, Record},
};

/// How a single load of the price sheet ended.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Record>),
    /// Fetched fine, but the sheet had no rows at all.
    Empty,
    /// Network or body decode failure. Nothing should be updated.
    Failed(anyhow::Error),
}

impl LoadOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            LoadOutcome::Loaded(_) => "loaded",
            LoadOutcome::Empty => "empty",
            LoadOutcome::Failed(_) => "failed",
        }
    }

    pub fn records(&self) -> &[Record] {
        match self {
            LoadOutcome::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            LoadOutcome::Loaded(records) => records,
            _ => Vec::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Fetch, parse and key the sheet at `url`.
///
/// An empty sheet is logged as a warning and a failed fetch as an error;
/// both come back as outcomes, never as `Err`.
#[tracing::instrument(level = "info", skip(client, url), fields(url = %url))]
pub async fn load_outcome(client: &Client, url: &Url) -> LoadOutcome {
    let text = match fetch_sheet(client, url).await {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "price sheet load failed");
            return LoadOutcome::Failed(e);
        }
    };

    let Some(table) = RawTable::from_rows(parse_csv(&text)) else {
        warn!("price sheet is empty");
        return LoadOutcome::Empty;
    };

    let records = table.records();
    info!(rows = records.len(), headers = ?table.headers, "price sheet loaded");
    LoadOutcome::Loaded(records)
}

/// Same as [`load_outcome`], collapsed to the records (empty unless loaded).
pub async fn load(client: &Client, url: &Url) -> Vec<Record> {
    load_outcome(client, url).await.into_records()
}
