use anyhow::Result;
use chrono::Local;
use pricesheet::{
    config::Config,
    display::{refresh, CatalogPage, PriceFormat},
    prices::{load_outcome, LoadOutcome},
};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::from_env()?;
    let client = Client::new();
    info!(url = %config.sheet_url, catalog = ?config.catalog_path, "configured");

    // ─── 3a) no catalog: just dump the records ───────────────────────
    let Some(catalog_path) = config.catalog_path.as_ref() else {
        let outcome = load_outcome(&client, &config.sheet_url).await;
        if let LoadOutcome::Failed(_) = outcome {
            // already logged; nothing to print
            return Ok(());
        }
        println!("{}", serde_json::to_string_pretty(outcome.records())?);
        return Ok(());
    };

    // ─── 3b) merge prices into the catalog page ──────────────────────
    let mut page = CatalogPage::load_file(catalog_path)?;
    info!(cards = page.len(), "catalog loaded");

    let today = Local::now().date_naive();
    let report = refresh(
        &client,
        &config.sheet_url,
        &mut page,
        &PriceFormat::default(),
        today,
    )
    .await;

    // ─── 4) report ───────────────────────────────────────────────────
    for (id, price) in page.prices() {
        println!("{}\t{}", id, price.unwrap_or("-"));
    }
    if let Some(stamp) = page.updated() {
        println!("{}", stamp);
    }
    info!(outcome = report.outcome.as_str(), applied = ?report.applied, "all done");
    Ok(())
}
