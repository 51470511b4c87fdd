// src/display/mod.rs

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::{
    prices::{load_outcome, LoadOutcome},
    process::Record,
};

pub mod catalog;
pub mod format;

pub use catalog::CatalogPage;
pub use format::{updated_stamp, PriceFormat};

/// Where loaded prices end up. Lookup by product id is the sink's business.
pub trait DisplaySink {
    /// Replace the price text of the card `id`. `false` if there is no such
    /// card or it has nowhere to show a price.
    fn set_price(&mut self, id: &str, text: &str) -> bool;

    /// Replace the "last updated" text, if the sink shows one.
    fn set_updated(&mut self, text: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Cards that received a price.
    pub priced: usize,
    /// Cards that received the fallback text (empty price cell).
    pub on_request: usize,
    /// Records whose id has no card.
    pub unmatched: usize,
    /// Records without an id.
    pub skipped: usize,
}

/// Push every record's formatted price into `sink`.
pub fn apply_records<S: DisplaySink + ?Sized>(
    sink: &mut S,
    records: &[Record],
    format: &PriceFormat,
) -> ApplySummary {
    let mut summary = ApplySummary::default();
    for record in records {
        let id = record.get("id");
        if id.is_empty() {
            summary.skipped += 1;
            continue;
        }
        if !sink.set_price(id, &format.format(record)) {
            debug!(id, "no card for price row");
            summary.unmatched += 1;
        } else if record.get("price").is_empty() {
            summary.on_request += 1;
        } else {
            summary.priced += 1;
        }
    }
    summary
}

#[derive(Debug)]
pub struct RefreshReport {
    pub outcome: LoadOutcome,
    /// `None` unless the load succeeded and the sink was touched.
    pub applied: Option<ApplySummary>,
}

/// Load the sheet and, only if that worked, update `sink` and its stamp.
///
/// An empty or failed load leaves `sink` exactly as it was.
pub async fn refresh<S: DisplaySink + ?Sized>(
    client: &Client,
    url: &Url,
    sink: &mut S,
    format: &PriceFormat,
    today: NaiveDate,
) -> RefreshReport {
    let outcome = load_outcome(client, url).await;
    if !outcome.is_loaded() {
        return RefreshReport {
            outcome,
            applied: None,
        };
    }

    let summary = apply_records(sink, outcome.records(), format);
    sink.set_updated(&updated_stamp(today));
    info!(
        rows = outcome.records().len(),
        priced = summary.priced,
        on_request = summary.on_request,
        unmatched = summary.unmatched,
        "prices applied"
    );
    RefreshReport {
        outcome,
        applied: Some(summary),
    }
}
