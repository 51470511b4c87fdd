// src/process/mod.rs
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::{debug, warn};

pub mod parser;
pub mod raw_table;
pub mod utils;

pub use parser::parse_csv;
pub use raw_table::{RawTable, Record};

/// Parse sheet text straight into records. An empty sheet gives no records.
pub fn sheet_records(text: &str) -> Vec<Record> {
    let rows = parse_csv(text);
    debug!(rows = rows.len(), "parsed sheet");
    match RawTable::from_rows(rows) {
        Some(table) => table.records(),
        None => Vec::new(),
    }
}

/// Read a local CSV export and turn it into records.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_sheet_file<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read sheet file: {:?}", path.as_ref()))?;
    let records = sheet_records(&text);
    if records.is_empty() {
        warn!("sheet file has no data rows");
    }
    Ok(records)
}
