//! inspect_sheet: parse a local price-sheet CSV export and print its records.
//!
//! Usage: `inspect_sheet <sheet.csv>`

use anyhow::{bail, Result};
use pricesheet::process::read_sheet_file;
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();

    let Some(path) = env::args().nth(1) else {
        bail!("usage: inspect_sheet <sheet.csv>");
    };

    let records = read_sheet_file(&path)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    eprintln!("{} rows", records.len());
    Ok(())
}
