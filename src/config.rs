// src/config.rs

use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use url::Url;

/// Published CSV export of the price sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTCNB2cD-LexAA4WYi5tR7a7wxkTjaaV-gos_bh2ZmnAPJTEAfOFIb8027q337NJGjvlH7hIw32q7VI/pub?gid=980462976&single=true&output=csv";

pub const SHEET_URL_VAR: &str = "PRICE_SHEET_URL";
pub const CATALOG_VAR: &str = "CATALOG_HTML";

#[derive(Debug, Clone)]
pub struct Config {
    pub sheet_url: Url,
    /// Catalog page to merge prices into; records are just printed without it.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = get(SHEET_URL_VAR).unwrap_or_else(|| DEFAULT_SHEET_URL.to_string());
        let sheet_url = Url::parse(raw_url.trim())
            .with_context(|| format!("parsing {} {:?}", SHEET_URL_VAR, raw_url))?;
        let catalog_path = get(CATALOG_VAR).map(PathBuf::from);

        Ok(Config {
            sheet_url,
            catalog_path,
        })
    }
}
