/// Trim a cell: whitespace plus the U+FEFF byte-order mark that spreadsheet
/// exports put in front of the first header.
pub fn trim_cell(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Header cell → lookup key: trim, lower-case.
pub fn normalize_header(raw: &str) -> String {
    trim_cell(raw).to_lowercase()
}
