use serde::Serialize;
use std::collections::BTreeMap;

use crate::process::utils::normalize_header;

/// One data row keyed by the sheet's (lower-cased) header names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    /// Value under `key`, or `""` when the sheet has no such column.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug)]
pub struct RawTable {
    /// Column names from the first row, trimmed and lower-cased.
    pub headers: Vec<String>,
    /// Every following row, as parsed. Lengths may differ from `headers`.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Split parsed rows into header mapping + data. `None` for an empty sheet.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let headers = rows.remove(0).iter().map(|h| normalize_header(h)).collect();
        Some(RawTable { headers, rows })
    }

    /// Zip each data row against the headers by position.
    ///
    /// Short rows get `""` for the missing columns, surplus fields are
    /// dropped, and a repeated header keeps the value of its last column.
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| (h.as_str(), row.get(i).map(String::as_str).unwrap_or("")))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::parse_csv;

    #[test]
    fn headers_are_lowercased() {
        let table = RawTable::from_rows(parse_csv("ID,Price,Unit\np1,120,kg")).unwrap();
        assert_eq!(table.headers, vec!["id", "price", "unit"]);

        let records = table.records();
        assert_eq!(records.len(), 1);
        let expected: Record = [("id", "p1"), ("price", "120"), ("unit", "kg")]
            .into_iter()
            .collect();
        assert_eq!(records[0], expected);
    }

    #[test]
    fn short_rows_default_to_empty() {
        let table = RawTable::from_rows(parse_csv("id,price,unit\np2,95")).unwrap();
        let rec = &table.records()[0];
        assert_eq!(rec.len(), 3);
        assert_eq!(rec.get("price"), "95");
        assert_eq!(rec.get("unit"), "");
    }

    #[test]
    fn surplus_fields_are_ignored() {
        let table = RawTable::from_rows(parse_csv("id,price\np3,10,kg,extra")).unwrap();
        let rec = &table.records()[0];
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.get("unit"), "");
    }

    #[test]
    fn duplicate_header_last_wins() {
        let table = RawTable::from_rows(parse_csv("id,price,PRICE\np4,1,2")).unwrap();
        let rec = &table.records()[0];
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.get("price"), "2");
    }

    #[test]
    fn header_only_sheet_has_no_records() {
        let table = RawTable::from_rows(parse_csv("id,price\n")).unwrap();
        assert!(table.records().is_empty());
    }

    #[test]
    fn empty_sheet_has_no_table() {
        assert!(RawTable::from_rows(parse_csv("")).is_none());
    }

    #[test]
    fn record_serializes_as_object() {
        let rec: Record = [("id", "p1"), ("price", "120")].into_iter().collect();
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"id":"p1","price":"120"}"#);
    }
}
