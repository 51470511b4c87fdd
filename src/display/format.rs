use chrono::{Datelike, NaiveDate};

use crate::process::Record;

/// Genitive month names, as used after a day number ("19 октября").
static MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// How a record's `price` / `unit` columns become card text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    /// Appended right after the price, e.g. `" ₽"`.
    pub currency: String,
    /// Placed between the currency and a non-empty unit.
    pub unit_separator: String,
    /// Shown when the price cell is empty.
    pub fallback: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        PriceFormat {
            currency: " ₽".to_string(),
            unit_separator: " / ".to_string(),
            fallback: "Цена по запросу".to_string(),
        }
    }
}

impl PriceFormat {
    pub fn format(&self, record: &Record) -> String {
        let price = record.get("price");
        if price.is_empty() {
            return self.fallback.clone();
        }
        let unit = record.get("unit");
        if unit.is_empty() {
            format!("{}{}", price, self.currency)
        } else {
            format!("{}{}{}{}", price, self.currency, self.unit_separator, unit)
        }
    }
}

/// `"Обновлено: 19 октября 2026 г."`
pub fn updated_stamp(date: NaiveDate) -> String {
    format!(
        "Обновлено: {} {} {} г.",
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}
