// src/display/catalog.rs

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use std::{collections::BTreeMap, fs, path::Path};
use tracing::debug;

use super::DisplaySink;

/// Price targets of a static catalog page.
///
/// Cards are `.product[data-product-id]`; a card's price target is its first
/// `.price` descendant and the page stamp is the first `.update-date`.
/// Only the first card with a given id is addressable.
#[derive(Debug, Clone, Default)]
pub struct CatalogPage {
    /// id → current price text, `None` when the card has no `.price`.
    cards: BTreeMap<String, Option<String>>,
    /// Current stamp text, `None` when the page has no stamp target.
    updated: Option<String>,
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

impl CatalogPage {
    pub fn parse(html: &str) -> Self {
        let doc = Html::parse_document(html);
        let card_sel = Selector::parse(".product[data-product-id]")
            .expect("CSS selector for product cards should be valid");
        let price_sel =
            Selector::parse(".price").expect("CSS selector for price targets should be valid");
        let stamp_sel = Selector::parse(".update-date")
            .expect("CSS selector for the update stamp should be valid");

        let mut cards = BTreeMap::new();
        for card in doc.select(&card_sel) {
            let Some(id) = card.value().attr("data-product-id") else {
                continue;
            };
            let price = card.select(&price_sel).next().map(element_text);
            cards.entry(id.to_string()).or_insert(price);
        }
        let updated = doc.select(&stamp_sel).next().map(element_text);

        debug!(cards = cards.len(), has_stamp = updated.is_some(), "parsed catalog page");
        CatalogPage { cards, updated }
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let html = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog page: {:?}", path.as_ref()))?;
        Ok(Self::parse(&html))
    }

    /// Current price text of card `id`.
    pub fn price(&self, id: &str) -> Option<&str> {
        self.cards.get(id).and_then(|p| p.as_deref())
    }

    pub fn prices(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.cards.iter().map(|(id, p)| (id.as_str(), p.as_deref()))
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl DisplaySink for CatalogPage {
    fn set_price(&mut self, id: &str, text: &str) -> bool {
        match self.cards.get_mut(id) {
            Some(Some(slot)) => {
                *slot = text.to_string();
                true
            }
            _ => false,
        }
    }

    fn set_updated(&mut self, text: &str) {
        if let Some(slot) = self.updated.as_mut() {
            *slot = text.to_string();
        }
    }
}
