pub mod config;
pub mod display;
pub mod fetch;
pub mod prices;
pub mod process;

pub use display::{apply_records, refresh, CatalogPage, DisplaySink, PriceFormat};
pub use prices::{load, load_outcome, LoadOutcome};
pub use process::{parse_csv, RawTable, Record};
