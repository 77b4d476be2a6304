// File: crates/laureates/src/lib.rs
// Summary: Library entry point; exports the record model, classifier, loader and aggregator.

pub mod record;
pub mod classify;
pub mod loader;
pub mod aggregate;

pub use record::Record;
pub use classify::{CategoryGroup, Classifier, DEFAULT_STEM_CATEGORIES};
pub use loader::{load_csv, from_reader, LoadError};
pub use aggregate::{aggregate, max_count, year_extent, AggregatedSeries, YearCount};
