//! Data access layer for equipment files.

mod loader;

#[allow(unused_imports)]
pub use loader::{load_records, load_summary, parse_csv, LoadError};
