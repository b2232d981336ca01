//! Aggregation layer for equipment statistics.

mod summary;

pub use summary::{describe, safe_ratio, summarize, StatsError};
