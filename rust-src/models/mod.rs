//! Data models for equipment datasets.

mod equipment;

pub use equipment::{DatasetInfo, DescriptiveStats, EquipmentRecord, SummaryStatistics};
