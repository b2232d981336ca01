//! Equipment measurement records and dataset summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// A single piece of equipment with its measured process parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}


impl EquipmentRecord {
    pub fn new(
        name: impl Into<String>,
        equipment_type: impl Into<String>,
        flowrate: f64,
        pressure: f64,
        temperature: f64,
    ) -> Self {
        Self {
            name: name.into(),
            equipment_type: equipment_type.into(),
            flowrate,
            pressure,
            temperature,
        }
    }
}


/// Dataset-level summary, either computed locally or supplied by the library.
///
/// The type distribution is kept sorted by type name so that every render of
/// the same summary lists categories (and assigns palette colors) identically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_count: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    #[serde(default)]
    pub type_distribution: BTreeMap<String, u64>,
}


impl SummaryStatistics {
    /// True when the summary describes no equipment at all.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Type distribution as `Pump: 2, Valve: 1`.
    pub fn distribution_text(&self) -> String {
        self.type_distribution
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}


/// Descriptive statistics over a single numeric series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub range: f64,
}


/// A stored dataset in the local library.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInfo {
    pub id: i64,
    pub name: String,
    pub uploaded_at: String,
    pub equipment_count: i64,
}
