//! Dataset summary and descriptive statistics.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{DescriptiveStats, EquipmentRecord, SummaryStatistics};


/// Errors raised while deriving statistics.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("cannot compute statistics over an empty record set")]
    EmptyInput,
}


/// Divide `numerator` by `denominator`, returning `fallback` when the division
/// is undefined (zero, negative or non-finite denominator, non-finite result).
pub fn safe_ratio(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if !denominator.is_finite() || denominator <= 0.0 {
        return fallback;
    }

    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        fallback
    }
}


/// Summarize a record set: count, parameter means and type distribution.
///
/// An empty record set has no defined mean and yields `StatsError::EmptyInput`.
pub fn summarize(records: &[EquipmentRecord]) -> Result<SummaryStatistics, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let count = records.len() as f64;
    let mut flowrate_sum = 0.0;
    let mut pressure_sum = 0.0;
    let mut temperature_sum = 0.0;
    let mut type_distribution: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        flowrate_sum += record.flowrate;
        pressure_sum += record.pressure;
        temperature_sum += record.temperature;

        *type_distribution
            .entry(record.equipment_type.clone())
            .or_insert(0) += 1;
    }

    Ok(SummaryStatistics {
        total_count: records.len() as u64,
        avg_flowrate: flowrate_sum / count,
        avg_pressure: pressure_sum / count,
        avg_temperature: temperature_sum / count,
        type_distribution,
    })
}


/// Count, min, max, mean and range of a numeric series.
pub fn describe(values: &[f64]) -> Result<DescriptiveStats, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    Ok(DescriptiveStats {
        count: values.len(),
        min,
        max,
        mean,
        range: max - min,
    })
}
