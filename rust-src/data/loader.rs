//! Loaders for equipment CSV/JSON files and summary JSON.

use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;

use crate::models::{EquipmentRecord, SummaryStatistics};


/// Structural problems with an input file.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("unsupported file extension: .{0} (expected .csv or .json)")]
    UnsupportedExtension(String),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
}


/// Accepted header spellings per field, after normalization.
const COLUMNS: [(&str, &[&str]); 5] = [
    ("name", &["equipmentname", "name"]),
    ("type", &["type", "equipmenttype"]),
    ("flowrate", &["flowrate"]),
    ("pressure", &["pressure"]),
    ("temperature", &["temperature"]),
];


/// Load equipment records from a file. Dispatch by extension.
pub fn load_records(path: &Path) -> Result<Vec<EquipmentRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))?;
            parse_csv(file)
                .with_context(|| format!("Failed to parse CSV: {}", path.display()))?
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse JSON records: {}", path.display()))?
        }
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    };

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}


/// Load a precomputed summary from a JSON file.
pub fn load_summary(path: &Path) -> Result<SummaryStatistics> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse summary JSON: {}", path.display()))
}


/// Parse CSV with a header row. Rows that fail to parse are skipped.
pub fn parse_csv<R: Read>(input: R) -> Result<Vec<EquipmentRecord>> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut indices = [0usize; 5];
    for (slot, (field, aliases)) in indices.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| aliases.contains(&h.as_str()))
            .ok_or(LoadError::MissingColumn(field))?;
    }
    let [name_idx, type_idx, flow_idx, pressure_idx, temp_idx] = indices;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let line = row_no + 2;
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping unreadable CSV row {}: {}", line, e);
                continue;
            }
        };

        let field = |idx: usize| row.get(idx).unwrap_or("").trim();
        let number = |idx: usize| field(idx).parse::<f64>().ok();

        match (number(flow_idx), number(pressure_idx), number(temp_idx)) {
            (Some(flowrate), Some(pressure), Some(temperature)) => {
                records.push(EquipmentRecord::new(
                    field(name_idx),
                    field(type_idx),
                    flowrate,
                    pressure,
                    temperature,
                ));
            }
            _ => log::warn!("Skipping CSV row {}: non-numeric measurement", line),
        }
    }

    Ok(records)
}


/// Lowercase a header and drop everything but letters and digits.
fn normalize_header(header: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let re = NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

    re.replace_all(&header.to_lowercase(), "").into_owned()
}
