//! SQLite dataset library.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{DatasetInfo, EquipmentRecord, SummaryStatistics};


/// Initialize the database with required tables.
pub fn init_database(db_path: &Path) -> Result<()> {
    open_database(db_path).map(|_| ())
}


/// Open the database, creating the file and tables if needed.
fn open_database(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS datasets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            uploaded_at TEXT NOT NULL,
            equipment_count INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS equipment (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            dataset_id INTEGER NOT NULL REFERENCES datasets(id),
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            flowrate REAL NOT NULL,
            pressure REAL NOT NULL,
            temperature REAL NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_equipment_dataset ON equipment(dataset_id)",
        [],
    )?;

    Ok(conn)
}


/// Store `records` as a new dataset and return its id.
pub fn save_dataset(db_path: &Path, name: &str, records: &[EquipmentRecord]) -> Result<i64> {
    let mut conn = open_database(db_path)?;
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO datasets (name, uploaded_at, equipment_count) VALUES (?1, ?2, ?3)",
        params![name, Local::now().to_rfc3339(), records.len() as i64],
    )?;
    let dataset_id = tx.last_insert_rowid();

    {
        let mut stmt = tx.prepare(
            "INSERT INTO equipment (dataset_id, name, type, flowrate, pressure, temperature)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for record in records {
            stmt.execute(params![
                dataset_id,
                record.name,
                record.equipment_type,
                record.flowrate,
                record.pressure,
                record.temperature,
            ])?;
        }
    }

    tx.commit()?;
    log::info!("Saved dataset {} ({}) with {} records", dataset_id, name, records.len());

    Ok(dataset_id)
}


/// All datasets, newest first.
pub fn list_datasets(db_path: &Path) -> Result<Vec<DatasetInfo>> {
    if !db_path.exists() {
        return Ok(Vec::new());
    }

    let conn = open_database(db_path)?;
    let mut stmt = conn.prepare(
        "SELECT id, name, uploaded_at, equipment_count FROM datasets ORDER BY id DESC",
    )?;

    let datasets = stmt
        .query_map([], |row| {
            Ok(DatasetInfo {
                id: row.get(0)?,
                name: row.get(1)?,
                uploaded_at: row.get(2)?,
                equipment_count: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(datasets)
}


/// Look up one dataset.
pub fn get_dataset(db_path: &Path, dataset_id: i64) -> Result<Option<DatasetInfo>> {
    if !db_path.exists() {
        return Ok(None);
    }

    let conn = open_database(db_path)?;
    let dataset = conn
        .query_row(
            "SELECT id, name, uploaded_at, equipment_count FROM datasets WHERE id = ?1",
            params![dataset_id],
            |row| {
                Ok(DatasetInfo {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    uploaded_at: row.get(2)?,
                    equipment_count: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(dataset)
}


/// Equipment records of a dataset in insertion order.
pub fn load_equipment(db_path: &Path, dataset_id: i64) -> Result<Vec<EquipmentRecord>> {
    if !db_path.exists() {
        return Ok(Vec::new());
    }

    let conn = open_database(db_path)?;
    let mut stmt = conn.prepare(
        "SELECT name, type, flowrate, pressure, temperature
         FROM equipment WHERE dataset_id = ?1 ORDER BY id",
    )?;

    let records = stmt
        .query_map(params![dataset_id], |row| {
            Ok(EquipmentRecord {
                name: row.get(0)?,
                equipment_type: row.get(1)?,
                flowrate: row.get(2)?,
                pressure: row.get(3)?,
                temperature: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    log::debug!("Loaded {} records for dataset {}", records.len(), dataset_id);
    Ok(records)
}


/// Summary of a dataset computed by SQLite.
///
/// Returns `None` when the dataset does not exist or holds no equipment.
pub fn get_summary(db_path: &Path, dataset_id: i64) -> Result<Option<SummaryStatistics>> {
    if !db_path.exists() {
        return Ok(None);
    }

    let conn = open_database(db_path)?;

    let (total_count, avg_flowrate, avg_pressure, avg_temperature): (i64, Option<f64>, Option<f64>, Option<f64>) =
        conn.query_row(
            "SELECT COUNT(*), AVG(flowrate), AVG(pressure), AVG(temperature)
             FROM equipment WHERE dataset_id = ?1",
            params![dataset_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;

    if total_count == 0 {
        return Ok(None);
    }

    let mut stmt = conn.prepare(
        "SELECT type, COUNT(*) FROM equipment WHERE dataset_id = ?1 GROUP BY type",
    )?;
    let type_distribution = stmt
        .query_map(params![dataset_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
        })?
        .collect::<rusqlite::Result<BTreeMap<_, _>>>()?;

    Ok(Some(SummaryStatistics {
        total_count: total_count as u64,
        avg_flowrate: avg_flowrate.unwrap_or(0.0),
        avg_pressure: avg_pressure.unwrap_or(0.0),
        avg_temperature: avg_temperature.unwrap_or(0.0),
        type_distribution,
    }))
}


/// Delete a dataset and its equipment. Returns false if it did not exist.
pub fn delete_dataset(db_path: &Path, dataset_id: i64) -> Result<bool> {
    if !db_path.exists() {
        return Ok(false);
    }

    let mut conn = open_database(db_path)?;
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM equipment WHERE dataset_id = ?1", params![dataset_id])?;
    let removed = tx.execute("DELETE FROM datasets WHERE id = ?1", params![dataset_id])?;

    tx.commit()?;
    log::info!("Deleted dataset {} ({} rows)", dataset_id, removed);

    Ok(removed > 0)
}
