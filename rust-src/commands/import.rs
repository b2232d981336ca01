//! Import command - add an equipment file to the library.

use std::path::Path;

use anyhow::Result;

use crate::data::load_records;
use crate::storage::{init_database, save_dataset};

use super::status::{paint, Tone};


/// Run the import command.
pub fn run(db_path: &Path, file: &Path, name: Option<&str>, colored: bool) -> Result<()> {
    let records = load_records(file)?;

    if records.is_empty() {
        let message = format!("No valid equipment rows found in {}", file.display());
        println!("{}", paint(&message, Tone::Warning, colored));
        return Ok(());
    }

    let dataset_name = name
        .map(String::from)
        .unwrap_or_else(|| {
            file.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("dataset")
                .to_string()
        });

    init_database(db_path)?;
    let dataset_id = save_dataset(db_path, &dataset_name, &records)?;

    println!(
        "{} as dataset #{} ({})",
        paint(&format!("+ Imported {} records", records.len()), Tone::Success, colored),
        dataset_id,
        dataset_name
    );
    println!("{}", paint(&format!("View it with: eqv show {}", dataset_id), Tone::Muted, colored));

    Ok(())
}
