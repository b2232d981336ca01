//! List command - show stored datasets.

use std::path::Path;

use anyhow::Result;

use crate::storage::list_datasets;


/// Run the list command.
pub fn run(db_path: &Path) -> Result<()> {
    let datasets = list_datasets(db_path)?;

    if datasets.is_empty() {
        println!("No datasets found. Add one with 'eqv import <file.csv>'.");
        return Ok(());
    }

    let name_width = datasets
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    println!(
        "{:>4}  {:<width$}  {:<25}  {:>9}",
        "ID", "Name", "Uploaded", "Equipment",
        width = name_width
    );
    println!("{}", "-".repeat(4 + 2 + name_width + 2 + 25 + 2 + 9));

    for dataset in &datasets {
        println!(
            "{:>4}  {:<width$}  {:<25}  {:>9}",
            dataset.id,
            dataset.name,
            short_timestamp(&dataset.uploaded_at),
            dataset.equipment_count,
            width = name_width
        );
    }

    println!("\n{} dataset{}", datasets.len(), if datasets.len() == 1 { "" } else { "s" });

    Ok(())
}


/// `2024-01-15T10:30:00.123+01:00` -> `2024-01-15 10:30:00`.
fn short_timestamp(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_timestamp() {
        assert_eq!(short_timestamp("2024-01-15T10:30:00.123+01:00"), "2024-01-15 10:30:00");
        assert_eq!(short_timestamp("yesterday"), "yesterday");
    }
}
