//! Restore subcommands.

use std::path::Path;

use anyhow::Result;

use crate::storage::{backup_path, restore_library};

use super::status::{paint, Tone};


/// Bring the dataset library back from its backup copy.
///
/// A library created since the backup is overwritten.
pub fn library(db_path: &Path, colored: bool) -> Result<()> {
    let replacing = db_path.exists();

    match restore_library(db_path)? {
        Some(bytes) => {
            let verb = if replacing { "replaced" } else { "restored" };
            println!(
                "{}",
                paint(&format!("+ Library {} from backup ({} KB)", verb, bytes / 1024), Tone::Success, colored)
            );
            println!("{}", paint(&db_path.display().to_string(), Tone::Muted, colored));
        }
        None => {
            println!(
                "{}",
                paint(&format!("No backup at {}", backup_path(db_path).display()), Tone::Warning, colored)
            );
        }
    }

    Ok(())
}
