//! Whole-library backup kept next to the database file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};


/// `library.db` -> `library.db.bak`.
pub fn backup_path(db_path: &Path) -> PathBuf {
    let mut name = db_path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}


/// Move the library aside into its backup file.
///
/// Returns the backup path, or `None` when there is no library to remove.
/// An older backup is replaced.
pub fn discard_library(db_path: &Path) -> Result<Option<PathBuf>> {
    if !db_path.exists() {
        return Ok(None);
    }

    let backup = backup_path(db_path);
    fs::copy(db_path, &backup)
        .with_context(|| format!("Failed to back up {}", db_path.display()))?;
    fs::remove_file(db_path)
        .with_context(|| format!("Failed to delete {}", db_path.display()))?;

    log::info!("Library {} moved to {}", db_path.display(), backup.display());
    Ok(Some(backup))
}


/// Copy the backup over the library. Returns the restored size in bytes,
/// or `None` when no backup exists.
pub fn restore_library(db_path: &Path) -> Result<Option<u64>> {
    let backup = backup_path(db_path);
    if !backup.exists() {
        return Ok(None);
    }

    let bytes = fs::copy(&backup, db_path)
        .with_context(|| format!("Failed to restore {} from {}", db_path.display(), backup.display()))?;

    log::info!("Library {} restored ({} bytes)", db_path.display(), bytes);
    Ok(Some(bytes))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquipmentRecord;
    use crate::storage::{list_datasets, save_dataset};
    use tempfile::TempDir;

    #[test]
    fn test_backup_path() {
        assert_eq!(backup_path(Path::new("/data/library.db")), PathBuf::from("/data/library.db.bak"));
        assert_eq!(backup_path(Path::new("lib")), PathBuf::from("lib.bak"));
    }

    #[test]
    fn test_discard_then_restore() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("library.db");
        let records = vec![EquipmentRecord::new("P-1", "Pump", 1.0, 2.0, 3.0)];
        save_dataset(&db_path, "plant", &records).unwrap();

        let backup = discard_library(&db_path).unwrap().unwrap();
        assert!(!db_path.exists());
        assert!(backup.exists());

        let bytes = restore_library(&db_path).unwrap().unwrap();
        assert!(bytes > 0);
        assert_eq!(list_datasets(&db_path).unwrap()[0].name, "plant");
    }

    #[test]
    fn test_nothing_to_do() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("library.db");

        assert!(discard_library(&db_path).unwrap().is_none());
        assert!(restore_library(&db_path).unwrap().is_none());
    }
}
