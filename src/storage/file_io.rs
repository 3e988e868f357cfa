//! JSON snapshot files
//!
//! Snapshots are replaced atomically: the new content is written and synced
//! to a sibling `.tmp` file which is then renamed over the target, so a
//! reader sees either the old snapshot or the new one.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinanceError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> FinanceError {
    FinanceError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Load a snapshot; a file that does not exist yet reads as `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, FinanceError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    serde_json::from_str(&text).map_err(|e| {
        storage_error(
            "parse",
            path,
            format!("{} (repair or remove the file to start over)", e),
        )
    })
}

/// Replace the snapshot at `path`, creating parent directories as needed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinanceError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Serialize before touching the filesystem
    let mut bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, PreferencesUpdate};
    use crate::store::FinanceStore;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store: FinanceStore = read_json(temp_dir.path().join("finance.json")).unwrap();
        assert_eq!(store, FinanceStore::new());
    }

    #[test]
    fn test_write_then_read_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("finance.json");

        let mut store = FinanceStore::new();
        store.update_preferences(PreferencesUpdate::new().currency(Currency::Eur));
        write_json_atomic(&path, &store).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let loaded: FinanceStore = read_json(&path).unwrap();
        assert_eq!(loaded.preferences().currency, Currency::Eur);
    }

    #[test]
    fn test_rewrite_replaces_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance.json");

        let mut store = FinanceStore::new();
        write_json_atomic(&path, &store).unwrap();
        store.toggle_dark_mode();
        write_json_atomic(&path, &store).unwrap();

        let loaded: FinanceStore = read_json(&path).unwrap();
        assert!(loaded.preferences().dark_mode);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<FinanceStore, _>(&path).unwrap_err();
        assert!(matches!(err, FinanceError::Storage(_)));
        assert!(err.to_string().contains("repair or remove"));
    }
}
