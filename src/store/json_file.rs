//! JSON file store.
//!
//! Saves go to a sibling `.tmp` file which is flushed, synced and then renamed
//! over the target, so a crash mid-write leaves the previous snapshot intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::SeatStore;
use crate::error::{classify_io_error, StoreError, StoreResult};
use crate::snapshot::HallSnapshot;

/// Default snapshot file name.
pub const DATA_FILE_NAME: &str = "seats.json";

/// Snapshot stored as a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn ensure_parent_dir(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StoreError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    fn write_temp(&self, temp_path: &Path, snapshot: &HallSnapshot) -> StoreResult<()> {
        let file = File::create(temp_path).map_err(|e| classify_io_error(e, "create", temp_path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot).map_err(StoreError::Encode)?;
        writer
            .flush()
            .map_err(|e| classify_io_error(e, "write", temp_path))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| classify_io_error(e, "sync", temp_path))?;
        Ok(())
    }
}

impl SeatStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<HallSnapshot>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(classify_io_error(e, "read", &self.path)),
        };

        HallSnapshot::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, snapshot: &HallSnapshot) -> StoreResult<()> {
        self.ensure_parent_dir()?;

        let temp_path = self.temp_path();
        let result = self.write_temp(&temp_path, snapshot).and_then(|()| {
            fs::rename(&temp_path, &self.path)
                .map_err(|e| classify_io_error(e, "rename", &self.path))
        });

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SeatRecord;
    use tempfile::TempDir;

    fn sample() -> HallSnapshot {
        HallSnapshot::new(vec![
            SeatRecord::new(0, 0, false),
            SeatRecord::new(0, 1, true),
        ])
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join(DATA_FILE_NAME));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join(DATA_FILE_NAME));

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join(DATA_FILE_NAME));

        store.save(&sample()).unwrap();
        let smaller = HallSnapshot::new(vec![SeatRecord::new(3, 3, true)]);
        store.save(&smaller).unwrap();

        assert_eq!(store.load().unwrap(), Some(smaller));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join(DATA_FILE_NAME);
        let store = JsonFileStore::new(&path);

        store.save(&sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join(DATA_FILE_NAME));

        store.save(&sample()).unwrap();
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join(DATA_FILE_NAME));

        store.save(&sample()).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n  \"seats\": ["));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DATA_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_save_into_file_parent_fails_and_keeps_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "i am a file").unwrap();

        let store = JsonFileStore::new(blocker.join(DATA_FILE_NAME));
        assert!(store.save(&sample()).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_failed_temp_write_keeps_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join(DATA_FILE_NAME));
        store.save(&sample()).unwrap();
        let before = fs::read(store.path()).unwrap();

        // A directory where the temp file should go makes File::create fail.
        fs::create_dir(store.temp_path()).unwrap();
        let newer = HallSnapshot::new(vec![SeatRecord::new(1, 1, true)]);
        assert!(store.save(&newer).is_err());

        assert_eq!(fs::read(store.path()).unwrap(), before);
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DATA_FILE_NAME);
        // A non-empty directory at the target cannot be replaced by a file.
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, StoreError::Io { operation: "rename", .. }));
        assert!(!store.temp_path().exists());
        assert!(path.join("keep").exists());
    }
}
