//! File-backed storage (one JSON file per key).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Storage;
use crate::error::{PlaygroundError, Result};

/// Storage that keeps each key in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlaygroundError::StorageRead {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Write using the write-to-temp-then-rename pattern so a crash never
    /// leaves a half-written file behind.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        assert_eq!(storage.read("regexHistory").unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("data"));

        storage.write("regexHistory", r#"["a"]"#).unwrap();
        assert_eq!(
            storage.read("regexHistory").unwrap(),
            Some(r#"["a"]"#.to_string())
        );
        assert!(temp.path().join("data").join("regexHistory.json").exists());
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());

        storage.write("savedPatterns", "[]").unwrap();
        assert!(!temp.path().join("savedPatterns.json.tmp").exists());
    }

    #[test]
    fn unreadable_path_is_storage_read_error() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        // A directory where the file should be cannot be read as text.
        fs::create_dir_all(storage.path_for("regexHistory")).unwrap();

        let err = storage.read("regexHistory").unwrap_err();
        assert!(matches!(err, PlaygroundError::StorageRead { .. }));
    }
}
