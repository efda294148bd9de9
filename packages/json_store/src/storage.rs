//! Byte storage behind a [`PathJsonStore`](crate::PathJsonStore).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::StoreError;

/// Whole-document byte storage.
///
/// `load` returns the full contents and `save` replaces them. Implementations are expected to
/// log their I/O with `log::debug!`.
pub trait Storage {
    /// Read the full document.
    fn load(&self) -> Result<Vec<u8>, StoreError>;

    /// Replace the full document with `bytes`.
    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError>;

    /// A short human readable description used in errors and logs.
    fn describe(&self) -> String;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn load(&self) -> Result<Vec<u8>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).save(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&self) -> Result<Vec<u8>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).save(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// A document stored in a single file.
///
/// The file is read whole on every load and truncated and rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`, which may or may not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    /// Use the file at `path`. A missing file is created holding an empty object when
    /// `create_missing` is set, and is an error otherwise.
    pub fn open(path: impl Into<PathBuf>, create_missing: bool) -> Result<Self, StoreError> {
        let storage = FileStorage::new(path);
        if storage.path.exists() {
            return Ok(storage);
        }

        if !create_missing {
            return Err(StoreError::io(
                storage.describe(),
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            ));
        }

        log::warn!(
            "No such file: {}. Creating it with an empty document.",
            storage.path.display()
        );
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&storage.path)
            .and_then(|mut f| io::Write::write_all(&mut f, b"{}"))
            .map_err(|e| StoreError::io(storage.describe(), e))?;
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Vec<u8>, StoreError> {
        log::debug!("Reading {}...", self.path.display());
        fs::read(&self.path).map_err(|e| StoreError::io(self.describe(), e))
    }

    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        log::debug!("Writing {} bytes to {}...", bytes.len(), self.path.display());
        fs::write(&self.path, bytes).map_err(|e| StoreError::io(self.describe(), e))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// A document held in an owned byte buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    buffer: Vec<u8>,
}

impl MemoryStorage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        MemoryStorage {
            buffer: bytes.into(),
        }
    }

    /// The current contents.
    pub fn contents(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<u8>, StoreError> {
        log::debug!("Reading {} bytes from memory", self.buffer.len());
        Ok(self.buffer.clone())
    }

    fn save(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        log::debug!("Writing {} bytes to memory", bytes.len());
        self.buffer = bytes.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory buffer".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_save_replaces_contents() {
        let mut storage = MemoryStorage::new("{\"a\": 1}");
        storage.save(b"{}").unwrap();
        assert_eq!(storage.contents(), b"{}");
        assert_eq!(storage.load().unwrap(), b"{}".to_vec());
    }

    #[test]
    fn open_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.json");

        let storage = FileStorage::open(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(storage.load().unwrap(), b"{}".to_vec());
    }

    #[test]
    fn open_without_create_fails_on_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = FileStorage::open(&path, false).unwrap_err();
        assert!(matches!(err, StoreError::Io { ref source, .. } if source.kind() == io::ErrorKind::NotFound));
        assert!(!path.exists());
    }

    #[test]
    fn open_leaves_existing_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{\"x\": 1}").unwrap();

        let storage = FileStorage::open(&path, true).unwrap();
        assert_eq!(storage.load().unwrap(), b"{\"x\": 1}".to_vec());
    }

    #[test]
    fn file_save_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{\"long\": \"contents\"}").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.save(b"{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn borrowed_storage_writes_through() {
        fn save_empty_array(mut storage: impl Storage) {
            storage.save(b"[]").unwrap();
        }

        let mut inner = MemoryStorage::default();
        save_empty_array(&mut inner);
        assert_eq!(inner.contents(), b"[]");
    }
}
