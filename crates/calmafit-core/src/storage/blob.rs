//! Injected persistence capability.
//!
//! The profile store does not touch the filesystem directly; it reads and
//! writes one opaque blob through this trait. That keeps the store's
//! contract testable with an in-memory fake and models environments with no
//! durable storage at all (writes are dropped silently, reads return
//! nothing).

use std::path::PathBuf;
use std::sync::Mutex;

/// One named blob of durable storage.
///
/// All methods are infallible from the caller's perspective: a backend that
/// cannot write simply drops the write.
pub trait StorageBlob: Send {
    /// Read the blob, `None` if absent or unreadable.
    fn read(&self) -> Option<String>;

    /// Replace the blob contents.
    fn write(&mut self, contents: &str);

    /// Delete the blob. Subsequent reads return `None`.
    fn remove(&mut self);
}

/// File-backed blob at `<data_dir>/user_data.json`.
pub struct FileBlob {
    path: PathBuf,
}

impl FileBlob {
    /// Blob at the default location under the app data dir.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, crate::error::StoreError> {
        Ok(Self {
            path: super::data_dir()?.join("user_data.json"),
        })
    }

    /// Blob at an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBlob for FileBlob {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, contents: &str) {
        // Write through a temp file so a partial write never corrupts the
        // record the next read sees.
        let tmp = self.path.with_extension("json.tmp");
        if std::fs::write(&tmp, contents).is_ok() {
            let _ = std::fs::rename(&tmp, &self.path);
        }
    }

    fn remove(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// In-memory blob: test fake, and the "no durable storage" environment.
#[derive(Default)]
pub struct MemoryBlob {
    contents: Mutex<Option<String>>,
    /// When set, writes are dropped and reads always miss.
    disconnected: bool,
}

impl MemoryBlob {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that behaves like an environment without persistent
    /// storage: every operation is a silent no-op.
    pub fn disconnected() -> Self {
        Self {
            contents: Mutex::new(None),
            disconnected: true,
        }
    }
}

impl StorageBlob for MemoryBlob {
    fn read(&self) -> Option<String> {
        if self.disconnected {
            return None;
        }
        self.contents.lock().ok()?.clone()
    }

    fn write(&mut self, contents: &str) {
        if self.disconnected {
            return;
        }
        if let Ok(mut guard) = self.contents.lock() {
            *guard = Some(contents.to_string());
        }
    }

    fn remove(&mut self) {
        if let Ok(mut guard) = self.contents.lock() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_blob_roundtrip() {
        let mut blob = MemoryBlob::new();
        assert!(blob.read().is_none());
        blob.write("hello");
        assert_eq!(blob.read().as_deref(), Some("hello"));
        blob.remove();
        assert!(blob.read().is_none());
    }

    #[test]
    fn disconnected_blob_drops_writes() {
        let mut blob = MemoryBlob::disconnected();
        blob.write("hello");
        assert!(blob.read().is_none());
    }

    #[test]
    fn file_blob_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut blob = FileBlob::at(dir.path().join("user_data.json"));
        assert!(blob.read().is_none());
        blob.write("{\"streak\":1}");
        assert_eq!(blob.read().as_deref(), Some("{\"streak\":1}"));
        blob.remove();
        assert!(blob.read().is_none());
    }
}
