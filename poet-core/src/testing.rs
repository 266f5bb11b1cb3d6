//! Storage doubles for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::RefCell,
    io,
    path::{Path, PathBuf},
};

use crate::Storage;

/// A single recorded `persist` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistCall {
    pub text: String,
    pub path: PathBuf,
}

/// Storage that records every call instead of touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    calls: RefCell<Vec<PersistCall>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<PersistCall> {
        self.calls.borrow().clone()
    }

    /// Text of the most recent call, if any.
    pub fn last_text(&self) -> Option<String> {
        self.calls.borrow().last().map(|call| call.text.clone())
    }
}

impl Storage for RecordingStorage {
    fn persist(&self, text: &str, path: &Path) -> io::Result<()> {
        self.calls.borrow_mut().push(PersistCall {
            text: text.to_string(),
            path: path.to_path_buf(),
        });
        Ok(())
    }
}

/// Storage that fails every call with the configured error kind.
#[derive(Debug)]
pub struct FailingStorage {
    kind: io::ErrorKind,
    attempts: RefCell<usize>,
}

impl FailingStorage {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            attempts: RefCell::new(0),
        }
    }

    /// Number of `persist` calls received.
    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }
}

impl Storage for FailingStorage {
    fn persist(&self, _text: &str, path: &Path) -> io::Result<()> {
        *self.attempts.borrow_mut() += 1;
        Err(io::Error::new(
            self.kind,
            format!("refusing to persist '{}'", path.display()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_storage_keeps_order() {
        let storage = RecordingStorage::new();
        storage.persist("a", Path::new("a.py")).unwrap();
        storage.persist("b", Path::new("b.py")).unwrap();

        let calls = storage.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].path, PathBuf::from("a.py"));
        assert_eq!(storage.last_text().as_deref(), Some("b"));
    }

    #[test]
    fn test_failing_storage_reports_kind() {
        let storage = FailingStorage::new(io::ErrorKind::PermissionDenied);
        let err = storage.persist("x", Path::new("x.py")).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(storage.attempts(), 1);
    }
}
