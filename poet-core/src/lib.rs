//! Core utilities for pypoet.
//!
//! This crate provides the storage capability that generated files are
//! handed to once they are fully rendered.

mod storage;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use storage::{FsStorage, Storage};
