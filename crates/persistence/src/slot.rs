// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage-slot backends.
//!
//! A slot is a single named durable location holding one serialized state
//! document. The trait isolates the storage medium; the adapter logic in
//! [`Persistence`](crate::Persistence) is backend-agnostic.

use crate::error::PersistenceError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Trait for storage-slot backends.
pub trait StateSlot {
    /// Reads the slot payload, or `None` if the slot has never been
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Replaces the slot payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be written durably.
    fn write(&mut self, payload: &str) -> Result<(), PersistenceError>;
}

/// File-backed slot: one JSON document at `<dir>/<slot-name>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot stored under `dir` with the given name.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory holding slot documents
    /// * `slot_name` - The slot name, without extension
    #[must_use]
    pub fn new(dir: &Path, slot_name: &str) -> Self {
        Self {
            path: dir.join(format!("{slot_name}.json")),
        }
    }

    /// Returns the document path backing this slot.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::Io(err)),
        }
    }

    fn write(&mut self, payload: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory slot, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Option<String>,
}

impl MemorySlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { payload: None }
    }

    /// Creates a slot pre-populated with a payload.
    #[must_use]
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Some(payload.to_string()),
        }
    }
}

impl StateSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), PersistenceError> {
        self.payload = Some(payload.to_string());
        Ok(())
    }
}
