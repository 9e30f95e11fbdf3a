//! Where the profile record lives.

use super::types::UserProfile;
use crate::error::StorageError;
use crate::utils::persistence::{read_json, remove_file, write_json};
use std::path::{Path, PathBuf};

/// Durable storage for the single profile record.
///
/// Every write replaces the whole record.
pub trait ProfileStorage {
    /// `Ok(None)` when nothing has been stored.
    fn load(&self) -> Result<Option<UserProfile>, StorageError>;
    fn save(&mut self, profile: &UserProfile) -> Result<(), StorageError>;
    fn remove(&mut self) -> Result<(), StorageError>;
}

/// JSON file on disk, e.g. `~/.flappy/flappyUser.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStorage for FileStorage {
    fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        read_json(&self.path)
    }

    fn save(&mut self, profile: &UserProfile) -> Result<(), StorageError> {
        write_json(&self.path, profile)
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        remove_file(&self.path)
    }
}

/// Record kept in memory as serialized JSON, so a load goes through the
/// same decoding path as the file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed with raw record text (possibly invalid).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl ProfileStorage for MemoryStorage {
    fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        match &self.record {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, profile: &UserProfile) -> Result<(), StorageError> {
        self.record = Some(serde_json::to_string(profile)?);
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        self.record = None;
        Ok(())
    }
}
