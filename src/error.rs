//! Error types for profile persistence.

use std::io;

/// Failure reading or writing the persisted profile record.
///
/// Neither variant is fatal: the session store logs them and degrades to an
/// in-memory or anonymous session.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("profile storage unavailable: {0}")]
    Unavailable(#[from] io::Error),

    #[error("malformed profile record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StorageError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, StorageError::Malformed(_))
    }
}

/// Invalid command line usage.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("could not determine home directory")]
    NoHomeDir,
}
