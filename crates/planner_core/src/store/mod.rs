//! Flat-file JSON storage.
//!
//! # Responsibility
//! - Read and rewrite whole JSON-array collection files.
//! - Report I/O and decode failures with the offending path attached.
//!
//! # Invariants
//! - A collection file always holds a JSON array of objects.
//! - Every read goes to disk; nothing is cached between calls.
//! - No locking and no atomic rename: callers own their files exclusively.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod json_file;

pub use json_file::JsonFileStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidData {
        path: PathBuf,
        message: String,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn invalid_data(path: &Path, message: impl Into<String>) -> Self {
        Self::InvalidData {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O error at `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "storage JSON error at `{}`: {source}", path.display())
            }
            Self::InvalidData { path, message } => {
                write!(f, "invalid collection data at `{}`: {message}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidData { .. } => None,
        }
    }
}
