//! Loading declarations, snapshots and translations from disk.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::Model;
use crate::snapshot::HostSnapshot;

/// Errors that occur while loading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading an input file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// Reads a JSON model declaration.
pub fn load_model(path: impl AsRef<Path>) -> Result<Model, LoadError> {
    load_json(path.as_ref())
}

/// Reads a JSON host snapshot.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<HostSnapshot, LoadError> {
    load_json(path.as_ref())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
