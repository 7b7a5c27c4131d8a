//! Whole-file JSON persistence for the stock mapping.
//!
//! The file is a single JSON object (`{"apple": 7, "banana": 20}`) written with
//! 4-space indentation. Every save overwrites the file completely.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("inventory file {0} not found")]
    NotFound(PathBuf),

    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not decode JSON from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode stock data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Read the raw JSON object stored at `path`.
///
/// Values are returned untouched; callers decide which entries are acceptable.
pub fn read_stock(path: impl AsRef<Path>) -> Result<BTreeMap<String, JsonValue>, PersistenceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            PersistenceError::NotFound(path.to_path_buf())
        } else {
            PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&text).map_err(|source| PersistenceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `stock` as pretty JSON and overwrite `path` with it.
pub fn write_stock<S>(stock: &S, path: impl AsRef<Path>) -> Result<(), PersistenceError>
where
    S: Serialize + ?Sized,
{
    let path = path.as_ref();

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    stock
        .serialize(&mut serializer)
        .map_err(PersistenceError::Encode)?;

    fs::write(path, buf).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
