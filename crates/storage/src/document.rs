// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-document JSON persistence
//!
//! The catalog is a single JSON array. Every read parses the full file and
//! every write replaces it.

use appliance_core::RawRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

const INDENT: &[u8] = b"    ";

/// Errors that make the document unavailable
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("io error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error in {}: {}", path.display(), source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("document {} is not a JSON array", path.display())]
    NotAnArray { path: PathBuf },
}

/// A JSON array of records stored in one file
#[derive(Debug, Clone)]
pub struct JsonDocument {
    path: PathBuf,
}

impl JsonDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in document order.
    ///
    /// A missing file is an error: the document must already exist.
    pub fn load(&self) -> Result<Vec<RawRecord>, DocumentError> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let value: Value = serde_json::from_str(&text).map_err(|e| self.json_error(e))?;
        match value {
            Value::Array(records) => Ok(records),
            _ => Err(DocumentError::NotAnArray {
                path: self.path.clone(),
            }),
        }
    }

    /// Replace the document with the given records.
    ///
    /// The new content goes to a temporary file next to the real document and
    /// is renamed over it, so readers see either the old or the new document.
    /// Symlinks are followed and the existing file mode is kept.
    pub fn save(&self, records: &[RawRecord]) -> Result<(), DocumentError> {
        let bytes = render(records).map_err(|e| self.json_error(e))?;
        let target = self.resolve_target()?;

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        temp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| self.io_error(e))?;
        }
        temp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        temp.persist(&target).map_err(|e| self.io_error(e.error))?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            bytes = bytes.len(),
            "document written"
        );
        Ok(())
    }

    /// The file that actually holds the document, with symlinks resolved
    fn resolve_target(&self) -> Result<PathBuf, DocumentError> {
        match fs::canonicalize(&self.path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: io::Error) -> DocumentError {
        DocumentError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> DocumentError {
        DocumentError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

/// Pretty-print records with a four-space indent
fn render(records: &[RawRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut serializer)?;
    Ok(out)
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
