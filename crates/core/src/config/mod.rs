// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration

use std::path::{Path, PathBuf};

/// Environment variable overriding the document location
pub const DB_PATH_ENV: &str = "APPLIANCE_DB_PATH";

/// Document location used when nothing else is configured
pub const DEFAULT_DB_PATH: &str = "src/appliance_db.json";

/// Where the appliance document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Resolve configuration from the environment.
    ///
    /// Uses `APPLIANCE_DB_PATH` when set and non-empty, otherwise
    /// `src/appliance_db.json` relative to the working directory.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(DB_PATH_ENV).ok())
    }

    fn resolve(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
