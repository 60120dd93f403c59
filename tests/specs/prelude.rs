//! Shared helpers for catalog specs

#![allow(dead_code)]

pub use appliance_core::{ApplianceRecord, ApplianceType, StoreConfig};
pub use appliance_storage::ApplianceStore;
pub use serde_json::{json, Value};

use std::fs;
use std::path::PathBuf;

/// A throwaway catalog document
pub struct Catalog {
    dir: tempfile::TempDir,
}

impl Catalog {
    /// Catalog whose document holds the given JSON array
    pub fn with(records: Value) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("appliance_db.json"), records.to_string()).unwrap();
        Self { dir }
    }

    pub fn empty() -> Self {
        Self::with(json!([]))
    }

    /// Catalog directory with no document in it
    pub fn missing() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("appliance_db.json")
    }

    pub fn store(&self) -> ApplianceStore {
        ApplianceStore::open(&StoreConfig::new(self.path()))
    }

    pub fn text(&self) -> String {
        fs::read_to_string(self.path()).unwrap()
    }

    pub fn document(&self) -> Value {
        serde_json::from_str(&self.text()).unwrap()
    }
}

pub fn fridge() -> Value {
    json!({
        "name": "Fridge",
        "type": "REFRIGERATOR",
        "power_consumption_kwh": 150.0,
        "embodied_emissions_kgCO2e": 200,
    })
}
