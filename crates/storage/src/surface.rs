// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-facing operations that report only success or absence
//!
//! Each method wraps a typed store operation, logs any error, and converts it
//! to `false` or `None`. No error escapes this layer.

use crate::store::{ApplianceList, ApplianceStore, StoreError};
use appliance_core::{ApplianceType, RawRecord};

impl ApplianceStore {
    /// Whether a raw record satisfies every field constraint
    pub fn validate_input(raw: &RawRecord) -> bool {
        Self::validate_record(raw).is_ok()
    }

    /// Audit the whole document.
    ///
    /// The report, listing each invalid index with its raw record, is logged
    /// at `warn`. Returns false if any record is invalid or the document is
    /// unavailable.
    pub fn validate_database(&self) -> bool {
        match self.audit() {
            Ok(report) if report.is_clean() => true,
            Ok(report) => {
                tracing::warn!(
                    invalid = report.invalid.len(),
                    total = report.total,
                    "invalid entries in document\n{report}"
                );
                false
            }
            Err(e) => {
                log_failure("validate_database", None, &e);
                false
            }
        }
    }

    pub fn retrieve_appliance(&self, name: &str) -> Option<RawRecord> {
        match self.find_by_name(name) {
            Ok(found) => found,
            Err(e) => {
                log_failure("retrieve_appliance", Some(name), &e);
                None
            }
        }
    }

    pub fn get_appliance_list(&self) -> Option<ApplianceList> {
        self.list_by_type()
            .map_err(|e| log_failure("get_appliance_list", None, &e))
            .ok()
    }

    pub fn add_appliance(
        &self,
        name: &str,
        kind: ApplianceType,
        power_consumption_kwh: f64,
        embodied_emissions_kg_co2e: f64,
    ) -> bool {
        self.create(name, kind, power_consumption_kwh, embodied_emissions_kg_co2e)
            .map_err(|e| log_failure("add_appliance", Some(name), &e))
            .is_ok()
    }

    pub fn update_appliance(
        &self,
        name: &str,
        kind: ApplianceType,
        power_consumption_kwh: f64,
        embodied_emissions_kg_co2e: f64,
    ) -> bool {
        self.update(name, kind, power_consumption_kwh, embodied_emissions_kg_co2e)
            .map_err(|e| log_failure("update_appliance", Some(name), &e))
            .is_ok()
    }

    pub fn delete_appliance(&self, name: &str) -> bool {
        self.delete(name)
            .map_err(|e| log_failure("delete_appliance", Some(name), &e))
            .is_ok()
    }
}

// Storage faults are errors; rejected requests are warnings.
fn log_failure(op: &'static str, name: Option<&str>, error: &StoreError) {
    match error {
        StoreError::Unavailable(_) => {
            tracing::error!(op, name, error = %error, "operation failed")
        }
        _ => tracing::warn!(op, name, error = %error, "request rejected"),
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
