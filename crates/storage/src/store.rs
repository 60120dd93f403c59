// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Appliance store: CRUD over the whole-document JSON catalog
//!
//! Every operation loads the full document, computes the new one in memory,
//! and writes it back in full. Nothing is cached between calls. There is no
//! locking: concurrent writers can lose each other's updates, so callers must
//! serialize access themselves.

use crate::audit::AuditReport;
use crate::document::{DocumentError, JsonDocument};
use appliance_core::record::{overwrite_fields, raw_name};
use appliance_core::validate::{check_name, check_type};
use appliance_core::{
    validate, ApplianceRecord, ApplianceType, RawRecord, StoreConfig, ValidationError,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document unavailable: {0}")]
    Unavailable(#[from] DocumentError),
    #[error("invalid appliance: {0}")]
    Invalid(#[from] ValidationError),
    #[error("appliance not found: {0}")]
    NotFound(String),
    #[error("appliance already exists: {0}")]
    Duplicate(String),
}

/// Category to appliance names, in document order within each category
pub type ApplianceList = BTreeMap<ApplianceType, Vec<String>>;

/// Store owning access to one appliance document
#[derive(Debug, Clone)]
pub struct ApplianceStore {
    document: JsonDocument,
}

impl ApplianceStore {
    pub fn new(document: JsonDocument) -> Self {
        Self { document }
    }

    /// Open the store at the configured location
    pub fn open(config: &StoreConfig) -> Self {
        Self::new(JsonDocument::new(config.db_path()))
    }

    /// Open the store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonDocument::new(path))
    }

    pub fn document(&self) -> &JsonDocument {
        &self.document
    }

    /// Check a raw record against every field constraint
    pub fn validate_record(raw: &RawRecord) -> Result<(), ValidationError> {
        validate(raw)
    }

    /// Check every record in the document. Storage is not modified.
    pub fn audit(&self) -> Result<AuditReport, StoreError> {
        let records = self.document.load()?;
        let report = AuditReport::from_records(&records);
        tracing::debug!(
            total = report.total,
            invalid = report.invalid.len(),
            "audited document"
        );
        Ok(report)
    }

    /// First record with a valid name exactly equal to `name`.
    ///
    /// The query is not trimmed. Records whose name is missing, not a string,
    /// or blank never match.
    pub fn find_by_name(&self, name: &str) -> Result<Option<RawRecord>, StoreError> {
        let records = self.document.load()?;
        Ok(position_by_valid_name(&records, name).map(|index| records[index].clone()))
    }

    /// Group the names of records with a valid name and type by category.
    ///
    /// Records failing either check are left out silently.
    pub fn list_by_type(&self) -> Result<ApplianceList, StoreError> {
        let records = self.document.load()?;
        let mut groups = ApplianceList::new();
        for record in &records {
            if let (Ok(name), Ok(kind)) = (check_name(record), check_type(record)) {
                groups.entry(kind).or_default().push(name.to_string());
            }
        }
        Ok(groups)
    }

    /// Append a new record.
    ///
    /// Fails without writing if the name is taken or the record is invalid.
    pub fn create(
        &self,
        name: &str,
        kind: ApplianceType,
        power_consumption_kwh: f64,
        embodied_emissions_kg_co2e: f64,
    ) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.create", name);
        let _guard = span.enter();

        let mut records = self.document.load()?;
        if position_by_valid_name(&records, name).is_some() {
            return Err(StoreError::Duplicate(name.to_string()));
        }

        let candidate =
            ApplianceRecord::new(name, kind, power_consumption_kwh, embodied_emissions_kg_co2e)
                .to_raw();
        validate(&candidate)?;

        records.push(candidate);
        self.document.save(&records)?;

        tracing::info!(kind = %kind, count = records.len(), "appliance created");
        Ok(())
    }

    /// Overwrite type, power, and emissions of the first record named `name`.
    ///
    /// The name match is exact with no validity filtering, and the new values
    /// are written without validation.
    pub fn update(
        &self,
        name: &str,
        kind: ApplianceType,
        power_consumption_kwh: f64,
        embodied_emissions_kg_co2e: f64,
    ) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.update", name);
        let _guard = span.enter();

        let mut records = self.document.load()?;
        let index = position_by_exact_name(&records, name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        overwrite_fields(
            &mut records[index],
            kind,
            power_consumption_kwh,
            embodied_emissions_kg_co2e,
        );
        self.document.save(&records)?;

        tracing::info!(index, kind = %kind, "appliance updated");
        Ok(())
    }

    /// Remove the first record named `name`, returning it.
    ///
    /// Existence is confirmed with [`find_by_name`](Self::find_by_name), then
    /// the document is reloaded and the first exact match removed.
    pub fn delete(&self, name: &str) -> Result<RawRecord, StoreError> {
        let span = tracing::info_span!("store.delete", name);
        let _guard = span.enter();

        if self.find_by_name(name)?.is_none() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        let mut records = self.document.load()?;
        let index = position_by_exact_name(&records, name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        let removed = records.remove(index);
        self.document.save(&records)?;

        tracing::info!(index, remaining = records.len(), "appliance deleted");
        Ok(removed)
    }
}

fn position_by_valid_name(records: &[RawRecord], name: &str) -> Option<usize> {
    records
        .iter()
        .position(|record| check_name(record).is_ok_and(|stored| stored == name))
}

fn position_by_exact_name(records: &[RawRecord], name: &str) -> Option<usize> {
    records
        .iter()
        .position(|record| raw_name(record) == Some(name))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
