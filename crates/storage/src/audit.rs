// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-document validation report

use appliance_core::{validate, RawRecord, ValidationError};
use std::fmt;

/// A record that failed validation, with its position in the document
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidEntry {
    pub index: usize,
    pub error: ValidationError,
    pub record: RawRecord,
}

/// Result of checking every record in the document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditReport {
    pub total: usize,
    pub invalid: Vec<InvalidEntry>,
}

impl AuditReport {
    /// Check each record, keeping the first failing constraint of each
    pub fn from_records(records: &[RawRecord]) -> Self {
        let invalid = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                validate(record).err().map(|error| InvalidEntry {
                    index,
                    error,
                    record: record.clone(),
                })
            })
            .collect();

        Self {
            total: records.len(),
            invalid,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn invalid_indexes(&self) -> Vec<usize> {
        self.invalid.iter().map(|entry| entry.index).collect()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.invalid {
            writeln!(f, "invalid entry at index: {}", entry.index)?;
            writeln!(f, "{}", entry.record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
