// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field-level validation of raw records
//!
//! Each check looks at one field of a raw JSON record and is independent of
//! the others. A record is valid only when all four pass. Elements that are
//! not JSON objects fail every check.

use crate::category::ApplianceType;
use crate::record::{FIELD_EMISSIONS, FIELD_NAME, FIELD_POWER, FIELD_TYPE};
use serde_json::Value;
use thiserror::Error;

/// A field constraint violated by a raw record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must be a non-empty string")]
    InvalidName,
    #[error("power_consumption_kwh must be a number greater than zero")]
    InvalidPowerConsumption,
    #[error("embodied_emissions_kgCO2e must be a non-negative number")]
    InvalidEmissions,
    #[error("type must be a known appliance category")]
    InvalidType,
}

/// Check the `name` field, returning the stored value on success.
///
/// Emptiness is judged after trimming, but the untrimmed value is returned.
pub fn check_name(raw: &Value) -> Result<&str, ValidationError> {
    match raw.get(FIELD_NAME).and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ValidationError::InvalidName),
    }
}

/// Check that `power_consumption_kwh` is a number strictly above zero
pub fn check_power_consumption(raw: &Value) -> Result<f64, ValidationError> {
    match raw.get(FIELD_POWER).and_then(Value::as_f64) {
        Some(power) if power > 0.0 => Ok(power),
        _ => Err(ValidationError::InvalidPowerConsumption),
    }
}

/// Check that `embodied_emissions_kgCO2e` is a number at or above zero
pub fn check_emissions(raw: &Value) -> Result<f64, ValidationError> {
    match raw.get(FIELD_EMISSIONS).and_then(Value::as_f64) {
        Some(emissions) if emissions >= 0.0 => Ok(emissions),
        _ => Err(ValidationError::InvalidEmissions),
    }
}

/// Check that `type` is present and names a known category
pub fn check_type(raw: &Value) -> Result<ApplianceType, ValidationError> {
    raw.get(FIELD_TYPE)
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse().ok())
        .ok_or(ValidationError::InvalidType)
}

/// Validate a raw record, stopping at the first failing check.
///
/// Checks run in the order name, power, emissions, type.
pub fn validate(raw: &Value) -> Result<(), ValidationError> {
    check_name(raw)?;
    check_power_consumption(raw)?;
    check_emissions(raw)?;
    check_type(raw)?;
    Ok(())
}

/// Whether a raw record satisfies every field constraint
pub fn is_valid(raw: &Value) -> bool {
    validate(raw).is_ok()
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
