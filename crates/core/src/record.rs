// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Appliance records

use crate::category::ApplianceType;
use crate::validate::{
    check_emissions, check_name, check_power_consumption, check_type, ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FIELD_NAME: &str = "name";
pub const FIELD_TYPE: &str = "type";
pub const FIELD_POWER: &str = "power_consumption_kwh";
pub const FIELD_EMISSIONS: &str = "embodied_emissions_kgCO2e";

/// A document element exactly as stored on disk.
///
/// Usually an object with the four record fields, but nothing guarantees it
/// until it has been validated.
pub type RawRecord = Value;

/// Typed view of a valid appliance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ApplianceType,
    pub power_consumption_kwh: f64,
    #[serde(rename = "embodied_emissions_kgCO2e")]
    pub embodied_emissions_kg_co2e: f64,
}

impl ApplianceRecord {
    pub fn new(
        name: impl Into<String>,
        kind: ApplianceType,
        power_consumption_kwh: f64,
        embodied_emissions_kg_co2e: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            power_consumption_kwh,
            embodied_emissions_kg_co2e,
        }
    }

    /// Build the raw JSON object for this record.
    ///
    /// JSON has no representation for NaN or infinity, so non-finite numbers
    /// become `null` and fail validation.
    pub fn to_raw(&self) -> RawRecord {
        let mut fields = Map::new();
        fields.insert(FIELD_NAME.to_string(), Value::from(self.name.as_str()));
        fields.insert(FIELD_TYPE.to_string(), Value::from(self.kind.as_str()));
        fields.insert(
            FIELD_POWER.to_string(),
            Value::from(self.power_consumption_kwh),
        );
        fields.insert(
            FIELD_EMISSIONS.to_string(),
            Value::from(self.embodied_emissions_kg_co2e),
        );
        Value::Object(fields)
    }

    /// Parse a raw record, failing on the first violated constraint
    pub fn from_raw(raw: &RawRecord) -> Result<Self, ValidationError> {
        let name = check_name(raw)?;
        let power = check_power_consumption(raw)?;
        let emissions = check_emissions(raw)?;
        let kind = check_type(raw)?;
        Ok(Self::new(name, kind, power, emissions))
    }
}

/// Overwrite the mutable fields of a raw record in place.
///
/// `name` and any extra fields are left untouched. Non-object elements are
/// not modified.
pub fn overwrite_fields(
    raw: &mut RawRecord,
    kind: ApplianceType,
    power_consumption_kwh: f64,
    embodied_emissions_kg_co2e: f64,
) {
    if let Some(fields) = raw.as_object_mut() {
        fields.insert(FIELD_TYPE.to_string(), Value::from(kind.as_str()));
        fields.insert(FIELD_POWER.to_string(), Value::from(power_consumption_kwh));
        fields.insert(
            FIELD_EMISSIONS.to_string(),
            Value::from(embodied_emissions_kg_co2e),
        );
    }
}

/// The stored `name` of a raw record, with no validity filtering
pub fn raw_name(raw: &RawRecord) -> Option<&str> {
    raw.get(FIELD_NAME).and_then(Value::as_str)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
