// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Appliance categories
//!
//! The catalog only accepts records whose `type` tag names one of these
//! categories. Tags are matched exactly and case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a tag does not name a known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown appliance category: {0:?}")]
pub struct UnknownCategory(pub String);

/// Closed set of appliance categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplianceType {
    Refrigerator,
    Freezer,
    WashingMachine,
    TumbleDryer,
    Dishwasher,
    Oven,
    Microwave,
    Kettle,
    Television,
    Computer,
    Lighting,
    HeatPump,
}

impl ApplianceType {
    /// Every category, in declaration order
    pub const ALL: [ApplianceType; 12] = [
        ApplianceType::Refrigerator,
        ApplianceType::Freezer,
        ApplianceType::WashingMachine,
        ApplianceType::TumbleDryer,
        ApplianceType::Dishwasher,
        ApplianceType::Oven,
        ApplianceType::Microwave,
        ApplianceType::Kettle,
        ApplianceType::Television,
        ApplianceType::Computer,
        ApplianceType::Lighting,
        ApplianceType::HeatPump,
    ];

    /// Canonical tag as persisted in the document
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplianceType::Refrigerator => "REFRIGERATOR",
            ApplianceType::Freezer => "FREEZER",
            ApplianceType::WashingMachine => "WASHING_MACHINE",
            ApplianceType::TumbleDryer => "TUMBLE_DRYER",
            ApplianceType::Dishwasher => "DISHWASHER",
            ApplianceType::Oven => "OVEN",
            ApplianceType::Microwave => "MICROWAVE",
            ApplianceType::Kettle => "KETTLE",
            ApplianceType::Television => "TELEVISION",
            ApplianceType::Computer => "COMPUTER",
            ApplianceType::Lighting => "LIGHTING",
            ApplianceType::HeatPump => "HEAT_PUMP",
        }
    }
}

impl fmt::Display for ApplianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplianceType {
    type Err = UnknownCategory;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ApplianceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| UnknownCategory(tag.to_string()))
    }
}

/// Check whether a tag names a known category
pub fn is_valid_category(tag: &str) -> bool {
    tag.parse::<ApplianceType>().is_ok()
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
