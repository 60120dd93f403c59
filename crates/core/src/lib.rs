// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! appliance-core: domain types for the appliance catalog
//!
//! This crate provides:
//! - The closed set of appliance categories
//! - The typed appliance record and its raw JSON form
//! - Field-level validation of raw records
//! - Store configuration
//!
//! Nothing here performs I/O; persistence lives in `appliance-storage`.

pub mod category;
pub mod config;
pub mod record;
pub mod validate;

pub use category::{is_valid_category, ApplianceType, UnknownCategory};
pub use config::{StoreConfig, DB_PATH_ENV, DEFAULT_DB_PATH};
pub use record::{ApplianceRecord, RawRecord};
pub use validate::{is_valid, validate, ValidationError};
