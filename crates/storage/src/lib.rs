// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! appliance-storage: persistence for the appliance catalog
//!
//! The catalog is one JSON array on disk. [`ApplianceStore`] reads it in full,
//! applies at most one change, and writes it back in full on every call.

pub mod audit;
pub mod document;
pub mod store;
mod surface;

pub use audit::{AuditReport, InvalidEntry};
pub use document::{DocumentError, JsonDocument};
pub use store::{ApplianceList, ApplianceStore, StoreError};
