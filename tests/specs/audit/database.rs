//! Whole-database validation specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn negative_power_fails_and_reports_index() {
    let broken = json!({
        "name": "Heater",
        "type": "HEAT_PUMP",
        "power_consumption_kwh": -5,
        "embodied_emissions_kgCO2e": 20,
    });
    let catalog = Catalog::with(json!([fridge(), broken.clone()]));
    let store = catalog.store();

    assert!(!store.validate_database());

    let report = store.audit().unwrap();
    assert_eq!(report.invalid_indexes(), vec![1]);
    assert_eq!(
        report.to_string(),
        format!("invalid entry at index: 1\n{}\n", broken)
    );
}

#[test]
fn clean_database_passes() {
    let catalog = Catalog::with(json!([fridge()]));
    assert!(catalog.store().validate_database());
}

#[test]
fn validation_never_writes() {
    let catalog = Catalog::with(json!([{ "name": "" }, fridge()]));
    let before = catalog.text();

    assert!(!catalog.store().validate_database());
    assert_eq!(catalog.text(), before);
}

#[test]
fn recognized_categories_are_valid() {
    // Every known category passes the type check; an inverted check would
    // reject all of them.
    let records: Vec<Value> = ApplianceType::ALL
        .iter()
        .map(|kind| {
            json!({
                "name": kind.as_str(),
                "type": kind.as_str(),
                "power_consumption_kwh": 1,
                "embodied_emissions_kgCO2e": 0,
            })
        })
        .collect();
    let catalog = Catalog::with(Value::Array(records));

    assert!(catalog.store().validate_database());
}

#[test]
fn unreadable_database_fails() {
    let catalog = Catalog::missing();
    assert!(!catalog.store().validate_database());
}
