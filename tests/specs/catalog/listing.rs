//! Catalog listing specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn list_groups_by_category() {
    let catalog = Catalog::with(json!([
        fridge(),
        { "name": "Laptop", "type": "COMPUTER", "power_consumption_kwh": 0.05, "embodied_emissions_kgCO2e": 300 },
        { "name": "Chest freezer", "type": "REFRIGERATOR", "power_consumption_kwh": 200, "embodied_emissions_kgCO2e": 250 },
    ]));

    let list = catalog.store().get_appliance_list().unwrap();

    let groups: Vec<_> = list.into_iter().collect();
    assert_eq!(
        groups,
        vec![
            (
                ApplianceType::Refrigerator,
                vec!["Fridge".to_string(), "Chest freezer".to_string()]
            ),
            (ApplianceType::Computer, vec!["Laptop".to_string()]),
        ]
    );
}

#[test]
fn list_skips_unnamed_and_untyped_records() {
    let catalog = Catalog::with(json!([
        { "name": " ", "type": "OVEN", "power_consumption_kwh": 1, "embodied_emissions_kgCO2e": 1 },
        { "name": "Toaster", "type": "TOASTER", "power_consumption_kwh": 1, "embodied_emissions_kgCO2e": 1 },
        { "name": "Mystery" },
        fridge(),
    ]));

    let list = catalog.store().get_appliance_list().unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[&ApplianceType::Refrigerator], vec!["Fridge".to_string()]);
}

#[test]
fn list_of_unreadable_document_is_absent() {
    let catalog = Catalog::missing();
    std::fs::write(catalog.path(), "not json").unwrap();

    assert_eq!(catalog.store().get_appliance_list(), None);
}
