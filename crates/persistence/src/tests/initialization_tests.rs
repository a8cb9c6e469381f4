// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use laptop_tracker_domain::{LaptopStatus, ShipmentStage, ShipmentVariant};

use super::{create_test_laptop_request, create_test_persistence, create_test_shipment_request};
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence: Persistence = create_test_persistence();

    assert!(persistence
        .list_shipments_by_stage(ShipmentStage::PendingPickup)
        .unwrap()
        .is_empty());
    assert!(persistence.list_pending_reception_reports().unwrap().is_empty());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = create_test_persistence();
    let mut db2: Persistence = create_test_persistence();

    db1.create_shipment(
        &create_test_shipment_request(ShipmentVariant::SingleFullJourney),
        None,
    )
    .unwrap();
    db1.create_laptop(&create_test_laptop_request("SN-1", LaptopStatus::AtWarehouse))
        .unwrap();

    assert_eq!(
        db1.list_shipments_by_stage(ShipmentStage::PendingPickup)
            .unwrap()
            .len(),
        1
    );
    assert!(db2
        .list_shipments_by_stage(ShipmentStage::PendingPickup)
        .unwrap()
        .is_empty());
    assert!(matches!(
        db2.get_laptop_by_serial("SN-1"),
        Err(PersistenceError::NotFound(_))
    ));
}
