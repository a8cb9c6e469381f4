// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Milestones, Shipment, ShipmentStage, ShipmentVariant, TicketKey};

use super::test_now;

fn create_test_shipment(variant: ShipmentVariant) -> Shipment {
    let (engineer, count) = match variant {
        ShipmentVariant::SingleFullJourney => (None, 1),
        ShipmentVariant::BulkToWarehouse => (None, 3),
        ShipmentVariant::WarehouseToEngineer => (Some(7), 1),
    };
    Shipment::new(
        variant,
        1,
        engineer,
        count,
        TicketKey::parse("SCOP-1001").unwrap(),
        test_now(),
    )
}

#[test]
fn test_new_shipment_starts_at_variant_initial_stage() {
    assert_eq!(
        create_test_shipment(ShipmentVariant::SingleFullJourney).stage,
        ShipmentStage::PendingPickup
    );
    assert_eq!(
        create_test_shipment(ShipmentVariant::BulkToWarehouse).stage,
        ShipmentStage::PendingPickup
    );
    assert_eq!(
        create_test_shipment(ShipmentVariant::WarehouseToEngineer).stage,
        ShipmentStage::ReleasedFromWarehouse
    );
}

#[test]
fn test_new_shipment_has_no_id_until_persisted() {
    let shipment: Shipment = create_test_shipment(ShipmentVariant::SingleFullJourney);
    assert_eq!(shipment.shipment_id(), None);
    assert_eq!(shipment.with_id(42).shipment_id(), Some(42));
}

#[test]
fn test_milestone_slots_cover_only_non_transit_milestones() {
    let mut milestones: Milestones = Milestones::default();
    assert!(milestones.slot_mut(ShipmentStage::PendingPickup).is_none());
    assert!(milestones.slot_mut(ShipmentStage::InTransitToWarehouse).is_none());
    assert!(milestones.slot_mut(ShipmentStage::InTransitToEngineer).is_none());

    if let Some(slot) = milestones.slot_mut(ShipmentStage::AtWarehouse) {
        *slot = Some(test_now());
    }
    assert_eq!(milestones.get(ShipmentStage::AtWarehouse), Some(test_now()));
    assert_eq!(milestones.arrived_warehouse_at, Some(test_now()));
    assert_eq!(milestones.get(ShipmentStage::Delivered), None);
}

#[test]
fn test_integrity_accepts_fresh_shipment() {
    for variant in [
        ShipmentVariant::SingleFullJourney,
        ShipmentVariant::BulkToWarehouse,
        ShipmentVariant::WarehouseToEngineer,
    ] {
        assert!(create_test_shipment(variant).check_integrity().is_ok());
    }
}

#[test]
fn test_integrity_rejects_stage_outside_variant() {
    let mut shipment: Shipment = create_test_shipment(ShipmentVariant::BulkToWarehouse);
    shipment.stage = ShipmentStage::InTransitToEngineer;

    assert_eq!(
        shipment.check_integrity(),
        Err(DomainError::StageNotInVariant {
            variant: ShipmentVariant::BulkToWarehouse,
            stage: ShipmentStage::InTransitToEngineer,
        })
    );
}

#[test]
fn test_integrity_rejects_passed_stage_without_timestamp() {
    let mut shipment: Shipment = create_test_shipment(ShipmentVariant::SingleFullJourney);
    shipment.stage = ShipmentStage::InTransitToWarehouse;
    shipment.milestones.pickup_scheduled_at = Some(test_now());

    assert_eq!(
        shipment.check_integrity(),
        Err(DomainError::MissingMilestone {
            stage: ShipmentStage::PickedUpFromClient
        })
    );

    shipment.milestones.picked_up_at = Some(test_now());
    assert!(shipment.check_integrity().is_ok());
}

#[test]
fn test_integrity_allows_current_stage_without_timestamp() {
    let mut shipment: Shipment = create_test_shipment(ShipmentVariant::WarehouseToEngineer);
    shipment.stage = ShipmentStage::InTransitToEngineer;
    shipment.milestones.released_warehouse_at = Some(test_now());
    assert!(shipment.check_integrity().is_ok());

    shipment.stage = ShipmentStage::Delivered;
    assert!(shipment.check_integrity().is_ok());
}

#[test]
fn test_entry_milestone_is_stamped_at_creation() {
    let shipment: Shipment = create_test_shipment(ShipmentVariant::WarehouseToEngineer);
    assert_eq!(shipment.milestones.released_warehouse_at, Some(shipment.created_at));

    let bulk: Shipment = create_test_shipment(ShipmentVariant::BulkToWarehouse);
    assert_eq!(bulk.milestones, Milestones::default());
}

#[test]
fn test_integrity_requires_entry_stage_timestamp_once_passed() {
    let mut shipment: Shipment = create_test_shipment(ShipmentVariant::WarehouseToEngineer);
    shipment.stage = ShipmentStage::InTransitToEngineer;
    assert!(shipment.check_integrity().is_ok());

    shipment.milestones.released_warehouse_at = None;
    assert_eq!(
        shipment.check_integrity(),
        Err(DomainError::MissingMilestone {
            stage: ShipmentStage::ReleasedFromWarehouse
        })
    );
}

#[test]
fn test_is_complete_follows_variant_terminal_stage() {
    let mut bulk: Shipment = create_test_shipment(ShipmentVariant::BulkToWarehouse);
    assert!(!bulk.is_complete());
    bulk.stage = ShipmentStage::AtWarehouse;
    assert!(bulk.is_complete());
}
