// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use laptop_tracker_domain::{Shipment, ShipmentStage, ShipmentVariant};
use time::macros::datetime;

use super::helpers::{ALL_VARIANTS, create_shipment_at, create_test_shipment, later};
use crate::{TimelineEntry, TimelineState, project_timeline, transition_shipment_at};

fn states(timeline: &[TimelineEntry]) -> Vec<TimelineState> {
    timeline.iter().map(|entry| entry.state).collect()
}

#[test]
fn test_timeline_has_one_row_per_variant_stage() {
    for variant in ALL_VARIANTS {
        let timeline: Vec<TimelineEntry> = project_timeline(&create_test_shipment(variant));
        let stages: Vec<ShipmentStage> = timeline.iter().map(|entry| entry.stage).collect();
        assert_eq!(stages.as_slice(), variant.stages());
    }
}

#[test]
fn test_fresh_shipment_timeline() {
    let timeline: Vec<TimelineEntry> =
        project_timeline(&create_test_shipment(ShipmentVariant::BulkToWarehouse));

    assert_eq!(
        states(&timeline),
        vec![
            TimelineState::Current,
            TimelineState::Pending,
            TimelineState::Pending,
            TimelineState::Pending,
            TimelineState::Pending,
        ]
    );
    assert_eq!(timeline[0].label, "Pending Pickup");
    assert!(timeline.iter().all(|entry| entry.timestamp.is_none()));
}

#[test]
fn test_current_transit_stage_is_current_not_completed() {
    let shipment: Shipment =
        create_shipment_at(ShipmentVariant::SingleFullJourney, ShipmentStage::InTransitToWarehouse);
    let timeline: Vec<TimelineEntry> = project_timeline(&shipment);

    assert_eq!(
        states(&timeline),
        vec![
            TimelineState::Completed,
            TimelineState::Completed,
            TimelineState::Completed,
            TimelineState::Current,
            TimelineState::Pending,
            TimelineState::Pending,
            TimelineState::Pending,
            TimelineState::Pending,
        ]
    );
    let current: &TimelineEntry = &timeline[3];
    assert!(current.is_current());
    assert!(!current.is_completed());
    assert!(current.timestamp.is_none());
}

#[test]
fn test_current_stage_with_timestamp_is_completed() {
    let shipment: Shipment =
        create_shipment_at(ShipmentVariant::BulkToWarehouse, ShipmentStage::AtWarehouse);
    let timeline: Vec<TimelineEntry> = project_timeline(&shipment);

    assert!(timeline.iter().all(TimelineEntry::is_completed));
    assert_eq!(timeline[4].timestamp, shipment.milestones.arrived_warehouse_at);
}

#[test]
fn test_current_stage_row_is_marked_even_when_completed() {
    let fresh: Shipment = create_test_shipment(ShipmentVariant::WarehouseToEngineer);
    let timeline: Vec<TimelineEntry> = project_timeline(&fresh);

    assert!(!timeline.iter().any(TimelineEntry::is_current));
    assert!(timeline[0].is_completed());
    assert!(timeline[0].is_current_stage);
    assert_eq!(timeline[0].timestamp, Some(fresh.created_at));
}

#[test]
fn test_exactly_one_row_marks_the_current_stage() {
    for variant in ALL_VARIANTS {
        for stage in variant.stages() {
            let shipment: Shipment = create_shipment_at(variant, *stage);
            let marked: Vec<ShipmentStage> = project_timeline(&shipment)
                .iter()
                .filter(|entry| entry.is_current_stage)
                .map(|entry| entry.stage)
                .collect();
            assert_eq!(marked, vec![*stage]);
        }
    }
}

#[test]
fn test_rows_carry_milestone_timestamps() {
    let shipment: Shipment =
        create_shipment_at(ShipmentVariant::SingleFullJourney, ShipmentStage::AtWarehouse);
    let timeline: Vec<TimelineEntry> = project_timeline(&shipment);

    assert_eq!(timeline[1].timestamp, Some(later(1)));
    assert_eq!(timeline[2].timestamp, Some(later(2)));
    assert_eq!(timeline[3].timestamp, None);
    assert_eq!(timeline[4].timestamp, Some(later(4)));
    assert!(timeline[5].is_pending());
}

#[test]
fn test_in_transit_to_engineer_row_shows_eta() {
    let released: Shipment = create_shipment_at(
        ShipmentVariant::WarehouseToEngineer,
        ShipmentStage::ReleasedFromWarehouse,
    );
    let eta = datetime!(2026-03-05 18:00 UTC);
    let shipment: Shipment = transition_shipment_at(
        &released,
        ShipmentStage::InTransitToEngineer,
        Some(eta),
        later(1),
    )
    .unwrap()
    .into_shipment();

    let timeline: Vec<TimelineEntry> = project_timeline(&shipment);
    assert!(timeline[1].is_current());
    assert_eq!(timeline[1].expected_at, Some(eta));
    assert_eq!(timeline[2].expected_at, None);
}

#[test]
fn test_each_row_has_exactly_one_state() {
    for variant in ALL_VARIANTS {
        for stage in variant.stages() {
            let shipment: Shipment = create_shipment_at(variant, *stage);
            for entry in project_timeline(&shipment) {
                let flags: [bool; 3] = [entry.is_completed(), entry.is_current(), entry.is_pending()];
                assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            }
        }
    }
}

#[test]
fn test_timeline_does_not_modify_shipment() {
    let shipment: Shipment =
        create_shipment_at(ShipmentVariant::SingleFullJourney, ShipmentStage::PickedUpFromClient);
    let snapshot: Shipment = shipment.clone();
    let _ = project_timeline(&shipment);
    assert_eq!(shipment, snapshot);
}
