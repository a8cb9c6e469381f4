// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use laptop_tracker_domain::{
    Laptop, LaptopStatus, ReceptionPhotos, ReceptionReport, Shipment, ShipmentStage,
    ShipmentVariant, TicketKey,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::transition_shipment_at;

pub const ALL_VARIANTS: [ShipmentVariant; 3] = [
    ShipmentVariant::SingleFullJourney,
    ShipmentVariant::BulkToWarehouse,
    ShipmentVariant::WarehouseToEngineer,
];

pub fn created_at() -> OffsetDateTime {
    datetime!(2026-03-02 09:00 UTC)
}

pub fn later(hours: i64) -> OffsetDateTime {
    created_at() + Duration::hours(hours)
}

/// Creates a shipment with a legal engineer assignment and laptop count for `variant`.
pub fn create_test_shipment(variant: ShipmentVariant) -> Shipment {
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
        created_at(),
    )
    .with_id(1)
}

/// Walks a fresh shipment forward until it reaches `stage`, one hour per step.
pub fn create_shipment_at(variant: ShipmentVariant, stage: ShipmentStage) -> Shipment {
    let mut shipment: Shipment = create_test_shipment(variant);
    let mut hour: i64 = 1;
    while shipment.stage != stage {
        let next: ShipmentStage = variant.stages()[variant.position_of(shipment.stage).unwrap() + 1];
        shipment = transition_shipment_at(&shipment, next, None, later(hour))
            .unwrap()
            .into_shipment();
        hour += 1;
    }
    shipment
}

pub fn create_test_laptop(laptop_id: i64, status: LaptopStatus) -> Laptop {
    Laptop::new("PF-3K9XQ1", status, created_at()).with_id(laptop_id)
}

pub fn create_test_photos() -> ReceptionPhotos {
    ReceptionPhotos {
        serial_number: String::from("uploads/serial.jpg"),
        external_condition: String::from("uploads/external.jpg"),
        working_condition: String::from("uploads/working.jpg"),
    }
}

pub fn create_test_report(report_id: i64, laptop_id: i64) -> ReceptionReport {
    ReceptionReport::new(laptop_id, create_test_photos(), None, created_at())
        .unwrap()
        .with_id(report_id)
}
