// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod initialization_tests;

use laptop_tracker_domain::{
    LaptopStatus, NewLaptop, NewShipment, ReceptionPhotos, ShipmentVariant,
};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// A shipment request that is legal for `variant`.
pub fn create_test_shipment_request(variant: ShipmentVariant) -> NewShipment {
    let (engineer, count) = match variant {
        ShipmentVariant::SingleFullJourney => (None, 1),
        ShipmentVariant::BulkToWarehouse => (None, 3),
        ShipmentVariant::WarehouseToEngineer => (Some(7), 1),
    };
    NewShipment {
        variant,
        client_company_id: Some(1),
        software_engineer_id: engineer,
        laptop_count: count,
        ticket_key: String::from("SCOP-1001"),
        tracking_number: None,
        notes: None,
    }
}

pub fn create_test_laptop_request(serial_number: &str, status: LaptopStatus) -> NewLaptop {
    NewLaptop {
        serial_number: serial_number.to_string(),
        brand: Some(String::from("Lenovo")),
        model: Some(String::from("ThinkPad X1")),
        client_company_id: Some(1),
        status,
    }
}

pub fn create_test_photos() -> ReceptionPhotos {
    ReceptionPhotos {
        serial_number: String::from("uploads/serial.jpg"),
        external_condition: String::from("uploads/external.jpg"),
        working_condition: String::from("uploads/working.jpg"),
    }
}

/// Stores a laptop at the warehouse with a pending report. Returns `(laptop_id, report_id)`.
pub fn create_pending_report(persistence: &mut Persistence, serial_number: &str) -> (i64, i64) {
    let laptop_id: i64 = persistence
        .create_laptop(&create_test_laptop_request(serial_number, LaptopStatus::AtWarehouse))
        .unwrap()
        .laptop_id()
        .unwrap();
    let report_id: i64 = persistence
        .create_reception_report(laptop_id, create_test_photos(), None)
        .unwrap()
        .report_id()
        .unwrap();
    (laptop_id, report_id)
}
