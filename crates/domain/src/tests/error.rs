// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, LaptopStatus, ShipmentStage, ShipmentVariant};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidTicketKey(String::from("scop-1"));
    assert_eq!(
        format!("{err}"),
        "Invalid ticket key 'scop-1': expected format PROJECT-NUMBER (e.g. SCOP-1001)"
    );

    let err: DomainError = DomainError::MissingClientCompany;
    assert_eq!(format!("{err}"), "Client company is required");

    let err: DomainError = DomainError::InvalidStage(String::from("lost"));
    assert_eq!(format!("{err}"), "Invalid shipment stage: 'lost'");

    let err: DomainError = DomainError::StageNotInVariant {
        variant: ShipmentVariant::BulkToWarehouse,
        stage: ShipmentStage::Delivered,
    };
    assert_eq!(
        format!("{err}"),
        "Stage delivered is not part of the bulk_to_warehouse journey"
    );

    let err: DomainError = DomainError::MissingEngineer {
        variant: ShipmentVariant::WarehouseToEngineer,
    };
    assert_eq!(
        format!("{err}"),
        "Shipments of type warehouse_to_engineer require an assigned engineer"
    );

    let err: DomainError = DomainError::MissingPhoto("working condition");
    assert_eq!(
        format!("{err}"),
        "Reception report requires a working condition photo"
    );
}

#[test]
fn test_laptop_count_error_names_the_rule_for_the_variant() {
    let bulk: DomainError = DomainError::InvalidLaptopCount {
        variant: ShipmentVariant::BulkToWarehouse,
        count: 1,
    };
    assert!(format!("{bulk}").contains("at least 2"));

    let single: DomainError = DomainError::InvalidLaptopCount {
        variant: ShipmentVariant::SingleFullJourney,
        count: 3,
    };
    assert!(format!("{single}").contains("exactly 1"));
}

#[test]
fn test_initial_status_error_mentions_reception_report() {
    let err: DomainError = DomainError::InvalidInitialLaptopStatus(LaptopStatus::Available);
    let message: String = format!("{err}");
    assert!(message.contains("available"));
    assert!(message.contains("approved reception report"));
}
