// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::laptop::{Laptop, LaptopStatus, NewLaptop};
use crate::shipment::{NewShipment, Shipment};
use crate::stage::{ShipmentStage, ShipmentVariant};
use crate::types::{TicketExistenceCheck, TicketKey};
use time::OffsetDateTime;

/// Validates a ticket key's format and, optionally, its existence.
///
/// A `None` check means format-only validation (seed and sample data).
/// The check sees the key after [`TicketKey::parse`] has trimmed it.
///
/// # Errors
///
/// Returns an error if:
/// - The key does not match `PROJECT-NUMBER`
/// - The existence check rejects the key
pub fn validate_ticket_key(
    raw: &str,
    ticket_check: Option<TicketExistenceCheck<'_>>,
) -> Result<TicketKey, DomainError> {
    let key: TicketKey = TicketKey::parse(raw)?;

    if let Some(check) = ticket_check {
        check(&key).map_err(|reason| DomainError::TicketNotFound {
            key: key.value().to_string(),
            reason,
        })?;
    }

    Ok(key)
}

/// Validates the number of laptops a shipment of `variant` carries.
///
/// # Errors
///
/// Returns `DomainError::InvalidLaptopCount` if:
/// - A bulk shipment carries fewer than 2 laptops
/// - Any other shipment does not carry exactly 1
pub fn validate_laptop_count(variant: ShipmentVariant, count: u32) -> Result<(), DomainError> {
    let valid: bool = match variant {
        ShipmentVariant::BulkToWarehouse => count >= 2,
        ShipmentVariant::SingleFullJourney | ShipmentVariant::WarehouseToEngineer => count == 1,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidLaptopCount { variant, count })
    }
}

/// Validates engineer assignment for `variant`.
///
/// Bulk shipments never have an engineer, warehouse-to-engineer shipments
/// always do, and single full journeys may be assigned later.
///
/// # Errors
///
/// Returns an error if the assignment is not legal for the variant.
pub fn validate_engineer_assignment(
    variant: ShipmentVariant,
    software_engineer_id: Option<i64>,
) -> Result<(), DomainError> {
    match (variant, software_engineer_id) {
        (ShipmentVariant::BulkToWarehouse, Some(_)) => {
            Err(DomainError::UnexpectedEngineer { variant })
        }
        (ShipmentVariant::WarehouseToEngineer, None) => {
            Err(DomainError::MissingEngineer { variant })
        }
        _ => Ok(()),
    }
}

/// Runs the variant-specific precondition checks on an existing shipment.
///
/// # Errors
///
/// Returns an error if the engineer assignment or laptop count is not
/// legal for the shipment's variant.
pub fn validate_shipment_assignment(shipment: &Shipment) -> Result<(), DomainError> {
    validate_engineer_assignment(shipment.variant, shipment.software_engineer_id)?;
    validate_laptop_count(shipment.variant, shipment.laptop_count)
}

/// Parses a stored stage and checks it belongs to `variant`.
///
/// # Errors
///
/// Returns an error if the stage is unrecognized or off the variant's path.
pub fn validate_shipment_stage(
    variant: ShipmentVariant,
    raw_stage: &str,
) -> Result<ShipmentStage, DomainError> {
    let stage: ShipmentStage = raw_stage.parse()?;
    if !variant.allows(stage) {
        return Err(DomainError::StageNotInVariant { variant, stage });
    }
    Ok(stage)
}

/// Validates a creation request and builds the shipment.
///
/// Checks run in order: client company, ticket key, engineer assignment,
/// laptop count. Nothing is built unless every check passes.
///
/// # Errors
///
/// Returns the first validation error encountered.
pub fn validate_new_shipment(
    request: &NewShipment,
    ticket_check: Option<TicketExistenceCheck<'_>>,
    now: OffsetDateTime,
) -> Result<Shipment, DomainError> {
    let client_company_id: i64 = request
        .client_company_id
        .ok_or(DomainError::MissingClientCompany)?;

    let ticket_key: TicketKey = validate_ticket_key(&request.ticket_key, ticket_check)?;

    validate_engineer_assignment(request.variant, request.software_engineer_id)?;
    validate_laptop_count(request.variant, request.laptop_count)?;

    let mut shipment: Shipment = Shipment::new(
        request.variant,
        client_company_id,
        request.software_engineer_id,
        request.laptop_count,
        ticket_key,
        now,
    );
    shipment.tracking_number = non_empty(request.tracking_number.as_deref());
    shipment.notes = non_empty(request.notes.as_deref());

    Ok(shipment)
}

/// Validates a laptop registration request and builds the laptop.
///
/// # Errors
///
/// Returns an error if:
/// - The serial number is empty
/// - The requested status is `Available` (every unit passes inspection first)
pub fn validate_new_laptop(request: &NewLaptop, now: OffsetDateTime) -> Result<Laptop, DomainError> {
    if request.serial_number.trim().is_empty() {
        return Err(DomainError::InvalidSerialNumber(String::from(
            "Serial number cannot be empty",
        )));
    }

    if request.status == LaptopStatus::Available {
        return Err(DomainError::InvalidInitialLaptopStatus(request.status));
    }

    let mut laptop: Laptop = Laptop::new(&request.serial_number, request.status, now);
    laptop.brand = non_empty(request.brand.as_deref());
    laptop.model = non_empty(request.model.as_deref());
    laptop.client_company_id = request.client_company_id;

    Ok(laptop)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
