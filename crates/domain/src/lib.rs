// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod laptop;
mod reception_report;
mod shipment;
mod stage;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use laptop::{Laptop, LaptopStatus, NewLaptop};
pub use reception_report::{Approval, ReceptionPhotos, ReceptionReport, ReportStatus};
pub use shipment::{Milestones, NewShipment, Shipment};
pub use stage::{ALL_STAGES, ShipmentStage, ShipmentVariant};
pub use types::{TicketExistenceCheck, TicketKey};
pub use validation::{
    validate_engineer_assignment, validate_laptop_count, validate_new_laptop,
    validate_new_shipment, validate_shipment_assignment, validate_shipment_stage,
    validate_ticket_key,
};
