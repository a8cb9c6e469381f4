// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use laptop_tracker_domain::{DomainError, LaptopStatus, ShipmentStage, ShipmentVariant};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The proposed stage is not the unique next stage for the shipment.
    InvalidTransition {
        /// The shipment variant.
        variant: ShipmentVariant,
        /// The current stage.
        from: ShipmentStage,
        /// The rejected stage.
        to: ShipmentStage,
        /// The only stage that would have been accepted, if any.
        expected: Option<ShipmentStage>,
    },
    /// The laptop lifecycle does not permit this status change.
    InvalidLaptopTransition {
        /// The current status.
        from: LaptopStatus,
        /// The rejected status.
        to: LaptopStatus,
    },
    /// `Available` can only be entered by approving a reception report.
    AvailabilityRequiresApproval {
        /// The laptop concerned.
        laptop_id: Option<i64>,
    },
    /// The reception report has already been approved.
    ReportAlreadyApproved {
        /// The report concerned.
        report_id: Option<i64>,
    },
    /// The report does not belong to the supplied laptop.
    ReportLaptopMismatch {
        /// The laptop the report is linked to.
        report_laptop_id: i64,
        /// The laptop that was supplied.
        laptop_id: Option<i64>,
    },
    /// The laptop is not at the warehouse, so it cannot become available.
    LaptopNotAtWarehouse {
        /// The laptop concerned.
        laptop_id: Option<i64>,
        /// The status the laptop actually has.
        status: LaptopStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidTransition {
                variant,
                from,
                to,
                expected,
            } => {
                write!(
                    f,
                    "{from} -> {to} is not a valid transition for a {variant} shipment"
                )?;
                match expected {
                    Some(next) => write!(f, " (next allowed stage is {next})"),
                    None => write!(f, " ({from} is the final stage)"),
                }
            }
            Self::InvalidLaptopTransition { from, to } => {
                write!(f, "Laptop cannot move from {from} to {to}")
            }
            Self::AvailabilityRequiresApproval { laptop_id } => write!(
                f,
                "Laptop {} can only become available by approving its reception report",
                display_id(*laptop_id)
            ),
            Self::ReportAlreadyApproved { report_id } => write!(
                f,
                "Reception report {} is already approved",
                display_id(*report_id)
            ),
            Self::ReportLaptopMismatch {
                report_laptop_id,
                laptop_id,
            } => write!(
                f,
                "Reception report belongs to laptop {report_laptop_id}, not laptop {}",
                display_id(*laptop_id)
            ),
            Self::LaptopNotAtWarehouse { laptop_id, status } => write!(
                f,
                "Laptop {} is {status}, not at_warehouse; it cannot become available",
                display_id(*laptop_id)
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| String::from("<unsaved>"), |id| id.to_string())
}
