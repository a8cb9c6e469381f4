// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::laptop::LaptopStatus;
use crate::stage::{ShipmentStage, ShipmentVariant};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Stage string is not part of the vocabulary.
    InvalidStage(String),
    /// Variant string is not a known shipment variant.
    InvalidVariant(String),
    /// Laptop status string is not recognized.
    InvalidLaptopStatus(String),
    /// Reception report status string is not recognized.
    InvalidReportStatus(String),
    /// Ticket key does not match `PROJECT-NUMBER`.
    InvalidTicketKey(String),
    /// The ticketing collaborator reported that the ticket does not exist.
    TicketNotFound {
        /// The ticket key that was checked.
        key: String,
        /// The reason given by the validator.
        reason: String,
    },
    /// No client company was supplied.
    MissingClientCompany,
    /// Laptop count is not legal for the variant.
    InvalidLaptopCount {
        /// The shipment variant.
        variant: ShipmentVariant,
        /// The rejected count.
        count: u32,
    },
    /// A bulk shipment was given an engineer.
    UnexpectedEngineer {
        /// The shipment variant.
        variant: ShipmentVariant,
    },
    /// A warehouse-to-engineer shipment has no engineer.
    MissingEngineer {
        /// The shipment variant.
        variant: ShipmentVariant,
    },
    /// The shipment's stage is not on its variant's path.
    StageNotInVariant {
        /// The shipment variant.
        variant: ShipmentVariant,
        /// The offending stage.
        stage: ShipmentStage,
    },
    /// A stage that has been passed has no milestone timestamp.
    MissingMilestone {
        /// The stage whose timestamp is absent.
        stage: ShipmentStage,
    },
    /// Laptop serial number is empty.
    InvalidSerialNumber(String),
    /// New laptops may not start in this status.
    InvalidInitialLaptopStatus(LaptopStatus),
    /// A required reception photo reference is empty.
    MissingPhoto(&'static str),
    /// Timestamp text could not be parsed.
    TimestampParseError {
        /// The invalid timestamp string.
        value: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStage(s) => write!(f, "Invalid shipment stage: '{s}'"),
            Self::InvalidVariant(s) => write!(f, "Invalid shipment type: '{s}'"),
            Self::InvalidLaptopStatus(s) => write!(f, "Invalid laptop status: '{s}'"),
            Self::InvalidReportStatus(s) => write!(f, "Invalid reception report status: '{s}'"),
            Self::InvalidTicketKey(key) => write!(
                f,
                "Invalid ticket key '{key}': expected format PROJECT-NUMBER (e.g. SCOP-1001)"
            ),
            Self::TicketNotFound { key, reason } => {
                write!(f, "Ticket {key} could not be verified: {reason}")
            }
            Self::MissingClientCompany => write!(f, "Client company is required"),
            Self::InvalidLaptopCount { variant, count } => match variant {
                ShipmentVariant::BulkToWarehouse => write!(
                    f,
                    "Invalid laptop count {count} for {variant}: bulk shipments need at least 2"
                ),
                _ => write!(
                    f,
                    "Invalid laptop count {count} for {variant}: exactly 1 laptop is required"
                ),
            },
            Self::UnexpectedEngineer { variant } => {
                write!(f, "Shipments of type {variant} cannot have an assigned engineer")
            }
            Self::MissingEngineer { variant } => {
                write!(f, "Shipments of type {variant} require an assigned engineer")
            }
            Self::StageNotInVariant { variant, stage } => {
                write!(f, "Stage {stage} is not part of the {variant} journey")
            }
            Self::MissingMilestone { stage } => {
                write!(f, "Stage {stage} was passed but has no timestamp")
            }
            Self::InvalidSerialNumber(msg) => write!(f, "Invalid serial number: {msg}"),
            Self::InvalidInitialLaptopStatus(status) => write!(
                f,
                "Laptops cannot be created with status {status}; availability requires an approved reception report"
            ),
            Self::MissingPhoto(which) => write!(f, "Reception report requires a {which} photo"),
            Self::TimestampParseError { value, error } => {
                write!(f, "Failed to parse timestamp '{value}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
