// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Laptop inventory status.
//!
//! A laptop is tracked per physical unit, independently of any shipment.
//! Entry into `Available` is gated on an approved reception report and is
//! not a plain status transition.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Inventory status of a single laptop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaptopStatus {
    /// Inspected and ready to be assigned
    Available,
    /// On the way from a client to the warehouse
    InTransitToWarehouse,
    /// Received at the warehouse, not yet inspected
    AtWarehouse,
    /// On the way to an engineer
    InTransitToEngineer,
    /// Received by an engineer
    Delivered,
    /// Withdrawn from service
    Retired,
}

impl LaptopStatus {
    /// Returns the persisted string form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InTransitToWarehouse => "in_transit_to_warehouse",
            Self::AtWarehouse => "at_warehouse",
            Self::InTransitToEngineer => "in_transit_to_engineer",
            Self::Delivered => "delivered",
            Self::Retired => "retired",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InTransitToWarehouse => "In Transit to Warehouse",
            Self::AtWarehouse => "At Warehouse",
            Self::InTransitToEngineer => "In Transit to Engineer",
            Self::Delivered => "Delivered",
            Self::Retired => "Retired",
        }
    }

    /// Returns true if no further status change is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Retired)
    }

    /// Returns the next status along the forward path, if any.
    ///
    /// `Retired` is a side branch and never appears here.
    #[must_use]
    pub const fn forward(&self) -> Option<Self> {
        match self {
            Self::InTransitToWarehouse => Some(Self::AtWarehouse),
            Self::AtWarehouse => Some(Self::Available),
            Self::Available => Some(Self::InTransitToEngineer),
            Self::InTransitToEngineer => Some(Self::Delivered),
            Self::Delivered | Self::Retired => None,
        }
    }

    /// Checks whether the lifecycle permits moving from this status to `target`.
    ///
    /// Valid transitions are:
    /// - one step along the forward path
    /// - any non-terminal status → `Retired`
    ///
    /// Whether entry into `Available` is actually allowed also depends on
    /// the reception report; this only answers the lifecycle question.
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == Self::Retired || self.forward() == Some(target)
    }
}

impl std::fmt::Display for LaptopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LaptopStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "in_transit_to_warehouse" => Ok(Self::InTransitToWarehouse),
            "at_warehouse" => Ok(Self::AtWarehouse),
            "in_transit_to_engineer" => Ok(Self::InTransitToEngineer),
            "delivered" => Ok(Self::Delivered),
            "retired" => Ok(Self::Retired),
            _ => Err(DomainError::InvalidLaptopStatus(s.to_string())),
        }
    }
}

/// A physical laptop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laptop {
    /// Database identifier. `None` until persisted.
    laptop_id: Option<i64>,
    pub serial_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub client_company_id: Option<i64>,
    pub status: LaptopStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Laptop {
    /// Creates an unpersisted laptop.
    #[must_use]
    pub fn new(serial_number: &str, status: LaptopStatus, now: OffsetDateTime) -> Self {
        Self {
            laptop_id: None,
            serial_number: serial_number.trim().to_string(),
            brand: None,
            model: None,
            client_company_id: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches the database identifier.
    #[must_use]
    pub fn with_id(mut self, laptop_id: i64) -> Self {
        self.laptop_id = Some(laptop_id);
        self
    }

    /// Returns the database identifier if persisted.
    #[must_use]
    pub const fn laptop_id(&self) -> Option<i64> {
        self.laptop_id
    }
}

/// Input for registering a laptop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLaptop {
    pub serial_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub client_company_id: Option<i64>,
    pub status: LaptopStatus,
}
