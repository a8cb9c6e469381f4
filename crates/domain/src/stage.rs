// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shipment stage vocabulary and the per-variant transition table.
//!
//! Every variant's legal path is a contiguous slice of [`ALL_STAGES`].
//! There is no second list of stages anywhere in the crate.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A position in the delivery pipeline.
///
/// Declaration order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStage {
    /// Created, waiting for a pickup to be booked
    PendingPickup,
    /// Courier pickup booked with the client
    PickupScheduled,
    /// Courier collected the hardware from the client
    PickedUpFromClient,
    /// On the way to the warehouse
    InTransitToWarehouse,
    /// Received at the warehouse
    AtWarehouse,
    /// Handed from the warehouse to a courier
    ReleasedFromWarehouse,
    /// On the way to the engineer
    InTransitToEngineer,
    /// Received by the engineer
    Delivered,
}

/// The global stage order.
pub const ALL_STAGES: [ShipmentStage; 8] = [
    ShipmentStage::PendingPickup,
    ShipmentStage::PickupScheduled,
    ShipmentStage::PickedUpFromClient,
    ShipmentStage::InTransitToWarehouse,
    ShipmentStage::AtWarehouse,
    ShipmentStage::ReleasedFromWarehouse,
    ShipmentStage::InTransitToEngineer,
    ShipmentStage::Delivered,
];

impl ShipmentStage {
    /// Returns the persisted string form of the stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPickup => "pending_pickup",
            Self::PickupScheduled => "pickup_scheduled",
            Self::PickedUpFromClient => "picked_up_from_client",
            Self::InTransitToWarehouse => "in_transit_to_warehouse",
            Self::AtWarehouse => "at_warehouse",
            Self::ReleasedFromWarehouse => "released_from_warehouse",
            Self::InTransitToEngineer => "in_transit_to_engineer",
            Self::Delivered => "delivered",
        }
    }

    /// Returns the human-readable label used in timelines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PendingPickup => "Pending Pickup",
            Self::PickupScheduled => "Pickup Scheduled",
            Self::PickedUpFromClient => "Picked Up from Client",
            Self::InTransitToWarehouse => "In Transit to Warehouse",
            Self::AtWarehouse => "At Warehouse",
            Self::ReleasedFromWarehouse => "Released from Warehouse",
            Self::InTransitToEngineer => "In Transit to Engineer",
            Self::Delivered => "Delivered",
        }
    }

    /// Returns true for stages observed only as the current stage.
    ///
    /// Transit stages carry no milestone timestamp.
    #[must_use]
    pub const fn is_transit(&self) -> bool {
        matches!(self, Self::InTransitToWarehouse | Self::InTransitToEngineer)
    }
}

impl std::fmt::Display for ShipmentStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShipmentStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STAGES
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| DomainError::InvalidStage(s.to_string()))
    }
}

/// The kind of journey a shipment makes.
///
/// Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentVariant {
    /// Client site to warehouse to engineer, one laptop.
    SingleFullJourney,
    /// Client site to warehouse, two or more laptops.
    BulkToWarehouse,
    /// Warehouse to engineer, one laptop.
    WarehouseToEngineer,
}

impl ShipmentVariant {
    /// Returns the persisted string form of the variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleFullJourney => "single_full_journey",
            Self::BulkToWarehouse => "bulk_to_warehouse",
            Self::WarehouseToEngineer => "warehouse_to_engineer",
        }
    }

    /// Returns the ordered stages this variant may pass through.
    #[must_use]
    pub fn stages(&self) -> &'static [ShipmentStage] {
        match self {
            Self::SingleFullJourney => &ALL_STAGES,
            Self::BulkToWarehouse => &ALL_STAGES[..=4],
            Self::WarehouseToEngineer => &ALL_STAGES[5..],
        }
    }

    /// The stage a new shipment of this variant starts in.
    #[must_use]
    pub fn initial_stage(&self) -> ShipmentStage {
        self.stages()[0]
    }

    /// The last stage of this variant's journey.
    #[must_use]
    pub fn terminal_stage(&self) -> ShipmentStage {
        let stages = self.stages();
        stages[stages.len() - 1]
    }

    /// Returns the position of `stage` in this variant's path, if it belongs to it.
    #[must_use]
    pub fn position_of(&self, stage: ShipmentStage) -> Option<usize> {
        self.stages().iter().position(|s| *s == stage)
    }

    /// Returns true if `stage` belongs to this variant's path.
    #[must_use]
    pub fn allows(&self, stage: ShipmentStage) -> bool {
        self.position_of(stage).is_some()
    }
}

impl std::fmt::Display for ShipmentVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShipmentVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_full_journey" => Ok(Self::SingleFullJourney),
            "bulk_to_warehouse" => Ok(Self::BulkToWarehouse),
            "warehouse_to_engineer" => Ok(Self::WarehouseToEngineer),
            _ => Err(DomainError::InvalidVariant(s.to_string())),
        }
    }
}
