// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::stage::{ShipmentStage, ShipmentVariant};
use crate::types::TicketKey;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The moments a shipment reached each milestone stage.
///
/// `PendingPickup` and the two transit stages have no slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestones {
    pub pickup_scheduled_at: Option<OffsetDateTime>,
    pub picked_up_at: Option<OffsetDateTime>,
    pub arrived_warehouse_at: Option<OffsetDateTime>,
    pub released_warehouse_at: Option<OffsetDateTime>,
    pub delivered_at: Option<OffsetDateTime>,
}

impl Milestones {
    /// Returns true if `stage` has a milestone timestamp slot.
    #[must_use]
    pub const fn tracks(stage: ShipmentStage) -> bool {
        matches!(
            stage,
            ShipmentStage::PickupScheduled
                | ShipmentStage::PickedUpFromClient
                | ShipmentStage::AtWarehouse
                | ShipmentStage::ReleasedFromWarehouse
                | ShipmentStage::Delivered
        )
    }

    /// Returns the timestamp recorded for `stage`, if any.
    #[must_use]
    pub const fn get(&self, stage: ShipmentStage) -> Option<OffsetDateTime> {
        match stage {
            ShipmentStage::PickupScheduled => self.pickup_scheduled_at,
            ShipmentStage::PickedUpFromClient => self.picked_up_at,
            ShipmentStage::AtWarehouse => self.arrived_warehouse_at,
            ShipmentStage::ReleasedFromWarehouse => self.released_warehouse_at,
            ShipmentStage::Delivered => self.delivered_at,
            ShipmentStage::PendingPickup
            | ShipmentStage::InTransitToWarehouse
            | ShipmentStage::InTransitToEngineer => None,
        }
    }

    /// Returns the slot for `stage`, or `None` if the stage has no milestone.
    pub fn slot_mut(&mut self, stage: ShipmentStage) -> Option<&mut Option<OffsetDateTime>> {
        match stage {
            ShipmentStage::PickupScheduled => Some(&mut self.pickup_scheduled_at),
            ShipmentStage::PickedUpFromClient => Some(&mut self.picked_up_at),
            ShipmentStage::AtWarehouse => Some(&mut self.arrived_warehouse_at),
            ShipmentStage::ReleasedFromWarehouse => Some(&mut self.released_warehouse_at),
            ShipmentStage::Delivered => Some(&mut self.delivered_at),
            ShipmentStage::PendingPickup
            | ShipmentStage::InTransitToWarehouse
            | ShipmentStage::InTransitToEngineer => None,
        }
    }
}

/// A journey of one or more laptops through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Database identifier. `None` until persisted.
    shipment_id: Option<i64>,
    pub variant: ShipmentVariant,
    pub stage: ShipmentStage,
    pub client_company_id: i64,
    pub software_engineer_id: Option<i64>,
    pub laptop_count: u32,
    pub ticket_key: TicketKey,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub milestones: Milestones,
    /// Expected delivery to the engineer, supplied when the courier departs.
    pub eta_to_engineer: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Shipment {
    /// Creates an unpersisted shipment at its variant's first stage.
    ///
    /// If that stage carries a milestone it is stamped with `now`.
    #[must_use]
    pub fn new(
        variant: ShipmentVariant,
        client_company_id: i64,
        software_engineer_id: Option<i64>,
        laptop_count: u32,
        ticket_key: TicketKey,
        now: OffsetDateTime,
    ) -> Self {
        let initial: ShipmentStage = variant.initial_stage();
        let mut milestones: Milestones = Milestones::default();
        if let Some(slot) = milestones.slot_mut(initial) {
            *slot = Some(now);
        }

        Self {
            shipment_id: None,
            variant,
            stage: initial,
            client_company_id,
            software_engineer_id,
            laptop_count,
            ticket_key,
            tracking_number: None,
            notes: None,
            milestones,
            eta_to_engineer: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches the database identifier.
    #[must_use]
    pub fn with_id(mut self, shipment_id: i64) -> Self {
        self.shipment_id = Some(shipment_id);
        self
    }

    /// Returns the database identifier if persisted.
    #[must_use]
    pub const fn shipment_id(&self) -> Option<i64> {
        self.shipment_id
    }

    /// Returns true once the shipment has reached its variant's last stage.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stage == self.variant.terminal_stage()
    }

    /// Checks the stored stage and milestones against the variant's path.
    ///
    /// # Errors
    ///
    /// Returns an error if the stage is off the variant's path, or if a
    /// milestone stage before the current one has no timestamp.
    pub fn check_integrity(&self) -> Result<(), DomainError> {
        let Some(position) = self.variant.position_of(self.stage) else {
            return Err(DomainError::StageNotInVariant {
                variant: self.variant,
                stage: self.stage,
            });
        };

        if let Some(stage) = self.variant.stages()[..position]
            .iter()
            .copied()
            .find(|s| Milestones::tracks(*s) && self.milestones.get(*s).is_none())
        {
            return Err(DomainError::MissingMilestone { stage });
        }

        Ok(())
    }
}

/// Input for creating a shipment, as received from a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShipment {
    pub variant: ShipmentVariant,
    pub client_company_id: Option<i64>,
    pub software_engineer_id: Option<i64>,
    pub laptop_count: u32,
    pub ticket_key: String,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
}
