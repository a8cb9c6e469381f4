// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shipment stage progression.
//!
//! A shipment only ever moves to the single stage after its current one on
//! its variant's path. Staying put, skipping ahead and moving back are all
//! rejected.

use crate::error::CoreError;
use laptop_tracker_domain::{
    DomainError, Shipment, ShipmentStage, validate_shipment_assignment,
};
use serde::Serialize;
use time::OffsetDateTime;

/// The outcome of an accepted stage change.
///
/// Only [`transition_shipment_at`] builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentTransition {
    shipment: Shipment,
    previous_stage: ShipmentStage,
}

impl ShipmentTransition {
    /// The shipment after the change.
    #[must_use]
    pub const fn shipment(&self) -> &Shipment {
        &self.shipment
    }

    /// The stage the shipment left.
    #[must_use]
    pub const fn previous_stage(&self) -> ShipmentStage {
        self.previous_stage
    }

    /// Consumes the transition, returning the changed shipment.
    #[must_use]
    pub fn into_shipment(self) -> Shipment {
        self.shipment
    }
}

/// Returns the next stage for the shipment, or `None` at its final stage.
///
/// Also returns `None` when the current stage is not on the variant's
/// path; use [`try_next_allowed_stage`] to tell the two apart.
#[must_use]
pub fn next_allowed_stage(shipment: &Shipment) -> Option<ShipmentStage> {
    try_next_allowed_stage(shipment).ok().flatten()
}

/// Returns the next stage for the shipment.
///
/// `Ok(None)` means the shipment is at its variant's final stage.
///
/// # Errors
///
/// Returns `DomainError::StageNotInVariant` if the stored stage is not on
/// the variant's path, which indicates corrupted data.
pub fn try_next_allowed_stage(shipment: &Shipment) -> Result<Option<ShipmentStage>, CoreError> {
    let stages: &[ShipmentStage] = shipment.variant.stages();
    let position: usize = shipment
        .variant
        .position_of(shipment.stage)
        .ok_or(DomainError::StageNotInVariant {
            variant: shipment.variant,
            stage: shipment.stage,
        })?;

    Ok(stages.get(position + 1).copied())
}

/// Returns true iff `proposed` is the unique next stage for the shipment.
#[must_use]
pub fn can_transition(shipment: &Shipment, proposed: ShipmentStage) -> bool {
    shipment.variant.allows(proposed) && next_allowed_stage(shipment) == Some(proposed)
}

/// Moves the shipment into `new_stage` and stamps its milestone.
///
/// Does not check legality. Only the validating entry points call this.
pub(crate) fn apply_transition(
    shipment: &mut Shipment,
    new_stage: ShipmentStage,
    eta: Option<OffsetDateTime>,
    now: OffsetDateTime,
) {
    shipment.stage = new_stage;

    if let Some(slot) = shipment.milestones.slot_mut(new_stage) {
        *slot = Some(now);
    }

    // The ETA is the only externally supplied time.
    if new_stage == ShipmentStage::InTransitToEngineer && eta.is_some() {
        shipment.eta_to_engineer = eta;
    }

    shipment.updated_at = now;
}

/// Validates and applies a stage change using the current time.
///
/// # Errors
///
/// See [`transition_shipment_at`].
pub fn transition_shipment(
    shipment: &Shipment,
    new_stage: ShipmentStage,
    eta: Option<OffsetDateTime>,
) -> Result<ShipmentTransition, CoreError> {
    transition_shipment_at(shipment, new_stage, eta, OffsetDateTime::now_utc())
}

/// Validates and applies a stage change at `now`.
///
/// The input shipment is never modified; the changed copy is returned.
///
/// # Errors
///
/// Returns an error if:
/// - The engineer assignment or laptop count is not legal for the variant
/// - The current stage is not on the variant's path
/// - `new_stage` is not the unique next stage
pub fn transition_shipment_at(
    shipment: &Shipment,
    new_stage: ShipmentStage,
    eta: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> Result<ShipmentTransition, CoreError> {
    validate_shipment_assignment(shipment)?;

    let expected: Option<ShipmentStage> = try_next_allowed_stage(shipment)?;
    if !shipment.variant.allows(new_stage) || expected != Some(new_stage) {
        return Err(CoreError::InvalidTransition {
            variant: shipment.variant,
            from: shipment.stage,
            to: new_stage,
            expected,
        });
    }

    let mut next: Shipment = shipment.clone();
    apply_transition(&mut next, new_stage, eta, now);

    Ok(ShipmentTransition {
        shipment: next,
        previous_stage: shipment.stage,
    })
}
