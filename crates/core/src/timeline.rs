// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use laptop_tracker_domain::{Shipment, ShipmentStage};
use serde::Serialize;
use time::OffsetDateTime;

/// Display state of one timeline row. Exactly one applies.
///
/// The row for the shipment's own stage is `Completed` once that stage's
/// milestone is recorded, so a timeline may have no `Current` row at all.
/// [`TimelineEntry::is_current_stage`] always marks where the shipment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineState {
    /// Passed, or current with its milestone recorded.
    Completed,
    /// Current and not yet recorded (transit stages, `PendingPickup`).
    Current,
    /// Not reached yet.
    Pending,
}

/// One row of a shipment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub stage: ShipmentStage,
    pub label: &'static str,
    pub timestamp: Option<OffsetDateTime>,
    /// Expected arrival, shown on the current `InTransitToEngineer` row.
    pub expected_at: Option<OffsetDateTime>,
    pub state: TimelineState,
    /// Set on exactly one row when the stage is on the variant's path.
    pub is_current_stage: bool,
}

impl TimelineEntry {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == TimelineState::Completed
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        self.state == TimelineState::Current
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == TimelineState::Pending
    }
}

/// Builds the timeline for a shipment, one row per stage on its variant's path.
///
/// If the stored stage is off the path every row is `Pending`.
#[must_use]
pub fn project_timeline(shipment: &Shipment) -> Vec<TimelineEntry> {
    let current: Option<usize> = shipment.variant.position_of(shipment.stage);

    shipment
        .variant
        .stages()
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            let timestamp: Option<OffsetDateTime> = shipment.milestones.get(*stage);
            let state: TimelineState = match current {
                Some(c) if index < c => TimelineState::Completed,
                Some(c) if index == c && timestamp.is_some() => TimelineState::Completed,
                Some(c) if index == c => TimelineState::Current,
                _ => TimelineState::Pending,
            };
            let expected_at: Option<OffsetDateTime> = if *stage
                == ShipmentStage::InTransitToEngineer
                && state == TimelineState::Current
            {
                shipment.eta_to_engineer
            } else {
                None
            };

            TimelineEntry {
                stage: *stage,
                label: stage.label(),
                timestamp,
                expected_at,
                state,
                is_current_stage: current == Some(index),
            }
        })
        .collect()
}
