// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use laptop_tracker::{ShipmentTransition, transition_shipment_at};
use laptop_tracker_domain::{
    NewShipment, Shipment, ShipmentStage, TicketExistenceCheck, validate_new_shipment,
    validate_shipment_assignment,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::backend::get_last_insert_rowid;
use crate::data_models::{ShipmentEdit, ShipmentRecord, format_timestamp};
use crate::diesel_schema::{shipment_stage_history, shipments};
use crate::error::PersistenceError;
use crate::queries::shipments::{get_shipment, shipment_exists};

/// Validates and stores a new shipment at its variant's first stage.
///
/// # Errors
///
/// Returns `Validation` if the request is malformed or the ticket check
/// rejects the key; otherwise any database error.
pub fn insert_shipment(
    conn: &mut SqliteConnection,
    request: &NewShipment,
    ticket_check: Option<TicketExistenceCheck<'_>>,
    now: OffsetDateTime,
) -> Result<Shipment, PersistenceError> {
    let shipment: Shipment = validate_new_shipment(request, ticket_check, now)?;
    let record: ShipmentRecord = ShipmentRecord::from_domain(&shipment)?;

    diesel::insert_into(shipments::table)
        .values(&record)
        .execute(conn)?;
    let shipment_id: i64 = get_last_insert_rowid(conn)?;

    info!(
        shipment_id,
        variant = %shipment.variant,
        stage = %shipment.stage,
        ticket_key = %shipment.ticket_key,
        "Shipment created"
    );

    Ok(shipment.with_id(shipment_id))
}

/// Writes the editable fields of a stored shipment.
///
/// Only the assignment, laptop count, ticket key, tracking number and notes
/// are written. Stage, milestones, ETA and creation time keep their stored
/// values whatever `shipment` carries. The write only matches while the
/// stored variant and stage equal the shipment's.
///
/// # Errors
///
/// Returns an error if:
/// - The shipment has never been stored, or no longer exists
/// - Its assignment is inconsistent (`Validation`)
/// - The stored variant or stage differ (`ConcurrencyConflict`)
pub fn save_shipment(
    conn: &mut SqliteConnection,
    shipment: &Shipment,
    now: OffsetDateTime,
) -> Result<Shipment, PersistenceError> {
    let shipment_id: i64 = shipment
        .shipment_id()
        .ok_or_else(|| PersistenceError::NotFound(String::from("Shipment was never stored")))?;

    validate_shipment_assignment(shipment)?;
    let edit: ShipmentEdit = ShipmentEdit::from_domain(shipment, now)?;

    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let rows: usize = diesel::update(shipments::table)
            .filter(shipments::shipment_id.eq(shipment_id))
            .filter(shipments::variant.eq(shipment.variant.as_str()))
            .filter(shipments::stage.eq(shipment.stage.as_str()))
            .set(&edit)
            .execute(conn)?;

        if rows == 0 {
            if !shipment_exists(conn, shipment_id)? {
                return Err(PersistenceError::NotFound(format!("Shipment {shipment_id}")));
            }
            warn!(shipment_id, "Shipment save did not match the stored stage");
            return Err(PersistenceError::ConcurrencyConflict {
                entity: "shipment",
                id: shipment_id,
                detail: format!(
                    "expected a {} shipment at stage {}",
                    shipment.variant, shipment.stage
                ),
            });
        }

        debug!(shipment_id, "Shipment saved");
        get_shipment(conn, shipment_id)
    })
}

/// Writes a transition already validated against the stored row.
///
/// The update only matches while the stored stage is still
/// `transition.previous_stage()`.
fn write_shipment_transition(
    conn: &mut SqliteConnection,
    transition: &ShipmentTransition,
) -> Result<(), PersistenceError> {
    let shipment: &Shipment = transition.shipment();
    let previous_stage: ShipmentStage = transition.previous_stage();
    let shipment_id: i64 = shipment
        .shipment_id()
        .ok_or_else(|| PersistenceError::NotFound(String::from("Shipment was never stored")))?;
    let record: ShipmentRecord = ShipmentRecord::from_domain(shipment)?;

    let rows: usize = diesel::update(shipments::table)
        .filter(shipments::shipment_id.eq(shipment_id))
        .filter(shipments::stage.eq(previous_stage.as_str()))
        .set(&record)
        .execute(conn)?;

    if rows == 0 {
        if !shipment_exists(conn, shipment_id)? {
            return Err(PersistenceError::NotFound(format!("Shipment {shipment_id}")));
        }
        return Err(stage_conflict(shipment_id, previous_stage));
    }

    diesel::insert_into(shipment_stage_history::table)
        .values((
            shipment_stage_history::shipment_id.eq(shipment_id),
            shipment_stage_history::previous_stage.eq(previous_stage.as_str()),
            shipment_stage_history::new_stage.eq(shipment.stage.as_str()),
            shipment_stage_history::transitioned_at.eq(format_timestamp(shipment.updated_at)?),
        ))
        .execute(conn)?;

    info!(
        shipment_id,
        from = %previous_stage,
        to = %shipment.stage,
        "Shipment stage changed"
    );
    Ok(())
}

fn stage_conflict(shipment_id: i64, expected_stage: ShipmentStage) -> PersistenceError {
    warn!(
        shipment_id,
        expected_stage = %expected_stage,
        "Shipment stage changed before the transition was written"
    );
    PersistenceError::ConcurrencyConflict {
        entity: "shipment",
        id: shipment_id,
        detail: format!("expected stage {expected_stage}"),
    }
}

/// Stores a transition the caller computed from its own snapshot.
///
/// Only the target stage, ETA and clock are taken from `transition`. The
/// stored shipment is re-loaded and the change is re-applied to it, so a
/// snapshot carrying edited milestones, stage or assignment cannot reach
/// the table.
///
/// # Errors
///
/// Returns an error if:
/// - The shipment does not exist (`NotFound`)
/// - The stored stage is not the one the transition left (`ConcurrencyConflict`)
/// - The stored shipment cannot make the change (`Rejected` or `Validation`)
pub fn persist_shipment_transition(
    conn: &mut SqliteConnection,
    transition: &ShipmentTransition,
) -> Result<ShipmentTransition, PersistenceError> {
    let requested: &Shipment = transition.shipment();
    let shipment_id: i64 = requested
        .shipment_id()
        .ok_or_else(|| PersistenceError::NotFound(String::from("Shipment was never stored")))?;

    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let stored: Shipment = get_shipment(conn, shipment_id)?;
        if stored.stage != transition.previous_stage() {
            return Err(stage_conflict(shipment_id, transition.previous_stage()));
        }

        let revalidated: ShipmentTransition = transition_shipment_at(
            &stored,
            requested.stage,
            requested.eta_to_engineer,
            requested.updated_at,
        )?;
        write_shipment_transition(conn, &revalidated)?;
        Ok(revalidated)
    })
}

/// Loads a shipment, validates the stage change and stores it, atomically.
///
/// # Errors
///
/// Returns an error if:
/// - The shipment does not exist (`NotFound`)
/// - Its assignment is inconsistent (`Validation`)
/// - `new_stage` is not its next stage (`Rejected`)
/// - The stored stage changed underneath (`ConcurrencyConflict`)
pub fn advance_shipment(
    conn: &mut SqliteConnection,
    shipment_id: i64,
    new_stage: ShipmentStage,
    eta: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> Result<ShipmentTransition, PersistenceError> {
    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let current: Shipment = get_shipment(conn, shipment_id)?;
        let transition: ShipmentTransition = transition_shipment_at(&current, new_stage, eta, now)?;
        write_shipment_transition(conn, &transition)?;
        Ok(transition)
    })
}
