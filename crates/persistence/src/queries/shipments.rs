// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use laptop_tracker_domain::{Shipment, ShipmentStage};
use tracing::debug;

use crate::data_models::{ShipmentRow, StageHistoryEntry, StageHistoryRow};
use crate::diesel_schema::{shipment_stage_history, shipments};
use crate::error::PersistenceError;

/// Loads a shipment by id.
///
/// # Errors
///
/// Returns `NotFound` if no shipment has this id, or a reconstruction error
/// if the stored row is inconsistent.
pub fn get_shipment(
    conn: &mut SqliteConnection,
    shipment_id: i64,
) -> Result<Shipment, PersistenceError> {
    debug!(shipment_id, "Loading shipment");

    let row: Option<ShipmentRow> = shipments::table
        .filter(shipments::shipment_id.eq(shipment_id))
        .select(ShipmentRow::as_select())
        .first(conn)
        .optional()?;

    row.ok_or_else(|| PersistenceError::NotFound(format!("Shipment {shipment_id}")))?
        .into_domain()
}

/// Lists shipments currently at `stage`, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row is inconsistent.
pub fn list_shipments_by_stage(
    conn: &mut SqliteConnection,
    stage: ShipmentStage,
) -> Result<Vec<Shipment>, PersistenceError> {
    let rows: Vec<ShipmentRow> = shipments::table
        .filter(shipments::stage.eq(stage.as_str()))
        .order(shipments::shipment_id.asc())
        .select(ShipmentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ShipmentRow::into_domain).collect()
}

/// Returns whether a shipment with this id exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn shipment_exists(
    conn: &mut SqliteConnection,
    shipment_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = shipments::table
        .filter(shipments::shipment_id.eq(shipment_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Returns the recorded stage changes of a shipment in the order they happened.
///
/// # Errors
///
/// Returns `NotFound` if the shipment does not exist.
pub fn get_shipment_history(
    conn: &mut SqliteConnection,
    shipment_id: i64,
) -> Result<Vec<StageHistoryEntry>, PersistenceError> {
    if !shipment_exists(conn, shipment_id)? {
        return Err(PersistenceError::NotFound(format!("Shipment {shipment_id}")));
    }

    let rows: Vec<StageHistoryRow> = shipment_stage_history::table
        .filter(shipment_stage_history::shipment_id.eq(shipment_id))
        .order(shipment_stage_history::history_id.asc())
        .select(StageHistoryRow::as_select())
        .load(conn)?;

    rows.into_iter().map(StageHistoryRow::into_domain).collect()
}
