// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use laptop_tracker::transition_laptop;
use laptop_tracker_domain::{Laptop, LaptopStatus, NewLaptop, validate_new_laptop};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::backend::get_last_insert_rowid;
use crate::data_models::{NewLaptopRecord, format_timestamp};
use crate::diesel_schema::laptops;
use crate::error::PersistenceError;
use crate::queries::laptops::get_laptop;

/// Validates and stores a new laptop.
///
/// # Errors
///
/// Returns `Validation` for an empty serial number or an `Available`
/// starting status, and `UniqueViolation` for a duplicate serial number.
pub fn insert_laptop(
    conn: &mut SqliteConnection,
    request: &NewLaptop,
    now: OffsetDateTime,
) -> Result<Laptop, PersistenceError> {
    let laptop: Laptop = validate_new_laptop(request, now)?;
    let record: NewLaptopRecord = NewLaptopRecord::from_domain(&laptop)?;

    diesel::insert_into(laptops::table)
        .values(&record)
        .execute(conn)?;
    let laptop_id: i64 = get_last_insert_rowid(conn)?;

    info!(
        laptop_id,
        serial_number = %laptop.serial_number,
        status = %laptop.status,
        "Laptop created"
    );

    Ok(laptop.with_id(laptop_id))
}

/// Writes a status change that the laptop lifecycle already accepted.
///
/// The update only matches while the stored status is still `expected`.
///
/// # Errors
///
/// Returns `ConcurrencyConflict` if the stored status differs.
pub fn write_laptop_status(
    conn: &mut SqliteConnection,
    laptop_id: i64,
    expected: LaptopStatus,
    target: LaptopStatus,
    now: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let rows: usize = diesel::update(laptops::table)
        .filter(laptops::laptop_id.eq(laptop_id))
        .filter(laptops::status.eq(expected.as_str()))
        .set((
            laptops::status.eq(target.as_str()),
            laptops::updated_at.eq(format_timestamp(now)?),
        ))
        .execute(conn)?;

    if rows == 0 {
        warn!(laptop_id, %expected, %target, "Laptop status changed underneath");
        return Err(PersistenceError::ConcurrencyConflict {
            entity: "laptop",
            id: laptop_id,
            detail: format!("expected status {expected}"),
        });
    }

    Ok(())
}

/// Moves a laptop to `target` through the lifecycle rules.
///
/// `Available` is refused; only report approval can set it.
///
/// # Errors
///
/// Returns `NotFound`, `Rejected` for a change the lifecycle forbids, or
/// `ConcurrencyConflict`.
pub fn change_laptop_status(
    conn: &mut SqliteConnection,
    laptop_id: i64,
    target: LaptopStatus,
    now: OffsetDateTime,
) -> Result<Laptop, PersistenceError> {
    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let current: Laptop = get_laptop(conn, laptop_id)?;
        let next: Laptop = transition_laptop(&current, target, now)?;
        write_laptop_status(conn, laptop_id, current.status, next.status, now)?;

        info!(laptop_id, from = %current.status, to = %next.status, "Laptop status changed");
        Ok(next)
    })
}
