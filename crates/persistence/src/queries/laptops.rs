// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use laptop_tracker_domain::Laptop;

use crate::data_models::LaptopRow;
use crate::diesel_schema::laptops;
use crate::error::PersistenceError;

/// Loads a laptop by id.
///
/// # Errors
///
/// Returns `NotFound` if no laptop has this id.
pub fn get_laptop(conn: &mut SqliteConnection, laptop_id: i64) -> Result<Laptop, PersistenceError> {
    let row: Option<LaptopRow> = laptops::table
        .filter(laptops::laptop_id.eq(laptop_id))
        .select(LaptopRow::as_select())
        .first(conn)
        .optional()?;

    row.ok_or_else(|| PersistenceError::NotFound(format!("Laptop {laptop_id}")))?
        .into_domain()
}

/// Loads a laptop by serial number.
///
/// # Errors
///
/// Returns `NotFound` if no laptop has this serial number.
pub fn get_laptop_by_serial(
    conn: &mut SqliteConnection,
    serial_number: &str,
) -> Result<Laptop, PersistenceError> {
    let serial_number: &str = serial_number.trim();
    let row: Option<LaptopRow> = laptops::table
        .filter(laptops::serial_number.eq(serial_number))
        .select(LaptopRow::as_select())
        .first(conn)
        .optional()?;

    row.ok_or_else(|| PersistenceError::NotFound(format!("Laptop with serial {serial_number}")))?
        .into_domain()
}
