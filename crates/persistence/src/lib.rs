// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the laptop tracker.
//!
//! Stores shipments, their stage history, laptops and reception reports in
//! `SQLite` through Diesel. Migrations are embedded and applied when a
//! connection is opened.
//!
//! ## Write Guarantees
//!
//! Lifecycle writes are conditional on the state the caller validated
//! against:
//! - a stage change only lands while the stored stage is the one it left
//! - a laptop status change only lands while the stored status is unchanged
//! - approval only lands while the report is pending and the laptop is at
//!   the warehouse, and writes both rows in one transaction
//!
//! A write that matches nothing fails with
//! [`PersistenceError::ConcurrencyConflict`]. Nothing is retried.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] gives every caller its own shared-cache
//! in-memory database.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use laptop_tracker::{ApprovalResult, ShipmentTransition, TimelineEntry, project_timeline};
use laptop_tracker_domain::{
    Laptop, LaptopStatus, NewLaptop, NewShipment, ReceptionPhotos, ReceptionReport, Shipment,
    ShipmentStage, TicketExistenceCheck,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::StageHistoryEntry;
pub use error::PersistenceError;

/// Source of unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_tracker_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Shipments
    // ========================================================================

    /// Validates and stores a new shipment.
    ///
    /// `ticket_check` confirms the ticket exists in the external tracker;
    /// `None` checks the key's format only.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the request is rejected.
    pub fn create_shipment(
        &mut self,
        request: &NewShipment,
        ticket_check: Option<TicketExistenceCheck<'_>>,
    ) -> Result<Shipment, PersistenceError> {
        mutations::shipments::insert_shipment(
            &mut self.conn,
            request,
            ticket_check,
            OffsetDateTime::now_utc(),
        )
    }

    /// Loads a shipment by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_shipment(&mut self, shipment_id: i64) -> Result<Shipment, PersistenceError> {
        queries::shipments::get_shipment(&mut self.conn, shipment_id)
    }

    /// Stores edits to a shipment's non-lifecycle fields.
    ///
    /// Stage, milestones, ETA and creation time are never written here; the
    /// returned shipment is the stored row after the edit.
    ///
    /// # Errors
    ///
    /// Returns `ConcurrencyConflict` if the stored variant or stage differ
    /// from the shipment's.
    pub fn save_shipment(&mut self, shipment: &Shipment) -> Result<Shipment, PersistenceError> {
        mutations::shipments::save_shipment(&mut self.conn, shipment, OffsetDateTime::now_utc())
    }

    /// Moves a shipment to `new_stage`, which must be its next stage.
    ///
    /// `eta` is kept only when entering `InTransitToEngineer`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Validation`, `Rejected` or `ConcurrencyConflict`.
    pub fn advance_shipment(
        &mut self,
        shipment_id: i64,
        new_stage: ShipmentStage,
        eta: Option<OffsetDateTime>,
    ) -> Result<ShipmentTransition, PersistenceError> {
        self.advance_shipment_at(shipment_id, new_stage, eta, OffsetDateTime::now_utc())
    }

    /// [`Self::advance_shipment`] with an explicit clock.
    ///
    /// # Errors
    ///
    /// See [`Self::advance_shipment`].
    pub fn advance_shipment_at(
        &mut self,
        shipment_id: i64,
        new_stage: ShipmentStage,
        eta: Option<OffsetDateTime>,
        now: OffsetDateTime,
    ) -> Result<ShipmentTransition, PersistenceError> {
        mutations::shipments::advance_shipment(&mut self.conn, shipment_id, new_stage, eta, now)
    }

    /// Stores a transition the caller computed from its own snapshot.
    ///
    /// The change is re-applied to the stored shipment; the returned
    /// transition is what was written.
    ///
    /// # Errors
    ///
    /// Returns `ConcurrencyConflict` if the stored stage is no longer the one
    /// the transition left, or `Rejected` if the stored shipment cannot make
    /// the change.
    pub fn persist_shipment_transition(
        &mut self,
        transition: &ShipmentTransition,
    ) -> Result<ShipmentTransition, PersistenceError> {
        mutations::shipments::persist_shipment_transition(&mut self.conn, transition)
    }

    /// Lists shipments currently at `stage`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_shipments_by_stage(
        &mut self,
        stage: ShipmentStage,
    ) -> Result<Vec<Shipment>, PersistenceError> {
        queries::shipments::list_shipments_by_stage(&mut self.conn, stage)
    }

    /// Returns a shipment's stage changes in order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the shipment does not exist.
    pub fn get_shipment_history(
        &mut self,
        shipment_id: i64,
    ) -> Result<Vec<StageHistoryEntry>, PersistenceError> {
        queries::shipments::get_shipment_history(&mut self.conn, shipment_id)
    }

    /// Loads a shipment and projects its timeline.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the shipment does not exist.
    pub fn get_shipment_timeline(
        &mut self,
        shipment_id: i64,
    ) -> Result<Vec<TimelineEntry>, PersistenceError> {
        let shipment: Shipment = self.get_shipment(shipment_id)?;
        Ok(project_timeline(&shipment))
    }

    // ========================================================================
    // Laptops
    // ========================================================================

    /// Validates and stores a new laptop.
    ///
    /// # Errors
    ///
    /// Returns `Validation` or `UniqueViolation` for a duplicate serial.
    pub fn create_laptop(&mut self, request: &NewLaptop) -> Result<Laptop, PersistenceError> {
        mutations::laptops::insert_laptop(&mut self.conn, request, OffsetDateTime::now_utc())
    }

    /// Loads a laptop by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_laptop(&mut self, laptop_id: i64) -> Result<Laptop, PersistenceError> {
        queries::laptops::get_laptop(&mut self.conn, laptop_id)
    }

    /// Loads a laptop by serial number.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_laptop_by_serial(&mut self, serial_number: &str) -> Result<Laptop, PersistenceError> {
        queries::laptops::get_laptop_by_serial(&mut self.conn, serial_number)
    }

    /// Changes a laptop's status. `Available` is refused.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Rejected` or `ConcurrencyConflict`.
    pub fn change_laptop_status(
        &mut self,
        laptop_id: i64,
        target: LaptopStatus,
    ) -> Result<Laptop, PersistenceError> {
        mutations::laptops::change_laptop_status(
            &mut self.conn,
            laptop_id,
            target,
            OffsetDateTime::now_utc(),
        )
    }

    // ========================================================================
    // Reception Reports
    // ========================================================================

    /// Files a pending reception report for a laptop at the warehouse.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Rejected`, `Validation` or `UniqueViolation`.
    pub fn create_reception_report(
        &mut self,
        laptop_id: i64,
        photos: ReceptionPhotos,
        notes: Option<String>,
    ) -> Result<ReceptionReport, PersistenceError> {
        mutations::reception_reports::insert_reception_report(
            &mut self.conn,
            laptop_id,
            photos,
            notes,
            OffsetDateTime::now_utc(),
        )
    }

    /// Loads a reception report by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if it does not exist.
    pub fn get_reception_report(
        &mut self,
        report_id: i64,
    ) -> Result<ReceptionReport, PersistenceError> {
        queries::reception_reports::get_reception_report(&mut self.conn, report_id)
    }

    /// Loads the reception report filed for a laptop.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the laptop has no report.
    pub fn get_reception_report_for_laptop(
        &mut self,
        laptop_id: i64,
    ) -> Result<ReceptionReport, PersistenceError> {
        queries::reception_reports::find_reception_report_for_laptop(&mut self.conn, laptop_id)?
            .ok_or_else(|| {
                PersistenceError::NotFound(format!("Reception report for laptop {laptop_id}"))
            })
    }

    /// Lists reports awaiting approval.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_pending_reception_reports(
        &mut self,
    ) -> Result<Vec<ReceptionReport>, PersistenceError> {
        queries::reception_reports::list_pending_reception_reports(&mut self.conn)
    }

    /// Approves a reception report and makes its laptop available, atomically.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Rejected` for an already approved report, or
    /// `ConcurrencyConflict` if the laptop is not at the warehouse.
    pub fn approve_reception_report(
        &mut self,
        report_id: i64,
        approved_by: i64,
    ) -> Result<ApprovalResult, PersistenceError> {
        mutations::reception_reports::approve_reception_report(
            &mut self.conn,
            report_id,
            approved_by,
            OffsetDateTime::now_utc(),
        )
    }
}
