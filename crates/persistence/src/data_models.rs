// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversions to and from domain values.
//!
//! Timestamps are stored as RFC 3339 text. Enumerations are stored as their
//! `as_str` form and re-parsed on load; a value that no longer parses is a
//! `ReconstructionError`, never a silent default.

use diesel::prelude::*;
use laptop_tracker_domain::{
    Approval, Laptop, LaptopStatus, Milestones, ReceptionPhotos, ReceptionReport, ReportStatus,
    Shipment, ShipmentStage, ShipmentVariant, TicketKey,
};
use num_traits::ToPrimitive;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{laptops, reception_reports, shipment_stage_history, shipments};
use crate::error::PersistenceError;

// ============================================================================
// Timestamps
// ============================================================================

/// Formats a timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be represented in RFC 3339.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Formats an optional timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be represented in RFC 3339.
pub fn format_optional_timestamp(
    value: Option<OffsetDateTime>,
) -> Result<Option<String>, PersistenceError> {
    value.map(format_timestamp).transpose()
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if the stored text is not RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| {
        PersistenceError::ReconstructionError(format!("Invalid timestamp '{value}': {e}"))
    })
}

fn parse_optional_timestamp(
    value: Option<&str>,
) -> Result<Option<OffsetDateTime>, PersistenceError> {
    value.map(parse_timestamp).transpose()
}

fn reconstruct<T, E: std::fmt::Display>(result: Result<T, E>) -> Result<T, PersistenceError> {
    result.map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

// ============================================================================
// Shipments
// ============================================================================

/// A row of the `shipments` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = shipments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShipmentRow {
    pub shipment_id: i64,
    pub variant: String,
    pub stage: String,
    pub client_company_id: i64,
    pub software_engineer_id: Option<i64>,
    pub laptop_count: i32,
    pub ticket_key: String,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub pickup_scheduled_at: Option<String>,
    pub picked_up_at: Option<String>,
    pub arrived_warehouse_at: Option<String>,
    pub released_warehouse_at: Option<String>,
    pub delivered_at: Option<String>,
    pub eta_to_engineer: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ShipmentRow {
    /// Rebuilds the domain shipment and checks it is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns an error if any column fails to parse or the stored stage and
    /// milestones contradict the variant's path.
    pub fn into_domain(self) -> Result<Shipment, PersistenceError> {
        let variant: ShipmentVariant = reconstruct(self.variant.parse())?;
        let stage: ShipmentStage = reconstruct(self.stage.parse())?;
        let ticket_key: TicketKey = reconstruct(TicketKey::parse(&self.ticket_key))?;
        let laptop_count: u32 = self.laptop_count.to_u32().ok_or_else(|| {
            PersistenceError::ReconstructionError(format!(
                "Shipment {} has a negative laptop count",
                self.shipment_id
            ))
        })?;

        let mut shipment: Shipment = Shipment::new(
            variant,
            self.client_company_id,
            self.software_engineer_id,
            laptop_count,
            ticket_key,
            parse_timestamp(&self.created_at)?,
        )
        .with_id(self.shipment_id);

        shipment.stage = stage;
        shipment.tracking_number = self.tracking_number;
        shipment.notes = self.notes;
        shipment.milestones = Milestones {
            pickup_scheduled_at: parse_optional_timestamp(self.pickup_scheduled_at.as_deref())?,
            picked_up_at: parse_optional_timestamp(self.picked_up_at.as_deref())?,
            arrived_warehouse_at: parse_optional_timestamp(self.arrived_warehouse_at.as_deref())?,
            released_warehouse_at: parse_optional_timestamp(
                self.released_warehouse_at.as_deref(),
            )?,
            delivered_at: parse_optional_timestamp(self.delivered_at.as_deref())?,
        };
        shipment.eta_to_engineer = parse_optional_timestamp(self.eta_to_engineer.as_deref())?;
        shipment.updated_at = parse_timestamp(&self.updated_at)?;

        reconstruct(shipment.check_integrity())?;
        Ok(shipment)
    }
}

/// Column values written for a shipment on insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = shipments)]
#[diesel(treat_none_as_null = true)]
pub struct ShipmentRecord {
    pub variant: String,
    pub stage: String,
    pub client_company_id: i64,
    pub software_engineer_id: Option<i64>,
    pub laptop_count: i32,
    pub ticket_key: String,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub pickup_scheduled_at: Option<String>,
    pub picked_up_at: Option<String>,
    pub arrived_warehouse_at: Option<String>,
    pub released_warehouse_at: Option<String>,
    pub delivered_at: Option<String>,
    pub eta_to_engineer: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ShipmentRecord {
    /// Builds the column values for `shipment`.
    ///
    /// # Errors
    ///
    /// Returns an error if the laptop count does not fit the column or a
    /// timestamp cannot be formatted.
    pub fn from_domain(shipment: &Shipment) -> Result<Self, PersistenceError> {
        let laptop_count: i32 = shipment.laptop_count.to_i32().ok_or_else(|| {
            PersistenceError::SerializationError(format!(
                "Laptop count {} is out of range",
                shipment.laptop_count
            ))
        })?;
        let milestones: &Milestones = &shipment.milestones;

        Ok(Self {
            variant: shipment.variant.as_str().to_string(),
            stage: shipment.stage.as_str().to_string(),
            client_company_id: shipment.client_company_id,
            software_engineer_id: shipment.software_engineer_id,
            laptop_count,
            ticket_key: shipment.ticket_key.value().to_string(),
            tracking_number: shipment.tracking_number.clone(),
            notes: shipment.notes.clone(),
            pickup_scheduled_at: format_optional_timestamp(milestones.pickup_scheduled_at)?,
            picked_up_at: format_optional_timestamp(milestones.picked_up_at)?,
            arrived_warehouse_at: format_optional_timestamp(milestones.arrived_warehouse_at)?,
            released_warehouse_at: format_optional_timestamp(milestones.released_warehouse_at)?,
            delivered_at: format_optional_timestamp(milestones.delivered_at)?,
            eta_to_engineer: format_optional_timestamp(shipment.eta_to_engineer)?,
            created_at: format_timestamp(shipment.created_at)?,
            updated_at: format_timestamp(shipment.updated_at)?,
        })
    }
}

/// The columns a save may change on a stored shipment.
///
/// Lifecycle columns (variant, stage, milestones, ETA, creation time) are
/// left out; only stage transitions write those.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = shipments)]
#[diesel(treat_none_as_null = true)]
pub struct ShipmentEdit {
    pub client_company_id: i64,
    pub software_engineer_id: Option<i64>,
    pub laptop_count: i32,
    pub ticket_key: String,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub updated_at: String,
}

impl ShipmentEdit {
    /// Picks the editable column values out of `shipment`, stamped `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the laptop count does not fit the column or the
    /// timestamp cannot be formatted.
    pub fn from_domain(shipment: &Shipment, now: OffsetDateTime) -> Result<Self, PersistenceError> {
        let laptop_count: i32 = shipment.laptop_count.to_i32().ok_or_else(|| {
            PersistenceError::SerializationError(format!(
                "Laptop count {} is out of range",
                shipment.laptop_count
            ))
        })?;

        Ok(Self {
            client_company_id: shipment.client_company_id,
            software_engineer_id: shipment.software_engineer_id,
            laptop_count,
            ticket_key: shipment.ticket_key.value().to_string(),
            tracking_number: shipment.tracking_number.clone(),
            notes: shipment.notes.clone(),
            updated_at: format_timestamp(now)?,
        })
    }
}

// ============================================================================
// Stage History
// ============================================================================

/// A row of the `shipment_stage_history` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = shipment_stage_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StageHistoryRow {
    pub history_id: i64,
    pub shipment_id: i64,
    pub previous_stage: String,
    pub new_stage: String,
    pub transitioned_at: String,
}

/// One recorded stage change of a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageHistoryEntry {
    pub history_id: i64,
    pub shipment_id: i64,
    pub previous_stage: ShipmentStage,
    pub new_stage: ShipmentStage,
    pub transitioned_at: OffsetDateTime,
}

impl StageHistoryRow {
    /// Converts the row to a history entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a stage or the timestamp fails to parse.
    pub fn into_domain(self) -> Result<StageHistoryEntry, PersistenceError> {
        Ok(StageHistoryEntry {
            history_id: self.history_id,
            shipment_id: self.shipment_id,
            previous_stage: reconstruct(self.previous_stage.parse())?,
            new_stage: reconstruct(self.new_stage.parse())?,
            transitioned_at: parse_timestamp(&self.transitioned_at)?,
        })
    }
}

// ============================================================================
// Laptops
// ============================================================================

/// A row of the `laptops` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = laptops)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LaptopRow {
    pub laptop_id: i64,
    pub serial_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub client_company_id: Option<i64>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl LaptopRow {
    /// Converts the row to a domain laptop.
    ///
    /// # Errors
    ///
    /// Returns an error if the status or a timestamp fails to parse.
    pub fn into_domain(self) -> Result<Laptop, PersistenceError> {
        let status: LaptopStatus = reconstruct(self.status.parse())?;
        let mut laptop: Laptop = Laptop::new(
            &self.serial_number,
            status,
            parse_timestamp(&self.created_at)?,
        )
        .with_id(self.laptop_id);
        laptop.brand = self.brand;
        laptop.model = self.model;
        laptop.client_company_id = self.client_company_id;
        laptop.updated_at = parse_timestamp(&self.updated_at)?;
        Ok(laptop)
    }
}

/// Column values written for a new laptop.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = laptops)]
pub struct NewLaptopRecord {
    pub serial_number: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub client_company_id: Option<i64>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl NewLaptopRecord {
    /// Builds the column values for `laptop`.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be formatted.
    pub fn from_domain(laptop: &Laptop) -> Result<Self, PersistenceError> {
        Ok(Self {
            serial_number: laptop.serial_number.clone(),
            brand: laptop.brand.clone(),
            model: laptop.model.clone(),
            client_company_id: laptop.client_company_id,
            status: laptop.status.as_str().to_string(),
            created_at: format_timestamp(laptop.created_at)?,
            updated_at: format_timestamp(laptop.updated_at)?,
        })
    }
}

// ============================================================================
// Reception Reports
// ============================================================================

/// A row of the `reception_reports` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reception_reports)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReceptionReportRow {
    pub report_id: i64,
    pub laptop_id: i64,
    pub status: String,
    pub photo_serial_number: String,
    pub photo_external_condition: String,
    pub photo_working_condition: String,
    pub notes: Option<String>,
    pub received_at: String,
    pub approved_by: Option<i64>,
    pub approved_at: Option<String>,
}

impl ReceptionReportRow {
    /// Converts the row to a domain report.
    ///
    /// # Errors
    ///
    /// Returns an error if a column fails to parse, or if the approval
    /// columns disagree with the status.
    pub fn into_domain(self) -> Result<ReceptionReport, PersistenceError> {
        let status: ReportStatus = reconstruct(self.status.parse())?;
        let photos = ReceptionPhotos {
            serial_number: self.photo_serial_number,
            external_condition: self.photo_external_condition,
            working_condition: self.photo_working_condition,
        };

        let approval: Option<Approval> = match (status, self.approved_by, self.approved_at) {
            (ReportStatus::Approved, Some(approved_by), Some(approved_at)) => Some(Approval {
                approved_by,
                approved_at: parse_timestamp(&approved_at)?,
            }),
            (ReportStatus::PendingApproval, None, None) => None,
            _ => {
                return Err(PersistenceError::ReconstructionError(format!(
                    "Reception report {} has approval columns inconsistent with status {status}",
                    self.report_id
                )));
            }
        };

        let mut report: ReceptionReport = reconstruct(ReceptionReport::new(
            self.laptop_id,
            photos,
            self.notes,
            parse_timestamp(&self.received_at)?,
        ))?
        .with_id(self.report_id);
        report.status = status;
        report.approval = approval;
        Ok(report)
    }
}

/// Column values written for a new reception report.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reception_reports)]
pub struct NewReceptionReportRecord {
    pub laptop_id: i64,
    pub status: String,
    pub photo_serial_number: String,
    pub photo_external_condition: String,
    pub photo_working_condition: String,
    pub notes: Option<String>,
    pub received_at: String,
}

impl NewReceptionReportRecord {
    /// Builds the column values for a pending `report`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn from_domain(report: &ReceptionReport) -> Result<Self, PersistenceError> {
        Ok(Self {
            laptop_id: report.laptop_id,
            status: report.status.as_str().to_string(),
            photo_serial_number: report.photos.serial_number.clone(),
            photo_external_condition: report.photos.external_condition.clone(),
            photo_working_condition: report.photos.working_condition.clone(),
            notes: report.notes.clone(),
            received_at: format_timestamp(report.received_at)?,
        })
    }
}
