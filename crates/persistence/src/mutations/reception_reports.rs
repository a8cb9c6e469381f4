// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reception reports and the approval transaction.
//!
//! Approval writes two rows: the report becomes approved and the laptop
//! becomes available. Both writes are conditional and run in one
//! transaction, so either both land or neither does.

use diesel::SqliteConnection;
use diesel::prelude::*;
use laptop_tracker::{ApprovalResult, CoreError, approve_reception};
use laptop_tracker_domain::{
    Laptop, LaptopStatus, ReceptionPhotos, ReceptionReport, ReportStatus,
};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::backend::get_last_insert_rowid;
use crate::data_models::{NewReceptionReportRecord, format_timestamp};
use crate::diesel_schema::reception_reports;
use crate::error::PersistenceError;
use crate::mutations::laptops::write_laptop_status;
use crate::queries::laptops::get_laptop;
use crate::queries::reception_reports::get_reception_report;

/// Files a pending reception report for a laptop at the warehouse.
///
/// # Errors
///
/// Returns an error if:
/// - The laptop does not exist (`NotFound`)
/// - The laptop is not at the warehouse (`Rejected`)
/// - A photo reference is missing (`Validation`)
/// - The laptop already has a report (`UniqueViolation`)
pub fn insert_reception_report(
    conn: &mut SqliteConnection,
    laptop_id: i64,
    photos: ReceptionPhotos,
    notes: Option<String>,
    now: OffsetDateTime,
) -> Result<ReceptionReport, PersistenceError> {
    conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let laptop: Laptop = get_laptop(conn, laptop_id)?;
        if laptop.status != LaptopStatus::AtWarehouse {
            return Err(PersistenceError::Rejected(CoreError::LaptopNotAtWarehouse {
                laptop_id: Some(laptop_id),
                status: laptop.status,
            }));
        }

        let notes: Option<String> = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let report: ReceptionReport = ReceptionReport::new(laptop_id, photos, notes, now)?;
        let record: NewReceptionReportRecord = NewReceptionReportRecord::from_domain(&report)?;

        diesel::insert_into(reception_reports::table)
            .values(&record)
            .execute(conn)?;
        let report_id: i64 = get_last_insert_rowid(conn)?;

        info!(report_id, laptop_id, "Reception report filed");
        Ok(report.with_id(report_id))
    })
}

/// Writes an approval planned from `report` and `laptop` as the caller saw them.
///
/// Must run inside a transaction. A stale snapshot is caught by the
/// conditional writes and reported as `ConcurrencyConflict`.
pub(crate) fn apply_approval(
    conn: &mut SqliteConnection,
    report: &ReceptionReport,
    laptop: &Laptop,
    approved_by: i64,
    now: OffsetDateTime,
) -> Result<ApprovalResult, PersistenceError> {
    let report_id: i64 = report
        .report_id()
        .ok_or_else(|| PersistenceError::NotFound(String::from("Reception report was never stored")))?;

    let result: ApprovalResult = match approve_reception(report, laptop, approved_by, now) {
        Ok(result) => result,
        Err(CoreError::LaptopNotAtWarehouse { laptop_id, status }) => {
            warn!(report_id, ?laptop_id, %status, "Laptop left the warehouse before approval");
            return Err(PersistenceError::ConcurrencyConflict {
                entity: "laptop",
                id: report.laptop_id,
                detail: format!("expected status {}, found {status}", LaptopStatus::AtWarehouse),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let rows: usize = diesel::update(reception_reports::table)
        .filter(reception_reports::report_id.eq(report_id))
        .filter(reception_reports::status.eq(ReportStatus::PendingApproval.as_str()))
        .set((
            reception_reports::status.eq(ReportStatus::Approved.as_str()),
            reception_reports::approved_by.eq(Some(approved_by)),
            reception_reports::approved_at.eq(Some(format_timestamp(now)?)),
        ))
        .execute(conn)?;

    if rows == 0 {
        warn!(report_id, "Reception report was approved concurrently");
        return Err(PersistenceError::ConcurrencyConflict {
            entity: "reception report",
            id: report_id,
            detail: format!("expected status {}", ReportStatus::PendingApproval),
        });
    }

    write_laptop_status(
        conn,
        report.laptop_id,
        LaptopStatus::AtWarehouse,
        LaptopStatus::Available,
        now,
    )?;

    Ok(result)
}

/// Approves a reception report and releases its laptop into inventory.
///
/// # Errors
///
/// Returns an error if:
/// - The report does not exist (`NotFound`)
/// - The report is already approved (`Rejected` with `ReportAlreadyApproved`)
/// - The laptop is not at the warehouse, or either row changed while the
///   transaction ran (`ConcurrencyConflict`); nothing is written
pub fn approve_reception_report(
    conn: &mut SqliteConnection,
    report_id: i64,
    approved_by: i64,
    now: OffsetDateTime,
) -> Result<ApprovalResult, PersistenceError> {
    let result: ApprovalResult = conn.immediate_transaction::<_, PersistenceError, _>(|conn| {
        let report: ReceptionReport = get_reception_report(conn, report_id)?;
        let laptop: Laptop = get_laptop(conn, report.laptop_id)?;
        apply_approval(conn, &report, &laptop, approved_by, now)
    })?;

    info!(
        report_id,
        laptop_id = result.report.laptop_id,
        approved_by,
        "Reception report approved; laptop available"
    );
    Ok(result)
}
