// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use laptop_tracker_domain::{ReceptionReport, ReportStatus};

use crate::data_models::ReceptionReportRow;
use crate::diesel_schema::reception_reports;
use crate::error::PersistenceError;

/// Loads a reception report by id.
///
/// # Errors
///
/// Returns `NotFound` if no report has this id.
pub fn get_reception_report(
    conn: &mut SqliteConnection,
    report_id: i64,
) -> Result<ReceptionReport, PersistenceError> {
    let row: Option<ReceptionReportRow> = reception_reports::table
        .filter(reception_reports::report_id.eq(report_id))
        .select(ReceptionReportRow::as_select())
        .first(conn)
        .optional()?;

    row.ok_or_else(|| PersistenceError::NotFound(format!("Reception report {report_id}")))?
        .into_domain()
}

/// Loads the reception report for a laptop, if one has been filed.
///
/// # Errors
///
/// Returns an error if the query fails or the row is inconsistent.
pub fn find_reception_report_for_laptop(
    conn: &mut SqliteConnection,
    laptop_id: i64,
) -> Result<Option<ReceptionReport>, PersistenceError> {
    reception_reports::table
        .filter(reception_reports::laptop_id.eq(laptop_id))
        .select(ReceptionReportRow::as_select())
        .first::<ReceptionReportRow>(conn)
        .optional()?
        .map(ReceptionReportRow::into_domain)
        .transpose()
}

/// Lists reports still awaiting approval, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row is inconsistent.
pub fn list_pending_reception_reports(
    conn: &mut SqliteConnection,
) -> Result<Vec<ReceptionReport>, PersistenceError> {
    let rows: Vec<ReceptionReportRow> = reception_reports::table
        .filter(reception_reports::status.eq(ReportStatus::PendingApproval.as_str()))
        .order(reception_reports::report_id.asc())
        .select(ReceptionReportRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(ReceptionReportRow::into_domain)
        .collect()
}
