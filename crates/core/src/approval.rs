// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reception report approval.
//!
//! Approving a report and releasing its laptop into inventory are one
//! decision: either both happen or neither does. This is the only code path
//! that produces an `Approved` report or an `Available` laptop.

use crate::error::CoreError;
use laptop_tracker_domain::{
    Approval, Laptop, LaptopStatus, ReceptionReport, ReportStatus,
};
use serde::Serialize;
use time::OffsetDateTime;

/// The report and laptop as they are after approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalResult {
    pub report: ReceptionReport,
    pub laptop: Laptop,
}

/// Approves `report` and makes its laptop available.
///
/// # Arguments
///
/// * `report` - The report to approve
/// * `laptop` - The laptop the report is linked to, as currently stored
/// * `approved_by` - The approving user's identifier
/// * `now` - The approval time
///
/// # Errors
///
/// Returns an error if:
/// - The report is already approved
/// - The laptop is not the one the report belongs to
/// - The laptop is no longer at the warehouse
pub fn approve_reception(
    report: &ReceptionReport,
    laptop: &Laptop,
    approved_by: i64,
    now: OffsetDateTime,
) -> Result<ApprovalResult, CoreError> {
    if report.is_approved() {
        return Err(CoreError::ReportAlreadyApproved {
            report_id: report.report_id(),
        });
    }

    if laptop.laptop_id() != Some(report.laptop_id) {
        return Err(CoreError::ReportLaptopMismatch {
            report_laptop_id: report.laptop_id,
            laptop_id: laptop.laptop_id(),
        });
    }

    if laptop.status != LaptopStatus::AtWarehouse {
        return Err(CoreError::LaptopNotAtWarehouse {
            laptop_id: laptop.laptop_id(),
            status: laptop.status,
        });
    }

    let mut approved_report: ReceptionReport = report.clone();
    approved_report.status = ReportStatus::Approved;
    approved_report.approval = Some(Approval {
        approved_by,
        approved_at: now,
    });

    let mut available_laptop: Laptop = laptop.clone();
    available_laptop.status = LaptopStatus::Available;
    available_laptop.updated_at = now;

    Ok(ApprovalResult {
        report: approved_report,
        laptop: available_laptop,
    })
}
