// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use laptop_tracker_domain::{
    Approval, Laptop, LaptopStatus, ReceptionReport, ReportStatus,
};

use super::helpers::{create_test_laptop, create_test_report, later};
use crate::{ApprovalResult, CoreError, approve_reception};

#[test]
fn test_approval_marks_report_and_releases_laptop() {
    let report: ReceptionReport = create_test_report(10, 1);
    let laptop: Laptop = create_test_laptop(1, LaptopStatus::AtWarehouse);

    let result: ApprovalResult = approve_reception(&report, &laptop, 77, later(2)).unwrap();

    assert_eq!(result.report.status, ReportStatus::Approved);
    assert_eq!(
        result.report.approval,
        Some(Approval {
            approved_by: 77,
            approved_at: later(2),
        })
    );
    assert_eq!(result.laptop.status, LaptopStatus::Available);
    assert_eq!(result.laptop.updated_at, later(2));

    // Inputs are not modified.
    assert_eq!(report.status, ReportStatus::PendingApproval);
    assert_eq!(laptop.status, LaptopStatus::AtWarehouse);
}

#[test]
fn test_second_approval_fails_distinctly() {
    let report: ReceptionReport = create_test_report(10, 1);
    let laptop: Laptop = create_test_laptop(1, LaptopStatus::AtWarehouse);

    let first: ApprovalResult = approve_reception(&report, &laptop, 77, later(2)).unwrap();
    let second = approve_reception(&first.report, &first.laptop, 78, later(3));

    assert_eq!(
        second,
        Err(CoreError::ReportAlreadyApproved {
            report_id: Some(10)
        })
    );
    assert!(
        format!("{}", second.unwrap_err()).contains("already approved")
    );
}

#[test]
fn test_approval_refuses_laptop_that_left_the_warehouse() {
    let report: ReceptionReport = create_test_report(10, 1);

    for status in [
        LaptopStatus::Retired,
        LaptopStatus::InTransitToEngineer,
        LaptopStatus::InTransitToWarehouse,
        LaptopStatus::Available,
    ] {
        let laptop: Laptop = create_test_laptop(1, status);
        assert_eq!(
            approve_reception(&report, &laptop, 77, later(2)),
            Err(CoreError::LaptopNotAtWarehouse {
                laptop_id: Some(1),
                status,
            })
        );
    }
}

#[test]
fn test_approval_refuses_mismatched_laptop() {
    let report: ReceptionReport = create_test_report(10, 1);
    let laptop: Laptop = create_test_laptop(2, LaptopStatus::AtWarehouse);

    assert_eq!(
        approve_reception(&report, &laptop, 77, later(2)),
        Err(CoreError::ReportLaptopMismatch {
            report_laptop_id: 1,
            laptop_id: Some(2),
        })
    );
}
