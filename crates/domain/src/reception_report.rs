// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Approval state of a warehouse reception report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    PendingApproval,
    Approved,
}

impl ReportStatus {
    /// Returns the persisted string form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_approval" => Ok(Self::PendingApproval),
            "approved" => Ok(Self::Approved),
            _ => Err(DomainError::InvalidReportStatus(s.to_string())),
        }
    }
}

/// The three photo references every reception report must carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceptionPhotos {
    pub serial_number: String,
    pub external_condition: String,
    pub working_condition: String,
}

impl ReceptionPhotos {
    /// Validates that all three references are present.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingPhoto` naming the first empty reference.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.serial_number.trim().is_empty() {
            return Err(DomainError::MissingPhoto("serial number"));
        }
        if self.external_condition.trim().is_empty() {
            return Err(DomainError::MissingPhoto("external condition"));
        }
        if self.working_condition.trim().is_empty() {
            return Err(DomainError::MissingPhoto("working condition"));
        }
        Ok(())
    }
}

/// Who approved a report and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub approved_by: i64,
    pub approved_at: OffsetDateTime,
}

/// Warehouse inspection record for one laptop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceptionReport {
    /// Database identifier. `None` until persisted.
    report_id: Option<i64>,
    pub laptop_id: i64,
    pub status: ReportStatus,
    pub photos: ReceptionPhotos,
    pub notes: Option<String>,
    /// Present iff `status` is `Approved`.
    pub approval: Option<Approval>,
    pub received_at: OffsetDateTime,
}

impl ReceptionReport {
    /// Creates a pending report for `laptop_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if a photo reference is missing.
    pub fn new(
        laptop_id: i64,
        photos: ReceptionPhotos,
        notes: Option<String>,
        received_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        photos.validate()?;
        Ok(Self {
            report_id: None,
            laptop_id,
            status: ReportStatus::PendingApproval,
            photos,
            notes,
            approval: None,
            received_at,
        })
    }

    /// Attaches the database identifier.
    #[must_use]
    pub fn with_id(mut self, report_id: i64) -> Self {
        self.report_id = Some(report_id);
        self
    }

    /// Returns the database identifier if persisted.
    #[must_use]
    pub const fn report_id(&self) -> Option<i64> {
        self.report_id
    }

    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == ReportStatus::Approved
    }
}
