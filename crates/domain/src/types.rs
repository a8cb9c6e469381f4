// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A key in the external ticketing system, e.g. `SCOP-1001`.
///
/// Only well-formed keys can be constructed: one or more ASCII uppercase
/// letters, a dash, one or more ASCII digits. The stored value never carries
/// surrounding whitespace, so it always matches that pattern exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketKey {
    value: String,
}

impl TicketKey {
    /// Parses and validates a ticket key.
    ///
    /// Leading and trailing whitespace is stripped before validation and is
    /// not kept: `" SCOP-1 "` yields the key `SCOP-1`. Nothing else is
    /// normalized: case is kept (`scop-1` is rejected) and inner whitespace
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketKey`, carrying the raw input, if
    /// the trimmed key is not `PROJECT-NUMBER`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        let Some((project, number)) = trimmed.split_once('-') else {
            return Err(DomainError::InvalidTicketKey(raw.to_string()));
        };

        let project_ok: bool =
            !project.is_empty() && project.chars().all(|c| c.is_ascii_uppercase());
        let number_ok: bool = !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());

        if !(project_ok && number_ok) {
            return Err(DomainError::InvalidTicketKey(raw.to_string()));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the key text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the project prefix (`SCOP` for `SCOP-1001`).
    #[must_use]
    pub fn project(&self) -> &str {
        self.value.split_once('-').map_or("", |(project, _)| project)
    }
}

impl std::fmt::Display for TicketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for TicketKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TicketKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TicketKey> for String {
    fn from(key: TicketKey) -> Self {
        key.value
    }
}

/// Checks that a ticket exists in the ticketing system.
///
/// Supplied by the ticketing collaborator. Returns a reason on failure.
pub type TicketExistenceCheck<'a> = &'a dyn Fn(&TicketKey) -> Result<(), String>;
