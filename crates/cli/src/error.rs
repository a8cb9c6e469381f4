// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use laptop_tracker_persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced by a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The operation was refused or the database failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The result could not be written as JSON.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
