// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use laptop_tracker_domain::{Laptop, LaptopStatus};
use time::OffsetDateTime;

/// Validates and applies an administrative status change to a laptop.
///
/// `Available` is never accepted here; see [`crate::approve_reception`].
///
/// # Errors
///
/// Returns an error if:
/// - `target` is `Available`
/// - The laptop lifecycle does not permit the change
pub fn transition_laptop(
    laptop: &Laptop,
    target: LaptopStatus,
    now: OffsetDateTime,
) -> Result<Laptop, CoreError> {
    if target == LaptopStatus::Available {
        return Err(CoreError::AvailabilityRequiresApproval {
            laptop_id: laptop.laptop_id(),
        });
    }

    if !laptop.status.can_transition_to(target) {
        return Err(CoreError::InvalidLaptopTransition {
            from: laptop.status,
            to: target,
        });
    }

    let mut next: Laptop = laptop.clone();
    next.status = target;
    next.updated_at = now;
    Ok(next)
}
