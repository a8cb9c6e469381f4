// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod approval;
mod error;
mod laptop;
mod state_machine;
mod timeline;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use approval::{ApprovalResult, approve_reception};
pub use error::CoreError;
pub use laptop::transition_laptop;
pub use state_machine::{
    ShipmentTransition, can_transition, next_allowed_stage, transition_shipment,
    transition_shipment_at, try_next_allowed_stage,
};
pub use timeline::{TimelineEntry, TimelineState, project_timeline};
