// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Every lifecycle write is conditional on the state the caller validated
//! against. A write that matches no row is reported as
//! `PersistenceError::ConcurrencyConflict` and, inside a transaction, rolls
//! back everything written before it.

pub mod laptops;
pub mod reception_reports;
pub mod shipments;
