// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `shipments`: shipments and their stage history
//! - `laptops`: laptops
//! - `reception_reports`: reception reports

pub mod laptops;
pub mod reception_reports;
pub mod shipments;
