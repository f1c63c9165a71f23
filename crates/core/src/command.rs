// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::session::FetchTicket;
use bank_holidays_domain::{HolidayDataset, JurisdictionKey};
use std::sync::Arc;

/// A command represents user or loader intent as data only.
///
/// Commands are the only way to request session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a jurisdiction.
    SelectJurisdiction(JurisdictionKey),
    /// Select a year. Any value is accepted.
    SelectYear(i32),
    /// A fetch completed and its document normalized successfully.
    DatasetLoaded {
        /// The ticket issued when the fetch started.
        ticket: FetchTicket,
        /// The new dataset, replacing any previous one wholesale.
        dataset: Arc<HolidayDataset>,
    },
    /// A fetch or its normalization failed.
    LoadFailed {
        /// The ticket issued when the fetch started.
        ticket: FetchTicket,
        /// Human-readable failure description.
        reason: String,
    },
}
