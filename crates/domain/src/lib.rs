// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday-data normalization and view derivation for UK bank holidays.
//!
//! Every operation in this crate is a pure function of its inputs:
//! - `normalize` validates the raw feed and builds a `HolidayDataset`
//! - `years` derives the selectable years
//! - `filter` selects the events for a jurisdiction and year
//! - `locate_upcoming` finds the next holiday after today

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

mod dataset;
mod error;
mod filter;
mod selection;
mod types;
mod upcoming;
mod years;

#[cfg(test)]
mod tests;

pub use dataset::{HolidayDataset, RawFeedDocument, normalize};
pub use error::{MalformedFeed, UnknownJurisdiction};
pub use filter::filter;
pub use selection::SelectionState;
pub use types::{FilteredEvents, HolidayEvent, JurisdictionKey, YearSet};
pub use upcoming::locate_upcoming;
pub use years::years;
