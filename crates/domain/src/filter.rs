// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dataset::HolidayDataset;
use crate::types::{FilteredEvents, JurisdictionKey};

/// Selects the events of a jurisdiction that fall in a given year.
///
/// Matching events keep their dataset order. No sorting happens here.
///
/// # Arguments
///
/// * `dataset` - The normalized dataset
/// * `jurisdiction` - The jurisdiction to read
/// * `year` - The calendar year to match
///
/// # Returns
///
/// The matching events. Empty when the jurisdiction is absent from the
/// dataset or when no event falls in `year`.
#[must_use]
pub fn filter(
    dataset: &HolidayDataset,
    jurisdiction: JurisdictionKey,
    year: i32,
) -> FilteredEvents {
    dataset
        .events(jurisdiction)
        .unwrap_or_default()
        .iter()
        .filter(|event| event.year() == year)
        .cloned()
        .collect()
}
