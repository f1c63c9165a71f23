// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dataset::HolidayDataset;
use crate::types::{HolidayEvent, JurisdictionKey, YearSet};
use std::collections::BTreeSet;

/// Derives the selectable years from the reference jurisdiction.
///
/// Years always come from `JurisdictionKey::REFERENCE`, regardless of which
/// jurisdiction the user has selected, so the year list does not change when
/// switching jurisdiction.
///
/// # Arguments
///
/// * `dataset` - The normalized dataset
///
/// # Returns
///
/// The distinct years of the reference jurisdiction's events, strictly
/// descending. Empty if the reference jurisdiction is absent or has no events.
#[must_use]
pub fn years(dataset: &HolidayDataset) -> YearSet {
    let Some(events) = dataset.events(JurisdictionKey::REFERENCE) else {
        return Vec::new();
    };

    let distinct: BTreeSet<i32> = events.iter().map(HolidayEvent::year).collect();
    distinct.into_iter().rev().collect()
}
