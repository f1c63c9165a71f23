// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::HolidayEvent;
use time::Date;

/// Finds the next holiday after `today` within the selected year.
///
/// An upcoming holiday only exists while the selected year is the current
/// year. Dates are compared as calendar dates, so a holiday falling on
/// `today` is not upcoming.
///
/// # Arguments
///
/// * `events` - The filtered events, in display order
/// * `selected_year` - The year the events were filtered by
/// * `today` - The current calendar date
///
/// # Returns
///
/// * `Some(index)` of the first event strictly after `today`
/// * `None` if `selected_year` is not the year of `today`, or every event
///   is on or before `today`
#[must_use]
pub fn locate_upcoming(
    events: &[HolidayEvent],
    selected_year: i32,
    today: Date,
) -> Option<usize> {
    if selected_year != today.year() {
        return None;
    }
    events.iter().position(|event| event.date() > today)
}
