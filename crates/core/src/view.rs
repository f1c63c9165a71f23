// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derivation of the displayed holiday list from a session snapshot.
//!
//! Views are recomputed on every request. Nothing here is cached, since
//! "today" moves independently of the session.

use crate::session::{FeedStatus, Session};
use bank_holidays_domain::{
    FilteredEvents, HolidayDataset, HolidayEvent, SelectionState, YearSet, filter, locate_upcoming,
    years,
};
use time::Date;

/// Everything the presentation layer needs to render the holiday list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayView {
    /// The selection the view was derived for.
    pub selection: SelectionState,
    /// The feed status at derivation time.
    pub status: FeedStatus,
    /// Selectable years, strictly descending.
    pub years: YearSet,
    /// Events for the selected jurisdiction and year, in dataset order.
    pub events: FilteredEvents,
    /// Index into `events` of the next upcoming holiday.
    pub upcoming: Option<usize>,
    /// The feed's division label for the selected jurisdiction.
    pub division: Option<String>,
    /// Reason the latest fetch failed, if it did.
    pub last_failure: Option<String>,
}

impl HolidayView {
    /// Returns the upcoming event, if any.
    #[must_use]
    pub fn upcoming_event(&self) -> Option<&HolidayEvent> {
        self.upcoming.and_then(|index| self.events.get(index))
    }
}

/// Derives the view for the session's own selection.
#[must_use]
pub fn derive_view(session: &Session, today: Date) -> HolidayView {
    derive_view_for(session, session.selection(), today)
}

/// Derives the view for an explicit selection, leaving the session untouched.
///
/// With no dataset loaded, years and events are empty and there is no
/// upcoming event. The `status` field tells that case apart from a year
/// without holidays.
#[must_use]
pub fn derive_view_for(session: &Session, selection: SelectionState, today: Date) -> HolidayView {
    let (year_set, events, division): (YearSet, FilteredEvents, Option<String>) =
        session.dataset().map_or_else(
            || (Vec::new(), Vec::new(), None),
            |dataset: &HolidayDataset| {
                (
                    years(dataset),
                    filter(dataset, selection.jurisdiction(), selection.year()),
                    dataset
                        .division(selection.jurisdiction())
                        .map(ToString::to_string),
                )
            },
        );

    let upcoming: Option<usize> = locate_upcoming(&events, selection.year(), today);

    HolidayView {
        selection,
        status: session.status(),
        years: year_set,
        events,
        upcoming,
        division,
        last_failure: session.last_failure().map(ToString::to_string),
    }
}
