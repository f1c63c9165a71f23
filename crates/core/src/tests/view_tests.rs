// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{TODAY, create_loaded_session, unwrap_applied};
use crate::{Command, FeedStatus, HolidayView, Session, apply, derive_view, derive_view_for};
use bank_holidays_domain::{JurisdictionKey, SelectionState};
use time::macros::date;

#[test]
fn test_view_before_load_is_empty() {
    let view: HolidayView = derive_view(&Session::new(TODAY), TODAY);

    assert_eq!(view.status, FeedStatus::Loading);
    assert!(view.years.is_empty());
    assert!(view.events.is_empty());
    assert_eq!(view.upcoming, None);
}

#[test]
fn test_view_for_default_selection() {
    let view: HolidayView = derive_view(&create_loaded_session(), TODAY);

    assert_eq!(view.status, FeedStatus::Loaded);
    assert_eq!(view.years, vec![2024, 2023]);
    assert_eq!(view.events.len(), 3);
    assert_eq!(view.upcoming, Some(1));
    assert_eq!(
        view.upcoming_event().map(|event| event.title()),
        Some("Summer bank holiday")
    );
}

#[test]
fn test_view_follows_jurisdiction_selection_but_years_do_not() {
    let session: Session = create_loaded_session();
    let session: Session = unwrap_applied(
        apply(
            &session,
            Command::SelectJurisdiction(JurisdictionKey::Scotland),
        )
        .unwrap(),
    );

    let view: HolidayView = derive_view(&session, TODAY);
    assert_eq!(view.years, vec![2024, 2023]);
    assert_eq!(view.events.len(), 3);
    assert_eq!(view.events[1].date(), date!(2024 - 08 - 05));
    assert_eq!(view.upcoming, Some(1));
}

#[test]
fn test_view_for_past_year_has_no_upcoming() {
    let session: Session = create_loaded_session();
    let selection: SelectionState = SelectionState::new(JurisdictionKey::EnglandAndWales, 2023);

    let view: HolidayView = derive_view_for(&session, selection, TODAY);
    assert_eq!(view.events.len(), 1);
    assert_eq!(view.upcoming, None);
    // The session's own selection is not changed by an explicit view.
    assert_eq!(session.selection().year(), 2024);
}

#[test]
fn test_view_for_absent_jurisdiction_is_empty_but_loaded() {
    let session: Session = create_loaded_session();
    let selection: SelectionState = SelectionState::new(JurisdictionKey::NorthernIreland, 2024);

    let view: HolidayView = derive_view_for(&session, selection, TODAY);
    assert_eq!(view.status, FeedStatus::Loaded);
    assert!(view.events.is_empty());
    assert_eq!(view.upcoming, None);
    assert_eq!(view.division, None);
}

#[test]
fn test_view_recomputes_upcoming_for_each_today() {
    let session: Session = create_loaded_session();

    assert_eq!(derive_view(&session, date!(2024 - 01 - 01)).upcoming, Some(1));
    assert_eq!(derive_view(&session, date!(2024 - 09 - 01)).upcoming, Some(2));
    assert_eq!(derive_view(&session, date!(2024 - 12 - 25)).upcoming, None);
}
