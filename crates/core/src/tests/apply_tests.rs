// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TODAY, create_loaded_session, create_test_dataset, unwrap_applied,
};
use crate::{Command, CoreError, FeedStatus, FetchTicket, Session, Transition, apply};
use bank_holidays_domain::{HolidayDataset, JurisdictionKey};
use std::sync::Arc;

#[test]
fn test_select_jurisdiction_returns_new_session() {
    let session: Session = Session::new(TODAY);
    let next: Session = unwrap_applied(
        apply(
            &session,
            Command::SelectJurisdiction(JurisdictionKey::Scotland),
        )
        .unwrap(),
    );

    assert_eq!(next.selection().jurisdiction(), JurisdictionKey::Scotland);
    assert_eq!(next.selection().year(), 2024);
    // The input snapshot is untouched.
    assert_eq!(
        session.selection().jurisdiction(),
        JurisdictionKey::EnglandAndWales
    );
}

#[test]
fn test_select_year_overwrites_without_validation() {
    let session: Session = create_loaded_session();
    let next: Session = unwrap_applied(apply(&session, Command::SelectYear(1901)).unwrap());

    assert_eq!(next.selection().year(), 1901);
    assert_eq!(next.dataset(), session.dataset());
}

#[test]
fn test_dataset_loaded_replaces_dataset() {
    let session: Session = create_loaded_session();
    let (session, ticket): (Session, FetchTicket) = session.begin_fetch();
    let replacement: Arc<HolidayDataset> = Arc::new(HolidayDataset::default());

    let next: Session = unwrap_applied(
        apply(
            &session,
            Command::DatasetLoaded {
                ticket,
                dataset: Arc::clone(&replacement),
            },
        )
        .unwrap(),
    );

    assert_eq!(next.dataset(), Some(replacement.as_ref()));
    assert_eq!(next.status(), FeedStatus::Loaded);
}

#[test]
fn test_superseded_fetch_result_is_discarded() {
    let session: Session = Session::new(TODAY);
    let (session, first): (Session, FetchTicket) = session.begin_fetch();
    let (session, second): (Session, FetchTicket) = session.begin_fetch();

    let stale: Transition = apply(
        &session,
        Command::DatasetLoaded {
            ticket: first,
            dataset: create_test_dataset(),
        },
    )
    .unwrap();
    assert_eq!(
        stale,
        Transition::Superseded {
            ticket: first,
            latest: second,
        }
    );

    let fresh: Session = unwrap_applied(
        apply(
            &session,
            Command::DatasetLoaded {
                ticket: second,
                dataset: create_test_dataset(),
            },
        )
        .unwrap(),
    );
    assert_eq!(fresh.status(), FeedStatus::Loaded);
}

#[test]
fn test_superseded_failure_is_discarded() {
    let (session, first): (Session, FetchTicket) = create_loaded_session().begin_fetch();
    let (session, _second): (Session, FetchTicket) = session.begin_fetch();

    let result: Transition = apply(
        &session,
        Command::LoadFailed {
            ticket: first,
            reason: String::from("timed out"),
        },
    )
    .unwrap();
    assert!(matches!(result, Transition::Superseded { .. }));
}

#[test]
fn test_load_failed_before_any_data_marks_failed() {
    let (session, ticket): (Session, FetchTicket) = Session::new(TODAY).begin_fetch();
    let next: Session = unwrap_applied(
        apply(
            &session,
            Command::LoadFailed {
                ticket,
                reason: String::from("connection refused"),
            },
        )
        .unwrap(),
    );

    assert_eq!(next.status(), FeedStatus::Failed);
    assert_eq!(next.last_failure(), Some("connection refused"));
    assert!(next.dataset().is_none());
}

#[test]
fn test_failed_refetch_keeps_previous_dataset() {
    let loaded: Session = create_loaded_session();
    let (session, ticket): (Session, FetchTicket) = loaded.begin_fetch();
    let next: Session = unwrap_applied(
        apply(
            &session,
            Command::LoadFailed {
                ticket,
                reason: String::from("HTTP 503"),
            },
        )
        .unwrap(),
    );

    assert_eq!(next.status(), FeedStatus::Loaded);
    assert_eq!(next.dataset(), loaded.dataset());
    assert_eq!(next.last_failure(), Some("HTTP 503"));
}

#[test]
fn test_successful_refetch_clears_failure() {
    let (session, ticket): (Session, FetchTicket) = Session::new(TODAY).begin_fetch();
    let failed: Session = unwrap_applied(
        apply(
            &session,
            Command::LoadFailed {
                ticket,
                reason: String::from("HTTP 500"),
            },
        )
        .unwrap(),
    );

    let (session, ticket): (Session, FetchTicket) = failed.begin_fetch();
    let next: Session = unwrap_applied(
        apply(
            &session,
            Command::DatasetLoaded {
                ticket,
                dataset: create_test_dataset(),
            },
        )
        .unwrap(),
    );

    assert_eq!(next.status(), FeedStatus::Loaded);
    assert_eq!(next.last_failure(), None);
}

#[test]
fn test_unissued_ticket_is_rejected() {
    let session: Session = Session::new(TODAY);
    let (ahead, _): (Session, FetchTicket) = session.begin_fetch();
    let (_, foreign): (Session, FetchTicket) = ahead.begin_fetch();
    let (session, _): (Session, FetchTicket) = session.begin_fetch();

    let result: Result<Transition, CoreError> = apply(
        &session,
        Command::DatasetLoaded {
            ticket: foreign,
            dataset: create_test_dataset(),
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::UnknownFetchTicket { .. })
    ));
}

#[test]
fn test_core_error_display() {
    let session: Session = Session::new(TODAY);
    let (session, first): (Session, FetchTicket) = session.begin_fetch();
    let (_, second): (Session, FetchTicket) = session.begin_fetch();

    let err: CoreError = CoreError::UnknownFetchTicket {
        ticket: second,
        latest: first,
    };
    assert_eq!(
        format!("{err}"),
        "Fetch ticket #2 was never issued (latest is #1)"
    );
}
