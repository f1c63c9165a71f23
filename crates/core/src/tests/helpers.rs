// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, FetchTicket, Session, Transition, apply};
use bank_holidays_domain::{HolidayDataset, HolidayEvent, JurisdictionKey};
use std::sync::Arc;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 06 - 01);

pub fn create_test_event(title: &str, date: Date) -> HolidayEvent {
    HolidayEvent::new(String::from(title), date, false, String::new())
}

pub fn create_test_dataset() -> Arc<HolidayDataset> {
    Arc::new(HolidayDataset::from_events([
        (
            JurisdictionKey::EnglandAndWales,
            vec![
                create_test_event("Christmas Day", date!(2023 - 12 - 25)),
                create_test_event("New Year's Day", date!(2024 - 01 - 01)),
                create_test_event("Summer bank holiday", date!(2024 - 08 - 26)),
                create_test_event("Christmas Day", date!(2024 - 12 - 25)),
            ],
        ),
        (
            JurisdictionKey::Scotland,
            vec![
                create_test_event("New Year's Day", date!(2024 - 01 - 01)),
                create_test_event("Summer bank holiday", date!(2024 - 08 - 05)),
                create_test_event("St Andrew's Day", date!(2024 - 12 - 02)),
            ],
        ),
    ]))
}

pub fn unwrap_applied(transition: Transition) -> Session {
    match transition {
        Transition::Applied(session) => session,
        Transition::Superseded { ticket, latest } => {
            panic!("expected applied transition, got superseded {ticket} (latest {latest})")
        }
    }
}

/// Runs a full successful fetch against a fresh session.
pub fn create_loaded_session() -> Session {
    let (session, ticket): (Session, FetchTicket) = Session::new(TODAY).begin_fetch();
    let command: Command = Command::DatasetLoaded {
        ticket,
        dataset: create_test_dataset(),
    };
    unwrap_applied(apply(&session, command).unwrap())
}
