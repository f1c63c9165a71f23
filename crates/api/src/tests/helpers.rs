// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{ApiResult, RefreshResponse, complete_fetch};
use bank_holidays::{FetchTicket, Session};
use bank_holidays_domain::{HolidayDataset, HolidayEvent, JurisdictionKey};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 06 - 01);

pub fn create_test_event(title: &str, date: Date, notes: &str) -> HolidayEvent {
    HolidayEvent::new(String::from(title), date, true, String::from(notes))
}

pub fn create_test_dataset() -> HolidayDataset {
    HolidayDataset::from_events([
        (
            JurisdictionKey::EnglandAndWales,
            vec![
                create_test_event("Boxing Day", date!(2023 - 12 - 26), ""),
                create_test_event("New Year’s Day", date!(2024 - 01 - 01), ""),
                create_test_event("Early May bank holiday", date!(2024 - 05 - 06), ""),
                create_test_event("Spring bank holiday", date!(2024 - 05 - 27), ""),
                create_test_event("Summer bank holiday", date!(2024 - 08 - 26), ""),
                create_test_event("New Year’s Day", date!(2025 - 01 - 01), ""),
            ],
        ),
        (
            JurisdictionKey::Scotland,
            vec![
                create_test_event("2nd January", date!(2024 - 01 - 02), ""),
                create_test_event("St Andrew’s Day", date!(2024 - 12 - 02), "Substitute day"),
            ],
        ),
    ])
}

pub fn create_loaded_session() -> Session {
    let (session, ticket): (Session, FetchTicket) = Session::new(TODAY).begin_fetch();
    let result: ApiResult<RefreshResponse> =
        complete_fetch(&session, ticket, Ok(create_test_dataset())).unwrap();
    result.new_session
}
