// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{HolidayDataset, HolidayEvent, JurisdictionKey, RawFeedDocument, normalize};
use serde_json::json;
use time::Date;

pub fn create_test_event(title: &str, date: Date) -> HolidayEvent {
    HolidayEvent::new(String::from(title), date, false, String::new())
}

/// The two-event England and Wales feed used by the basic scenarios.
pub fn create_scenario_feed() -> RawFeedDocument {
    RawFeedDocument::new(json!({
        "england-and-wales": {
            "division": "england-and-wales",
            "events": [
                { "title": "New Year's Day", "date": "2024-01-01", "notes": "", "bunting": true },
                { "title": "Christmas Day", "date": "2024-12-25", "notes": "", "bunting": true }
            ]
        }
    }))
}

/// A feed covering all three jurisdictions over 2023 to 2025.
pub fn create_full_feed() -> RawFeedDocument {
    RawFeedDocument::new(json!({
        "england-and-wales": {
            "division": "england-and-wales",
            "events": [
                { "title": "New Year's Day", "date": "2023-01-02", "notes": "Substitute day", "bunting": true },
                { "title": "Christmas Day", "date": "2023-12-25", "notes": "", "bunting": true },
                { "title": "New Year's Day", "date": "2024-01-01", "notes": "", "bunting": true },
                { "title": "Good Friday", "date": "2024-03-29", "notes": "", "bunting": false },
                { "title": "Easter Monday", "date": "2024-04-01", "notes": "", "bunting": true },
                { "title": "Early May bank holiday", "date": "2024-05-06", "notes": "", "bunting": true },
                { "title": "Summer bank holiday", "date": "2024-08-26", "notes": "", "bunting": true },
                { "title": "Christmas Day", "date": "2024-12-25", "notes": "", "bunting": true },
                { "title": "Boxing Day", "date": "2024-12-26", "notes": "", "bunting": true },
                { "title": "New Year's Day", "date": "2025-01-01", "notes": "", "bunting": true }
            ]
        },
        "scotland": {
            "division": "scotland",
            "events": [
                { "title": "New Year's Day", "date": "2024-01-01", "notes": "", "bunting": true },
                { "title": "2nd January", "date": "2024-01-02", "notes": "", "bunting": true },
                { "title": "St Andrew's Day", "date": "2024-12-02", "notes": "Substitute day", "bunting": true }
            ]
        },
        "northern-ireland": {
            "division": "northern-ireland",
            "events": [
                { "title": "St Patrick's Day", "date": "2024-03-18", "notes": "Substitute day", "bunting": true },
                { "title": "Battle of the Boyne (Orangemen's Day)", "date": "2024-07-12", "notes": "", "bunting": false }
            ]
        }
    }))
}

pub fn create_full_dataset() -> HolidayDataset {
    normalize(&create_full_feed()).unwrap()
}

pub fn create_scenario_dataset() -> HolidayDataset {
    normalize(&create_scenario_feed()).unwrap()
}

pub fn titles(events: &[HolidayEvent]) -> Vec<&str> {
    events.iter().map(HolidayEvent::title).collect()
}

pub fn reference_events(dataset: &HolidayDataset) -> &[HolidayEvent] {
    dataset.events(JurisdictionKey::REFERENCE).unwrap()
}
