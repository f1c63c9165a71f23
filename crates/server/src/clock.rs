// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of "today" for the holiday views.
//!
//! The engine only ever sees a calendar date. Which date that is depends on
//! the zone the service runs for, so the shell resolves it here.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use time::Date;

/// Errors raised while resolving the current date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The configured timezone is not a known IANA zone name.
    InvalidTimezone(String),
    /// The local date could not be represented.
    DateOutOfRange(String),
}

impl std::fmt::Display for ClockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimezone(name) => write!(f, "Unknown timezone '{name}'"),
            Self::DateOutOfRange(date) => write!(f, "Date {date} is out of range"),
        }
    }
}

impl std::error::Error for ClockError {}

/// Source of the current calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The wall-clock date in an IANA timezone.
    Zoned(Tz),
    /// A date that never changes.
    Fixed(Date),
}

impl Clock {
    /// Creates a clock for the named IANA timezone, e.g. `Europe/London`.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidTimezone` if the name is not a known zone.
    pub fn for_timezone(name: &str) -> Result<Self, ClockError> {
        let tz: Tz = name
            .parse()
            .map_err(|_| ClockError::InvalidTimezone(name.to_string()))?;
        Ok(Self::Zoned(tz))
    }

    /// Returns today's date.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::DateOutOfRange` if the zoned date cannot be
    /// expressed as a calendar date.
    pub fn today(&self) -> Result<Date, ClockError> {
        match self {
            Self::Fixed(date) => Ok(*date),
            Self::Zoned(tz) => {
                let local: NaiveDate = chrono::Utc::now().with_timezone(tz).date_naive();
                to_calendar_date(local)
            }
        }
    }
}

fn to_calendar_date(local: NaiveDate) -> Result<Date, ClockError> {
    let out_of_range = || ClockError::DateOutOfRange(local.to_string());
    let ordinal: u16 = u16::try_from(local.ordinal()).map_err(|_| out_of_range())?;
    Date::from_ordinal_date(local.year(), ordinal).map_err(|_| out_of_range())
}
