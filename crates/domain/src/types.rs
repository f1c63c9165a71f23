// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::UnknownJurisdiction;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// One of the UK bank-holiday regions published in the feed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum JurisdictionKey {
    /// England and Wales. This is the reference jurisdiction for year derivation.
    #[default]
    EnglandAndWales,
    /// Scotland.
    Scotland,
    /// Northern Ireland.
    NorthernIreland,
}

impl JurisdictionKey {
    /// All known jurisdictions, in display order.
    pub const ALL: [Self; 3] = [Self::EnglandAndWales, Self::Scotland, Self::NorthernIreland];

    /// The jurisdiction whose events define the selectable years.
    ///
    /// This is fixed and does not follow the user's selected jurisdiction.
    pub const REFERENCE: Self = Self::EnglandAndWales;

    /// Returns the key as it appears in the feed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnglandAndWales => "england-and-wales",
            Self::Scotland => "scotland",
            Self::NorthernIreland => "northern-ireland",
        }
    }

    /// Returns the human-readable name of the jurisdiction.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::EnglandAndWales => "England and Wales",
            Self::Scotland => "Scotland",
            Self::NorthernIreland => "Northern Ireland",
        }
    }
}

impl FromStr for JurisdictionKey {
    type Err = UnknownJurisdiction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "england-and-wales" => Ok(Self::EnglandAndWales),
            "scotland" => Ok(Self::Scotland),
            "northern-ireland" => Ok(Self::NorthernIreland),
            _ => Err(UnknownJurisdiction(s.to_string())),
        }
    }
}

impl std::fmt::Display for JurisdictionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single bank holiday as published in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayEvent {
    /// The holiday name (never empty once normalized).
    title: String,
    /// The calendar date of the holiday.
    date: Date,
    /// Whether the feed flags the day as a bunting day.
    bunting: bool,
    /// Free-text notes from the feed, such as "Substitute day".
    notes: String,
}

impl HolidayEvent {
    /// Creates a new `HolidayEvent`.
    ///
    /// # Arguments
    ///
    /// * `title` - The holiday name
    /// * `date` - The calendar date of the holiday
    /// * `bunting` - The feed's bunting flag
    /// * `notes` - Free-text notes, empty when the feed has none
    #[must_use]
    pub const fn new(title: String, date: Date, bunting: bool, notes: String) -> Self {
        Self {
            title,
            date,
            bunting,
            notes,
        }
    }

    /// Returns the holiday name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the calendar date of the holiday.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the calendar year the holiday falls in.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the bunting flag.
    #[must_use]
    pub const fn bunting(&self) -> bool {
        self.bunting
    }

    /// Returns the feed notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Distinct years, strictly descending.
pub type YearSet = Vec<i32>;

/// Events matching a jurisdiction and year, in dataset order.
pub type FilteredEvents = Vec<HolidayEvent>;
