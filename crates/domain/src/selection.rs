// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::JurisdictionKey;
use serde::{Deserialize, Serialize};
use time::Date;

/// The user's current jurisdiction and year choice.
///
/// Mutators overwrite unconditionally. Whether the year is in the `YearSet`
/// is a presentation concern and is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// The selected jurisdiction.
    jurisdiction: JurisdictionKey,
    /// The selected calendar year.
    year: i32,
}

impl SelectionState {
    /// Creates a selection with explicit values.
    #[must_use]
    pub const fn new(jurisdiction: JurisdictionKey, year: i32) -> Self {
        Self { jurisdiction, year }
    }

    /// Creates the startup selection: the reference jurisdiction and the
    /// year of `today`.
    #[must_use]
    pub const fn starting_at(today: Date) -> Self {
        Self::new(JurisdictionKey::REFERENCE, today.year())
    }

    /// Returns the selected jurisdiction.
    #[must_use]
    pub const fn jurisdiction(&self) -> JurisdictionKey {
        self.jurisdiction
    }

    /// Returns the selected year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Replaces the selected jurisdiction.
    pub const fn set_jurisdiction(&mut self, jurisdiction: JurisdictionKey) {
        self.jurisdiction = jurisdiction;
    }

    /// Replaces the selected year.
    pub const fn set_year(&mut self, year: i32) {
        self.year = year;
    }
}
