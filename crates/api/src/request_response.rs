// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// A jurisdiction as offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionInfo {
    /// The feed key, e.g. `england-and-wales`.
    pub key: String,
    /// The human-readable name.
    pub name: String,
}

/// API response listing every known jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListJurisdictionsResponse {
    /// The jurisdictions, in display order.
    pub jurisdictions: Vec<JurisdictionInfo>,
}

/// API response listing the selectable years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListYearsResponse {
    /// Distinct years, strictly descending. Empty until a dataset loads.
    pub years: Vec<i32>,
    /// The currently selected year.
    pub selected_year: i32,
    /// The jurisdiction the years are derived from.
    pub reference_jurisdiction: String,
}

/// API request for a holiday listing.
///
/// Omitted fields fall back to the session's current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysRequest {
    /// The jurisdiction key to list.
    #[serde(default)]
    pub jurisdiction: Option<String>,
    /// The calendar year to list.
    #[serde(default)]
    pub year: Option<i32>,
}

/// A single holiday as presented to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInfo {
    /// The holiday name.
    pub title: String,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: String,
    /// Display date (`dd/mm/yyyy`).
    pub display_date: String,
    /// English weekday name, e.g. `Monday`.
    pub weekday: String,
    /// The feed's bunting flag.
    pub bunting: bool,
    /// Free-text notes, empty when the feed has none.
    pub notes: String,
    /// Whether this is the next upcoming holiday.
    pub upcoming: bool,
}

/// API response for a holiday listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListHolidaysResponse {
    /// The jurisdiction listed.
    pub jurisdiction: String,
    /// The human-readable name of the jurisdiction.
    pub jurisdiction_name: String,
    /// The feed's division label, when it has one.
    pub division: Option<String>,
    /// The year listed.
    pub year: i32,
    /// The feed status (`loading`, `loaded` or `failed`).
    pub status: String,
    /// Matching holidays in date order.
    pub holidays: Vec<HolidayInfo>,
    /// Index into `holidays` of the next upcoming holiday.
    pub upcoming_index: Option<usize>,
}

/// API response describing the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// The selected jurisdiction key.
    pub jurisdiction: String,
    /// The human-readable name of the selected jurisdiction.
    pub jurisdiction_name: String,
    /// The selected year.
    pub year: i32,
}

/// API request to change the selection.
///
/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSelectionRequest {
    /// The jurisdiction key to select.
    #[serde(default)]
    pub jurisdiction: Option<String>,
    /// The year to select. Not validated against the available years.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Event count for one jurisdiction in the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionEventCount {
    /// The jurisdiction key.
    pub jurisdiction: String,
    /// Number of events loaded for it.
    pub events: usize,
}

/// API response describing the feed status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedStatusResponse {
    /// `loading`, `loaded` or `failed`.
    pub status: String,
    /// Reason the latest fetch failed, if it did.
    pub last_failure: Option<String>,
    /// Event counts for the jurisdictions present in the dataset.
    pub event_counts: Vec<JurisdictionEventCount>,
    /// Jurisdictions whose feed order was corrected during normalization.
    pub reordered: Vec<String>,
    /// Sequence number of the newest fetch.
    pub latest_fetch: u64,
}

/// How a completed fetch affected the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// The dataset was replaced wholesale.
    Replaced,
    /// The fetch failed. Any earlier dataset is still in place.
    Failed,
    /// A newer fetch was started before this one finished, so its result was
    /// discarded.
    Superseded,
}

/// API response for a completed refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// What happened to the session.
    pub outcome: RefreshOutcome,
    /// The feed status after the refresh.
    pub status: FeedStatusResponse,
    /// A human-readable summary.
    pub message: String,
}
