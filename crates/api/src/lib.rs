// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the UK bank holidays service.
//!
//! Every function here is synchronous and pure with respect to the session:
//! callers pass a snapshot and, for mutating operations, receive the new
//! session in an `ApiResult`. Transport concerns live in the server.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error};
pub use handlers::{
    complete_fetch, feed_status, get_selection, list_holidays, list_jurisdictions, list_years,
    update_selection,
};
pub use request_response::{
    FeedStatusResponse, HolidayInfo, HolidaysRequest, JurisdictionEventCount, JurisdictionInfo,
    ListHolidaysResponse, ListJurisdictionsResponse, ListYearsResponse, RefreshOutcome,
    RefreshResponse, SelectionResponse, UpdateSelectionRequest,
};

use bank_holidays::Session;

/// Result of an API operation that produces a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The session after the operation.
    pub new_session: Session,
}
