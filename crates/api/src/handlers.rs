// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ApiResult;
use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    FeedStatusResponse, HolidayInfo, HolidaysRequest, JurisdictionEventCount, JurisdictionInfo,
    ListHolidaysResponse, ListJurisdictionsResponse, ListYearsResponse, RefreshOutcome,
    RefreshResponse, SelectionResponse, UpdateSelectionRequest,
};
use bank_holidays::{
    Command, FetchTicket, HolidayView, Session, Transition, apply, derive_view_for,
};
use bank_holidays_domain::{HolidayDataset, HolidayEvent, JurisdictionKey, SelectionState};
use std::sync::Arc;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::{debug, info, warn};

const ISO_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year]");

/// Lists every known jurisdiction in display order.
#[must_use]
pub fn list_jurisdictions() -> ListJurisdictionsResponse {
    ListJurisdictionsResponse {
        jurisdictions: JurisdictionKey::ALL
            .iter()
            .map(|key: &JurisdictionKey| JurisdictionInfo {
                key: key.as_str().to_string(),
                name: key.display_name().to_string(),
            })
            .collect(),
    }
}

/// Lists the selectable years.
///
/// Years always come from the reference jurisdiction, whatever is selected.
/// Before any dataset has loaded the list is empty.
#[must_use]
pub fn list_years(session: &Session) -> ListYearsResponse {
    let years: Vec<i32> = session
        .dataset()
        .map(bank_holidays_domain::years)
        .unwrap_or_default();

    ListYearsResponse {
        years,
        selected_year: session.selection().year(),
        reference_jurisdiction: JurisdictionKey::REFERENCE.as_str().to_string(),
    }
}

/// Returns the current selection.
#[must_use]
pub fn get_selection(session: &Session) -> SelectionResponse {
    selection_response(session.selection())
}

/// Lists the holidays for a jurisdiction and year.
///
/// Fields omitted from the request fall back to the session's selection. The
/// session itself is not changed.
///
/// # Arguments
///
/// * `session` - The current session
/// * `request` - Optional jurisdiction and year overrides
/// * `today` - The current calendar date, used to mark the upcoming holiday
///
/// # Errors
///
/// Returns an error if:
/// - The jurisdiction is not a known key
/// - A date cannot be formatted
pub fn list_holidays(
    session: &Session,
    request: &HolidaysRequest,
    today: Date,
) -> Result<ListHolidaysResponse, ApiError> {
    let mut selection: SelectionState = session.selection();
    if let Some(raw) = &request.jurisdiction {
        selection.set_jurisdiction(raw.parse::<JurisdictionKey>()?);
    }
    if let Some(year) = request.year {
        selection.set_year(year);
    }

    let view: HolidayView = derive_view_for(session, selection, today);

    let holidays: Vec<HolidayInfo> = view
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| holiday_info(event, view.upcoming == Some(index)))
        .collect::<Result<Vec<HolidayInfo>, ApiError>>()?;

    Ok(ListHolidaysResponse {
        jurisdiction: selection.jurisdiction().as_str().to_string(),
        jurisdiction_name: selection.jurisdiction().display_name().to_string(),
        division: view.division,
        year: selection.year(),
        status: view.status.as_str().to_string(),
        holidays,
        upcoming_index: view.upcoming,
    })
}

/// Updates the selection.
///
/// The year is taken as given. Selecting a year with no holidays is allowed
/// and simply yields an empty listing.
///
/// # Errors
///
/// Returns an error if the jurisdiction is not a known key, or if the core
/// rejects the resulting command.
pub fn update_selection(
    session: &Session,
    request: &UpdateSelectionRequest,
) -> Result<ApiResult<SelectionResponse>, ApiError> {
    let mut commands: Vec<Command> = Vec::new();
    if let Some(raw) = &request.jurisdiction {
        commands.push(Command::SelectJurisdiction(raw.parse::<JurisdictionKey>()?));
    }
    if let Some(year) = request.year {
        commands.push(Command::SelectYear(year));
    }

    let mut new_session: Session = session.clone();
    for command in commands {
        new_session = match apply(&new_session, command).map_err(translate_core_error)? {
            Transition::Applied(next) => next,
            Transition::Superseded { ticket, latest } => {
                return Err(ApiError::Internal {
                    message: format!(
                        "Selection change reported as superseded ({ticket}, latest {latest})"
                    ),
                });
            }
        };
    }

    debug!(
        jurisdiction = %new_session.selection().jurisdiction(),
        year = new_session.selection().year(),
        "Selection updated"
    );

    Ok(ApiResult {
        response: selection_response(new_session.selection()),
        new_session,
    })
}

/// Describes the feed status and loaded dataset.
#[must_use]
pub fn feed_status(session: &Session) -> FeedStatusResponse {
    let (event_counts, reordered): (Vec<JurisdictionEventCount>, Vec<String>) =
        session.dataset().map_or_else(
            || (Vec::new(), Vec::new()),
            |dataset: &HolidayDataset| {
                (
                    dataset
                        .jurisdictions()
                        .map(|jurisdiction: JurisdictionKey| JurisdictionEventCount {
                            jurisdiction: jurisdiction.as_str().to_string(),
                            events: dataset.event_count(jurisdiction),
                        })
                        .collect(),
                    dataset
                        .reordered_jurisdictions()
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                )
            },
        );

    FeedStatusResponse {
        status: session.status().as_str().to_string(),
        last_failure: session.last_failure().map(ToString::to_string),
        event_counts,
        reordered,
        latest_fetch: session.latest_ticket().value(),
    }
}

/// Applies the outcome of a fetch started with `Session::begin_fetch`.
///
/// A successful load replaces the dataset wholesale. A failed load keeps any
/// earlier dataset and records the reason. An outcome for a fetch that has
/// since been superseded leaves the session unchanged.
///
/// # Arguments
///
/// * `session` - The current session
/// * `ticket` - The ticket issued when the fetch began
/// * `outcome` - The normalized dataset, or the reason the load failed
///
/// # Errors
///
/// Returns an error if the ticket was never issued by this session.
pub fn complete_fetch(
    session: &Session,
    ticket: FetchTicket,
    outcome: Result<HolidayDataset, String>,
) -> Result<ApiResult<RefreshResponse>, ApiError> {
    let (command, mut refresh_outcome): (Command, RefreshOutcome) = match outcome {
        Ok(dataset) => (
            Command::DatasetLoaded {
                ticket,
                dataset: Arc::new(dataset),
            },
            RefreshOutcome::Replaced,
        ),
        Err(reason) => (Command::LoadFailed { ticket, reason }, RefreshOutcome::Failed),
    };

    let new_session: Session = match apply(session, command).map_err(translate_core_error)? {
        Transition::Applied(next) => next,
        Transition::Superseded { ticket, latest } => {
            info!(%ticket, %latest, "Discarding result of superseded fetch");
            refresh_outcome = RefreshOutcome::Superseded;
            session.clone()
        }
    };

    let message: String = match refresh_outcome {
        RefreshOutcome::Replaced => String::from("Holiday data refreshed"),
        RefreshOutcome::Failed => {
            let reason: &str = new_session.last_failure().unwrap_or("unknown error");
            warn!(%ticket, reason, "Fetch failed");
            format!("Holiday data could not be refreshed: {reason}")
        }
        RefreshOutcome::Superseded => {
            String::from("A newer refresh was started; this result was discarded")
        }
    };

    Ok(ApiResult {
        response: RefreshResponse {
            outcome: refresh_outcome,
            status: feed_status(&new_session),
            message,
        },
        new_session,
    })
}

fn selection_response(selection: SelectionState) -> SelectionResponse {
    SelectionResponse {
        jurisdiction: selection.jurisdiction().as_str().to_string(),
        jurisdiction_name: selection.jurisdiction().display_name().to_string(),
        year: selection.year(),
    }
}

fn holiday_info(event: &HolidayEvent, upcoming: bool) -> Result<HolidayInfo, ApiError> {
    let date: Date = event.date();
    let format_error = |e: time::error::Format| ApiError::Internal {
        message: format!("Failed to format date {date}: {e}"),
    };

    Ok(HolidayInfo {
        title: event.title().to_string(),
        date: date.format(ISO_DATE_FORMAT).map_err(format_error)?,
        display_date: date.format(DISPLAY_DATE_FORMAT).map_err(format_error)?,
        weekday: date.weekday().to_string(),
        bunting: event.bunting(),
        notes: event.notes().to_string(),
        upcoming,
    })
}
