// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::session::{FetchTicket, Session, Transition};
use bank_holidays_domain::SelectionState;

/// Applies a command to a session, producing a new session.
///
/// The input session is never modified. Fetch outcomes are checked against
/// the newest issued ticket: an outcome for an older ticket is reported as
/// `Transition::Superseded` and discarded, never merged.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Transition::Applied)` with the new session
/// * `Ok(Transition::Superseded)` if the command carried a stale fetch outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if a fetch outcome carries a ticket newer than any the
/// session has issued.
pub fn apply(session: &Session, command: Command) -> Result<Transition, CoreError> {
    match command {
        Command::SelectJurisdiction(jurisdiction) => {
            let mut selection: SelectionState = session.selection();
            selection.set_jurisdiction(jurisdiction);
            Ok(Transition::Applied(session.with_selection(selection)))
        }
        Command::SelectYear(year) => {
            let mut selection: SelectionState = session.selection();
            selection.set_year(year);
            Ok(Transition::Applied(session.with_selection(selection)))
        }
        Command::DatasetLoaded { ticket, dataset } => {
            if let Some(superseded) = check_ticket(session, ticket)? {
                return Ok(superseded);
            }
            Ok(Transition::Applied(session.with_dataset(dataset)))
        }
        Command::LoadFailed { ticket, reason } => {
            if let Some(superseded) = check_ticket(session, ticket)? {
                return Ok(superseded);
            }
            Ok(Transition::Applied(session.with_failure(reason)))
        }
    }
}

/// Returns `Some(Transition::Superseded)` when `ticket` is older than the
/// newest issued ticket.
fn check_ticket(
    session: &Session,
    ticket: FetchTicket,
) -> Result<Option<Transition>, CoreError> {
    let latest: FetchTicket = session.latest_ticket();
    if ticket > latest || ticket.value() == 0 {
        return Err(CoreError::UnknownFetchTicket { ticket, latest });
    }
    if ticket < latest {
        return Ok(Some(Transition::Superseded { ticket, latest }));
    }
    Ok(None)
}
