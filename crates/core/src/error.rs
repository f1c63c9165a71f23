// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::session::FetchTicket;

/// Errors that can occur during session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A fetch outcome carried a ticket the session never issued.
    UnknownFetchTicket {
        /// The ticket carried by the outcome.
        ticket: FetchTicket,
        /// The newest ticket the session has issued.
        latest: FetchTicket,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFetchTicket { ticket, latest } => write!(
                f,
                "Fetch ticket {ticket} was never issued (latest is {latest})"
            ),
        }
    }
}

impl std::error::Error for CoreError {}
