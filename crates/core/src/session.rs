// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bank_holidays_domain::{HolidayDataset, SelectionState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::Date;

/// Sequence number of a fetch attempt.
///
/// Outcomes of fetches older than the newest issued ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Returns the raw sequence number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the session stands with respect to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedStatus {
    /// No fetch has completed yet.
    Loading,
    /// A dataset is available.
    Loaded,
    /// Every completed fetch so far has failed.
    Failed,
}

impl FeedStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable snapshot of the application session: the current dataset
/// (if any) and the user's selection.
///
/// The composition layer holds exactly one mutable reference to a `Session`
/// and replaces it with the result of each transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The most recently loaded dataset.
    dataset: Option<Arc<HolidayDataset>>,
    /// The user's selection.
    selection: SelectionState,
    /// Reason the most recent settled fetch failed, if it did.
    last_failure: Option<String>,
    /// Newest ticket handed out by `begin_fetch`.
    issued: FetchTicket,
}

impl Session {
    /// Creates the startup session: no data yet, and the default selection
    /// for `today`.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self {
            dataset: None,
            selection: SelectionState::starting_at(today),
            last_failure: None,
            issued: FetchTicket(0),
        }
    }

    /// Starts a fetch, returning the session that expects it and its ticket.
    ///
    /// Starting a new fetch supersedes every fetch still in flight.
    #[must_use]
    pub fn begin_fetch(&self) -> (Self, FetchTicket) {
        let ticket: FetchTicket = FetchTicket(self.issued.0 + 1);
        let next: Self = Self {
            issued: ticket,
            ..self.clone()
        };
        (next, ticket)
    }

    /// Returns the current dataset, if one has loaded.
    #[must_use]
    pub fn dataset(&self) -> Option<&HolidayDataset> {
        self.dataset.as_deref()
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Returns the reason the latest settled fetch failed.
    ///
    /// A failure after a successful load keeps the previous dataset, so this
    /// can be set while the status is `Loaded`.
    #[must_use]
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Returns the newest issued fetch ticket.
    #[must_use]
    pub const fn latest_ticket(&self) -> FetchTicket {
        self.issued
    }

    /// Returns the feed status.
    #[must_use]
    pub const fn status(&self) -> FeedStatus {
        match (&self.dataset, &self.last_failure) {
            (Some(_), _) => FeedStatus::Loaded,
            (None, Some(_)) => FeedStatus::Failed,
            (None, None) => FeedStatus::Loading,
        }
    }

    pub(crate) fn with_selection(&self, selection: SelectionState) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    pub(crate) fn with_dataset(&self, dataset: Arc<HolidayDataset>) -> Self {
        Self {
            dataset: Some(dataset),
            last_failure: None,
            ..self.clone()
        }
    }

    pub(crate) fn with_failure(&self, reason: String) -> Self {
        Self {
            last_failure: Some(reason),
            ..self.clone()
        }
    }
}

/// The outcome of applying a command to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The command was applied and produced a new session.
    Applied(Session),
    /// The command carried the outcome of a superseded fetch and was
    /// discarded. The session is unchanged.
    Superseded {
        /// The ticket of the discarded outcome.
        ticket: FetchTicket,
        /// The newest issued ticket.
        latest: FetchTicket,
    },
}
