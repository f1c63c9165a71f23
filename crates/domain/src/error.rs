// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::JurisdictionKey;

/// Errors raised when a raw feed document does not have the structure
/// required to build a `HolidayDataset`.
///
/// A normalization that fails with any of these never yields a partial dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedFeed {
    /// The feed body could not be decoded as JSON.
    InvalidJson(String),
    /// The top level of the document is not a JSON object.
    NotAnObject,
    /// A required jurisdiction is missing from the document.
    MissingJurisdiction(JurisdictionKey),
    /// A jurisdiction record is not an object or has no `events` array.
    MissingEvents(JurisdictionKey),
    /// A jurisdiction record carries a non-string `division`.
    InvalidDivision(JurisdictionKey),
    /// An event entry has the wrong shape.
    InvalidEvent {
        /// The jurisdiction the event belongs to.
        jurisdiction: JurisdictionKey,
        /// The zero-based position of the event in the feed.
        index: usize,
        /// Description of what is wrong with the entry.
        reason: String,
    },
    /// An event title is missing or empty.
    InvalidTitle {
        /// The jurisdiction the event belongs to.
        jurisdiction: JurisdictionKey,
        /// The zero-based position of the event in the feed.
        index: usize,
    },
    /// An event date is missing or not a valid `YYYY-MM-DD` calendar date.
    InvalidDate {
        /// The jurisdiction the event belongs to.
        jurisdiction: JurisdictionKey,
        /// The zero-based position of the event in the feed.
        index: usize,
        /// The offending date value as it appeared in the feed.
        value: String,
    },
}

impl std::fmt::Display for MalformedFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(msg) => write!(f, "Feed is not valid JSON: {msg}"),
            Self::NotAnObject => write!(f, "Feed document must be a JSON object"),
            Self::MissingJurisdiction(key) => {
                write!(f, "Feed is missing jurisdiction '{key}'")
            }
            Self::MissingEvents(key) => {
                write!(f, "Jurisdiction '{key}' has no events list")
            }
            Self::InvalidDivision(key) => {
                write!(f, "Jurisdiction '{key}' has a non-string division")
            }
            Self::InvalidEvent {
                jurisdiction,
                index,
                reason,
            } => {
                write!(
                    f,
                    "Event {index} in jurisdiction '{jurisdiction}' is invalid: {reason}"
                )
            }
            Self::InvalidTitle {
                jurisdiction,
                index,
            } => {
                write!(
                    f,
                    "Event {index} in jurisdiction '{jurisdiction}' has a missing or empty title"
                )
            }
            Self::InvalidDate {
                jurisdiction,
                index,
                value,
            } => {
                write!(
                    f,
                    "Event {index} in jurisdiction '{jurisdiction}' has an invalid date '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for MalformedFeed {}

/// Error returned when a string does not name a known jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownJurisdiction(pub String);

impl std::fmt::Display for UnknownJurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown jurisdiction '{}': expected one of england-and-wales, scotland, northern-ireland",
            self.0
        )
    }
}

impl std::error::Error for UnknownJurisdiction {}
