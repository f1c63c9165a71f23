// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Normalization of the raw holiday feed into a `HolidayDataset`.
//!
//! The raw document is validated against the shape the engine relies on.
//! Normalization is all-or-nothing: either every known jurisdiction present
//! in the document is parsed, or the whole operation fails.

use crate::error::MalformedFeed;
use crate::types::{HolidayEvent, JurisdictionKey};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Date format used by the feed (`YYYY-MM-DD`).
const FEED_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// The feed document as received, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeedDocument {
    /// The decoded JSON value.
    value: Value,
}

impl RawFeedDocument {
    /// Wraps an already decoded JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value }
    }

    /// Decodes a feed document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `MalformedFeed::InvalidJson` if the input is not valid JSON.
    pub fn from_json_str(input: &str) -> Result<Self, MalformedFeed> {
        serde_json::from_str(input)
            .map(Self::new)
            .map_err(|e| MalformedFeed::InvalidJson(e.to_string()))
    }

    /// Decodes a feed document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `MalformedFeed::InvalidJson` if the input is not valid JSON.
    pub fn from_slice(input: &[u8]) -> Result<Self, MalformedFeed> {
        serde_json::from_slice(input)
            .map(Self::new)
            .map_err(|e| MalformedFeed::InvalidJson(e.to_string()))
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.value
    }
}

/// Events and metadata for a single jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq)]
struct JurisdictionRecord {
    /// The feed's division label, if any.
    division: Option<String>,
    /// Events in ascending date order.
    events: Vec<HolidayEvent>,
}

/// The normalized, immutable holiday data for one successful fetch.
///
/// A dataset is never mutated after construction. A refetch produces a new
/// dataset that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HolidayDataset {
    /// Per-jurisdiction records. Absent jurisdictions have no entry.
    jurisdictions: BTreeMap<JurisdictionKey, JurisdictionRecord>,
    /// Jurisdictions whose events arrived out of date order and were sorted.
    reordered: Vec<JurisdictionKey>,
}

impl HolidayDataset {
    /// Builds a dataset directly from per-jurisdiction event lists.
    ///
    /// Events are stable-sorted by date within each jurisdiction, exactly as
    /// `normalize` does. Later entries for the same key replace earlier ones.
    ///
    /// No field checks are applied: events are taken as constructed, so an
    /// empty title is kept as-is. Use `normalize` for untrusted input.
    #[must_use]
    pub fn from_events<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (JurisdictionKey, Vec<HolidayEvent>)>,
    {
        Self::from_records(entries.into_iter().map(|(key, events)| {
            (
                key,
                JurisdictionRecord {
                    division: None,
                    events,
                },
            )
        }))
    }

    fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (JurisdictionKey, JurisdictionRecord)>,
    {
        let mut jurisdictions: BTreeMap<JurisdictionKey, JurisdictionRecord> = BTreeMap::new();
        for (key, record) in records {
            jurisdictions.insert(key, record);
        }

        let mut reordered: Vec<JurisdictionKey> = Vec::new();
        for (key, record) in &mut jurisdictions {
            if sort_chronologically(&mut record.events) {
                reordered.push(*key);
            }
        }

        Self {
            jurisdictions,
            reordered,
        }
    }

    /// Returns the events of a jurisdiction, or `None` if it is absent.
    #[must_use]
    pub fn events(&self, jurisdiction: JurisdictionKey) -> Option<&[HolidayEvent]> {
        self.jurisdictions
            .get(&jurisdiction)
            .map(|record| record.events.as_slice())
    }

    /// Returns the feed's division label for a jurisdiction.
    #[must_use]
    pub fn division(&self, jurisdiction: JurisdictionKey) -> Option<&str> {
        self.jurisdictions
            .get(&jurisdiction)
            .and_then(|record| record.division.as_deref())
    }

    /// Returns whether the dataset holds data for a jurisdiction.
    #[must_use]
    pub fn contains(&self, jurisdiction: JurisdictionKey) -> bool {
        self.jurisdictions.contains_key(&jurisdiction)
    }

    /// Returns the jurisdictions present in the dataset, in key order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = JurisdictionKey> + '_ {
        self.jurisdictions.keys().copied()
    }

    /// Returns the number of events for a jurisdiction (zero when absent).
    #[must_use]
    pub fn event_count(&self, jurisdiction: JurisdictionKey) -> usize {
        self.events(jurisdiction).map_or(0, <[HolidayEvent]>::len)
    }

    /// Returns the jurisdictions whose feed order was not chronological.
    #[must_use]
    pub fn reordered_jurisdictions(&self) -> &[JurisdictionKey] {
        &self.reordered
    }
}

/// Normalizes a raw feed document into a `HolidayDataset`.
///
/// Every known jurisdiction present in the document is validated and parsed.
/// Unknown top-level keys are ignored. The reference jurisdiction must be
/// present, since year derivation depends on it.
///
/// # Arguments
///
/// * `raw` - The decoded feed document
///
/// # Returns
///
/// * `Ok(HolidayDataset)` if the document has the required structure
/// * `Err(MalformedFeed)` describing the first structural problem found
///
/// # Errors
///
/// Returns an error if:
/// - The document is not a JSON object
/// - The reference jurisdiction is missing
/// - A present jurisdiction has no `events` array
/// - An event has a missing or empty title, or an unparsable date
/// - An optional field has the wrong type
pub fn normalize(raw: &RawFeedDocument) -> Result<HolidayDataset, MalformedFeed> {
    let root: &Map<String, Value> = raw
        .as_value()
        .as_object()
        .ok_or(MalformedFeed::NotAnObject)?;

    if !root.contains_key(JurisdictionKey::REFERENCE.as_str()) {
        return Err(MalformedFeed::MissingJurisdiction(
            JurisdictionKey::REFERENCE,
        ));
    }

    let mut records: Vec<(JurisdictionKey, JurisdictionRecord)> = Vec::new();
    for key in JurisdictionKey::ALL {
        let Some(record) = root.get(key.as_str()) else {
            continue;
        };
        records.push((key, normalize_jurisdiction(key, record)?));
    }

    Ok(HolidayDataset::from_records(records))
}

fn normalize_jurisdiction(
    jurisdiction: JurisdictionKey,
    record: &Value,
) -> Result<JurisdictionRecord, MalformedFeed> {
    let fields: &Map<String, Value> = record
        .as_object()
        .ok_or(MalformedFeed::MissingEvents(jurisdiction))?;

    let division: Option<String> = match fields.get("division") {
        None | Some(Value::Null) => None,
        Some(Value::String(label)) => Some(label.clone()),
        Some(_) => return Err(MalformedFeed::InvalidDivision(jurisdiction)),
    };

    let raw_events: &Vec<Value> = fields
        .get("events")
        .and_then(Value::as_array)
        .ok_or(MalformedFeed::MissingEvents(jurisdiction))?;

    let events: Vec<HolidayEvent> = raw_events
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_event(jurisdiction, index, entry))
        .collect::<Result<Vec<HolidayEvent>, MalformedFeed>>()?;

    Ok(JurisdictionRecord { division, events })
}

fn normalize_event(
    jurisdiction: JurisdictionKey,
    index: usize,
    entry: &Value,
) -> Result<HolidayEvent, MalformedFeed> {
    let invalid = |reason: &str| MalformedFeed::InvalidEvent {
        jurisdiction,
        index,
        reason: reason.to_string(),
    };

    let fields: &Map<String, Value> = entry
        .as_object()
        .ok_or_else(|| invalid("expected an object"))?;

    let title: String = match fields.get("title") {
        Some(Value::String(title)) if !title.is_empty() => title.clone(),
        _ => {
            return Err(MalformedFeed::InvalidTitle {
                jurisdiction,
                index,
            });
        }
    };

    let date: Date = match fields.get("date") {
        Some(Value::String(raw_date)) => {
            Date::parse(raw_date, FEED_DATE_FORMAT).map_err(|_| MalformedFeed::InvalidDate {
                jurisdiction,
                index,
                value: raw_date.clone(),
            })?
        }
        other => {
            return Err(MalformedFeed::InvalidDate {
                jurisdiction,
                index,
                value: other.map_or_else(String::new, Value::to_string),
            });
        }
    };

    let bunting: bool = match fields.get("bunting") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(invalid("bunting must be a boolean")),
    };

    let notes: String = match fields.get("notes") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(notes)) => notes.clone(),
        Some(_) => return Err(invalid("notes must be a string")),
    };

    Ok(HolidayEvent::new(title, date, bunting, notes))
}

/// Stable-sorts events by date. Returns `true` if the input was out of order.
fn sort_chronologically(events: &mut [HolidayEvent]) -> bool {
    let in_order: bool = events
        .windows(2)
        .all(|pair| pair[0].date() <= pair[1].date());
    if !in_order {
        events.sort_by_key(HolidayEvent::date);
    }
    !in_order
}
