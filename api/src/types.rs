// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned event identifier.
///
/// The backend assigns it on creation; a record that has not been created yet
/// carries [`EventId::UNSET`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// The id of a record that has not been created on the backend.
    pub const UNSET: Self = Self(0);

    /// Creates a new `EventId`.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether the backend has assigned this id.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An event as stored on the backend.
///
/// Text fields are kept exactly as the backend sends them, `date` is expected
/// as `YYYY-MM-DD` and `time` as 24h `HH:MM` but neither is validated here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: EventId,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,

    /// Time of day, `HH:MM`.
    #[serde(default)]
    pub time: String,

    /// Where the event takes place.
    #[serde(default)]
    pub location: String,

    /// Free text description.
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Builds the record the backend holds for `fields` under `id`.
    #[must_use]
    pub fn with_fields(id: EventId, fields: EventFields) -> Self {
        Self {
            id,
            name: fields.name,
            date: fields.date,
            time: fields.time,
            location: fields.location,
            description: fields.description,
        }
    }

    /// Returns every field except the id.
    #[must_use]
    pub fn fields(&self) -> EventFields {
        EventFields {
            name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

/// The fields of an event without its id, the body of create and update requests.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFields {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,

    /// Time of day, `HH:MM`.
    #[serde(default)]
    pub time: String,

    /// Where the event takes place.
    #[serde(default)]
    pub location: String,

    /// Free text description.
    #[serde(default)]
    pub description: String,
}

impl From<Event> for EventFields {
    fn from(event: Event) -> Self {
        Self {
            name: event.name,
            date: event.date,
            time: event.time,
            location: event.location,
            description: event.description,
        }
    }
}
