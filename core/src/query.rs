// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Filtering, ordering and pagination of the event list.
//!
//! The pipeline always runs in the same order: filter by date, filter by name,
//! sort chronologically, then cut out one page.

use std::str::FromStr;

use jiff::civil::{Date, DateTime, Time};

use crate::Event;

/// Number of rows on one page of the event list.
pub const PAGE_SIZE: usize = 5;

/// Minimum length of a name search term, counted after trimming.
pub const MIN_SEARCH_LEN: usize = 2;

/// A name search term that passed validation.
///
/// Stored trimmed and lower-cased, it matches names case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validates a raw search input.
    ///
    /// # Errors
    ///
    /// Returns [`SearchRejected`] if the trimmed input is shorter than [`MIN_SEARCH_LEN`].
    pub fn parse(input: &str) -> Result<Self, SearchRejected> {
        let trimmed = input.trim();
        if trimmed.chars().count() < MIN_SEARCH_LEN {
            return Err(SearchRejected {
                input: input.to_string(),
            });
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// The normalized term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `name` contains the term, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.0)
    }
}

impl FromStr for SearchTerm {
    type Err = SearchRejected;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A name search that was too short to apply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Search term must be at least {MIN_SEARCH_LEN} characters")]
pub struct SearchRejected {
    /// The input as the user typed it.
    pub input: String,
}

/// The active filters of the event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Keep only events on this date.
    pub date: Option<Date>,

    /// Keep only events whose name contains this term.
    pub name: Option<SearchTerm>,
}

impl EventQuery {
    /// Whether the event passes every active filter.
    pub fn matches(&self, event: &Event) -> bool {
        let date_ok = self
            .date
            .is_none_or(|date| event.date == date.to_string());
        let name_ok = self.name.as_ref().is_none_or(|t| t.matches(&event.name));
        date_ok && name_ok
    }
}

/// Applies the filters of `query`, keeping the input order.
pub fn filter_events<'a>(events: &'a [Event], query: &EventQuery) -> Vec<&'a Event> {
    // date first, then name
    let by_date: Vec<&Event> = match query.date {
        Some(date) => {
            let date = date.to_string();
            events.iter().filter(|e| e.date == date).collect()
        }
        None => events.iter().collect(),
    };

    match &query.name {
        Some(term) => by_date.into_iter().filter(|e| term.matches(&e.name)).collect(),
        None => by_date,
    }
}

/// The instant an event takes place, `None` if its date or time does not parse.
pub fn chronological_key(event: &Event) -> Option<DateTime> {
    let date: Date = event.date.trim().parse().ok()?;
    let time: Time = event.time.trim().parse().ok()?;
    Some(date.to_datetime(time))
}

/// Sorts events ascending by date and time.
///
/// The sort is stable: events at the same instant keep their relative order.
/// Events without a parseable date and time go last, also in their original order.
pub fn sort_events(events: &mut [&Event]) {
    events.sort_by_key(|e| {
        let key = chronological_key(e);
        (key.is_none(), key)
    });
}

/// Number of pages needed for `total` rows, zero when there are none.
pub const fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// A row of the event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// Position of the row in the whole filtered list, starting at 1.
    pub number: usize,

    /// The event shown in the row.
    pub event: &'a Event,
}

/// One page of the filtered and sorted event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Page number, starting at 1.
    pub number: usize,

    /// Number of pages available.
    pub count: usize,

    /// Number of events across all pages.
    pub total: usize,

    /// Rows on this page.
    pub rows: Vec<Row<'a>>,
}

/// Cuts page `number` (1-based) out of an already filtered and sorted list.
///
/// A page beyond the last one is empty.
pub fn paginate<'a>(events: &[&'a Event], number: usize) -> Page<'a> {
    let number = number.max(1);
    let start = (number - 1).saturating_mul(PAGE_SIZE);
    let rows = events
        .iter()
        .enumerate()
        .skip(start)
        .take(PAGE_SIZE)
        .map(|(i, &event)| Row {
            number: i + 1,
            event,
        })
        .collect();

    Page {
        number,
        count: page_count(events.len()),
        total: events.len(),
        rows,
    }
}
