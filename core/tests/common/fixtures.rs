// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use eventdesk_core::{Event, EventFields, EventId};

/// Creates an event with the given id, name, date and time.
///
/// # Example
///
/// ```ignore
/// let event = test_event(1, "Alpha", "2024-01-02", "09:00");
/// ```
#[must_use]
pub fn test_event(id: u64, name: &str, date: &str, time: &str) -> Event {
    Event {
        id: EventId::new(id),
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: format!("Room {id}"),
        description: String::new(),
    }
}

/// Creates form fields with only a name, date and time.
#[must_use]
pub fn test_fields(name: &str, date: &str, time: &str) -> EventFields {
    EventFields {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        ..Default::default()
    }
}

/// The two events of the ordering scenario, in backend order.
#[must_use]
pub fn scenario_a_events() -> Vec<Event> {
    vec![
        test_event(1, "Alpha", "2024-01-02", "09:00"),
        test_event(2, "Beta", "2024-01-01", "10:00"),
    ]
}

/// `count` events named `Event 1..=count`, one hour apart and already in order.
#[must_use]
pub fn numbered_events(count: u64) -> Vec<Event> {
    (1..=count)
        .map(|i| {
            test_event(
                i,
                &format!("Event {i}"),
                "2024-06-01",
                &format!("{:02}:00", i % 24),
            )
        })
        .collect()
}
