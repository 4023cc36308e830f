// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Browsing workflows: ordering, pagination and filtering of the event list.

use eventdesk_core::{EventList, LoadState, PAGE_SIZE, execute};

use crate::common::{
    MemoryBackend, assert_page_names, assert_visible_names, numbered_events, scenario_a_events,
    test_event,
};

async fn mounted(backend: &MemoryBackend) -> EventList {
    let (mut list, request) = EventList::mount();
    assert!(list.apply(execute(backend, request).await));
    list
}

#[tokio::test]
async fn list_renders_in_chronological_order() {
    // Arrange
    let backend = MemoryBackend::with_events(scenario_a_events());

    // Act
    let list = mounted(&backend).await;

    // Assert
    assert_eq!(list.load_state(), &LoadState::Ready);
    assert_page_names(&list, &["Beta", "Alpha"]);
    assert_eq!(backend.list_calls(), 1);
}

#[tokio::test]
async fn list_paginates_seven_events_into_two_pages() {
    // Arrange
    let backend = MemoryBackend::with_events(numbered_events(7));
    let mut list = mounted(&backend).await;

    // Assert - first page
    assert_eq!(list.page_count(), 2);
    assert_page_names(
        &list,
        &["Event 1", "Event 2", "Event 3", "Event 4", "Event 5"],
    );

    // Act - second page
    assert!(list.select_page(2));

    // Assert
    assert_page_names(&list, &["Event 6", "Event 7"]);
    let numbers: Vec<usize> = list.page().rows.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![6, 7]);
    assert!(!list.select_page(3));
}

#[tokio::test]
async fn list_search_rejects_short_term_then_filters() {
    // Arrange
    let backend = MemoryBackend::with_events(vec![
        test_event(1, "Alpha", "2024-01-01", "09:00"),
        test_event(2, "Beta", "2024-01-01", "10:00"),
        test_event(3, "Royal Gala", "2024-01-02", "09:00"),
        test_event(4, "CALENDAR sync", "2024-01-03", "09:00"),
    ]);
    let mut list = mounted(&backend).await;

    // Act - one character
    let rejected = list.submit_search("a");

    // Assert - unfiltered, rejection shown
    assert!(rejected.is_err());
    assert!(list.notice().is_some());
    assert_visible_names(&list, &["Alpha", "Beta", "Royal Gala", "CALENDAR sync"]);

    // Act - two characters
    list.dismiss_notice();
    list.submit_search("al").unwrap();

    // Assert - case-insensitive substring
    assert!(list.notice().is_none());
    assert_visible_names(&list, &["Alpha", "Royal Gala", "CALENDAR sync"]);
}

#[tokio::test]
async fn list_paginates_after_filtering() {
    // Arrange - matches sit on the second unfiltered page
    let mut events = numbered_events(8);
    for event in events.iter_mut().skip(5) {
        event.name = format!("Match {}", event.id);
    }
    let backend = MemoryBackend::with_events(events);
    let mut list = mounted(&backend).await;
    assert_eq!(list.page_count(), 2);

    // Act
    list.submit_search("match").unwrap();

    // Assert - all matches on page one, no second page
    assert_eq!(list.page_count(), 1);
    assert_page_names(&list, &["Match 6", "Match 7", "Match 8"]);
    assert!(list.page().rows.len() <= PAGE_SIZE);
}

#[tokio::test]
async fn list_date_filter_resets_page() {
    // Arrange
    let mut events = numbered_events(6);
    events.push(test_event(7, "Elsewhere", "2024-06-02", "08:00"));
    let backend = MemoryBackend::with_events(events);
    let mut list = mounted(&backend).await;
    assert!(list.select_page(2));

    // Act
    list.set_date_filter(Some(jiff::civil::date(2024, 6, 2)));

    // Assert
    assert_eq!(list.current_page(), 1);
    assert_page_names(&list, &["Elsewhere"]);

    // Act - clearing also resets
    list.set_date_filter(None);
    assert!(list.select_page(2));
    list.submit_search("event").unwrap();
    assert_eq!(list.current_page(), 1);
}

#[tokio::test]
async fn list_initial_failure_is_retryable() {
    // Arrange
    let backend = MemoryBackend::with_events(scenario_a_events());
    backend.fail_next();

    // Act
    let mut list = mounted(&backend).await;

    // Assert - failure is visible
    assert!(matches!(list.load_state(), LoadState::Failed(_)));
    assert!(list.notice().is_some());
    assert!(list.page().rows.is_empty());

    // Act - retry
    let request = list.reload().unwrap();
    assert!(list.apply(execute(&backend, request).await));

    // Assert
    assert_page_names(&list, &["Beta", "Alpha"]);
    assert_eq!(backend.list_calls(), 2);
}
