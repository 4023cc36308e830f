// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from creation through
//! modification and deletion, moving between the list and the form through
//! routes like the terminal UI does.

use eventdesk_core::{
    EventEditor, EventId, EventList, Field, Mode, NoticeLevel, Request, Route, execute,
};

use crate::common::{MemoryBackend, assert_visible_names, numbered_events, scenario_a_events};

async fn mounted(backend: &MemoryBackend) -> EventList {
    let (mut list, request) = EventList::mount();
    assert!(list.apply(execute(backend, request).await));
    list
}

async fn open_form(backend: &MemoryBackend, route: Route) -> EventEditor {
    let (mut editor, request) = EventEditor::from_route(route).unwrap();
    if let Some(request) = request {
        assert!(editor.apply(execute(backend, request).await));
    }
    editor
}

#[tokio::test]
async fn event_lifecycle_create_with_empty_name() {
    // Arrange
    let backend = MemoryBackend::with_events(scenario_a_events());
    let route: Route = "/event/add".parse().unwrap();
    let mut editor = open_form(&backend, route).await;
    assert_eq!(editor.mode(), Mode::Create);

    // Act - fill everything but the name and submit
    editor.set_field(Field::Date, "2024-01-03".to_string());
    editor.set_field(Field::Time, "08:00".to_string());
    assert!(editor.request_submit());
    let request = editor.confirm_submit().unwrap();
    assert!(matches!(&request, Request::Create(fields) if fields.name.is_empty()));
    assert!(editor.apply(execute(&backend, request).await));

    // Assert - success, then back to a freshly loaded list
    assert_eq!(editor.ack().map(|n| n.level), Some(NoticeLevel::Success));
    let next = editor.dismiss_ack().unwrap();
    assert_eq!(next, Route::List);

    let list = mounted(&backend).await;
    assert_visible_names(&list, &["Beta", "Alpha", ""]);
    assert_eq!(backend.list_calls(), 1);
}

#[tokio::test]
async fn event_lifecycle_edit_from_list() {
    // Arrange
    let backend = MemoryBackend::with_events(scenario_a_events());
    let mut list = mounted(&backend).await;

    // Act - confirm the edit row action
    list.request_edit(EventId::new(1));
    let route = list.confirm_edit().unwrap();
    assert_eq!(route.to_string(), "/event/mod/1");

    let mut editor = open_form(&backend, route).await;
    assert_eq!(editor.field(Field::Name), "Alpha");
    editor.set_field(Field::Name, "Alpha (moved)".to_string());
    editor.set_field(Field::Date, "2023-12-31".to_string());
    assert!(editor.request_submit());
    let request = editor.confirm_submit().unwrap();
    assert!(editor.apply(execute(&backend, request).await));

    // Assert
    assert_eq!(
        editor.ack().map(|n| n.text.as_str()),
        Some("Event updated successfully :)")
    );
    assert_eq!(editor.dismiss_ack(), Some(Route::List));
    let list = mounted(&backend).await;
    assert_visible_names(&list, &["Alpha (moved)", "Beta"]);
}

#[tokio::test]
async fn event_lifecycle_update_failure_keeps_form() {
    // Arrange
    let backend = MemoryBackend::with_events(scenario_a_events());
    let mut editor = open_form(&backend, Route::Edit(EventId::new(2))).await;
    editor.set_field(Field::Description, "draft text".to_string());

    // Act
    assert!(editor.request_submit());
    let request = editor.confirm_submit().unwrap();
    backend.fail_next();
    assert!(editor.apply(execute(&backend, request).await));

    // Assert
    assert_eq!(
        editor.ack().map(|n| n.text.as_str()),
        Some("Failed to update the event.")
    );
    assert_eq!(editor.dismiss_ack(), None);
    assert_eq!(editor.field(Field::Description), "draft text");
    assert_eq!(backend.snapshot()[1].description, "");
}

#[tokio::test]
async fn event_lifecycle_edit_missing_event() {
    // Arrange
    let backend = MemoryBackend::with_events(scenario_a_events());

    // Act
    let mut editor = open_form(&backend, Route::Edit(EventId::new(42))).await;

    // Assert
    assert_eq!(editor.ack().map(|n| n.level), Some(NoticeLevel::Error));
    assert!(!editor.request_submit());
    assert_eq!(editor.back(), Route::List);
}

#[tokio::test]
async fn event_lifecycle_delete_without_refetch() {
    // Arrange
    let backend = MemoryBackend::with_events(numbered_events(6));
    let mut list = mounted(&backend).await;
    assert!(list.select_page(2));

    // Act
    let id = EventId::new(6);
    list.request_delete(id);
    let request = list.confirm_delete().unwrap();
    assert!(list.apply(execute(&backend, request).await));

    // Assert - exactly one row gone, no second list call
    assert_eq!(list.events().len(), 5);
    assert!(list.events().iter().all(|e| e.id != id));
    assert_eq!(backend.list_calls(), 1);
    assert_eq!(backend.snapshot().len(), 5);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.notice().map(|n| n.level), Some(NoticeLevel::Success));
}

#[tokio::test]
async fn event_lifecycle_delete_failure_keeps_row() {
    // Arrange
    let backend = MemoryBackend::with_events(numbered_events(3));
    let mut list = mounted(&backend).await;

    // Act - cancelled dialog sends nothing
    list.request_delete(EventId::new(2));
    list.cancel_delete();
    assert_eq!(list.confirm_delete(), None);

    // Act - delete of an id the backend no longer has
    list.request_delete(EventId::new(99));
    let request = list.confirm_delete().unwrap();
    assert!(list.apply(execute(&backend, request).await));

    // Assert
    assert_eq!(list.events().len(), 3);
    assert_eq!(
        list.notice().map(|n| n.text.as_str()),
        Some("Failed to delete the event.")
    );
    assert!(!list.is_deleting(EventId::new(99)));
}
