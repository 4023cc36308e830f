// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows against a mock HTTP server through the real [`EventClient`].

use eventdesk_api::{ApiConfig, EventClient};
use eventdesk_core::{EventId, EventList, LoadState, execute};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> EventClient {
    EventClient::new(ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn http_list_then_delete() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Alpha", "date": "2024-01-02", "time": "09:00",
             "location": "", "description": ""},
            {"id": 2, "name": "Beta", "date": "2024-01-01", "time": "10:00",
             "location": "", "description": ""}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/events/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server);

    // Act
    let (mut list, request) = EventList::mount();
    list.apply(execute(&client, request).await);
    list.request_delete(EventId::new(2));
    let request = list.confirm_delete().unwrap();
    list.apply(execute(&client, request).await);

    // Assert
    let names: Vec<&str> = list.visible_events().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha"]);
}

#[tokio::test]
async fn http_malformed_list_fails_gracefully() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"))
        .mount(&server)
        .await;
    let client = client(&server);

    // Act
    let (mut list, request) = EventList::mount();
    list.apply(execute(&client, request).await);

    // Assert
    assert!(matches!(list.load_state(), LoadState::Failed(msg) if msg.contains("Invalid")));
    assert!(list.events().is_empty());
}
