// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the `/events` resource.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Event, EventFields, EventId};

/// Client for listing, reading, creating, updating and deleting events on the backend.
///
/// Calls are never retried, every failure is returned to the caller.
///
/// # Example
///
/// ```ignore
/// use eventdesk_api::{ApiConfig, EventClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "http://localhost:3001".to_string(),
///     ..Default::default()
/// };
///
/// let client = EventClient::new(config)?;
/// let events = client.list_events().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl EventClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails or the base URL is empty.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Lists all events.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an array of events.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.collection_url();
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url), None)
            .await?;

        let events: Vec<Event> = resp.json().await?;
        tracing::debug!(count = events.len(), "listed events");
        Ok(events)
    }

    /// Gets a single event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the backend has no such event.
    pub async fn get_event(&self, id: EventId) -> Result<Event, ApiError> {
        let url = self.item_url(id);
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url), Some(id))
            .await?;

        Ok(resp.json().await?)
    }

    /// Creates a new event and returns the record with its server-assigned id.
    ///
    /// Fields missing from the response body are taken from the submitted ones.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails or the response carries no id.
    pub async fn create_event(&self, fields: &EventFields) -> Result<Event, ApiError> {
        let url = self.collection_url();
        let resp = self
            .http
            .execute(
                self.http.build_request(Method::POST, &url).json(fields),
                None,
            )
            .await?;

        let body: serde_json::Value = resp.json().await?;
        let created = merge_created(fields, body)?;
        tracing::debug!(id = %created.id, "created event");
        Ok(created)
    }

    /// Replaces the event stored under `id` with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the backend has no such event.
    pub async fn update_event(&self, id: EventId, fields: &EventFields) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let _ = self
            .http
            .execute(
                self.http.build_request(Method::PUT, &url).json(fields),
                Some(id),
            )
            .await?;

        tracing::debug!(%id, "updated event");
        Ok(())
    }

    /// Deletes the event stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the event is already absent.
    pub async fn delete_event(&self, id: EventId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let _ = self
            .http
            .execute(self.http.build_request(Method::DELETE, &url), Some(id))
            .await?;

        tracing::debug!(%id, "deleted event");
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/events", self.config.base_url.trim_end_matches('/'))
    }

    fn item_url(&self, id: EventId) -> String {
        format!("{}/{id}", self.collection_url())
    }
}

/// Overlays the create response on the submitted fields.
fn merge_created(fields: &EventFields, body: serde_json::Value) -> Result<Event, ApiError> {
    let mut merged = serde_json::to_value(fields)?;
    match (&mut merged, body) {
        (serde_json::Value::Object(base), serde_json::Value::Object(resp)) => {
            base.extend(resp.into_iter().filter(|(_, v)| !v.is_null()));
        }
        (_, other) => {
            return Err(ApiError::InvalidResponse(format!(
                "expected an event object, got: {other}"
            )));
        }
    }

    let event: Event = serde_json::from_value(merged)?;
    if !event.id.is_set() {
        return Err(ApiError::InvalidResponse(
            "created event has no id".to_string(),
        ));
    }
    Ok(event)
}
