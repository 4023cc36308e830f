// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use eventdesk_api::EventClient;

use crate::{ApiError, Event, EventFields, EventId};

/// The backend operations the views rely on.
#[async_trait]
pub trait EventBackend: Send + Sync {
    /// Lists all events.
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;

    /// Gets one event.
    async fn get_event(&self, id: EventId) -> Result<Event, ApiError>;

    /// Creates an event and returns it with its assigned id.
    async fn create_event(&self, fields: &EventFields) -> Result<Event, ApiError>;

    /// Replaces the event stored under `id`.
    async fn update_event(&self, id: EventId, fields: &EventFields) -> Result<(), ApiError>;

    /// Deletes the event stored under `id`.
    async fn delete_event(&self, id: EventId) -> Result<(), ApiError>;
}

#[async_trait]
impl EventBackend for EventClient {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        EventClient::list_events(self).await
    }

    async fn get_event(&self, id: EventId) -> Result<Event, ApiError> {
        EventClient::get_event(self, id).await
    }

    async fn create_event(&self, fields: &EventFields) -> Result<Event, ApiError> {
        EventClient::create_event(self, fields).await
    }

    async fn update_event(&self, id: EventId, fields: &EventFields) -> Result<(), ApiError> {
        EventClient::update_event(self, id, fields).await
    }

    async fn delete_event(&self, id: EventId) -> Result<(), ApiError> {
        EventClient::delete_event(self, id).await
    }
}

/// A backend call requested by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch all events.
    List,

    /// Fetch one event.
    Get(EventId),

    /// Create an event.
    Create(EventFields),

    /// Replace an event.
    Update(EventId, EventFields),

    /// Delete an event.
    Delete(EventId),
}

/// The result of a [`Request`], delivered back to the view.
#[derive(Debug)]
pub enum Outcome {
    /// Result of [`Request::List`].
    Listed(Result<Vec<Event>, ApiError>),

    /// Result of [`Request::Get`].
    Loaded(EventId, Result<Event, ApiError>),

    /// Result of [`Request::Create`].
    Created(Result<Event, ApiError>),

    /// Result of [`Request::Update`].
    Updated(EventId, Result<(), ApiError>),

    /// Result of [`Request::Delete`].
    Deleted(EventId, Result<(), ApiError>),
}

impl Outcome {
    /// Whether the underlying call failed.
    pub fn is_err(&self) -> bool {
        match self {
            Self::Listed(r) => r.is_err(),
            Self::Loaded(_, r) | Self::Created(r) => r.is_err(),
            Self::Updated(_, r) | Self::Deleted(_, r) => r.is_err(),
        }
    }
}

/// Runs `request` against `backend`.
///
/// Failures are carried inside the [`Outcome`], nothing is retried.
#[tracing::instrument(skip(backend))]
pub async fn execute<B: EventBackend + ?Sized>(backend: &B, request: Request) -> Outcome {
    let outcome = match request {
        Request::List => Outcome::Listed(backend.list_events().await),
        Request::Get(id) => Outcome::Loaded(id, backend.get_event(id).await),
        Request::Create(fields) => Outcome::Created(backend.create_event(&fields).await),
        Request::Update(id, fields) => {
            Outcome::Updated(id, backend.update_event(id, &fields).await)
        }
        Request::Delete(id) => Outcome::Deleted(id, backend.delete_event(id).await),
    };

    if outcome.is_err() {
        tracing::warn!(?outcome, "backend request failed");
    } else {
        tracing::debug!("backend request completed");
    }
    outcome
}
