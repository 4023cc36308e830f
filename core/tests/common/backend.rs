// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! An in-memory [`EventBackend`] for workflow tests.
//!
//! It behaves like the REST backend: ids are assigned on create, unknown ids
//! yield `NotFound`, and a failure can be injected for the next call.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use eventdesk_core::{ApiError, Event, EventBackend, EventFields, EventId};

/// Events kept in memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    events: Mutex<Vec<Event>>,
    list_calls: AtomicUsize,
    fail_next: AtomicBool,
}

impl MemoryBackend {
    /// Creates a backend holding `events`.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Default::default()
        }
    }

    /// A snapshot of the stored events.
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// How many times the events were listed.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Makes the next call fail with a network error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Network("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventBackend for MemoryBackend {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.snapshot())
    }

    async fn get_event(&self, id: EventId) -> Result<Event, ApiError> {
        self.check_failure()?;
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    async fn create_event(&self, fields: &EventFields) -> Result<Event, ApiError> {
        self.check_failure()?;
        let mut events = self.events.lock().unwrap();
        let next = events.iter().map(|e| e.id.get()).max().unwrap_or(0) + 1;
        let event = Event::with_fields(EventId::new(next), fields.clone());
        events.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: EventId, fields: &EventFields) -> Result<(), ApiError> {
        self.check_failure()?;
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ApiError::NotFound(id))?;
        *event = Event::with_fields(id, fields.clone());
        Ok(())
    }

    async fn delete_event(&self, id: EventId) -> Result<(), ApiError> {
        self.check_failure()?;
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(ApiError::NotFound(id));
        }
        Ok(())
    }
}
