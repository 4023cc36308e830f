// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration test for the common module.
//!
//! Verifies that common test utilities work correctly.

mod common;

use common::{MemoryBackend, numbered_events, test_fields};
use eventdesk_core::{EventBackend, EventId};

#[tokio::test]
async fn memory_backend_assigns_ids() {
    let backend = MemoryBackend::with_events(numbered_events(3));
    let created = backend
        .create_event(&test_fields("New", "2024-01-01", "12:00"))
        .await
        .unwrap();
    assert_eq!(created.id, EventId::new(4));
    assert_eq!(backend.snapshot().len(), 4);
}

#[tokio::test]
async fn memory_backend_reports_missing_events() {
    let backend = MemoryBackend::default();
    let err = backend.delete_event(EventId::new(1)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn memory_backend_injects_one_failure() {
    let backend = MemoryBackend::with_events(numbered_events(1));
    backend.fail_next();
    assert!(backend.list_events().await.is_err());
    assert_eq!(backend.list_events().await.unwrap().len(), 1);
    assert_eq!(backend.list_calls(), 2);
}
