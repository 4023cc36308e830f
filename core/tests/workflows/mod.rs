// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the eventdesk-core crate.
//!
//! These tests drive the list and form view models through their requests,
//! executed against an in-memory backend or a mock HTTP server, the same way
//! the terminal UI does.

mod event_lifecycle;
mod http_backend;
mod list_browsing;
