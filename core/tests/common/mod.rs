// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for the integration tests: [`MemoryBackend`] stands in for
//! the REST server, fixtures build events and the assertions compare what a
//! list view shows by event name.

mod assertions;
mod backend;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_page_names, assert_visible_names};
pub use backend::MemoryBackend;
#[allow(unused_imports)]
pub use fixtures::{numbered_events, scenario_a_events, test_event, test_fields};
