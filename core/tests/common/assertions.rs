// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use eventdesk_core::EventList;

/// Asserts the names on the current page of the list, in display order.
///
/// # Panics
///
/// Panics if the names differ.
pub fn assert_page_names(list: &EventList, expected: &[&str]) {
    let page = list.page();
    let names: Vec<&str> = page.rows.iter().map(|r| r.event.name.as_str()).collect();
    assert_eq!(names, expected, "page {} names mismatch", page.number);
}

/// Asserts the names of all filtered events, in display order.
///
/// # Panics
///
/// Panics if the names differ.
pub fn assert_visible_names(list: &EventList, expected: &[&str]) {
    let names: Vec<&str> = list
        .visible_events()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, expected, "visible events mismatch");
}
