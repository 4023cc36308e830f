// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scenario tests: the view models wired to a backend, one request at a time.

mod common;
mod workflows;
