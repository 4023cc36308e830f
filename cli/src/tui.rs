// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod component;
mod component_dialog;
mod component_form;
mod component_page;
mod dispatcher;
mod editor_page;
mod editor_store;
mod list_page;
mod list_store;

pub use app::open;
