// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! View models of eventdesk: the filtered and paginated event list, the
//! add/edit form, confirmation dialogs and routes.
//!
//! Nothing in this crate talks to the network directly. Views emit
//! [`Request`]s, [`execute`] runs them against an [`EventBackend`] and the
//! resulting [`Outcome`] is handed back to the view that asked.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::must_use_candidate)]

mod dialog;
mod editor;
mod list;
mod query;
mod request;
mod route;
mod status;

pub use eventdesk_api::{ApiError, Event, EventFields, EventId};

pub use crate::dialog::ConfirmDialog;
pub use crate::editor::{EventEditor, Field, Mode};
pub use crate::list::{DELETE_PROMPT, EDIT_PROMPT, EventList};
pub use crate::query::{
    EventQuery, MIN_SEARCH_LEN, PAGE_SIZE, Page, Row, SearchRejected, SearchTerm,
    chronological_key, filter_events, page_count, paginate, sort_events,
};
pub use crate::request::{EventBackend, Outcome, Request, execute};
pub use crate::route::{Route, RouteError};
pub use crate::status::{LoadState, Notice, NoticeLevel};

/// The name of the application.
pub const APP_NAME: &str = "eventdesk";
