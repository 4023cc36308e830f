// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the events backend (`/events` list, get, create, update and delete).

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::EventClient;
pub use crate::config::{ApiConfig, AuthMethod, DEFAULT_BASE_URL};
pub use crate::error::ApiError;
pub use crate::types::{Event, EventFields, EventId};
