// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::types::EventId;

/// Events backend client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not complete: transport failure, timeout or a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend reports that the event does not exist.
    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// The response body does not have the expected shape.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether the error means the event is absent on the backend.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else if e.is_builder() {
            Self::Config(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
