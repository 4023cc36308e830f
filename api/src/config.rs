// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Credentials attached to every backend request.
///
/// In TOML this is an inline table tagged by `type`, e.g.
/// `auth = { type = "bearer", token = "..." }`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthMethod {
    /// Anonymous access, the default.
    #[default]
    None,

    /// HTTP basic auth.
    Basic {
        /// User name.
        username: String,
        /// Password, sent as is.
        password: String,
    },

    /// `Authorization: Bearer <token>`.
    Bearer {
        /// The token.
        token: String,
    },
}

/// The `[api]` section of the configuration file.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, the `/events` resource lives directly under it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How requests authenticate.
    #[serde(default)]
    pub auth: AuthMethod,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("eventdesk-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
