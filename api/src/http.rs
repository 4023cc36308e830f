// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status mapping.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::{ApiConfig, AuthMethod};
use crate::error::ApiError;
use crate::types::EventId;

/// HTTP client for backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Builds a request with authentication headers.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method, url);

        match &self.config.auth {
            AuthMethod::Basic { username, password } => {
                req = req.basic_auth(username, Some(password));
            }
            AuthMethod::Bearer { token } => {
                req = req.bearer_auth(token);
            }
            AuthMethod::None => {}
        }

        req
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// `target` is the event addressed by the request, a 404 on it becomes
    /// [`ApiError::NotFound`]. Collection requests pass `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(
        &self,
        req: RequestBuilder,
        target: Option<EventId>,
    ) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        tracing::debug!(%status, url = %resp.url(), "backend responded");

        match (status, target) {
            (s, _) if s.is_success() => Ok(resp),
            (StatusCode::NOT_FOUND, Some(id)) => Err(ApiError::NotFound(id)),
            (status, _) => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(ApiError::Network(format!("{status}: {text}")))
            }
        }
    }
}
