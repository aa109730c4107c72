// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the handful of UTM REST endpoints the seeder calls.
//!
//! ```text
//! ApiClient::new(base_url)
//!   signup(user)         POST /api/auth/signup
//!   signin(creds)        POST /api/auth/signin   --> TokenPair
//!   me(token)            GET  /api/users/me      --> MeUser
//!   find_all_users(tok?) GET  /api/users/findall --> Vec<Value>
//!
//! Global client: OnceLock, connection pool, keep-alive
//! Non-2xx: NetworkError::HttpError { status, url, body }
//! ```

pub mod types;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::{NetworkError, UtmResult};
use types::{Credentials, MeUser, SignupRequest, TokenPair};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Global HTTP client, initialized once and reused across requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("utm-tools/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Thin wrapper over the UTM REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url`; a trailing `/` is dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: global_client().clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Registers a user. Returns the raw JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx
    /// (409 when the user already exists).
    pub async fn signup(&self, user: &SignupRequest<'_>) -> UtmResult<serde_json::Value> {
        let url = self.url("/api/auth/signup");
        self.send(self.client.post(&url).json(user), url).await
    }

    /// Signs a user in and returns its JWT pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers non-2xx, or
    /// the body is not a token pair.
    pub async fn signin(&self, credentials: &Credentials<'_>) -> UtmResult<TokenPair> {
        let url = self.url("/api/auth/signin");
        self.send(self.client.post(&url).json(credentials), url)
            .await
    }

    /// Fetches the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn me(&self, access_token: &str) -> UtmResult<MeUser> {
        let url = self.url("/api/users/me");
        self.send(self.client.get(&url).bearer_auth(access_token), url)
            .await
    }

    /// Lists all users, authenticated when a token is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers non-2xx, or
    /// the body is not a JSON array.
    pub async fn find_all_users(
        &self,
        access_token: Option<&str>,
    ) -> UtmResult<Vec<serde_json::Value>> {
        let url = self.url("/api/users/findall");
        let mut request = self.client.get(&url);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        self.send(request, url).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: String) -> UtmResult<T> {
        debug!(url = %url, "request");
        let response = request.send().await.map_err(NetworkError::Reqwest)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url,
                body,
            }
            .into());
        }

        response
            .json()
            .await
            .map_err(|e| NetworkError::Reqwest(e).into())
    }
}
