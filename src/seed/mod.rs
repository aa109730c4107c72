// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Database seeding through the public REST API.
//!
//! ```text
//! for user in users:
//!   signup   --http error--> log, carry on (user may exist)
//!   signin   --http error--> log, next user
//!   sleep(settle_delay)
//!   me       --error-------> abort
//! find_all_users(first token?) --error--> log
//!   |
//!   v
//! SeedReport
//! ```
//!
//! Requests run strictly one after another.

#[cfg(test)]
mod tests;

use bon::Builder;
use std::time::Duration;
use tracing::{info, warn};

use crate::api::types::{Credentials, MeUser, SignupRequest};
use crate::api::{ApiClient, DEFAULT_BASE_URL};
use crate::config::types::{SeedConfig, SeedUser};
use crate::core::env::EnvTable;
use crate::error::{UtmError, UtmResult};

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Picks the base URL: `--base-url`, then `BASE_URL`, then config, then
/// [`DEFAULT_BASE_URL`].
pub fn resolve_base_url<T>(cli: Option<&str>, env: &T, config: &SeedConfig) -> String
where
    T: EnvTable + ?Sized,
{
    cli.map(str::to_owned)
        .or_else(|| env.get(BASE_URL_VAR))
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

/// What happened to one sample user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOutcome {
    pub email: String,
    pub signed_up: bool,
    pub signed_in: bool,
    pub me: Option<MeUser>,
}

/// Result of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub users: Vec<UserOutcome>,
    /// Size of `/api/users/findall`, `None` if that call failed.
    pub total_users: Option<usize>,
}

impl SeedReport {
    /// Number of users that could sign in.
    #[must_use]
    pub fn signed_in(&self) -> usize {
        self.users.iter().filter(|u| u.signed_in).count()
    }
}

/// Walks the configured users through signup, signin and `/me`.
#[derive(Debug, Clone, Builder)]
pub struct Seeder {
    client: ApiClient,
    users: Vec<SeedUser>,
    #[builder(default = Duration::from_millis(200))]
    settle_delay: Duration,
}

impl Seeder {
    /// Seeder for `config` talking to `client`.
    #[must_use]
    pub fn from_config(client: ApiClient, config: &SeedConfig) -> Self {
        Self::builder()
            .client(client)
            .users(config.users.clone())
            .settle_delay(Duration::from_millis(config.settle_delay_ms))
            .build()
    }

    /// Runs the seeding flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached, or if `/me` fails for
    /// a user that just signed in. HTTP errors on signup, signin and the user
    /// listing are logged and do not stop the run.
    pub async fn run(&self) -> UtmResult<SeedReport> {
        info!(base_url = %self.client.base_url(), "seeding");

        let mut outcomes = Vec::with_capacity(self.users.len());
        let mut first_token: Option<String> = None;

        for user in &self.users {
            let mut outcome = UserOutcome {
                email: user.email.clone(),
                signed_up: false,
                signed_in: false,
                me: None,
            };

            info!(email = %user.email, "signing up");
            match self.client.signup(&SignupRequest::from(user)).await {
                Ok(response) => {
                    outcome.signed_up = true;
                    let keys: Vec<&str> = response
                        .as_object()
                        .map(|o| o.keys().map(String::as_str).collect())
                        .unwrap_or_default();
                    info!(email = %user.email, keys = ?keys, "signup response");
                }
                Err(e) if is_http_error(&e) => {
                    warn!(email = %user.email, error = %e, "signup failed");
                }
                Err(e) => return Err(e),
            }

            info!(email = %user.email, "signing in");
            let tokens = match self.client.signin(&Credentials::from(user)).await {
                Ok(tokens) => tokens,
                Err(e) if is_http_error(&e) => {
                    warn!(email = %user.email, error = %e, "signin failed");
                    outcomes.push(outcome);
                    continue;
                }
                Err(e) => return Err(e),
            };
            outcome.signed_in = true;

            if !self.settle_delay.is_zero() {
                tokio::time::sleep(self.settle_delay).await;
            }

            let me = self.client.me(&tokens.access_token).await?;
            info!(
                email = %user.email,
                id = ?me.id,
                name = me.name.as_deref().unwrap_or_default(),
                "/me"
            );
            outcome.me = Some(me);

            if first_token.is_none() {
                first_token = Some(tokens.access_token);
            }
            outcomes.push(outcome);
        }

        info!("fetching all users");
        let total_users = match self.client.find_all_users(first_token.as_deref()).await {
            Ok(users) => {
                info!(count = users.len(), "found {} users", users.len());
                Some(users.len())
            }
            Err(e) => {
                warn!(error = %e, "error fetching users");
                None
            }
        };

        Ok(SeedReport {
            users: outcomes,
            total_users,
        })
    }
}

fn is_http_error(err: &UtmError) -> bool {
    matches!(err, UtmError::Network(e) if e.status().is_some())
}
