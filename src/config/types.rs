// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for utm-tools.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, DotenvConfig, RunConfig, SeedConfig
//! SeedConfig.users: [SeedUser { name, email, password, account_type }]
//! AccountType: BUYER | SELLER
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, empty for none.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// `.env` loading options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DotenvConfig {
    /// File to load instead of `../.env` beside the executable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Default command for `utm run`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Program followed by its arguments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    /// Working directory for the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

/// Account kind, as the server's enum spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Buyer,
    Seller,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buyer => write!(f, "BUYER"),
            Self::Seller => write!(f, "SELLER"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BUYER" => Ok(Self::Buyer),
            "SELLER" => Ok(Self::Seller),
            _ => Err(ConfigError::InvalidValue {
                section: "seed.users".to_string(),
                key: "account_type".to_string(),
                message: format!("expected 'BUYER' or 'SELLER', got '{s}'"),
            }),
        }
    }
}

/// A sample user created by `utm seed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub account_type: AccountType,
}

impl SeedUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            account_type,
        }
    }
}

/// Database seeding options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// API base URL; `--base-url` and `BASE_URL` take precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Pause between signin and `/me`, in milliseconds.
    pub settle_delay_ms: u64,
    pub users: Vec<SeedUser>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            settle_delay_ms: 200,
            users: vec![
                SeedUser::new(
                    "Alice Buyer",
                    "alice@example.com",
                    "Passw0rd!",
                    AccountType::Buyer,
                ),
                SeedUser::new(
                    "Bob Seller",
                    "bob@example.com",
                    "Passw0rd!",
                    AccountType::Seller,
                ),
            ],
        }
    }
}
