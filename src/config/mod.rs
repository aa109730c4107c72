// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for utm-tools.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. utm.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. UTM_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! UTM_SEED__BASE_URL=http://api:8080 → seed.base_url
//! UTM_DOTENV__PATH=/srv/utm/.env     → dotenv.path
//! UTM_GLOBAL__OUTPUT_LOG_LEVEL=4     → global.output_log_level
//! ```
//!
//! Configuration is read before the `.env` file is loaded, so `UTM_*`
//! variables set there do not feed back into it.

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
use types::{DotenvConfig, GlobalConfig, RunConfig, SeedConfig};

/// Name of the optional configuration file in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "utm.toml";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "UTM";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    pub dotenv: DotenvConfig,
    pub run: RunConfig,
    pub seed: SeedConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use utm_tools::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("utm.toml")
    ///     .with_env_prefix("UTM")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Passwords are shown as `[hidden]`. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_dotenv_options(&mut options);
        self.format_run_options(&mut options);
        self.format_seed_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_dotenv_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "dotenv.path".into(),
            fmt_path(self.dotenv.path.as_ref()),
        );
    }

    fn format_run_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("run.command".into(), self.run.command.join(" "));
        options.insert("run.cwd".into(), fmt_path(self.run.cwd.as_ref()));
    }

    fn format_seed_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "seed.base_url".into(),
            self.seed.base_url.clone().unwrap_or_default(),
        );
        options.insert(
            "seed.settle_delay_ms".into(),
            self.seed.settle_delay_ms.to_string(),
        );
        for (i, user) in self.seed.users.iter().enumerate() {
            options.insert(format!("seed.users.{i}.name"), user.name.clone());
            options.insert(format!("seed.users.{i}.email"), user.email.clone());
            options.insert(format!("seed.users.{i}.password"), "[hidden]".into());
            options.insert(
                format!("seed.users.{i}.account_type"),
                user.account_type.to_string(),
            );
        }
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
