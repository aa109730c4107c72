// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` selection for every command, and the `env` command itself.
//!
//! ```text
//! env_request(command, config)
//!   env --dry        --> Skip   (handled by run_env_dry_command)
//!   env [PATH]       --> Load(PATH | dotenv.path | default)
//!   run / seed       --> Load(--env-file | dotenv.path | default)
//!   ... --no-env     --> Skip
//!   config, version  --> Skip
//! ```


use std::path::{Path, PathBuf};

use crate::cli::Command;
use crate::cli::env::{DotenvArgs, EnvArgs};
use crate::config::Config;
use crate::core::dotenv::{LoadOutcome, load_env_into};
use crate::core::env::{EnvTable, MemoryEnv, ProcessEnv};
use tracing::warn;

/// Whether a command wants a `.env` file applied to the process first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvRequest {
    /// Leave the process environment alone.
    Skip,
    /// Load this file, or the default location when `None`.
    Load(Option<PathBuf>),
}

/// Works out the `.env` request for `command`.
#[must_use]
pub fn env_request(command: Option<&Command>, config: &Config) -> EnvRequest {
    match command {
        Some(Command::Env(args)) if !args.dry => {
            EnvRequest::Load(pick_path(args.path.as_deref(), config))
        }
        Some(Command::Run(args)) => dotenv_request(&args.dotenv, config),
        Some(Command::Seed(args)) => dotenv_request(&args.dotenv, config),
        _ => EnvRequest::Skip,
    }
}

fn dotenv_request(args: &DotenvArgs, config: &Config) -> EnvRequest {
    if args.no_env {
        EnvRequest::Skip
    } else {
        EnvRequest::Load(pick_path(args.env_file.as_deref(), config))
    }
}

fn pick_path(explicit: Option<&Path>, config: &Config) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.dotenv.path.clone())
}

/// Scratch table that refuses the same pairs the process environment does,
/// so a dry run counts exactly what a real load would set.
#[derive(Debug, Default)]
struct DryRunEnv(MemoryEnv);

impl EnvTable for DryRunEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        if !ProcessEnv::accepts(key, value) {
            warn!(key = %key, "skipping variable the process environment cannot hold");
            return false;
        }
        self.0.set(key, value)
    }
}

/// Parses the file into a scratch table, returning the outcome and the keys
/// that would be set, in sorted order.
#[must_use]
pub fn dry_run(path: Option<&Path>) -> (LoadOutcome, Vec<String>) {
    let mut table = DryRunEnv::default();
    let outcome = load_env_into(path, &mut table);
    let keys = table.0.iter().map(|(key, _)| key.to_owned()).collect();
    (outcome, keys)
}

/// Run `utm env --dry`: print the keys the file would set. Values are never
/// printed.
pub fn run_env_dry_command(args: &EnvArgs, config: &Config) {
    let path = pick_path(args.path.as_deref(), config);
    let (_, keys) = dry_run(path.as_deref());
    for key in keys {
        println!("{key}");
    }
}
