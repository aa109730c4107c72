// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for utm-tools using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! utm [global options] <command>
//! env [PATH] [--dry]
//! run [--env-file PATH | --no-env] [--cwd DIR] [--] PROGRAM [ARGS...]
//! seed [--base-url URL] [--env-file PATH | --no-env]
//! config
//! version
//! ```

pub mod env;
pub mod global;
pub mod run;
pub mod seed;


use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::run::RunArgs;
use crate::cli::seed::SeedArgs;
use clap::{Parser, Subcommand};

/// UTM developer tools.
#[derive(Debug, Parser)]
#[command(
    name = "utm",
    author,
    version,
    about = "UTM developer tools",
    long_about = "UTM developer tools.\n\n\
                  Loads the project's .env file, starts services with it, and\n\
                  seeds a running server with sample users. See\n\
                  `utm <command> --help` for more information about a command.",
    after_help = "ENV FILE:\n\n\
                  Without an explicit path, utm loads `../.env` relative to the\n\
                  directory holding the utm executable. A missing or unreadable\n\
                  file is reported on stderr and never stops the command.\n\n\
                  CONFIG FILES:\n\n\
                  utm reads `utm.toml` from the current directory if present,\n\
                  then every --config file in order, then UTM_<SECTION>__<KEY>\n\
                  environment variables."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints the effective configuration.
    Config,

    /// Loads a .env file and reports how many keys it applied.
    Env(EnvArgs),

    /// Loads the .env file, then runs a command with that environment.
    Run(RunArgs),

    /// Seeds a running server with sample users.
    Seed(SeedArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
