// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for `.env` handling: the `env` command and the env-file
//! options shared by `run` and `seed`.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// .env file to load (default: ../.env beside the utm executable).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Parse the file and list the keys it would set, without applying them.
    #[arg(long)]
    pub dry: bool,
}

/// Env-file selection for commands that load it before doing their work.
#[derive(Debug, Clone, Default, Args)]
pub struct DotenvArgs {
    /// .env file to load first.
    #[arg(short = 'e', long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Don't load any .env file.
    #[arg(long = "no-env", conflicts_with = "env_file")]
    pub no_env: bool,
}
