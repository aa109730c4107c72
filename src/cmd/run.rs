// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation for utm-tools.

use std::path::PathBuf;
use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::run::RunArgs;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{ProcessError, Result};

/// Exit code reported when the child was stopped by Ctrl+C.
pub const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Main handler for the run command.
///
/// The child inherits stdio and the process environment, which already holds
/// the `.env` assignments.
///
/// # Errors
///
/// Returns an error if no command is given on the command line or in
/// `run.command`, if the program is not on `PATH`, or if it cannot be spawned.
pub async fn run_run_command(args: &RunArgs, config: &Config) -> Result<ExitCode> {
    let (program, program_args) = resolve_command(args, config)?;
    let cwd = working_dir(args, config);

    let mut builder = ProcessBuilder::which(&program)?.args(program_args);
    if let Some(cwd) = cwd {
        builder = builder.cwd(cwd);
    }

    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, stopping {program}...");
            signal_token.cancel();
        }
    });

    let output = builder.run_with_cancellation(cancel_token).await;
    signal_task.abort();
    let output = output?;

    info!(
        exit_code = output.exit_code(),
        interrupted = output.is_interrupted(),
        "command finished"
    );
    Ok(ExitCode::from(exit_code_for(
        output.exit_code(),
        output.is_interrupted(),
    )))
}

/// Program and arguments: the command line wins over `run.command`.
///
/// # Errors
///
/// Returns `ProcessError::NoCommand` if both are empty.
pub fn resolve_command(args: &RunArgs, config: &Config) -> Result<(String, Vec<String>)> {
    let command = if args.command.is_empty() {
        &config.run.command
    } else {
        &args.command
    };
    match command.split_first() {
        Some((program, rest)) => Ok((program.clone(), rest.to_vec())),
        None => Err(ProcessError::NoCommand.into()),
    }
}

/// Maps a finished child onto the launcher's own exit status. Codes outside
/// `0..=255`, including `-1` for a signal, become 1.
#[must_use]
pub fn exit_code_for(code: i32, interrupted: bool) -> u8 {
    if interrupted {
        INTERRUPTED_EXIT_CODE
    } else {
        u8::try_from(code).unwrap_or(1)
    }
}

/// Working directory the run command would use.
#[must_use]
pub fn working_dir(args: &RunArgs, config: &Config) -> Option<PathBuf> {
    args.cwd.clone().or_else(|| config.run.cwd.clone())
}
