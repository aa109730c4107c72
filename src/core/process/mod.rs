// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("npm")
//!   .args() .cwd()
//!   .run() / .run_with_cancellation()
//!       --> tokio::process::Command (inherited stdio)
//!       --> ProcessOutput { exit_code, interrupted }
//! ```

pub mod builder;
mod runner;
