// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config, env, run, seed
//! ```
//!
//! The `.env` file is applied by `main` before the async runtime starts;
//! [`env::env_request`] tells it which file a command wants.

pub mod config;
pub mod env;
pub mod run;
pub mod seed;
