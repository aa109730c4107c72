// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable tables.
//!
//! # Architecture
//!
//! ```text
//! EnvTable (get/set)
//!   ProcessEnv  std::env, the real process table
//!   MemoryEnv   BTreeMap<String, String>, tests and dry runs
//! ```
//!
//! The `.env` loader writes through [`EnvTable`] so tests never touch the
//! process-wide table.

pub mod table;


pub use table::{EnvTable, MemoryEnv, ProcessEnv};

/// Captures the current process environment into a [`MemoryEnv`].
#[must_use]
pub fn current_env() -> MemoryEnv {
    MemoryEnv::from_map(std::env::vars().collect())
}
