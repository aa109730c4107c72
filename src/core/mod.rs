// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment loading and process management.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!   dotenv     env     process
//!     |         |         |
//!  parser   EnvTable   Builder
//!  loader   Process/   Output
//!           Memory
//! ```

pub mod dotenv;
pub mod env;
pub mod process;
