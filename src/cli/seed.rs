// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;

use super::env::DotenvArgs;

/// Arguments for the `seed` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    #[command(flatten)]
    pub dotenv: DotenvArgs,

    /// API base URL (default: $BASE_URL, then seed.base_url, then http://localhost:8080).
    #[arg(short = 'u', long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}
