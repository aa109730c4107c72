// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Seed command implementation for utm-tools.

use tracing::info;

use crate::api::ApiClient;
use crate::cli::seed::SeedArgs;
use crate::config::Config;
use crate::core::env::current_env;
use crate::error::Result;
use crate::seed::{Seeder, resolve_base_url};

/// Main handler for the seed command.
///
/// # Errors
///
/// Returns an error if the server is unreachable or `/api/users/me` fails for
/// a signed-in user.
pub async fn run_seed_command(args: &SeedArgs, config: &Config) -> Result<()> {
    let base_url = resolve_base_url(args.base_url.as_deref(), &current_env(), &config.seed);
    let seeder = Seeder::from_config(ApiClient::new(base_url), &config.seed);

    let report = seeder.run().await?;
    info!(
        users = report.users.len(),
        signed_in = report.signed_in(),
        total = ?report.total_users,
        "seeding finished"
    );
    Ok(())
}
