// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BASE_URL_VAR, SeedReport, UserOutcome, resolve_base_url};
use crate::config::types::SeedConfig;
use crate::core::env::{EnvTable, MemoryEnv};

fn config_with(base_url: Option<&str>) -> SeedConfig {
    SeedConfig {
        base_url: base_url.map(str::to_owned),
        ..SeedConfig::default()
    }
}

#[test]
fn test_base_url_precedence() {
    let mut env = MemoryEnv::new();
    env.set(BASE_URL_VAR, "http://from-env");
    let config = config_with(Some("http://from-config"));

    assert_eq!(
        resolve_base_url(Some("http://from-cli"), &env, &config),
        "http://from-cli"
    );
    assert_eq!(resolve_base_url(None, &env, &config), "http://from-env");
    assert_eq!(
        resolve_base_url(None, &MemoryEnv::new(), &config),
        "http://from-config"
    );
    assert_eq!(
        resolve_base_url(None, &MemoryEnv::new(), &config_with(None)),
        "http://localhost:8080"
    );
}

#[test]
fn test_report_signed_in_count() {
    let outcome = |email: &str, signed_in| UserOutcome {
        email: email.to_string(),
        signed_up: true,
        signed_in,
        me: None,
    };
    let report = SeedReport {
        users: vec![outcome("a@example.com", true), outcome("b@example.com", false)],
        total_users: Some(2),
    };
    assert_eq!(report.signed_in(), 1);
}
