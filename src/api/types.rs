// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request and response bodies of the UTM REST API.

use serde::{Deserialize, Serialize};

use crate::config::types::{AccountType, SeedUser};

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub account_type: AccountType,
}

impl<'a> From<&'a SeedUser> for SignupRequest<'a> {
    fn from(user: &'a SeedUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            password: &user.password,
            account_type: user.account_type,
        }
    }
}

/// Body of `POST /api/auth/signin`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a SeedUser> for Credentials<'a> {
    fn from(user: &'a SeedUser) -> Self {
        Self {
            email: &user.email,
            password: &user.password,
        }
    }
}

/// Tokens returned by signin. The server keeps the refresh token in an
/// HTTP-only cookie, so the body usually carries the access token alone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Response of `GET /api/users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MeUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}
