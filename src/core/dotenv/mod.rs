// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` file loading.
//!
//! ```text
//! load_env(path?) / load_env_into(path?, &mut table)
//!        |
//!        v
//! resolve_env_path()   path or <exe_dir>/../.env, absolute, normalized
//!        |
//!   exists? --no--> warn --> LoadOutcome::NotFound
//!        |
//!   read_to_string --err--> error --> LoadOutcome::ReadFailed
//!        |
//!   parse_line() per line, table.set() in file order
//!        |
//!        v
//!   info "added N keys" --> LoadOutcome::Applied { count }
//! ```
//!
//! Loading is best-effort: a missing or unreadable file is reported through
//! the outcome and the log, never as an error, so callers carry on with the
//! environment they already have.

pub mod parser;

#[cfg(test)]
mod tests;

use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::core::env::{EnvTable, ProcessEnv};

pub use parser::{Assignment, parse_line, parse_str, strip_quotes};

/// File name looked up when no path is given.
pub const DEFAULT_FILE_NAME: &str = ".env";

/// What happened during one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; `count` assignments were stored in the table.
    Applied { path: PathBuf, count: usize },
    /// Nothing exists at `path`.
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    ReadFailed { path: PathBuf, message: String },
}

impl LoadOutcome {
    /// The resolved, absolute path that was looked at.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Applied { path, .. } | Self::NotFound { path } | Self::ReadFailed { path, .. } => {
                path
            }
        }
    }

    /// Number of keys applied (zero unless [`LoadOutcome::Applied`]).
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::Applied { count, .. } => *count,
            Self::NotFound { .. } | Self::ReadFailed { .. } => 0,
        }
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Default location: `../.env` relative to the directory of the running
/// executable.
#[must_use]
pub fn default_env_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    absolutize(&exe_dir.join("..").join(DEFAULT_FILE_NAME))
}

/// Resolves the file to load: the given path or [`default_env_path`],
/// made absolute.
#[must_use]
pub fn resolve_env_path(path: Option<&Path>) -> PathBuf {
    path.map_or_else(default_env_path, absolutize)
}

/// Joins a relative path onto the current directory and removes `.` and
/// `..` components without touching the filesystem.
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };
    normalize_lexically(&joined)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.file_name().is_some() {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Loads a `.env` file into the process environment.
///
/// # Safety
///
/// Must be called while the process is single-threaded; see
/// [`ProcessEnv::new`].
pub unsafe fn load_env(path: Option<&Path>) -> LoadOutcome {
    // SAFETY: forwarded to the caller.
    let mut table = unsafe { ProcessEnv::new() };
    load_env_into(path, &mut table)
}

/// Loads a `.env` file into `table`.
///
/// Never fails: see [`LoadOutcome`] for the three possible results.
pub fn load_env_into<T>(path: Option<&Path>, table: &mut T) -> LoadOutcome
where
    T: EnvTable + ?Sized,
{
    let path = resolve_env_path(path);

    if !path.exists() {
        warn!(path = %path.display(), ".env file not found");
        return LoadOutcome::NotFound { path };
    }

    info!(path = %path.display(), "loading environment variables");

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            error!(path = %path.display(), error = %e, "error loading .env file");
            return LoadOutcome::ReadFailed {
                path,
                message: e.to_string(),
            };
        }
    };

    let mut count = 0;
    for assignment in parse_str(&contents) {
        if table.set(&assignment.key, &assignment.value) {
            debug!(key = %assignment.key, "set");
            count += 1;
        }
    }

    info!(count, "success: added {count} keys");
    LoadOutcome::Applied { path, count }
}
