// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment table trait and its two implementations.

use std::collections::BTreeMap;
use tracing::warn;

/// A mutable key/value environment table.
///
/// Keys are unique; setting an existing key replaces its value.
pub trait EnvTable {
    /// Gets a variable value.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets a variable, replacing any previous value.
    ///
    /// Returns `false` if the table cannot hold this key/value pair.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// The environment of the running process.
///
/// Writes go to `std::env::set_var`. Construct it only from the main thread
/// before any other thread is started (see [`ProcessEnv::new`]).
#[derive(Debug)]
pub struct ProcessEnv {
    _private: (),
}

impl ProcessEnv {
    /// Handle to the process environment.
    ///
    /// # Safety
    ///
    /// Mutating the process environment is only sound while no other thread
    /// reads or writes it. Callers must hold this handle only while the
    /// process is single-threaded, i.e. before the async runtime is built.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }

    /// Whether the operating system can store this pair.
    ///
    /// `std::env::set_var` panics on an empty key, a key containing `=`,
    /// or a NUL byte anywhere.
    #[must_use]
    pub fn accepts(key: &str, value: &str) -> bool {
        !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl EnvTable for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        if !Self::accepts(key, value) {
            warn!(key = %key, "skipping variable the process environment cannot hold");
            return false;
        }
        // SAFETY: `ProcessEnv::new` requires the process to be
        // single-threaded for as long as this handle is used.
        unsafe {
            std::env::set_var(key, value);
        }
        true
    }
}

/// An in-memory environment table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates a table from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvTable for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.vars.insert(key.to_owned(), value.to_owned());
        true
    }
}
