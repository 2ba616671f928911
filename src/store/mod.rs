// libenv-rs: Environment Variable Access Library
//
// SPDX-FileCopyrightText: 2026 libenv-rs contributors
// SPDX-License-Identifier: MIT

//! Environment store.
//!
//! # Architecture
//!
//! ```text
//! Environment (BTreeMap<String, String>)
//! Sources: from_process(), from_map(), new()
//! Reads: get / get_or_default / obligatory / variables / to_map / iter
//! Writes: set / remove / variables_mut
//! ```
//!
//! - Exclusive single-owner access, no interior locking
//! - `get` returns `""` for absent keys; absent and empty are
//!   indistinguishable through it (use `variables()` when the difference
//!   matters)

use std::collections::BTreeMap;

use crate::error::{EnvError, Result};
use crate::parser;

/// An in-memory mapping from environment variable name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: BTreeMap<String, String>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    /// Wraps an existing map of variables. The map is taken as-is, no copy.
    #[must_use]
    pub const fn from_map(variables: BTreeMap<String, String>) -> Self {
        Self { variables }
    }

    /// Captures the current process environment.
    ///
    /// Malformed entries in the OS listing are skipped, so this never fails.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_map(parser::parse_os_environment())
    }

    /// Returns the underlying map of variables.
    #[must_use]
    pub const fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    /// Returns the underlying map mutably.
    ///
    /// Changes made through this reference are visible to the store. This is
    /// an escape hatch; prefer [`set`](Self::set) and
    /// [`remove`](Self::remove). Keys inserted here are not validated.
    pub const fn variables_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.variables
    }

    /// Returns a defensive copy of all variables.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.variables.clone()
    }

    /// Returns the value for `key`, or `""` if the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.variables.get(key).map_or("", String::as_str)
    }

    /// Returns the value for `key`, or `default` if the key is absent.
    #[must_use]
    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.variables.get(key).map_or(default, String::as_str)
    }

    /// Resolves every key in `keys`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::MissingVariables`] with the absent keys in lookup
    /// order if any key is not set. No values are returned in that case.
    pub fn obligatory<I, S>(&self, keys: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Vec::new();
        let mut missing = Vec::new();

        for key in keys {
            let key = key.as_ref();
            match self.variables.get(key) {
                Some(value) => values.push(value.clone()),
                None => missing.push(key.to_owned()),
            }
        }

        if missing.is_empty() {
            Ok(values)
        } else {
            Err(EnvError::MissingVariables { missing })
        }
    }

    /// Sets a variable, overwriting any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Removes a variable if it exists; no-op otherwise.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.variables.remove(key);
        self
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }
}
