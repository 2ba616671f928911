// libenv-rs: Environment Variable Access Library
//
// SPDX-FileCopyrightText: 2026 libenv-rs contributors
// SPDX-License-Identifier: MIT

//! Error handling module.
//!
//! ```text
//!            EnvError
//!               |
//!       +-------+-------+
//!       v               v
//! MissingVariables    Parse
//!   Vec<String>       String (raw entry)
//! ```
//!
//! Both variants are recoverable; nothing here terminates the process.

use thiserror::Error;

/// Fixed header prefixed to missing-variable error messages.
pub const ENV_ERROR_HEADER: &str = "environmental variable error";

/// Result type using [`EnvError`].
pub type Result<T> = std::result::Result<T, EnvError>;

/// Errors produced by environment lookup and entry parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvError {
    /// One or more obligatory variables were not set.
    ///
    /// `missing` holds the absent keys in lookup order.
    #[error("{ENV_ERROR_HEADER}, the following environmental variables were not set: [{}]", .missing.join(" "))]
    MissingVariables { missing: Vec<String> },

    /// An entry could not be parsed as `KEY=VALUE`.
    ///
    /// Raised when an entry has no `=` separator or its key is empty after
    /// trimming. `entry` is the offending raw string.
    #[error("encountered illegal entry while parsing: {entry}")]
    Parse { entry: String },
}

#[cfg(test)]
mod tests;
