// libenv-rs: Environment Variable Access Library
//
// SPDX-FileCopyrightText: 2026 libenv-rs contributors
// SPDX-License-Identifier: MIT

//! Entry parsing for `KEY=VALUE` environment listings.
//!
//! # Architecture
//!
//! ```text
//! parse_os_environment()           std::env::vars_os, SkipInvalid
//!         |
//!         v
//! parse_entries(entries, mode)     ordered scan, later keys overwrite
//!         |
//!         v
//! parse_entry(entry)               split on first '=', trim both sides
//! ```
//!
//! - Values may contain `=`; only the first one separates key from value
//! - Keys must be non-empty after trimming, values may be empty
//! - `SkipInvalid` drops malformed entries with a debug event

use std::collections::BTreeMap;

use crate::error::{EnvError, Result};

/// Policy for handling malformed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Abort on the first malformed entry (default)
    #[default]
    FailFast,
    /// Skip malformed entries and keep parsing
    SkipInvalid,
}

/// Parses the operating system's environment listing into a map.
///
/// Malformed entries are skipped, so construction is best effort and never
/// fails. Keys and values are converted lossily from the OS encoding.
#[must_use]
pub fn parse_os_environment() -> BTreeMap<String, String> {
    let entries: Vec<String> = std::env::vars_os()
        .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
        .collect();

    // SkipInvalid never returns an error
    parse_entries(&entries, ParseMode::SkipInvalid).unwrap_or_default()
}

/// Parses an ordered sequence of raw `KEY=VALUE` entries into a map.
///
/// Later entries overwrite earlier ones with the same key. Under
/// [`ParseMode::FailFast`] the first malformed entry aborts the whole parse;
/// under [`ParseMode::SkipInvalid`] malformed entries are dropped and the
/// scan continues.
///
/// # Errors
///
/// Returns [`EnvError::Parse`] for the first malformed entry when `mode` is
/// [`ParseMode::FailFast`].
pub fn parse_entries<I, S>(entries: I, mode: ParseMode) -> Result<BTreeMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vars = BTreeMap::new();

    for entry in entries {
        let entry = entry.as_ref();
        match parse_entry(entry) {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(err) => match mode {
                ParseMode::FailFast => return Err(err),
                ParseMode::SkipInvalid => {
                    tracing::debug!(entry, "skipping malformed environment entry");
                }
            },
        }
    }

    Ok(vars)
}

/// Splits one raw entry into a trimmed `(key, value)` pair.
///
/// Only the first `=` separates key from value. The trimmed key must be
/// non-empty; the trimmed value may be empty.
fn parse_entry(entry: &str) -> Result<(String, String)> {
    let Some((key, value)) = entry.split_once('=') else {
        return Err(EnvError::Parse {
            entry: entry.to_owned(),
        });
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(EnvError::Parse {
            entry: entry.to_owned(),
        });
    }

    Ok((key.to_owned(), value.trim().to_owned()))
}
