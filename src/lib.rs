// libenv-rs: Environment Variable Access Library
//
// SPDX-FileCopyrightText: 2026 libenv-rs contributors
// SPDX-License-Identifier: MIT

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!            Environment (store)
//!     from_map / from_process / new
//!   get / get_or_default / obligatory
//!        set / remove / accessors
//!                  |
//!                  v
//!               parser
//!   "KEY=VALUE" entries -> BTreeMap
//!     ParseMode: FailFast | SkipInvalid
//!                  |
//!                  v
//!                error
//!    EnvError: MissingVariables | Parse
//! ```
//!
//! The parser runs once when constructing from the live process environment;
//! afterwards every operation is a direct in-memory map operation. Single
//! exclusive owner, no interior locking.

pub mod error;
pub mod parser;
pub mod store;

pub use error::{EnvError, Result};
pub use parser::{ParseMode, parse_entries, parse_os_environment};
pub use store::Environment;
