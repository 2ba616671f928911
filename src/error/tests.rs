// libenv-rs: Environment Variable Access Library
//
// SPDX-FileCopyrightText: 2026 libenv-rs contributors
// SPDX-License-Identifier: MIT

use super::{EnvError, Result};

#[test]
fn test_missing_variables_display() {
    let err = EnvError::MissingVariables {
        missing: vec!["third".to_string(), "fourth".to_string()],
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"environmental variable error, the following environmental variables were not set: [third fourth]"
    );
}

#[test]
fn test_missing_variables_display_single_key() {
    let err = EnvError::MissingVariables {
        missing: vec!["third".to_string()],
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"environmental variable error, the following environmental variables were not set: [third]"
    );
}

#[test]
fn test_parse_error_display() {
    let err = EnvError::Parse {
        entry: "third".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"encountered illegal entry while parsing: third"
    );
}

#[test]
fn test_env_error_size() {
    // Both variants carry one 24-byte payload (Vec or String),
    // discriminant + alignment lands at 32 bytes
    let size = std::mem::size_of::<EnvError>();
    assert!(size <= 32, "EnvError is {size} bytes, expected <= 32");
}

#[test]
fn test_result_size() {
    let size = std::mem::size_of::<Result<()>>();
    assert!(size <= 32, "Result<()> is {size} bytes, expected <= 32");
}
