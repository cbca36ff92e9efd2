/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Body-validation helpers for request fixture tests.
//!
//! JSON bodies are compared structurally so marshalled requests can be
//! checked against a fixture without caring about key order or whitespace.

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("body did not match. comparison:\n{comparison}")]
    BodyDidNotMatch { comparison: String },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    match inp {
        Ok(_) => (),
        Err(e) => {
            eprintln!("{}", e);
            panic!("Protocol test failed");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// JSON media types are compared structurally, ignoring key order
    Json,
    /// Other media types are compared as strings
    Other(String),
}

pub fn validate_body(
    actual: &str,
    expected: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    match media_type {
        MediaType::Json => {
            let actual_json: serde_json::Value =
                serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
                    expected: "json".to_owned(),
                    found: format!("{} in {}", e, actual),
                })?;
            let expected_json: serde_json::Value =
                serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
                    expected: "json".to_owned(),
                    found: e.to_string(),
                })?;
            match assert_json_diff::assert_json_eq_no_panic(&actual_json, &expected_json) {
                Ok(()) => Ok(()),
                Err(comparison) => Err(ProtocolTestFailure::BodyDidNotMatch { comparison }),
            }
        }
        MediaType::Other(_) => {
            if actual != expected {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: format!("expected: {}\nactual: {}", expected, actual),
                })
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{validate_body, MediaType, ProtocolTestFailure};

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(actual, expected, MediaType::Json).expect("bodies are equivalent");

        let expected = r#"{"abc": 5 }"#;
        let actual = r#"{"abc": 6 }"#;
        validate_body(actual, expected, MediaType::Json).expect_err("bodies differ");

        let expected = r#"{"abc": 5 }"#;
        let actual = "hello!";
        validate_body(actual, expected, MediaType::Other("else".to_owned()))
            .expect_err("bodies are not equal when compared as strings");
    }

    #[test]
    fn test_invalid_json_is_not_a_match() {
        let err = validate_body("[1,2", r#"{"abc": 5 }"#, MediaType::Json)
            .expect_err("actual body is not json");
        assert!(matches!(err, ProtocolTestFailure::InvalidBodyFormat { .. }));
    }
}
