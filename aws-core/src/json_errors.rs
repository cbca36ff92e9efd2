/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error-code extraction for AWS JSON protocols.
//!
//! Error responses carry the error shape name either in the body, as a
//! `__type` (or `code`) field, or in the `x-amzn-errortype` header. The
//! value may be decorated with a namespace prefix (`namespace#Shape`) and a
//! URI suffix (`Shape:https://...`), both of which must be stripped before
//! matching against an operation's error table.

use bytes::Bytes;
use http::header::HeaderMap;
use sdk_types::Error;
use serde_json::Value;

pub fn is_error<B>(response: &http::Response<B>) -> bool {
    !response.status().is_success()
}

fn error_type_from_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
}

fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok())
}

/// Strip the namespace prefix and any `:` suffix from an error code.
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/...`
/// becomes `FooError`.
pub fn sanitize_error_code(code: &str) -> &str {
    let code = match code.find('#') {
        Some(idx) => &code[idx + 1..],
        None => code,
    };
    match code.find(':') {
        Some(idx) => &code[..idx],
        None => code,
    }
}

fn error_code(body: &Value, headers: &HeaderMap) -> Option<String> {
    let from_body = body
        .get("__type")
        .or_else(|| body.get("code"))
        .and_then(Value::as_str);
    from_body
        .or_else(|| error_type_from_header(headers))
        .map(|code| sanitize_error_code(code).to_string())
}

fn error_message(body: &Value) -> Option<&str> {
    body.get("message")
        .or_else(|| body.get("Message"))
        .or_else(|| body.get("errorMessage"))
        .and_then(Value::as_str)
}

/// Parse an unmodeled error out of a loaded response.
///
/// This never fails: a response body that is not valid JSON simply produces
/// an error with no code or message.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> Error {
    let body: Value = serde_json::from_slice(response.body()).unwrap_or_default();
    let mut err = Error::builder();
    if let Some(code) = error_code(&body, response.headers()) {
        err.code(code);
    }
    if let Some(message) = error_message(&body) {
        err.message(message);
    }
    if let Some(request_id) = request_id(response.headers()) {
        err.request_id(request_id);
    }
    err.build()
}

#[cfg(test)]
mod test {
    use super::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn sanitize_namespace_and_uri() {
        let all = "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/";
        assert_eq!(sanitize_error_code(all), "FooError");
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }

    #[test]
    fn code_from_body() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "DEADBEEF")
            .body(Bytes::from_static(
                br#"{"__type":"ResourceNotFoundException","message":"no such stream"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("no such stream"));
        assert_eq!(err.request_id(), Some("DEADBEEF"));
    }

    #[test]
    fn code_from_header_when_body_is_empty() {
        let response = http::Response::builder()
            .status(400)
            .header(
                "x-amzn-errortype",
                "com.amazonaws.machinelearning#InvalidInputException",
            )
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("InvalidInputException"));
    }

    #[test]
    fn garbage_body_produces_empty_error() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::from_static(b"<html>Internal Server Error</html>"))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }
}
