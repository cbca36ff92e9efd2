/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_core::credentials::Credentials;
use aws_core::endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_core::region::Region;
use aws_exec::test_connection::{FailingConnection, TestConnection, ValidateRequest};
use aws_exec::{Client, SdkError};
use bytes::Bytes;
use http::{Response, Uri};
use sdk_http::body::SdkBody;
use sdk_http::operation;
use sdk_http::operation::Operation;
use sdk_http::response::ParseHttpResponse;
use std::convert::Infallible;
use std::sync::Arc;

#[derive(Clone)]
struct TestOperationParser;

impl<B> ParseHttpResponse<B> for TestOperationParser
where
    B: http_body::Body,
{
    type Output = Result<String, TestError>;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        Some(Ok("Hello!".to_string()))
    }

    fn parse_loaded(&self, _response: &Response<Bytes>) -> Self::Output {
        Ok("Hello!".to_string())
    }
}

#[derive(Debug)]
struct TestError;

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "test error")
    }
}

impl std::error::Error for TestError {}

impl sdk_types::retry::ProvideErrorKind for TestError {
    fn retryable_error_kind(&self) -> Option<sdk_types::retry::ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        None
    }
}

fn test_operation() -> Operation<TestOperationParser, ()> {
    let req = operation::Request::new(http::Request::new(SdkBody::from("request body")))
        .augment(|req, conf| {
            set_endpoint_resolver(
                conf,
                Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
            );
            aws_core::credentials::set_provider(
                conf,
                Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
            );
            conf.insert(Region::new("test-region"));
            Result::<_, Infallible>::Ok(req)
        })
        .unwrap();
    Operation::new(req, TestOperationParser)
}

#[tokio::test]
async fn e2e_test() {
    let expected_req = http::Request::builder()
        .uri(Uri::from_static(
            "https://test-service.test-region.amazonaws.com/",
        ))
        .body(SdkBody::from("request body"))
        .unwrap();
    let events = vec![(
        expected_req,
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation()).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "Hello!");

    assert_eq!(conn.requests().len(), 1);
    let ValidateRequest { expected, actual } = &conn.requests()[0];
    assert_eq!(actual.body().bytes(), expected.body().bytes());
    assert_eq!(actual.uri(), expected.uri());
}

#[tokio::test]
async fn dispatch_failure_surfaces_as_client_side_error() {
    let client = Client::new(FailingConnection::new());
    let err = client
        .call(test_operation())
        .await
        .expect_err("connection fails");
    match err {
        SdkError::DispatchFailure(e) => {
            assert!(e.to_string().contains("connection refused"), "{}", e)
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}
