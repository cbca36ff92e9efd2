/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_core::Credentials;
use aws_exec::test_connection::{FailingConnection, TestConnection};
use aws_exec::SdkError;
use http::Uri;
use kinesisvideo::error::DescribeStreamError;
use kinesisvideo::model::StreamStatus;
use kinesisvideo::{Client, Config, Region};
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use sdk_http::body::SdkBody;

fn test_conf() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            None,
        ))
        .build()
}

#[tokio::test]
async fn create_stream_round_trip() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/json")
            .uri(Uri::from_static(
                "https://kinesisvideo.us-east-1.amazonaws.com/createStream",
            ))
            .body(SdkBody::from(
                r#"{"StreamName":"demo-stream","MediaType":"video/h264","DataRetentionInHours":24}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"StreamARN":"arn:aws:kinesisvideo:us-east-1:111122223333:stream/demo-stream/1613051234"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let output = client
        .create_stream()
        .stream_name("demo-stream")
        .media_type("video/h264")
        .data_retention_in_hours(24)
        .send()
        .await
        .expect("successful fixture response");
    assert_eq!(
        output.stream_arn.as_deref(),
        Some("arn:aws:kinesisvideo:us-east-1:111122223333:stream/demo-stream/1613051234")
    );
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn describe_stream_parses_stream_info() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/json")
            .uri(Uri::from_static(
                "https://kinesisvideo.us-east-1.amazonaws.com/describeStream",
            ))
            .body(SdkBody::from(r#"{"StreamName":"demo-stream"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"StreamInfo":{"StreamName":"demo-stream","Status":"ACTIVE","CreationTime":1.614955644E9,"DataRetentionInHours":24}}"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let output = client
        .describe_stream()
        .stream_name("demo-stream")
        .send()
        .await
        .expect("successful fixture response");
    let info = output.stream_info.expect("stream info present");
    assert_eq!(info.status, Some(StreamStatus::Active));
    assert_eq!(info.data_retention_in_hours, Some(24));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn missing_stream_maps_to_typed_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static(
                "https://kinesisvideo.us-east-1.amazonaws.com/describeStream",
            ))
            .body(SdkBody::from(r#"{"StreamName":"no-such-stream"}"#))
            .unwrap(),
        http::Response::builder()
            .status(404)
            .body(r#"{"__type":"ResourceNotFoundException","message":"Stream no-such-stream not found"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let err = client
        .describe_stream()
        .stream_name("no-such-stream")
        .send()
        .await
        .expect_err("stream does not exist");
    let inner = match err {
        SdkError::ServiceError {
            err: DescribeStreamError::ResourceNotFoundError(e),
            ..
        } => e,
        other => panic!("incorrect error received: {:?}", other),
    };
    assert_eq!(
        inner.message.as_deref(),
        Some("Stream no-such-stream not found")
    );
    assert_eq!(conn.requests().len(), 1);
}

/// A server that keeps answering with `x-amz-retry-after` must not be
/// retried past the attempt ceiling.
#[tokio::test]
async fn retry_after_hint_is_bounded_by_the_attempt_limit() {
    let event = || {
        (
            http::Request::builder()
                .uri(Uri::from_static(
                    "https://kinesisvideo.us-east-1.amazonaws.com/describeStream",
                ))
                .body(SdkBody::from(r#"{"StreamName":"demo-stream"}"#))
                .unwrap(),
            http::Response::builder()
                .status(400)
                .header("x-amz-retry-after", "0")
                .body(r#"{"__type":"ClientLimitExceededException","message":"Rate exceeded"}"#)
                .unwrap(),
        )
    };
    let conn = TestConnection::new((0..8).map(|_| event()).collect());
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let err = client
        .describe_stream()
        .stream_name("demo-stream")
        .send()
        .await
        .expect_err("the service throttles every attempt");
    match err {
        SdkError::ServiceError {
            err: DescribeStreamError::ClientLimitExceededError(_),
            ..
        } => {}
        other => panic!("expected the throttling error, got: {:?}", other),
    }
    // default config: three attempts total, the rest of the fixture unserved
    assert_eq!(conn.requests().len(), 3);
}

#[tokio::test]
async fn connector_failure_is_a_dispatch_failure() {
    let client = Client::from_conf_conn(test_conf(), FailingConnection::new());
    let err = client
        .describe_stream()
        .stream_name("demo-stream")
        .send()
        .await
        .expect_err("the connection always fails");
    match err {
        SdkError::DispatchFailure(_) => {}
        other => panic!("expected DispatchFailure, got: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_an_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static(
                "https://kinesisvideo.us-east-1.amazonaws.com/describeStream",
            ))
            .body(SdkBody::from(r#"{"StreamName":"demo-stream"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body("<!DOCTYPE html><html>definitely not json</html>")
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn);
    let err = client
        .describe_stream()
        .stream_name("demo-stream")
        .send()
        .await
        .expect_err("body is not valid json");
    match err {
        SdkError::ServiceError {
            err: DescribeStreamError::Unhandled(_),
            ..
        } => {}
        other => panic!("expected an unhandled service error, got: {:?}", other),
    }
}

#[tokio::test]
async fn missing_required_field_never_hits_the_wire() {
    let conn = TestConnection::<&str>::new(vec![]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let err = client
        .create_stream()
        .device_name("camera-1")
        .send()
        .await
        .expect_err("stream_name is required");
    match err {
        SdkError::ConstructionFailure(_) => {}
        other => panic!("expected ConstructionFailure, got: {:?}", other),
    }
    assert_eq!(conn.requests().len(), 0);
}

/// Two clients constructed from equal configs must marshal byte-identical
/// requests for the same input.
#[tokio::test]
async fn identical_inputs_marshal_identical_bodies() {
    let fixture = || {
        TestConnection::new(vec![(
            http::Request::builder()
                .uri(Uri::from_static(
                    "https://kinesisvideo.us-east-1.amazonaws.com/listStreams",
                ))
                .body(SdkBody::from(r#"{"MaxResults":5}"#))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(r#"{"StreamInfoList":[],"NextToken":null}"#)
                .unwrap(),
        )])
    };
    let (conn_a, conn_b) = (fixture(), fixture());
    let client_a = Client::from_conf_conn(test_conf(), conn_a.clone());
    let client_b = Client::from_conf_conn(test_conf(), conn_b.clone());

    client_a
        .list_streams()
        .max_results(5)
        .send()
        .await
        .expect("fixture response");
    client_b
        .list_streams()
        .max_results(5)
        .send()
        .await
        .expect("fixture response");

    let body_a = conn_a.requests()[0]
        .actual
        .body()
        .bytes()
        .expect("body is loaded")
        .to_vec();
    let body_b = conn_b.requests()[0]
        .actual
        .body()
        .bytes()
        .expect("body is loaded")
        .to_vec();
    assert_eq!(body_a, body_b);
    assert_ok(validate_body(
        std::str::from_utf8(&body_a).expect("json body is utf-8"),
        r#"{"MaxResults":5}"#,
        MediaType::Json,
    ));
    conn_a.assert_requests_match(&[]);
    conn_b.assert_requests_match(&[]);
}
