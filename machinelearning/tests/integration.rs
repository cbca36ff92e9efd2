/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_core::Credentials;
use aws_exec::test_connection::{FailingConnection, TestConnection};
use aws_exec::SdkError;
use http::header::HeaderName;
use http::Uri;
use machinelearning::error::{GetMLModelError, PredictError};
use machinelearning::model::{MLModelType, SortOrder};
use machinelearning::{Client, Config, Region};
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
async fn get_ml_model_round_trip() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AmazonML_20141212.GetMLModel")
            .uri(Uri::from_static(
                "https://machinelearning.us-east-1.amazonaws.com/",
            ))
            .body(SdkBody::from(r#"{"MLModelId":"ml-12345","Verbose":true}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"MLModelId":"ml-12345","Name":"churn-predictor","Status":"COMPLETED","MLModelType":"BINARY","ScoreThreshold":0.5,"CreatedAt":1.422220279E9}"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let output = client
        .get_ml_model()
        .ml_model_id("ml-12345")
        .verbose(true)
        .send()
        .await
        .expect("successful fixture response");
    assert_eq!(output.ml_model_id.as_deref(), Some("ml-12345"));
    assert_eq!(output.name.as_deref(), Some("churn-predictor"));
    assert_eq!(output.ml_model_type, Some(MLModelType::Binary));
    assert_eq!(output.score_threshold, Some(0.5));
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[HeaderName::from_static("x-amz-target")]);
}

#[tokio::test]
async fn predict_round_trip() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AmazonML_20141212.Predict")
            .uri(Uri::from_static(
                "https://machinelearning.us-east-1.amazonaws.com/",
            ))
            .body(SdkBody::from(
                r#"{"MLModelId":"ml-12345","Record":{"tenure":"34"},"PredictEndpoint":"https://realtime.machinelearning.us-east-1.amazonaws.com"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"Prediction":{"predictedLabel":"1","predictedScores":{"1":0.92},"details":{"PredictiveModelType":"BINARY"}}}"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let output = client
        .predict()
        .ml_model_id("ml-12345")
        .record_entry("tenure", "34")
        .predict_endpoint("https://realtime.machinelearning.us-east-1.amazonaws.com")
        .send()
        .await
        .expect("successful fixture response");
    let prediction = output.prediction.expect("prediction present");
    assert_eq!(prediction.predicted_label.as_deref(), Some("1"));
    assert_eq!(
        prediction
            .predicted_scores
            .as_ref()
            .and_then(|scores| scores.get("1")),
        Some(&0.92)
    );
    conn.assert_requests_match(&[HeaderName::from_static("x-amz-target")]);
}

#[tokio::test]
async fn missing_model_maps_to_typed_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static(
                "https://machinelearning.us-east-1.amazonaws.com/",
            ))
            .body(SdkBody::from(r#"{"MLModelId":"ml-missing"}"#))
            .unwrap(),
        http::Response::builder()
            .status(404)
            .body(
                r#"{"__type":"ResourceNotFoundException","message":"MLModel ml-missing not found"}"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let err = client
        .get_ml_model()
        .ml_model_id("ml-missing")
        .send()
        .await
        .expect_err("model does not exist");
    let inner = match err {
        SdkError::ServiceError {
            err: GetMLModelError::ResourceNotFoundError(e),
            ..
        } => e,
        other => panic!("incorrect error received: {:?}", other),
    };
    assert_eq!(inner.message.as_deref(), Some("MLModel ml-missing not found"));
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn unmounted_endpoint_maps_to_typed_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static(
                "https://machinelearning.us-east-1.amazonaws.com/",
            ))
            .body(SdkBody::from(r#"{"MLModelId":"ml-12345"}"#))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"PredictorNotMountedException","message":"Predictor not mounted"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn.clone());
    let err = client
        .predict()
        .ml_model_id("ml-12345")
        .record_entry("tenure", "34")
        .predict_endpoint("https://realtime.machinelearning.us-east-1.amazonaws.com")
        .send()
        .await
        .expect_err("endpoint is not mounted");
    match err {
        SdkError::ServiceError {
            err: PredictError::PredictorNotMountedError(_),
            ..
        } => {}
        other => panic!("incorrect error received: {:?}", other),
    }
}

#[tokio::test]
async fn connector_failure_is_a_dispatch_failure() {
    let client = Client::from_conf_conn(test_conf(), FailingConnection::new());
    let err = client
        .get_ml_model()
        .ml_model_id("ml-12345")
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
                "https://machinelearning.us-east-1.amazonaws.com/",
            ))
            .body(SdkBody::from(r#"{"MLModelId":"ml-12345"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body("<!DOCTYPE html><html>definitely not json</html>")
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_conf(), conn);
    let err = client
        .get_ml_model()
        .ml_model_id("ml-12345")
        .send()
        .await
        .expect_err("body is not valid json");
    match err {
        SdkError::ServiceError {
            err: GetMLModelError::Unhandled(_),
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
        .create_ml_model()
        .ml_model_type(MLModelType::Regression)
        .training_data_source_id("ds-1")
        .send()
        .await
        .expect_err("ml_model_id is required");
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
                    "https://machinelearning.us-east-1.amazonaws.com/",
                ))
                .body(SdkBody::from(r#"{"SortOrder":"asc","Limit":10}"#))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(r#"{"Results":[],"NextToken":null}"#)
                .unwrap(),
        )])
    };
    let (conn_a, conn_b) = (fixture(), fixture());
    let client_a = Client::from_conf_conn(test_conf(), conn_a.clone());
    let client_b = Client::from_conf_conn(test_conf(), conn_b.clone());

    client_a
        .describe_ml_models()
        .sort_order(SortOrder::Asc)
        .limit(10)
        .send()
        .await
        .expect("fixture response");
    client_b
        .describe_ml_models()
        .sort_order(SortOrder::Asc)
        .limit(10)
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
        r#"{"SortOrder":"asc","Limit":10}"#,
        MediaType::Json,
    ));
    conn_a.assert_requests_match(&[]);
    conn_b.assert_requests_match(&[]);
}
