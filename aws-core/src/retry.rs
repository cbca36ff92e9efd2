/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::StatusCode;
use sdk_http::result::{SdkError, SdkSuccess};
use sdk_http::retry::ClassifyResponse;
use sdk_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry classifier for AWS error responses.
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: [u16; 4] = [500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_error<E>(err: &E, status: StatusCode, headers: &http::HeaderMap) -> RetryKind
where
    E: ProvideErrorKind,
{
    if let Some(retry_after_delay) = headers
        .get("x-amz-retry-after")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.parse::<u64>().ok())
    {
        return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
    }
    if let Some(kind) = err.retryable_error_kind() {
        return RetryKind::Error(kind);
    }
    if let Some(code) = err.code() {
        if THROTTLING_ERRORS.contains(&code) {
            return RetryKind::Error(ErrorKind::ThrottlingError);
        }
        if TRANSIENT_ERRORS.contains(&code) {
            return RetryKind::Error(ErrorKind::TransientError);
        }
    }
    if TRANSIENT_ERROR_STATUS_CODES.contains(&status.as_u16()) {
        return RetryKind::Error(ErrorKind::ServerError);
    }
    RetryKind::NotRetryable
}

impl<T, E> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, result: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
        let err = match result {
            Ok(_) => return RetryKind::NotRetryable,
            Err(err) => err,
        };
        match err {
            SdkError::ServiceError { err, raw } => {
                classify_error(err, raw.status(), raw.headers())
            }
            SdkError::ResponseError { raw, .. } => {
                if TRANSIENT_ERROR_STATUS_CODES.contains(&raw.status().as_u16()) {
                    RetryKind::Error(ErrorKind::ServerError)
                } else {
                    RetryKind::NotRetryable
                }
            }
            // Dispatch failures are not retried. Hyper does not expose
            // enough information to distinguish a connection that failed
            // before the request was sent from one that failed after.
            SdkError::DispatchFailure(_) => RetryKind::NotRetryable,
            SdkError::ConstructionFailure(_) => RetryKind::NotRetryable,
        }
    }
}

#[cfg(test)]
mod test {
    use super::AwsErrorRetryPolicy;
    use sdk_http::body::SdkBody;
    use sdk_http::result::{SdkError, SdkSuccess};
    use sdk_http::retry::ClassifyResponse;
    use sdk_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    struct UnmodeledError;

    struct CodedError {
        code: &'static str,
    }

    impl ProvideErrorKind for UnmodeledError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    impl ProvideErrorKind for CodedError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.code)
        }
    }

    fn service_error<E>(err: E, response: http::Response<&'static str>) -> SdkError<E> {
        let (parts, body) = response.into_parts();
        SdkError::ServiceError {
            err,
            raw: http::Response::from_parts(parts, SdkBody::from(body)),
        }
    }

    fn classify<E: ProvideErrorKind>(err: SdkError<E>) -> RetryKind {
        let policy = AwsErrorRetryPolicy::new();
        let result: Result<&SdkSuccess<()>, _> = Err(&err);
        policy.classify(result)
    }

    #[test]
    fn not_an_error() {
        let err = service_error(UnmodeledError, http::Response::new("OK"));
        assert_eq!(classify(err), RetryKind::NotRetryable);
    }

    #[test]
    fn classify_by_response_status() {
        let response = http::Response::builder()
            .status(503)
            .body("error!")
            .unwrap();
        assert_eq!(
            classify(service_error(UnmodeledError, response)),
            RetryKind::Error(ErrorKind::ServerError)
        );
    }

    #[test]
    fn classify_by_error_code() {
        assert_eq!(
            classify(service_error(
                CodedError { code: "Throttling" },
                http::Response::new("OK")
            )),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            classify(service_error(
                CodedError {
                    code: "RequestTimeout"
                },
                http::Response::new("OK")
            )),
            RetryKind::Error(ErrorKind::TransientError)
        );
    }

    #[test]
    fn limit_exceeded_is_throttling() {
        assert_eq!(
            classify(service_error(
                CodedError {
                    code: "LimitExceededException"
                },
                http::Response::new("OK")
            )),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn classify_generic() {
        let err = sdk_types::Error::builder().code("SlowDown").build();
        assert_eq!(
            classify(service_error(err, http::Response::new("OK"))),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn classify_by_error_kind() {
        struct ModeledRetries;
        impl ProvideErrorKind for ModeledRetries {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ClientError)
            }

            fn code(&self) -> Option<&str> {
                // code should not be called when `error_kind` is provided
                unimplemented!()
            }
        }

        assert_eq!(
            classify(service_error(ModeledRetries, http::Response::new("OK"))),
            RetryKind::Error(ErrorKind::ClientError)
        );
    }

    #[test]
    fn test_retry_after_header() {
        let response = http::Response::builder()
            .header("x-amz-retry-after", "5000")
            .body("retry later")
            .unwrap();
        assert_eq!(
            classify(service_error(UnmodeledError, response)),
            RetryKind::Explicit(Duration::from_millis(5000))
        );
    }

    #[test]
    fn dispatch_failures_are_not_retried() {
        let err: SdkError<UnmodeledError> =
            SdkError::DispatchFailure("connection refused".into());
        assert_eq!(classify(err), RetryKind::NotRetryable);
    }
}
