/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync>;

/// A successful response: the parsed output plus the raw HTTP response for
/// callers that need to introspect it.
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<SdkBody>,
    pub parsed: O,
}

/// Failed requests are split into two top level categories: the request never
/// produced a response (`ConstructionFailure`, `DispatchFailure`) and the
/// service responded (`ResponseError`, `ServiceError`).
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according to the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<SdkBody>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        raw: http::Response<SdkBody>,
        err: E,
    },
}

impl<E> fmt::Display for SdkError<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => {
                write!(f, "failed to construct request: {}", err)
            }
            SdkError::DispatchFailure(err) => write!(f, "failed to dispatch request: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "failed to read response: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref() as _),
            SdkError::ServiceError { err, .. } => Some(err as _),
        }
    }
}
