/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Tower shims adapting the framework agnostic middleware interfaces in
//! `sdk-http` to `tower::Service` stacks.

pub mod dispatch;
pub mod map_request;
pub mod parse_response;

use sdk_http::result::SdkError;
use std::error::Error;
use std::fmt;

pub type BoxError = Box<dyn Error + Send + Sync>;

/// An error occurred attempting to send an operation to a service.
#[derive(Debug)]
pub enum SendOperationError {
    /// The request could not be constructed
    ///
    /// These errors usually stem from configuration issues (eg. no region, no
    /// credentials provider).
    RequestConstructionError(BoxError),

    /// The request could not be dispatched
    RequestDispatchError(BoxError),
}

impl fmt::Display for SendOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendOperationError::RequestConstructionError(err) => {
                write!(f, "failed to construct request: {}", err)
            }
            SendOperationError::RequestDispatchError(err) => {
                write!(f, "failed to dispatch request: {}", err)
            }
        }
    }
}

impl Error for SendOperationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SendOperationError::RequestConstructionError(err)
            | SendOperationError::RequestDispatchError(err) => Some(err.as_ref() as _),
        }
    }
}

impl<E> From<SendOperationError> for SdkError<E> {
    fn from(err: SendOperationError) -> Self {
        match err {
            SendOperationError::RequestConstructionError(err) => {
                SdkError::ConstructionFailure(err)
            }
            SendOperationError::RequestDispatchError(err) => SdkError::DispatchFailure(err),
        }
    }
}
