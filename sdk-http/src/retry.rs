/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP specific retry behaviors
//!
//! For protocol agnostic retry vocabulary, see `sdk_types::retry`.

use sdk_types::retry::RetryKind;

/// Classifies the result of a dispatched operation for the retry layer.
///
/// Operations carry a classifier as their retry policy; the execution
/// runtime's retry strategy consults it after every attempt.
pub trait ClassifyResponse<T, E>: Clone {
    fn classify(&self, result: Result<&T, &E>) -> RetryKind;
}

/// `()` is the null classifier: never retry.
impl<T, E> ClassifyResponse<T, E> for () {
    fn classify(&self, _result: Result<&T, &E>) -> RetryKind {
        RetryKind::NotRetryable
    }
}
