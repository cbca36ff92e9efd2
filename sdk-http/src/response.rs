/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// The split between `parse_unloaded` and `parse_loaded` keeps the parsing
/// code pure and sync whenever possible: the caller reads the body to
/// completion and only then invokes `parse_loaded`, so the trait itself never
/// needs to be async.
pub trait ParseHttpResponse<B> {
    /// Output type of the parser, typically `Result<OperationOutput, OperationError>`.
    type Output;

    /// Parse an HTTP response without reading the body. If the body must be provided to proceed,
    /// return `None`.
    ///
    /// This exists to serve streaming operations where the body is handed directly to the
    /// caller; request/response style operations always return `None` here.
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP response with a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience trait for the common case of a non-streaming operation.
///
/// Implementing `ParseStrictResponse` provides a blanket `ParseHttpResponse`
/// implementation that always loads the body first.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output;
}

impl<B, T: ParseStrictResponse> ParseHttpResponse<B> for T {
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut http::Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}
