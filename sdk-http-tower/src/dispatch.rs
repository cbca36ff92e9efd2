/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{BoxError, SendOperationError};
use sdk_http::body::SdkBody;
use sdk_http::operation;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug_span, Instrument};

/// Connects an `operation::Request` oriented stack to an `http::Request` oriented connector.
///
/// This is the innermost layer of the middleware stack: it discards the
/// property bag (anything that needed it has already run) and hands the bare
/// HTTP request to the connector.
#[derive(Clone)]
pub struct DispatchService<S> {
    inner: S,
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

impl<S> Service<operation::Request> for DispatchService<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>> + Clone + Send + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    type Response = http::Response<SdkBody>;
    type Error = SendOperationError;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner
            .poll_ready(cx)
            .map_err(|err| SendOperationError::RequestDispatchError(err.into()))
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        let (req, _properties) = req.into_parts();
        // "clone and swap" so that the cloned service is the one that might not be ready
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let future = async move {
            inner
                .call(req)
                .await
                .map_err(|err| SendOperationError::RequestDispatchError(err.into()))
        };
        Box::pin(future.instrument(debug_span!("dispatch")))
    }
}

#[derive(Clone, Default)]
#[non_exhaustive]
pub struct DispatchLayer;

impl DispatchLayer {
    pub fn new() -> Self {
        DispatchLayer
    }
}

impl<S> Layer<S> for DispatchLayer
where
    S: Service<http::Request<SdkBody>>,
{
    type Service = DispatchService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DispatchService { inner }
    }
}
