/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use sdk_http::body::SdkBody;
use sdk_http::middleware::load_response;
use sdk_http::operation;
use sdk_http::operation::Operation;
use sdk_http::response::ParseHttpResponse;
use sdk_http::result::{SdkError, SdkSuccess};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{debug_span, Instrument};

/// `ParseResponseService` dispatches [`Operation`]s and parses them.
///
/// It is intended to wrap a `DispatchService`: it splits the operation into
/// the request (forwarded to the inner service) and the response handler
/// (used to parse the loaded response into `SdkSuccess`/`SdkError`).
pub struct ParseResponseService<S, H, R> {
    inner: S,
    _output_type: PhantomData<(H, R)>,
}

impl<S: Clone, H, R> Clone for ParseResponseService<S, H, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _output_type: PhantomData,
        }
    }
}

pub struct ParseResponseLayer<H, R> {
    _output_type: PhantomData<(H, R)>,
}

impl<H, R> Default for ParseResponseLayer<H, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, R> ParseResponseLayer<H, R> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _output_type: PhantomData,
        }
    }
}

impl<S, H, R> Layer<S> for ParseResponseLayer<H, R>
where
    S: Service<operation::Request>,
{
    type Service = ParseResponseService<S, H, R>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _output_type: PhantomData,
        }
    }
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// Generic parameter listing:
/// `S`: The inner service
/// `H`: The response handler whose output is `Result<T, E>`
/// `T`/`E`: The happy/sad path of the response handler
/// `R`: The retry policy carried by the operation
impl<S, H, T, E, R> Service<Operation<H, R>> for ParseResponseService<S, H, R>
where
    S: Service<operation::Request, Response = http::Response<SdkBody>, Error = SendOperationError>,
    S::Future: Send + 'static,
    H: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Response = SdkSuccess<T>;
    type Error = SdkError<E>;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: Operation<H, R>) -> Self::Future {
        let (req, parts) = req.into_request_response();
        let handler = parts.response_handler;
        let span = match &parts.metadata {
            Some(metadata) => debug_span!(
                "parse_response",
                operation = %metadata.name(),
                service = %metadata.service()
            ),
            None => debug_span!("parse_response"),
        };
        let resp = self.inner.call(req);
        let fut = async move {
            match resp.await {
                Err(err) => Err(err.into()),
                Ok(resp) => load_response(resp, &handler).await,
            }
        };
        Box::pin(fut.instrument(span))
    }
}
