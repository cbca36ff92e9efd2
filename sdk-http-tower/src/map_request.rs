/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use sdk_http::middleware::MapRequest;
use sdk_http::operation;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Adapts a synchronous [`MapRequest`] middleware to a tower layer.
#[derive(Clone)]
pub struct MapRequestLayer<M> {
    mapper: M,
}

impl<M> MapRequestLayer<M> {
    pub fn new(mapper: M) -> Self {
        MapRequestLayer { mapper }
    }
}

impl<S, M> Layer<S> for MapRequestLayer<M>
where
    M: Clone,
{
    type Service = MapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        MapRequestService {
            inner,
            mapper: self.mapper.clone(),
        }
    }
}

#[derive(Clone)]
pub struct MapRequestService<S, M> {
    inner: S,
    mapper: M,
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

impl<S, M> Service<operation::Request> for MapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError>,
    S::Future: Send + 'static,
    S::Response: Send + 'static,
    M: MapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        match self.mapper.apply(req) {
            Err(err) => {
                let err = SendOperationError::RequestConstructionError(err.into());
                Box::pin(std::future::ready(Err(err)))
            }
            Ok(req) => Box::pin(self.inner.call(req)),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::map_request::MapRequestLayer;
    use crate::SendOperationError;
    use http::header::{HeaderName, HeaderValue};
    use sdk_http::body::SdkBody;
    use sdk_http::middleware::MapRequest;
    use sdk_http::operation;
    use std::convert::Infallible;
    use std::task::{Context, Poll};
    use tower::{Layer, Service};

    #[derive(Clone)]
    struct AddHeader(&'static str, &'static str);

    impl MapRequest for AddHeader {
        type Error = Infallible;

        fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
            request.augment(|mut request, _properties| {
                request.headers_mut().insert(
                    HeaderName::from_static(self.0),
                    HeaderValue::from_static(self.1),
                );
                Ok(request)
            })
        }
    }

    #[derive(Clone)]
    struct Echo;

    impl Service<operation::Request> for Echo {
        type Response = http::Response<SdkBody>;
        type Error = SendOperationError;
        type Future = std::future::Ready<Result<Self::Response, Self::Error>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: operation::Request) -> Self::Future {
            let (req, _) = req.into_parts();
            std::future::ready(Ok(http::Response::new(req.into_body())))
        }
    }

    fn assert_send<T: Send>(t: T) -> T {
        t
    }

    #[tokio::test]
    async fn mapped_call_future_is_send() {
        let mut svc = MapRequestLayer::new(AddHeader("x-test", "marker")).layer(Echo);
        let req = operation::Request::new(http::Request::new(SdkBody::from("hello")));
        // The future must be spawnable on a multithreaded runtime
        let response = assert_send(svc.call(req)).await.expect("infallible mapper");
        assert_eq!(response.body().bytes(), Some(&b"hello"[..]));
    }
}
