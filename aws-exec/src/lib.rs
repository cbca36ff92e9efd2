/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! An execution runtime for AWS service clients.
//!
//! [`Client`] wraps a connector (anything that turns an [`http::Request`]
//! into an [`http::Response`]) with the middleware every AWS operation
//! needs: endpoint resolution, credential loading, dispatch, response
//! parsing and retries. Generated service clients hand fully-marshalled
//! [`Operation`]s to [`Client::call`] and get typed output or errors back.

#[cfg(feature = "native-tls")]
pub mod conn;
pub mod retry;
pub mod test_connection;

use crate::retry::{RetryConfig, StandardRetryStrategy, TokenBucket};
use aws_core::middleware::{AwsEndpointStage, CredentialsStage};
use sdk_http::body::SdkBody;
use sdk_http::operation::Operation;
use sdk_http::response::ParseHttpResponse;
pub use sdk_http::result::{SdkError, SdkSuccess};
use sdk_http::retry::ClassifyResponse;
use sdk_http_tower::dispatch::DispatchLayer;
use sdk_http_tower::map_request::MapRequestLayer;
use sdk_http_tower::parse_response::ParseResponseLayer;
use sdk_types::retry::ProvideErrorKind;
use std::error::Error;
use std::sync::{Arc, Mutex};
use tower::{Service, ServiceBuilder, ServiceExt};

type BoxError = Box<dyn Error + Send + Sync>;

/// An AWS service client backed by the connector `S`.
///
/// The client is stateless apart from the cross-request retry token bucket;
/// it may be shared freely across threads and used for any number of
/// concurrent operations.
pub struct Client<S> {
    inner: S,
    token_bucket: Arc<Mutex<TokenBucket>>,
}

impl<S: Clone> Clone for Client<S> {
    fn clone(&self) -> Self {
        Client {
            inner: self.inner.clone(),
            token_bucket: self.token_bucket.clone(),
        }
    }
}

impl<S> Client<S> {
    /// Construct a client over a custom connector.
    ///
    /// The connector must be a `tower::Service` from `http::Request<SdkBody>`
    /// to `http::Response<SdkBody>`, eg. a [`TestConnection`](test_connection::TestConnection)
    /// or, with the `native-tls` feature, [`conn::Https`].
    pub fn new(connector: S) -> Self {
        Client {
            inner: connector,
            token_bucket: Arc::new(Mutex::new(TokenBucket::new(RetryConfig::default()))),
        }
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.token_bucket = Arc::new(Mutex::new(TokenBucket::new(retry_config)));
        self
    }
}

#[cfg(feature = "native-tls")]
impl Client<conn::Https> {
    /// Construct a client with an HTTPS connector.
    pub fn https() -> Self {
        Client::new(conn::Https::new())
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Dispatch this operation to the network.
    ///
    /// For ergonomics, this does not include the raw response for successful
    /// responses. To access the raw response use [`Client::call_raw`].
    pub async fn call<O, T, E, R>(&self, input: Operation<O, R>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        E: Error + ProvideErrorKind + Send + 'static,
        T: Send + 'static,
        R: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this operation to the network.
    ///
    /// The returned result contains the raw HTTP response which can be useful
    /// for debugging or implementing unsupported features.
    pub async fn call_raw<O, T, E, R>(
        &self,
        input: Operation<O, R>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        E: Error + ProvideErrorKind + Send + 'static,
        T: Send + 'static,
        R: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + 'static,
    {
        let connector = self.inner.clone();
        let mut svc = ServiceBuilder::new()
            // Each call gets a fresh per-call strategy over the shared token bucket
            .retry(StandardRetryStrategy::new(self.token_bucket.clone()))
            .layer(ParseResponseLayer::<O, R>::new())
            .layer(MapRequestLayer::new(AwsEndpointStage))
            .layer(MapRequestLayer::new(CredentialsStage))
            .layer(DispatchLayer::new())
            .service(connector);
        svc.ready().await?.call(input).await
    }
}
