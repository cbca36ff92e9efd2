/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! An HTTPS connector backed by hyper + native-tls.

use crate::BoxError;
use hyper::client::HttpConnector;
use hyper_tls::HttpsConnector;
use sdk_http::body::SdkBody;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

/// A good default connection for most use cases.
///
/// Response bodies are loaded into memory before being handed to the
/// middleware stack; AWS JSON protocol responses are small and always
/// consumed in full.
#[derive(Clone)]
pub struct Https {
    client: hyper::Client<HttpsConnector<HttpConnector>, SdkBody>,
}

impl Https {
    pub fn new() -> Self {
        let https = HttpsConnector::new();
        Https {
            client: hyper::Client::builder().build::<_, SdkBody>(https),
        }
    }
}

impl Default for Https {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<http::Request<SdkBody>> for Https {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.client.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        let fut = self.client.call(req);
        Box::pin(async move {
            let response = fut.await?;
            let (parts, body) = response.into_parts();
            let data = hyper::body::to_bytes(body).await?;
            Ok(http::Response::from_parts(parts, SdkBody::from(data)))
        })
    }
}
