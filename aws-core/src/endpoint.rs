/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::region::Region;
use http::uri::{InvalidUri, Uri};
use sdk_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

type BoxError = Box<dyn Error + Send + Sync>;

/// A resolved endpoint: where a request will actually be sent.
#[derive(Clone, Debug)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn from_str(uri: &str) -> Result<Self, InvalidUri> {
        Ok(Endpoint {
            uri: Uri::from_str(uri)?,
        })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Apply this endpoint to a request URI: scheme and authority are
    /// replaced and any path on the endpoint is prepended to the operation's
    /// path.
    pub fn set_endpoint(&self, uri: &mut Uri) {
        let authority = self
            .uri
            .authority()
            .expect("an endpoint must have an authority")
            .clone();
        let scheme = self
            .uri
            .scheme()
            .cloned()
            .unwrap_or(http::uri::Scheme::HTTPS);
        let endpoint_path = self.uri.path().trim_end_matches('/');
        let path_and_query = match uri.path_and_query() {
            Some(pq) if endpoint_path.is_empty() => pq.to_string(),
            Some(pq) => format!("{}{}", endpoint_path, pq),
            None if endpoint_path.is_empty() => "/".to_string(),
            None => endpoint_path.to_string(),
        };
        let new_uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()
            .expect("valid endpoint + valid path must produce a valid URI");
        *uri = new_uri;
    }
}

/// Resolve an AWS endpoint for a given region.
pub trait ResolveAwsEndpoint: Send + Sync {
    fn resolve_endpoint(&self, region: &Region) -> Result<Endpoint, BoxError>;
}

/// A fixed endpoint override: resolves to the same endpoint for every region.
impl ResolveAwsEndpoint for Endpoint {
    fn resolve_endpoint(&self, _region: &Region) -> Result<Endpoint, BoxError> {
        Ok(self.clone())
    }
}

/// The default resolver: `https://{service}.{region}.amazonaws.com`.
///
/// This covers the standard `aws` partition; nonstandard partitions are the
/// caller's responsibility via an endpoint override.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    service: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(service: &'static str) -> Self {
        Self { service }
    }
}

#[derive(Debug)]
pub struct InvalidEndpoint {
    service: &'static str,
    region: Region,
}

impl fmt::Display for InvalidEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}.{}.amazonaws.com` is not a valid URI authority",
            self.service, self.region
        )
    }
}

impl Error for InvalidEndpoint {}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn resolve_endpoint(&self, region: &Region) -> Result<Endpoint, BoxError> {
        let uri = Uri::from_str(&format!(
            "https://{}.{}.amazonaws.com",
            self.service,
            region.as_ref()
        ))
        .map_err(|_| InvalidEndpoint {
            service: self.service,
            region: region.clone(),
        })?;
        Ok(Endpoint::new(uri))
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

#[cfg(test)]
mod test {
    use super::{DefaultAwsEndpointResolver, Endpoint, ResolveAwsEndpoint};
    use crate::region::Region;
    use http::Uri;

    #[test]
    fn default_resolver_builds_service_uri() {
        let resolver = DefaultAwsEndpointResolver::for_service("kinesisvideo");
        let endpoint = resolver
            .resolve_endpoint(&Region::new("us-west-2"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.uri(),
            &Uri::from_static("https://kinesisvideo.us-west-2.amazonaws.com")
        );
    }

    #[test]
    fn set_endpoint_preserves_operation_path() {
        let endpoint = Endpoint::from_str("https://localhost:8000").unwrap();
        let mut uri = Uri::from_static("/describeStream");
        endpoint.set_endpoint(&mut uri);
        assert_eq!(uri, Uri::from_static("https://localhost:8000/describeStream"));
    }

    #[test]
    fn set_endpoint_prepends_endpoint_path() {
        let endpoint = Endpoint::from_str("http://localhost:8000/base/").unwrap();
        let mut uri = Uri::from_static("/listStreams?next=abc");
        endpoint.set_endpoint(&mut uri);
        assert_eq!(
            uri,
            Uri::from_static("http://localhost:8000/base/listStreams?next=abc")
        );
    }
}
