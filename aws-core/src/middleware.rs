/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::credentials::{CredentialsError, CredentialsProvider};
use crate::endpoint::AwsEndpointResolver;
use crate::region::Region;
use sdk_http::middleware::MapRequest;
use sdk_http::operation;
use std::error::Error;
use std::fmt;

/// Middleware stage that resolves the endpoint for a request.
///
/// Requires a [`Region`] and an endpoint resolver in the property bag;
/// rewrites the request URI to point at the resolved endpoint.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwsEndpointStageError::NoEndpointResolver => {
                write!(f, "no endpoint resolver was set on the request")
            }
            AwsEndpointStageError::NoRegion => write!(f, "no region was set on the request"),
            AwsEndpointStageError::EndpointResolutionError(err) => {
                write!(f, "failed to resolve an endpoint: {}", err)
            }
        }
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider: &AwsEndpointResolver = props
                .get()
                .ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region: &Region = props.get().ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .resolve_endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, "resolved endpoint");
            endpoint.set_endpoint(http_req.uri_mut());
            Ok(http_req)
        })
    }
}

/// Middleware stage that loads credentials from the configured provider and
/// stages them in the property bag for downstream use.
#[derive(Clone, Debug)]
pub struct CredentialsStage;

#[derive(Debug)]
pub enum CredentialsStageError {
    MissingCredentialsProvider,
    CredentialsLoadingError(CredentialsError),
}

impl fmt::Display for CredentialsStageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsStageError::MissingCredentialsProvider => {
                write!(f, "no credentials provider was set on the request")
            }
            CredentialsStageError::CredentialsLoadingError(err) => {
                write!(f, "failed to load credentials: {}", err)
            }
        }
    }
}

impl Error for CredentialsStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsStageError::CredentialsLoadingError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CredentialsError> for CredentialsStageError {
    fn from(err: CredentialsError) -> Self {
        CredentialsStageError::CredentialsLoadingError(err)
    }
}

impl MapRequest for CredentialsStage {
    type Error = CredentialsStageError;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
        request.augment(|http_req, props| {
            let provider: &CredentialsProvider = props
                .get()
                .ok_or(CredentialsStageError::MissingCredentialsProvider)?;
            let credentials = provider.provide_credentials()?;
            props.insert(credentials);
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use super::{AwsEndpointStage, CredentialsStage};
    use crate::credentials::{Credentials, CredentialsProvider};
    use crate::endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
    use crate::region::Region;
    use http::Uri;
    use sdk_http::body::SdkBody;
    use sdk_http::middleware::MapRequest;
    use sdk_http::operation;
    use std::sync::Arc;

    #[test]
    fn endpoint_stage_rewrites_uri() {
        let provider = Arc::new(DefaultAwsEndpointResolver::for_service("machinelearning"));
        let mut request = operation::Request::new(
            http::Request::builder()
                .uri("/")
                .body(SdkBody::from(""))
                .unwrap(),
        );
        request
            .properties_mut()
            .insert(Region::new("us-east-1"));
        set_endpoint_resolver(&mut request.properties_mut(), provider);
        let request = AwsEndpointStage.apply(request).expect("should succeed");
        let (http_req, _) = request.into_parts();
        assert_eq!(
            http_req.uri(),
            &Uri::from_static("https://machinelearning.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn credentials_stage_loads_credentials_into_properties() {
        let provider: CredentialsProvider =
            Arc::new(Credentials::from_keys("AKNOTREAL", "secret", None));
        let mut request = operation::Request::new(
            http::Request::builder()
                .uri("/")
                .body(SdkBody::from(""))
                .unwrap(),
        );
        request.properties_mut().insert(provider);
        let request = CredentialsStage.apply(request).expect("should succeed");
        let creds = request.properties();
        let creds: &Credentials = creds.get().expect("credentials were staged");
        assert_eq!(creds.access_key_id(), "AKNOTREAL");
    }
}
