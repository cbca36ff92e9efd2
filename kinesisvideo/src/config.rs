// Code generated by a smithy-based code generator. DO NOT EDIT.
use aws_core::credentials::{CredentialsProvider, ProvideCredentials};
use aws_core::endpoint::{AwsEndpointResolver, DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_core::region::Region;
use std::sync::Arc;

/// Service configuration, frozen at construction.
///
/// A `Config` is shared immutably by every operation built from it; two
/// clients constructed from equal configs marshal identical requests.
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: CredentialsProvider,
    pub(crate) endpoint_resolver: AwsEndpointResolver,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .finish()
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<CredentialsProvider>,
    endpoint_resolver: Option<AwsEndpointResolver>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn credentials_provider(
        mut self,
        provider: impl ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(provider));
        self
    }

    /// Override the endpoint this client talks to, eg. to point at a local
    /// test server.
    pub fn endpoint_resolver(mut self, resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region.or_else(aws_core::region::default_provider),
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| Arc::new(aws_core::credentials::default_provider())),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_service(crate::SERVICE_NAME))
            }),
        }
    }
}
