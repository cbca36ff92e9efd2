/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use sdk_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use std::time::SystemTime;

/// AWS SDK Credentials
///
/// An opaque struct representing credentials that may be used in an AWS SDK.
/// The secret is never printed by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,

    /// A timepoint after which the credentials should no longer be used,
    /// `None` for credentials that never expire. Consumed by caching
    /// providers to decide when to refresh.
    expiration: Option<SystemTime>,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a static key pair (and optional session token).
    pub fn from_keys(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Credentials {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
            expiration: None,
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn expiration(&self) -> Option<SystemTime> {
        self.expiration
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    /// No credentials were available from this provider
    CredentialsNotLoaded,
    /// The provider failed in a way it could not recover from
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::CredentialsNotLoaded => write!(f, "CredentialsNotLoaded"),
            CredentialsError::Unhandled(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsError::Unhandled(err) => Some(err.as_ref() as _),
            _ => None,
        }
    }
}

/// A source of AWS credentials.
///
/// Static credentials implement this trait directly, so
/// `.credentials_provider(Credentials::from_keys(...))` works without a
/// wrapper. Providers that load credentials dynamically implement it
/// themselves; the request stages only ever call it through
/// [`CredentialsProvider`].
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}

pub type CredentialsProvider = Arc<dyn ProvideCredentials>;

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// Load credentials from `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`
/// (and optionally `AWS_SESSION_TOKEN`).
#[derive(Clone, Debug, Default)]
pub struct EnvironmentVariableCredentialsProvider;

impl EnvironmentVariableCredentialsProvider {
    pub fn new() -> Self {
        EnvironmentVariableCredentialsProvider
    }
}

impl ProvideCredentials for EnvironmentVariableCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        let access_key =
            std::env::var("AWS_ACCESS_KEY_ID").map_err(|_| CredentialsError::CredentialsNotLoaded)?;
        let secret_key = std::env::var("AWS_SECRET_ACCESS_KEY")
            .map_err(|_| CredentialsError::CredentialsNotLoaded)?;
        let session_token = std::env::var("AWS_SESSION_TOKEN").ok();
        Ok(Credentials::from_keys(access_key, secret_key, session_token))
    }
}

/// The default credential source: currently the environment provider.
pub fn default_provider() -> impl ProvideCredentials {
    EnvironmentVariableCredentialsProvider::new()
}

pub fn set_provider(properties: &mut PropertyBag, provider: CredentialsProvider) {
    properties.insert(provider);
}

#[cfg(test)]
mod test {
    use super::Credentials;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn creds_are_send_sync() {
        assert_send_sync::<Credentials>()
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::from_keys(
            "AKID",
            "sekrit-secret-key",
            Some("sekrit-session".to_string()),
        );
        let debugged = format!("{:?}", creds);
        assert!(debugged.contains("AKID"));
        assert!(!debugged.contains("sekrit"));
    }
}
