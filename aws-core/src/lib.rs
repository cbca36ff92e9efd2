/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS-level building blocks shared by every generated service crate:
//! regions, credentials and credential providers, endpoint resolution, the
//! `MapRequest` stages that apply them to an in-flight request, the default
//! AWS retry classifier, and JSON error-document helpers.

pub mod credentials;
pub mod endpoint;
pub mod json_errors;
pub mod middleware;
pub mod region;
pub mod retry;

use std::borrow::Cow;

pub use credentials::{Credentials, CredentialsError, CredentialsProvider, ProvideCredentials};
pub use endpoint::{Endpoint, ResolveAwsEndpoint};
pub use region::Region;

/// The name a service uses to sign requests, which is not always the same as
/// its endpoint prefix (eg. `qldbsession` signs as `qldb`).
///
/// Stored in the property bag alongside the [`Region`] when an operation is
/// configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningService(Cow<'static, str>);

impl SigningService {
    pub const fn from_static(service: &'static str) -> Self {
        SigningService(Cow::Borrowed(service))
    }
}

impl AsRef<str> for SigningService {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
