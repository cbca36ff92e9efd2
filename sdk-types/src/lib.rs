/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod base64;
pub mod instant;
pub mod retry;

#[cfg(feature = "serde-serialize")]
mod serde_impls;

pub use crate::instant::Instant;

/// Binary data.
///
/// On the wire, blobs are base64 encoded strings.
#[derive(Debug, PartialEq, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

/// An unmodeled error from a service.
///
/// When an error response carries a code that is not in the operation's
/// error table, the response is captured here so that callers can still
/// inspect the code, message and request id returned by the server.
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl Error {
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::default()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct ErrorBuilder {
    inner: Error,
}

impl ErrorBuilder {
    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error")?;
        if let Some(code) = &self.code {
            write!(f, " {{ code: \"{}\" }}", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl retry::ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<retry::ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Error, Instant};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn generic_error_display() {
        let err = Error::builder()
            .code("ResourceNotFoundException")
            .message("no such stream")
            .build();
        assert_eq!(
            format!("{}", err),
            "Error { code: \"ResourceNotFoundException\" }: no such stream"
        );
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
    }
}
