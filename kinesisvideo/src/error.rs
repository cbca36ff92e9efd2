// Code generated by a smithy-based code generator. DO NOT EDIT.
use bytes::Bytes;
use sdk_types::retry::{ErrorKind, ProvideErrorKind};
use serde::Deserialize;
use std::error::Error;
use std::fmt;

/// <p>The number of streams created for the account is too high.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AccountStreamLimitExceededException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>Kinesis Video Streams has throttled the request because you have
/// exceeded the limit of allowed client calls. Try making the call
/// later.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ClientLimitExceededException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>Not implemented.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeviceStreamLimitExceededException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>The value for this input parameter is invalid.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InvalidArgumentException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>Not implemented.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InvalidDeviceException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>The caller is not authorized to perform this operation.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NotAuthorizedException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>The resource is currently not available for this operation. New
/// resources cannot be created with the same name as existing resources.
/// Also, resources cannot be updated or deleted unless they are in an
/// <code>ACTIVE</code> state.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResourceInUseException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>Amazon Kinesis Video Streams can't find the stream that you
/// specified.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResourceNotFoundException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>The stream version that you specified is not the latest version. To
/// get the latest version, use the <code>DescribeStream</code> API.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct VersionMismatchException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>You have exceeded the limit of tags that you can associate with the
/// resource. Kinesis video streams support up to 50 tags.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TagsPerResourceExceededLimitException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

macro_rules! display_exception {
    ($name:ident, $code:literal) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $code)?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl Error for $name {}
    };
}

display_exception!(
    AccountStreamLimitExceededException,
    "AccountStreamLimitExceededException"
);
display_exception!(ClientLimitExceededException, "ClientLimitExceededException");
display_exception!(
    DeviceStreamLimitExceededException,
    "DeviceStreamLimitExceededException"
);
display_exception!(InvalidArgumentException, "InvalidArgumentException");
display_exception!(InvalidDeviceException, "InvalidDeviceException");
display_exception!(NotAuthorizedException, "NotAuthorizedException");
display_exception!(ResourceInUseException, "ResourceInUseException");
display_exception!(ResourceNotFoundException, "ResourceNotFoundException");
display_exception!(VersionMismatchException, "VersionMismatchException");
display_exception!(
    TagsPerResourceExceededLimitException,
    "TagsPerResourceExceededLimitException"
);

fn deserialize_modeled<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Error type for the `CreateStream` operation.
#[derive(Debug)]
pub enum CreateStreamError {
    AccountStreamLimitExceededError(AccountStreamLimitExceededException),
    ClientLimitExceededError(ClientLimitExceededException),
    DeviceStreamLimitExceededError(DeviceStreamLimitExceededException),
    InvalidArgumentError(InvalidArgumentException),
    InvalidDeviceError(InvalidDeviceException),
    ResourceInUseError(ResourceInUseException),
    TagsPerResourceExceededLimitError(TagsPerResourceExceededLimitException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for CreateStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateStreamError::AccountStreamLimitExceededError(inner) => inner.fmt(f),
            CreateStreamError::ClientLimitExceededError(inner) => inner.fmt(f),
            CreateStreamError::DeviceStreamLimitExceededError(inner) => inner.fmt(f),
            CreateStreamError::InvalidArgumentError(inner) => inner.fmt(f),
            CreateStreamError::InvalidDeviceError(inner) => inner.fmt(f),
            CreateStreamError::ResourceInUseError(inner) => inner.fmt(f),
            CreateStreamError::TagsPerResourceExceededLimitError(inner) => inner.fmt(f),
            CreateStreamError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for CreateStreamError {}

impl ProvideErrorKind for CreateStreamError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            CreateStreamError::ClientLimitExceededError(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            CreateStreamError::AccountStreamLimitExceededError(_) => {
                Some("AccountStreamLimitExceededException")
            }
            CreateStreamError::ClientLimitExceededError(_) => Some("ClientLimitExceededException"),
            CreateStreamError::DeviceStreamLimitExceededError(_) => {
                Some("DeviceStreamLimitExceededException")
            }
            CreateStreamError::InvalidArgumentError(_) => Some("InvalidArgumentException"),
            CreateStreamError::InvalidDeviceError(_) => Some("InvalidDeviceException"),
            CreateStreamError::ResourceInUseError(_) => Some("ResourceInUseException"),
            CreateStreamError::TagsPerResourceExceededLimitError(_) => {
                Some("TagsPerResourceExceededLimitException")
            }
            CreateStreamError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn create_stream_error(response: &http::Response<Bytes>) -> CreateStreamError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("AccountStreamLimitExceededException") => deserialize_modeled(body)
            .map(CreateStreamError::AccountStreamLimitExceededError),
        Some("ClientLimitExceededException") => {
            deserialize_modeled(body).map(CreateStreamError::ClientLimitExceededError)
        }
        Some("DeviceStreamLimitExceededException") => {
            deserialize_modeled(body).map(CreateStreamError::DeviceStreamLimitExceededError)
        }
        Some("InvalidArgumentException") => {
            deserialize_modeled(body).map(CreateStreamError::InvalidArgumentError)
        }
        Some("InvalidDeviceException") => {
            deserialize_modeled(body).map(CreateStreamError::InvalidDeviceError)
        }
        Some("ResourceInUseException") => {
            deserialize_modeled(body).map(CreateStreamError::ResourceInUseError)
        }
        Some("TagsPerResourceExceededLimitException") => {
            deserialize_modeled(body).map(CreateStreamError::TagsPerResourceExceededLimitError)
        }
        _ => return CreateStreamError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| CreateStreamError::Unhandled(Box::new(generic)))
}

/// Error type for the `DeleteStream` operation.
#[derive(Debug)]
pub enum DeleteStreamError {
    ClientLimitExceededError(ClientLimitExceededException),
    InvalidArgumentError(InvalidArgumentException),
    NotAuthorizedError(NotAuthorizedException),
    ResourceInUseError(ResourceInUseException),
    ResourceNotFoundError(ResourceNotFoundException),
    VersionMismatchError(VersionMismatchException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for DeleteStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteStreamError::ClientLimitExceededError(inner) => inner.fmt(f),
            DeleteStreamError::InvalidArgumentError(inner) => inner.fmt(f),
            DeleteStreamError::NotAuthorizedError(inner) => inner.fmt(f),
            DeleteStreamError::ResourceInUseError(inner) => inner.fmt(f),
            DeleteStreamError::ResourceNotFoundError(inner) => inner.fmt(f),
            DeleteStreamError::VersionMismatchError(inner) => inner.fmt(f),
            DeleteStreamError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for DeleteStreamError {}

impl ProvideErrorKind for DeleteStreamError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            DeleteStreamError::ClientLimitExceededError(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            DeleteStreamError::ClientLimitExceededError(_) => Some("ClientLimitExceededException"),
            DeleteStreamError::InvalidArgumentError(_) => Some("InvalidArgumentException"),
            DeleteStreamError::NotAuthorizedError(_) => Some("NotAuthorizedException"),
            DeleteStreamError::ResourceInUseError(_) => Some("ResourceInUseException"),
            DeleteStreamError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            DeleteStreamError::VersionMismatchError(_) => Some("VersionMismatchException"),
            DeleteStreamError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn delete_stream_error(response: &http::Response<Bytes>) -> DeleteStreamError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("ClientLimitExceededException") => {
            deserialize_modeled(body).map(DeleteStreamError::ClientLimitExceededError)
        }
        Some("InvalidArgumentException") => {
            deserialize_modeled(body).map(DeleteStreamError::InvalidArgumentError)
        }
        Some("NotAuthorizedException") => {
            deserialize_modeled(body).map(DeleteStreamError::NotAuthorizedError)
        }
        Some("ResourceInUseException") => {
            deserialize_modeled(body).map(DeleteStreamError::ResourceInUseError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(DeleteStreamError::ResourceNotFoundError)
        }
        Some("VersionMismatchException") => {
            deserialize_modeled(body).map(DeleteStreamError::VersionMismatchError)
        }
        _ => return DeleteStreamError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| DeleteStreamError::Unhandled(Box::new(generic)))
}

/// Error type for the `DescribeStream` operation.
#[derive(Debug)]
pub enum DescribeStreamError {
    ClientLimitExceededError(ClientLimitExceededException),
    InvalidArgumentError(InvalidArgumentException),
    NotAuthorizedError(NotAuthorizedException),
    ResourceNotFoundError(ResourceNotFoundException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for DescribeStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescribeStreamError::ClientLimitExceededError(inner) => inner.fmt(f),
            DescribeStreamError::InvalidArgumentError(inner) => inner.fmt(f),
            DescribeStreamError::NotAuthorizedError(inner) => inner.fmt(f),
            DescribeStreamError::ResourceNotFoundError(inner) => inner.fmt(f),
            DescribeStreamError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for DescribeStreamError {}

impl ProvideErrorKind for DescribeStreamError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            DescribeStreamError::ClientLimitExceededError(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            DescribeStreamError::ClientLimitExceededError(_) => {
                Some("ClientLimitExceededException")
            }
            DescribeStreamError::InvalidArgumentError(_) => Some("InvalidArgumentException"),
            DescribeStreamError::NotAuthorizedError(_) => Some("NotAuthorizedException"),
            DescribeStreamError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            DescribeStreamError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn describe_stream_error(response: &http::Response<Bytes>) -> DescribeStreamError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("ClientLimitExceededException") => {
            deserialize_modeled(body).map(DescribeStreamError::ClientLimitExceededError)
        }
        Some("InvalidArgumentException") => {
            deserialize_modeled(body).map(DescribeStreamError::InvalidArgumentError)
        }
        Some("NotAuthorizedException") => {
            deserialize_modeled(body).map(DescribeStreamError::NotAuthorizedError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(DescribeStreamError::ResourceNotFoundError)
        }
        _ => return DescribeStreamError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| DescribeStreamError::Unhandled(Box::new(generic)))
}

/// Error type for the `ListStreams` operation.
#[derive(Debug)]
pub enum ListStreamsError {
    ClientLimitExceededError(ClientLimitExceededException),
    InvalidArgumentError(InvalidArgumentException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for ListStreamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStreamsError::ClientLimitExceededError(inner) => inner.fmt(f),
            ListStreamsError::InvalidArgumentError(inner) => inner.fmt(f),
            ListStreamsError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for ListStreamsError {}

impl ProvideErrorKind for ListStreamsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            ListStreamsError::ClientLimitExceededError(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            ListStreamsError::ClientLimitExceededError(_) => Some("ClientLimitExceededException"),
            ListStreamsError::InvalidArgumentError(_) => Some("InvalidArgumentException"),
            ListStreamsError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn list_streams_error(response: &http::Response<Bytes>) -> ListStreamsError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("ClientLimitExceededException") => {
            deserialize_modeled(body).map(ListStreamsError::ClientLimitExceededError)
        }
        Some("InvalidArgumentException") => {
            deserialize_modeled(body).map(ListStreamsError::InvalidArgumentError)
        }
        _ => return ListStreamsError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| ListStreamsError::Unhandled(Box::new(generic)))
}

/// Error type for the `GetDataEndpoint` operation.
#[derive(Debug)]
pub enum GetDataEndpointError {
    ClientLimitExceededError(ClientLimitExceededException),
    InvalidArgumentError(InvalidArgumentException),
    NotAuthorizedError(NotAuthorizedException),
    ResourceNotFoundError(ResourceNotFoundException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for GetDataEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetDataEndpointError::ClientLimitExceededError(inner) => inner.fmt(f),
            GetDataEndpointError::InvalidArgumentError(inner) => inner.fmt(f),
            GetDataEndpointError::NotAuthorizedError(inner) => inner.fmt(f),
            GetDataEndpointError::ResourceNotFoundError(inner) => inner.fmt(f),
            GetDataEndpointError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for GetDataEndpointError {}

impl ProvideErrorKind for GetDataEndpointError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            GetDataEndpointError::ClientLimitExceededError(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            GetDataEndpointError::ClientLimitExceededError(_) => {
                Some("ClientLimitExceededException")
            }
            GetDataEndpointError::InvalidArgumentError(_) => Some("InvalidArgumentException"),
            GetDataEndpointError::NotAuthorizedError(_) => Some("NotAuthorizedException"),
            GetDataEndpointError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            GetDataEndpointError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn get_data_endpoint_error(response: &http::Response<Bytes>) -> GetDataEndpointError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("ClientLimitExceededException") => {
            deserialize_modeled(body).map(GetDataEndpointError::ClientLimitExceededError)
        }
        Some("InvalidArgumentException") => {
            deserialize_modeled(body).map(GetDataEndpointError::InvalidArgumentError)
        }
        Some("NotAuthorizedException") => {
            deserialize_modeled(body).map(GetDataEndpointError::NotAuthorizedError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(GetDataEndpointError::ResourceNotFoundError)
        }
        _ => return GetDataEndpointError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| GetDataEndpointError::Unhandled(Box::new(generic)))
}

/// Error type for the `TagStream` operation.
#[derive(Debug)]
pub enum TagStreamError {
    ClientLimitExceededError(ClientLimitExceededException),
    InvalidArgumentError(InvalidArgumentException),
    NotAuthorizedError(NotAuthorizedException),
    ResourceNotFoundError(ResourceNotFoundException),
    TagsPerResourceExceededLimitError(TagsPerResourceExceededLimitException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for TagStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagStreamError::ClientLimitExceededError(inner) => inner.fmt(f),
            TagStreamError::InvalidArgumentError(inner) => inner.fmt(f),
            TagStreamError::NotAuthorizedError(inner) => inner.fmt(f),
            TagStreamError::ResourceNotFoundError(inner) => inner.fmt(f),
            TagStreamError::TagsPerResourceExceededLimitError(inner) => inner.fmt(f),
            TagStreamError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for TagStreamError {}

impl ProvideErrorKind for TagStreamError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            TagStreamError::ClientLimitExceededError(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            TagStreamError::ClientLimitExceededError(_) => Some("ClientLimitExceededException"),
            TagStreamError::InvalidArgumentError(_) => Some("InvalidArgumentException"),
            TagStreamError::NotAuthorizedError(_) => Some("NotAuthorizedException"),
            TagStreamError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            TagStreamError::TagsPerResourceExceededLimitError(_) => {
                Some("TagsPerResourceExceededLimitException")
            }
            TagStreamError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn tag_stream_error(response: &http::Response<Bytes>) -> TagStreamError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("ClientLimitExceededException") => {
            deserialize_modeled(body).map(TagStreamError::ClientLimitExceededError)
        }
        Some("InvalidArgumentException") => {
            deserialize_modeled(body).map(TagStreamError::InvalidArgumentError)
        }
        Some("NotAuthorizedException") => {
            deserialize_modeled(body).map(TagStreamError::NotAuthorizedError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(TagStreamError::ResourceNotFoundError)
        }
        Some("TagsPerResourceExceededLimitException") => {
            deserialize_modeled(body).map(TagStreamError::TagsPerResourceExceededLimitError)
        }
        _ => return TagStreamError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| TagStreamError::Unhandled(Box::new(generic)))
}

#[cfg(test)]
mod test {
    use super::{describe_stream_error, DescribeStreamError};
    use bytes::Bytes;
    use sdk_types::retry::{ErrorKind, ProvideErrorKind};

    fn error_response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn modeled_code_maps_to_typed_variant() {
        let response = error_response(
            404,
            r#"{"__type":"ResourceNotFoundException","message":"no such stream"}"#,
        );
        match describe_stream_error(&response) {
            DescribeStreamError::ResourceNotFoundError(e) => {
                assert_eq!(e.message.as_deref(), Some("no such stream"))
            }
            other => panic!("expected ResourceNotFoundError, got {:?}", other),
        }
    }

    #[test]
    fn namespaced_code_is_stripped_before_matching() {
        let response = error_response(
            400,
            r#"{"__type":"com.amazonaws.kinesisvideo#ClientLimitExceededException"}"#,
        );
        let err = describe_stream_error(&response);
        assert!(matches!(
            err,
            DescribeStreamError::ClientLimitExceededError(_)
        ));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
    }

    #[test]
    fn unknown_code_falls_back_to_unhandled() {
        let response = error_response(500, r#"{"__type":"MysteryException"}"#);
        let err = describe_stream_error(&response);
        match &err {
            DescribeStreamError::Unhandled(_) => {}
            other => panic!("expected Unhandled, got {:?}", other),
        }
        assert_eq!(err.code(), Some("MysteryException"));
    }

    #[test]
    fn garbage_body_never_panics() {
        let response = error_response(500, "not json at all");
        assert!(matches!(
            describe_stream_error(&response),
            DescribeStreamError::Unhandled(_)
        ));
    }
}
