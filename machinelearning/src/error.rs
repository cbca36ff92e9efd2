// Code generated by a smithy-based code generator. DO NOT EDIT.
use bytes::Bytes;
use sdk_types::retry::{ErrorKind, ProvideErrorKind};
use serde::Deserialize;
use std::error::Error;
use std::fmt;

/// <p>An error on the client occurred. Typically, the cause is an invalid
/// input value.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InvalidInputException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>A specified resource cannot be located.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResourceNotFoundException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>An error on the server occurred when trying to process a request.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InternalServerException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>The subscriber exceeded the maximum number of operations. This
/// exception can occur when listing objects such as
/// <code>DataSource</code>.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LimitExceededException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>A second request to use or change an object was received while the
/// first request was still in progress, with an inconsistent set of
/// parameters.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct IdempotentParameterMismatchException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InvalidTagException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TagLimitExceededException {
    #[serde(rename = "message", alias = "Message")]
    #[serde(default)]
    pub message: Option<String>,
}

/// <p>The exception is thrown when a predict request is made to an unmounted
/// <code>MLModel</code>.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PredictorNotMountedException {
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

display_exception!(InvalidInputException, "InvalidInputException");
display_exception!(ResourceNotFoundException, "ResourceNotFoundException");
display_exception!(InternalServerException, "InternalServerException");
display_exception!(LimitExceededException, "LimitExceededException");
display_exception!(
    IdempotentParameterMismatchException,
    "IdempotentParameterMismatchException"
);
display_exception!(InvalidTagException, "InvalidTagException");
display_exception!(TagLimitExceededException, "TagLimitExceededException");
display_exception!(PredictorNotMountedException, "PredictorNotMountedException");

fn deserialize_modeled<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Error type for the `CreateMLModel` operation.
#[derive(Debug)]
pub enum CreateMLModelError {
    IdempotentParameterMismatchError(IdempotentParameterMismatchException),
    InternalServerError(InternalServerException),
    InvalidInputError(InvalidInputException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for CreateMLModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateMLModelError::IdempotentParameterMismatchError(inner) => inner.fmt(f),
            CreateMLModelError::InternalServerError(inner) => inner.fmt(f),
            CreateMLModelError::InvalidInputError(inner) => inner.fmt(f),
            CreateMLModelError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for CreateMLModelError {}

impl ProvideErrorKind for CreateMLModelError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            CreateMLModelError::InternalServerError(_) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            CreateMLModelError::IdempotentParameterMismatchError(_) => {
                Some("IdempotentParameterMismatchException")
            }
            CreateMLModelError::InternalServerError(_) => Some("InternalServerException"),
            CreateMLModelError::InvalidInputError(_) => Some("InvalidInputException"),
            CreateMLModelError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn create_ml_model_error(response: &http::Response<Bytes>) -> CreateMLModelError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("IdempotentParameterMismatchException") => {
            deserialize_modeled(body).map(CreateMLModelError::IdempotentParameterMismatchError)
        }
        Some("InternalServerException") => {
            deserialize_modeled(body).map(CreateMLModelError::InternalServerError)
        }
        Some("InvalidInputException") => {
            deserialize_modeled(body).map(CreateMLModelError::InvalidInputError)
        }
        _ => return CreateMLModelError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| CreateMLModelError::Unhandled(Box::new(generic)))
}

/// Error type for the `GetMLModel` operation.
#[derive(Debug)]
pub enum GetMLModelError {
    InternalServerError(InternalServerException),
    InvalidInputError(InvalidInputException),
    ResourceNotFoundError(ResourceNotFoundException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for GetMLModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetMLModelError::InternalServerError(inner) => inner.fmt(f),
            GetMLModelError::InvalidInputError(inner) => inner.fmt(f),
            GetMLModelError::ResourceNotFoundError(inner) => inner.fmt(f),
            GetMLModelError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for GetMLModelError {}

impl ProvideErrorKind for GetMLModelError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            GetMLModelError::InternalServerError(_) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            GetMLModelError::InternalServerError(_) => Some("InternalServerException"),
            GetMLModelError::InvalidInputError(_) => Some("InvalidInputException"),
            GetMLModelError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            GetMLModelError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn get_ml_model_error(response: &http::Response<Bytes>) -> GetMLModelError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("InternalServerException") => {
            deserialize_modeled(body).map(GetMLModelError::InternalServerError)
        }
        Some("InvalidInputException") => {
            deserialize_modeled(body).map(GetMLModelError::InvalidInputError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(GetMLModelError::ResourceNotFoundError)
        }
        _ => return GetMLModelError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| GetMLModelError::Unhandled(Box::new(generic)))
}

/// Error type for the `DeleteMLModel` operation.
#[derive(Debug)]
pub enum DeleteMLModelError {
    InternalServerError(InternalServerException),
    InvalidInputError(InvalidInputException),
    ResourceNotFoundError(ResourceNotFoundException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for DeleteMLModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteMLModelError::InternalServerError(inner) => inner.fmt(f),
            DeleteMLModelError::InvalidInputError(inner) => inner.fmt(f),
            DeleteMLModelError::ResourceNotFoundError(inner) => inner.fmt(f),
            DeleteMLModelError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for DeleteMLModelError {}

impl ProvideErrorKind for DeleteMLModelError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            DeleteMLModelError::InternalServerError(_) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            DeleteMLModelError::InternalServerError(_) => Some("InternalServerException"),
            DeleteMLModelError::InvalidInputError(_) => Some("InvalidInputException"),
            DeleteMLModelError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            DeleteMLModelError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn delete_ml_model_error(response: &http::Response<Bytes>) -> DeleteMLModelError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("InternalServerException") => {
            deserialize_modeled(body).map(DeleteMLModelError::InternalServerError)
        }
        Some("InvalidInputException") => {
            deserialize_modeled(body).map(DeleteMLModelError::InvalidInputError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(DeleteMLModelError::ResourceNotFoundError)
        }
        _ => return DeleteMLModelError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| DeleteMLModelError::Unhandled(Box::new(generic)))
}

/// Error type for the `DescribeMLModels` operation.
#[derive(Debug)]
pub enum DescribeMLModelsError {
    InternalServerError(InternalServerException),
    InvalidInputError(InvalidInputException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for DescribeMLModelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescribeMLModelsError::InternalServerError(inner) => inner.fmt(f),
            DescribeMLModelsError::InvalidInputError(inner) => inner.fmt(f),
            DescribeMLModelsError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for DescribeMLModelsError {}

impl ProvideErrorKind for DescribeMLModelsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            DescribeMLModelsError::InternalServerError(_) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            DescribeMLModelsError::InternalServerError(_) => Some("InternalServerException"),
            DescribeMLModelsError::InvalidInputError(_) => Some("InvalidInputException"),
            DescribeMLModelsError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn describe_ml_models_error(response: &http::Response<Bytes>) -> DescribeMLModelsError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("InternalServerException") => {
            deserialize_modeled(body).map(DescribeMLModelsError::InternalServerError)
        }
        Some("InvalidInputException") => {
            deserialize_modeled(body).map(DescribeMLModelsError::InvalidInputError)
        }
        _ => return DescribeMLModelsError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| DescribeMLModelsError::Unhandled(Box::new(generic)))
}

/// Error type for the `UpdateMLModel` operation.
#[derive(Debug)]
pub enum UpdateMLModelError {
    InternalServerError(InternalServerException),
    InvalidInputError(InvalidInputException),
    ResourceNotFoundError(ResourceNotFoundException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for UpdateMLModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMLModelError::InternalServerError(inner) => inner.fmt(f),
            UpdateMLModelError::InvalidInputError(inner) => inner.fmt(f),
            UpdateMLModelError::ResourceNotFoundError(inner) => inner.fmt(f),
            UpdateMLModelError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for UpdateMLModelError {}

impl ProvideErrorKind for UpdateMLModelError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            UpdateMLModelError::InternalServerError(_) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            UpdateMLModelError::InternalServerError(_) => Some("InternalServerException"),
            UpdateMLModelError::InvalidInputError(_) => Some("InvalidInputException"),
            UpdateMLModelError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            UpdateMLModelError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn update_ml_model_error(response: &http::Response<Bytes>) -> UpdateMLModelError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("InternalServerException") => {
            deserialize_modeled(body).map(UpdateMLModelError::InternalServerError)
        }
        Some("InvalidInputException") => {
            deserialize_modeled(body).map(UpdateMLModelError::InvalidInputError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(UpdateMLModelError::ResourceNotFoundError)
        }
        _ => return UpdateMLModelError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| UpdateMLModelError::Unhandled(Box::new(generic)))
}

/// Error type for the `AddTags` operation.
#[derive(Debug)]
pub enum AddTagsError {
    InternalServerError(InternalServerException),
    InvalidInputError(InvalidInputException),
    InvalidTagError(InvalidTagException),
    ResourceNotFoundError(ResourceNotFoundException),
    TagLimitExceededError(TagLimitExceededException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for AddTagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddTagsError::InternalServerError(inner) => inner.fmt(f),
            AddTagsError::InvalidInputError(inner) => inner.fmt(f),
            AddTagsError::InvalidTagError(inner) => inner.fmt(f),
            AddTagsError::ResourceNotFoundError(inner) => inner.fmt(f),
            AddTagsError::TagLimitExceededError(inner) => inner.fmt(f),
            AddTagsError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for AddTagsError {}

impl ProvideErrorKind for AddTagsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            AddTagsError::InternalServerError(_) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            AddTagsError::InternalServerError(_) => Some("InternalServerException"),
            AddTagsError::InvalidInputError(_) => Some("InvalidInputException"),
            AddTagsError::InvalidTagError(_) => Some("InvalidTagException"),
            AddTagsError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            AddTagsError::TagLimitExceededError(_) => Some("TagLimitExceededException"),
            AddTagsError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn add_tags_error(response: &http::Response<Bytes>) -> AddTagsError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("InternalServerException") => {
            deserialize_modeled(body).map(AddTagsError::InternalServerError)
        }
        Some("InvalidInputException") => {
            deserialize_modeled(body).map(AddTagsError::InvalidInputError)
        }
        Some("InvalidTagException") => deserialize_modeled(body).map(AddTagsError::InvalidTagError),
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(AddTagsError::ResourceNotFoundError)
        }
        Some("TagLimitExceededException") => {
            deserialize_modeled(body).map(AddTagsError::TagLimitExceededError)
        }
        _ => return AddTagsError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| AddTagsError::Unhandled(Box::new(generic)))
}

/// Error type for the `Predict` operation.
#[derive(Debug)]
pub enum PredictError {
    InternalServerError(InternalServerException),
    InvalidInputError(InvalidInputException),
    LimitExceededError(LimitExceededException),
    PredictorNotMountedError(PredictorNotMountedException),
    ResourceNotFoundError(ResourceNotFoundException),
    /// An unmodeled error was returned, or the response could not be
    /// interpreted as a modeled error.
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::InternalServerError(inner) => inner.fmt(f),
            PredictError::InvalidInputError(inner) => inner.fmt(f),
            PredictError::LimitExceededError(inner) => inner.fmt(f),
            PredictError::PredictorNotMountedError(inner) => inner.fmt(f),
            PredictError::ResourceNotFoundError(inner) => inner.fmt(f),
            PredictError::Unhandled(inner) => inner.fmt(f),
        }
    }
}

impl Error for PredictError {}

impl ProvideErrorKind for PredictError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self {
            PredictError::InternalServerError(_) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            PredictError::InternalServerError(_) => Some("InternalServerException"),
            PredictError::InvalidInputError(_) => Some("InvalidInputException"),
            PredictError::LimitExceededError(_) => Some("LimitExceededException"),
            PredictError::PredictorNotMountedError(_) => Some("PredictorNotMountedException"),
            PredictError::ResourceNotFoundError(_) => Some("ResourceNotFoundException"),
            PredictError::Unhandled(inner) => inner
                .downcast_ref::<sdk_types::Error>()
                .and_then(|generic| generic.code()),
        }
    }
}

pub fn predict_error(response: &http::Response<Bytes>) -> PredictError {
    let generic = aws_core::json_errors::parse_generic_error(response);
    let body = response.body().as_ref();
    let parsed = match generic.code() {
        Some("InternalServerException") => {
            deserialize_modeled(body).map(PredictError::InternalServerError)
        }
        Some("InvalidInputException") => {
            deserialize_modeled(body).map(PredictError::InvalidInputError)
        }
        Some("LimitExceededException") => {
            deserialize_modeled(body).map(PredictError::LimitExceededError)
        }
        Some("PredictorNotMountedException") => {
            deserialize_modeled(body).map(PredictError::PredictorNotMountedError)
        }
        Some("ResourceNotFoundException") => {
            deserialize_modeled(body).map(PredictError::ResourceNotFoundError)
        }
        _ => return PredictError::Unhandled(Box::new(generic)),
    };
    parsed.unwrap_or_else(|_| PredictError::Unhandled(Box::new(generic)))
}

#[cfg(test)]
mod test {
    use super::{get_ml_model_error, predict_error, GetMLModelError, PredictError};
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
            r#"{"__type":"ResourceNotFoundException","message":"no model ml-missing"}"#,
        );
        match get_ml_model_error(&response) {
            GetMLModelError::ResourceNotFoundError(e) => {
                assert_eq!(e.message.as_deref(), Some("no model ml-missing"))
            }
            other => panic!("expected ResourceNotFoundError, got {:?}", other),
        }
    }

    #[test]
    fn internal_server_error_is_retryable() {
        let response = error_response(500, r#"{"__type":"InternalServerException"}"#);
        let err = get_ml_model_error(&response);
        assert!(matches!(err, GetMLModelError::InternalServerError(_)));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    }

    #[test]
    fn unmounted_predictor_maps_to_typed_variant() {
        let response = error_response(
            400,
            r#"{"__type":"PredictorNotMountedException","message":"mount the model first"}"#,
        );
        assert!(matches!(
            predict_error(&response),
            PredictError::PredictorNotMountedError(_)
        ));
    }

    #[test]
    fn code_from_errortype_header_is_honored() {
        let response = http::Response::builder()
            .status(400)
            .header(
                "x-amzn-errortype",
                "InvalidInputException:http://internal.amazon.com/coral/",
            )
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        assert!(matches!(
            get_ml_model_error(&response),
            GetMLModelError::InvalidInputError(_)
        ));
    }

    #[test]
    fn unknown_code_falls_back_to_unhandled() {
        let response = error_response(402, r#"{"__type":"PaymentRequiredException"}"#);
        let err = get_ml_model_error(&response);
        assert!(matches!(err, GetMLModelError::Unhandled(_)));
        assert_eq!(err.code(), Some("PaymentRequiredException"));
    }
}
