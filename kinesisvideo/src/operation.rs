// Code generated by a smithy-based code generator. DO NOT EDIT.
use crate::error::{
    CreateStreamError, DeleteStreamError, DescribeStreamError, GetDataEndpointError,
    ListStreamsError, TagStreamError,
};
use crate::output::{
    CreateStreamOutput, DeleteStreamOutput, DescribeStreamOutput, GetDataEndpointOutput,
    ListStreamsOutput, TagStreamOutput,
};
use bytes::Bytes;
use sdk_http::response::ParseStrictResponse;
use serde::Deserialize;

/// Deserializes a successful response body. An empty body deserializes to
/// the output's default value (all fields unset).
fn parse_payload<T, E>(
    body: &Bytes,
    unhandled: fn(Box<dyn std::error::Error + Send + Sync>) -> E,
) -> Result<T, E>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if body.is_empty() {
        Ok(T::default())
    } else {
        serde_json::from_slice(body).map_err(|e| unhandled(e.into()))
    }
}

/// <p>Creates a new Kinesis video stream.</p>
/// <p>When you create a new stream, Kinesis Video Streams assigns it a
/// version number. When you change the stream's metadata, Kinesis Video
/// Streams updates the version.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct CreateStream {
    _private: (),
}

impl CreateStream {
    /// Creates a new builder-style object to manufacture
    /// [`CreateStreamInput`](crate::input::CreateStreamInput).
    pub fn builder() -> crate::input::create_stream_input::Builder {
        crate::input::CreateStreamInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for CreateStream {
    type Output = Result<CreateStreamOutput, CreateStreamError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::create_stream_error(response));
        }
        parse_payload(response.body(), CreateStreamError::Unhandled)
    }
}

/// <p>Deletes a Kinesis video stream and the data contained in the
/// stream.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteStream {
    _private: (),
}

impl DeleteStream {
    /// Creates a new builder-style object to manufacture
    /// [`DeleteStreamInput`](crate::input::DeleteStreamInput).
    pub fn builder() -> crate::input::delete_stream_input::Builder {
        crate::input::DeleteStreamInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for DeleteStream {
    type Output = Result<DeleteStreamOutput, DeleteStreamError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::delete_stream_error(response));
        }
        parse_payload(response.body(), DeleteStreamError::Unhandled)
    }
}

/// <p>Returns the most current information about the specified stream. You
/// must specify either the <code>StreamName</code> or the
/// <code>StreamARN</code>.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DescribeStream {
    _private: (),
}

impl DescribeStream {
    /// Creates a new builder-style object to manufacture
    /// [`DescribeStreamInput`](crate::input::DescribeStreamInput).
    pub fn builder() -> crate::input::describe_stream_input::Builder {
        crate::input::DescribeStreamInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for DescribeStream {
    type Output = Result<DescribeStreamOutput, DescribeStreamError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::describe_stream_error(response));
        }
        parse_payload(response.body(), DescribeStreamError::Unhandled)
    }
}

/// <p>Returns an array of <code>StreamInfo</code> objects. Each object
/// describes a stream. To retrieve only streams that satisfy a specific
/// condition, you can specify a <code>StreamNameCondition</code>.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct ListStreams {
    _private: (),
}

impl ListStreams {
    /// Creates a new builder-style object to manufacture
    /// [`ListStreamsInput`](crate::input::ListStreamsInput).
    pub fn builder() -> crate::input::list_streams_input::Builder {
        crate::input::ListStreamsInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for ListStreams {
    type Output = Result<ListStreamsOutput, ListStreamsError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::list_streams_error(response));
        }
        parse_payload(response.body(), ListStreamsError::Unhandled)
    }
}

/// <p>Gets an endpoint for a specified stream for either reading or
/// writing. Use this endpoint in your application to read from the
/// specified stream (using the <code>GetMedia</code> or
/// <code>GetMediaForFragmentList</code> operations) or write to it (using
/// the <code>PutMedia</code> operation).</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct GetDataEndpoint {
    _private: (),
}

impl GetDataEndpoint {
    /// Creates a new builder-style object to manufacture
    /// [`GetDataEndpointInput`](crate::input::GetDataEndpointInput).
    pub fn builder() -> crate::input::get_data_endpoint_input::Builder {
        crate::input::GetDataEndpointInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for GetDataEndpoint {
    type Output = Result<GetDataEndpointOutput, GetDataEndpointError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::get_data_endpoint_error(response));
        }
        parse_payload(response.body(), GetDataEndpointError::Unhandled)
    }
}

/// <p>Adds one or more tags to a stream. A tag is a key-value pair (the
/// value is optional) that you can define and assign to AWS
/// resources.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct TagStream {
    _private: (),
}

impl TagStream {
    /// Creates a new builder-style object to manufacture
    /// [`TagStreamInput`](crate::input::TagStreamInput).
    pub fn builder() -> crate::input::tag_stream_input::Builder {
        crate::input::TagStreamInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for TagStream {
    type Output = Result<TagStreamOutput, TagStreamError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::tag_stream_error(response));
        }
        parse_payload(response.body(), TagStreamError::Unhandled)
    }
}

#[cfg(test)]
mod test {
    use super::{DescribeStream, GetDataEndpoint};
    use crate::error::DescribeStreamError;
    use crate::model::StreamStatus;
    use bytes::Bytes;
    use sdk_http::response::ParseStrictResponse;

    #[test]
    fn success_body_deserializes_into_output() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"StreamInfo":{"StreamName":"demo","Status":"ACTIVE","CreationTime":1.614955644E9}}"#,
            ))
            .unwrap();
        let output = DescribeStream::new()
            .parse(&response)
            .expect("valid response");
        let info = output.stream_info.expect("stream info present");
        assert_eq!(info.stream_name.as_deref(), Some("demo"));
        assert_eq!(info.status, Some(StreamStatus::Active));
    }

    #[test]
    fn empty_success_body_is_the_default_output() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::new())
            .unwrap();
        let output = GetDataEndpoint::new().parse(&response).expect("empty ok");
        assert_eq!(output.data_endpoint, None);
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{ this is not json"))
            .unwrap();
        let err = DescribeStream::new()
            .parse(&response)
            .expect_err("malformed body");
        assert!(matches!(err, DescribeStreamError::Unhandled(_)));
    }

    #[test]
    fn unknown_enum_value_in_body_is_an_error() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"StreamInfo":{"StreamName":"demo","Status":"PAUSED"}}"#,
            ))
            .unwrap();
        DescribeStream::new()
            .parse(&response)
            .expect_err("PAUSED is not a recognized status");
    }
}
