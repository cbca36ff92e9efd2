// Code generated by a smithy-based code generator. DO NOT EDIT.
use crate::config::Config;
use aws_core::retry::AwsErrorRetryPolicy;
use aws_core::SigningService;
use sdk_http::body::SdkBody;
use sdk_http::operation;
use sdk_http::operation::{BuildError, Metadata, Operation};
use serde::Serialize;
use std::collections::HashMap;

fn request_builder(uri: &'static str) -> http::request::Builder {
    http::request::Builder::new()
        .method(http::Method::POST)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
}

/// Serializes the input shape and wraps it in a ready-to-dispatch request,
/// loading the request property bag with everything the middleware stack
/// needs to resolve the endpoint and sign the call.
fn assemble<T: Serialize>(
    input: &T,
    uri: &'static str,
    config: &Config,
) -> Result<operation::Request, BuildError> {
    let body = serde_json::to_vec(input).map_err(|e| BuildError::SerializationError(e.into()))?;
    let http_request = request_builder(uri)
        .body(SdkBody::from(body))
        .map_err(|e| BuildError::SerializationError(e.into()))?;
    let mut request = operation::Request::new(http_request);
    {
        let mut properties = request.properties_mut();
        let region = config.region.clone().ok_or(BuildError::MissingField {
            field: "region",
            details: "a region is required to resolve the endpoint for this operation",
        })?;
        properties.insert(region);
        properties.insert(SigningService::from_static(crate::SERVICE_NAME));
        aws_core::endpoint::set_endpoint_resolver(
            &mut properties,
            config.endpoint_resolver.clone(),
        );
        aws_core::credentials::set_provider(&mut properties, config.credentials_provider.clone());
    }
    Ok(request)
}

/// Input for the <code>CreateStream</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStreamInput {
    /// <p>The name of the device that is writing to the stream.</p>
    #[serde(rename = "DeviceName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// <p>A name for the stream that you are creating. The stream name is an
    /// identifier for the stream, and must be unique for each account and
    /// region.</p>
    #[serde(rename = "StreamName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// <p>The media type of the stream.</p>
    #[serde(rename = "MediaType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// <p>The ID of the AWS Key Management Service (AWS KMS) key that you want
    /// Kinesis Video Streams to use to encrypt stream data.</p>
    #[serde(rename = "KmsKeyId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// <p>The number of hours that you want to retain the data in the
    /// stream.</p>
    #[serde(rename = "DataRetentionInHours")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retention_in_hours: Option<i32>,
}

impl CreateStreamInput {
    pub fn builder() -> create_stream_input::Builder {
        create_stream_input::Builder::default()
    }

    /// Consumes the builder output and converts it into an operation ready to
    /// be dispatched by the shared client runtime.
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateStream, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "/createStream", config)?;
        Ok(
            Operation::new(request, crate::operation::CreateStream::new())
                .with_metadata(Metadata::new("CreateStream", "kinesisvideo"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod create_stream_input {
    use super::CreateStreamInput;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        device_name: Option<String>,
        stream_name: Option<String>,
        media_type: Option<String>,
        kms_key_id: Option<String>,
        data_retention_in_hours: Option<i32>,
    }

    impl Builder {
        pub fn device_name(mut self, inp: impl Into<String>) -> Self {
            self.device_name = Some(inp.into());
            self
        }

        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.stream_name = Some(inp.into());
            self
        }

        pub fn media_type(mut self, inp: impl Into<String>) -> Self {
            self.media_type = Some(inp.into());
            self
        }

        pub fn kms_key_id(mut self, inp: impl Into<String>) -> Self {
            self.kms_key_id = Some(inp.into());
            self
        }

        pub fn data_retention_in_hours(mut self, inp: i32) -> Self {
            self.data_retention_in_hours = Some(inp);
            self
        }

        pub fn build(self) -> Result<CreateStreamInput, BuildError> {
            let stream_name = self.stream_name.ok_or(BuildError::MissingField {
                field: "stream_name",
                details: "StreamName is required when creating a stream",
            })?;
            Ok(CreateStreamInput {
                device_name: self.device_name,
                stream_name: Some(stream_name),
                media_type: self.media_type,
                kms_key_id: self.kms_key_id,
                data_retention_in_hours: self.data_retention_in_hours,
            })
        }
    }
}

/// Input for the <code>DeleteStream</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteStreamInput {
    /// <p>The Amazon Resource Name (ARN) of the stream that you want to
    /// delete.</p>
    #[serde(rename = "StreamARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// <p>Optional: the version of the stream that you want to delete.
    /// Specify the version as a safeguard to ensure that you are deleting
    /// the correct stream.</p>
    #[serde(rename = "CurrentVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
}

impl DeleteStreamInput {
    pub fn builder() -> delete_stream_input::Builder {
        delete_stream_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteStream, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "/deleteStream", config)?;
        Ok(
            Operation::new(request, crate::operation::DeleteStream::new())
                .with_metadata(Metadata::new("DeleteStream", "kinesisvideo"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod delete_stream_input {
    use super::DeleteStreamInput;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        stream_arn: Option<String>,
        current_version: Option<String>,
    }

    impl Builder {
        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
            self
        }

        pub fn current_version(mut self, inp: impl Into<String>) -> Self {
            self.current_version = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DeleteStreamInput, BuildError> {
            let stream_arn = self.stream_arn.ok_or(BuildError::MissingField {
                field: "stream_arn",
                details: "StreamARN is required when deleting a stream",
            })?;
            Ok(DeleteStreamInput {
                stream_arn: Some(stream_arn),
                current_version: self.current_version,
            })
        }
    }
}

/// Input for the <code>DescribeStream</code> operation. Specify either the
/// stream name or the stream ARN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribeStreamInput {
    /// <p>The name of the stream.</p>
    #[serde(rename = "StreamName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// <p>The Amazon Resource Name (ARN) of the stream.</p>
    #[serde(rename = "StreamARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl DescribeStreamInput {
    pub fn builder() -> describe_stream_input::Builder {
        describe_stream_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeStream, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "/describeStream", config)?;
        Ok(
            Operation::new(request, crate::operation::DescribeStream::new())
                .with_metadata(Metadata::new("DescribeStream", "kinesisvideo"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod describe_stream_input {
    use super::DescribeStreamInput;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        stream_name: Option<String>,
        stream_arn: Option<String>,
    }

    impl Builder {
        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.stream_name = Some(inp.into());
            self
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DescribeStreamInput, BuildError> {
            Ok(DescribeStreamInput {
                stream_name: self.stream_name,
                stream_arn: self.stream_arn,
            })
        }
    }
}

/// Input for the <code>ListStreams</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListStreamsInput {
    /// <p>The maximum number of streams to return in the response. The
    /// default is 10,000.</p>
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// <p>If you specify this parameter, when the result of a
    /// <code>ListStreams</code> operation is truncated, the call returns the
    /// <code>NextToken</code> in the response. To get another batch of
    /// streams, provide this token in your next request.</p>
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>Optional: returns only streams that satisfy a specific condition.
    /// Currently, you can specify only the prefix of a stream name as a
    /// condition.</p>
    #[serde(rename = "StreamNameCondition")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name_condition: Option<crate::model::StreamNameCondition>,
}

impl ListStreamsInput {
    pub fn builder() -> list_streams_input::Builder {
        list_streams_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListStreams, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "/listStreams", config)?;
        Ok(
            Operation::new(request, crate::operation::ListStreams::new())
                .with_metadata(Metadata::new("ListStreams", "kinesisvideo"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod list_streams_input {
    use super::ListStreamsInput;
    use crate::model::StreamNameCondition;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        max_results: Option<i32>,
        next_token: Option<String>,
        stream_name_condition: Option<StreamNameCondition>,
    }

    impl Builder {
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }

        pub fn stream_name_condition(mut self, inp: StreamNameCondition) -> Self {
            self.stream_name_condition = Some(inp);
            self
        }

        pub fn build(self) -> Result<ListStreamsInput, BuildError> {
            Ok(ListStreamsInput {
                max_results: self.max_results,
                next_token: self.next_token,
                stream_name_condition: self.stream_name_condition,
            })
        }
    }
}

/// Input for the <code>GetDataEndpoint</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetDataEndpointInput {
    /// <p>The name of the stream that you want to get the endpoint for.</p>
    #[serde(rename = "StreamName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// <p>The Amazon Resource Name (ARN) of the stream that you want to get
    /// the endpoint for.</p>
    #[serde(rename = "StreamARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// <p>The name of the API action for which to get an endpoint.</p>
    #[serde(rename = "APIName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_name: Option<crate::model::APIName>,
}

impl GetDataEndpointInput {
    pub fn builder() -> get_data_endpoint_input::Builder {
        get_data_endpoint_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetDataEndpoint, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "/getDataEndpoint", config)?;
        Ok(
            Operation::new(request, crate::operation::GetDataEndpoint::new())
                .with_metadata(Metadata::new("GetDataEndpoint", "kinesisvideo"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod get_data_endpoint_input {
    use super::GetDataEndpointInput;
    use crate::model::APIName;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        stream_name: Option<String>,
        stream_arn: Option<String>,
        api_name: Option<APIName>,
    }

    impl Builder {
        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.stream_name = Some(inp.into());
            self
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
            self
        }

        pub fn api_name(mut self, inp: APIName) -> Self {
            self.api_name = Some(inp);
            self
        }

        pub fn build(self) -> Result<GetDataEndpointInput, BuildError> {
            let api_name = self.api_name.ok_or(BuildError::MissingField {
                field: "api_name",
                details: "APIName is required when requesting a data endpoint",
            })?;
            Ok(GetDataEndpointInput {
                stream_name: self.stream_name,
                stream_arn: self.stream_arn,
                api_name: Some(api_name),
            })
        }
    }
}

/// Input for the <code>TagStream</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagStreamInput {
    /// <p>The Amazon Resource Name (ARN) of the resource that you want to add
    /// the tag or tags to.</p>
    #[serde(rename = "StreamARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// <p>The name of the stream that you want to add the tag or tags
    /// to.</p>
    #[serde(rename = "StreamName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// <p>A list of tags to associate with the specified stream. Each tag is
    /// a key-value pair (the value is optional).</p>
    #[serde(rename = "Tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl TagStreamInput {
    pub fn builder() -> tag_stream_input::Builder {
        tag_stream_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::TagStream, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "/tagStream", config)?;
        Ok(Operation::new(request, crate::operation::TagStream::new())
            .with_metadata(Metadata::new("TagStream", "kinesisvideo"))
            .with_retry_policy(AwsErrorRetryPolicy::new()))
    }
}

pub mod tag_stream_input {
    use super::TagStreamInput;
    use sdk_http::operation::BuildError;
    use std::collections::HashMap;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        stream_arn: Option<String>,
        stream_name: Option<String>,
        tags: Option<HashMap<String, String>>,
    }

    impl Builder {
        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
            self
        }

        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.stream_name = Some(inp.into());
            self
        }

        /// Adds a single tag, creating the tag map if it does not exist yet.
        pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.tags
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn tags(mut self, inp: HashMap<String, String>) -> Self {
            self.tags = Some(inp);
            self
        }

        pub fn build(self) -> Result<TagStreamInput, BuildError> {
            let tags = self.tags.ok_or(BuildError::MissingField {
                field: "tags",
                details: "Tags is required when tagging a stream",
            })?;
            Ok(TagStreamInput {
                stream_arn: self.stream_arn,
                stream_name: self.stream_name,
                tags: Some(tags),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CreateStreamInput, GetDataEndpointInput};
    use crate::model::APIName;
    use sdk_http::operation::BuildError;

    #[test]
    fn create_stream_requires_stream_name() {
        let err = CreateStreamInput::builder()
            .device_name("camera-1")
            .build()
            .expect_err("stream_name is required");
        assert!(err.to_string().contains("stream_name"));
    }

    #[test]
    fn get_data_endpoint_requires_api_name() {
        GetDataEndpointInput::builder()
            .stream_name("demo")
            .build()
            .expect_err("api_name is required");
        GetDataEndpointInput::builder()
            .stream_name("demo")
            .api_name(APIName::GetMedia)
            .build()
            .expect("api_name provided");
    }

    #[test]
    fn missing_region_is_a_construction_failure() {
        let config = crate::Config::builder()
            .credentials_provider(aws_core::Credentials::from_keys("ak", "sk", None))
            .build();
        let config = crate::config::Config {
            region: None,
            ..config
        };
        let input = CreateStreamInput::builder()
            .stream_name("demo")
            .build()
            .unwrap();
        let result = input.make_operation(&config);
        assert!(
            matches!(
                result,
                Err(BuildError::MissingField {
                    field: "region",
                    ..
                })
            ),
            "construction must fail without a region"
        );
    }
}
