// Code generated by a smithy-based code generator. DO NOT EDIT.
use crate::model::StreamInfo;
use serde::Deserialize;

/// Output for the <code>CreateStream</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CreateStreamOutput {
    /// <p>The Amazon Resource Name (ARN) of the stream.</p>
    #[serde(rename = "StreamARN")]
    #[serde(default)]
    pub stream_arn: Option<String>,
}

impl CreateStreamOutput {
    pub fn builder() -> create_stream_output::Builder {
        create_stream_output::Builder::default()
    }
}

pub mod create_stream_output {
    use super::CreateStreamOutput;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        stream_arn: Option<String>,
    }

    impl Builder {
        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
            self
        }

        pub fn build(self) -> CreateStreamOutput {
            CreateStreamOutput {
                stream_arn: self.stream_arn,
            }
        }
    }
}

/// Output for the <code>DeleteStream</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteStreamOutput {}

impl DeleteStreamOutput {
    pub fn builder() -> delete_stream_output::Builder {
        delete_stream_output::Builder::default()
    }
}

pub mod delete_stream_output {
    use super::DeleteStreamOutput;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> DeleteStreamOutput {
            DeleteStreamOutput {}
        }
    }
}

/// Output for the <code>DescribeStream</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DescribeStreamOutput {
    /// <p>An object that describes the stream.</p>
    #[serde(rename = "StreamInfo")]
    #[serde(default)]
    pub stream_info: Option<StreamInfo>,
}

impl DescribeStreamOutput {
    pub fn builder() -> describe_stream_output::Builder {
        describe_stream_output::Builder::default()
    }
}

pub mod describe_stream_output {
    use super::DescribeStreamOutput;
    use crate::model::StreamInfo;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        stream_info: Option<StreamInfo>,
    }

    impl Builder {
        pub fn stream_info(mut self, inp: StreamInfo) -> Self {
            self.stream_info = Some(inp);
            self
        }

        pub fn build(self) -> DescribeStreamOutput {
            DescribeStreamOutput {
                stream_info: self.stream_info,
            }
        }
    }
}

/// Output for the <code>ListStreams</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ListStreamsOutput {
    /// <p>An array of <code>StreamInfo</code> objects.</p>
    #[serde(rename = "StreamInfoList")]
    #[serde(default)]
    pub stream_info_list: Option<Vec<StreamInfo>>,
    /// <p>If the response is truncated, the call returns this element with a
    /// token. To get the next batch of streams, use this token in your next
    /// request.</p>
    #[serde(rename = "NextToken")]
    #[serde(default)]
    pub next_token: Option<String>,
}

impl ListStreamsOutput {
    pub fn builder() -> list_streams_output::Builder {
        list_streams_output::Builder::default()
    }
}

pub mod list_streams_output {
    use super::ListStreamsOutput;
    use crate::model::StreamInfo;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        stream_info_list: Option<Vec<StreamInfo>>,
        next_token: Option<String>,
    }

    impl Builder {
        /// Appends a single stream description, creating the list if it does
        /// not exist yet.
        pub fn stream_info(mut self, inp: StreamInfo) -> Self {
            self.stream_info_list.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn stream_info_list(mut self, inp: Vec<StreamInfo>) -> Self {
            self.stream_info_list = Some(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }

        pub fn build(self) -> ListStreamsOutput {
            ListStreamsOutput {
                stream_info_list: self.stream_info_list,
                next_token: self.next_token,
            }
        }
    }
}

/// Output for the <code>GetDataEndpoint</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GetDataEndpointOutput {
    /// <p>The endpoint value. To read data from the stream or to write data
    /// to it, specify this endpoint in your application.</p>
    #[serde(rename = "DataEndpoint")]
    #[serde(default)]
    pub data_endpoint: Option<String>,
}

impl GetDataEndpointOutput {
    pub fn builder() -> get_data_endpoint_output::Builder {
        get_data_endpoint_output::Builder::default()
    }
}

pub mod get_data_endpoint_output {
    use super::GetDataEndpointOutput;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        data_endpoint: Option<String>,
    }

    impl Builder {
        pub fn data_endpoint(mut self, inp: impl Into<String>) -> Self {
            self.data_endpoint = Some(inp.into());
            self
        }

        pub fn build(self) -> GetDataEndpointOutput {
            GetDataEndpointOutput {
                data_endpoint: self.data_endpoint,
            }
        }
    }
}

/// Output for the <code>TagStream</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TagStreamOutput {}

impl TagStreamOutput {
    pub fn builder() -> tag_stream_output::Builder {
        tag_stream_output::Builder::default()
    }
}

pub mod tag_stream_output {
    use super::TagStreamOutput;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {}

    impl Builder {
        pub fn build(self) -> TagStreamOutput {
            TagStreamOutput {}
        }
    }
}
