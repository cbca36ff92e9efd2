// Code generated by a smithy-based code generator. DO NOT EDIT.
use std::sync::Arc;

pub(crate) struct Handle<C> {
    client: aws_exec::Client<C>,
    conf: crate::Config,
}

/// A fluent client for Amazon Kinesis Video Streams.
///
/// The client holds no per-call state: every operation starts from the
/// frozen [`Config`](crate::Config) and builds its own request, so a single
/// client may be shared across tasks and threads.
pub struct Client<C> {
    handle: Arc<Handle<C>>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            handle: self.handle.clone(),
        }
    }
}

impl<C> std::fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("conf", &self.handle.conf)
            .finish()
    }
}

#[cfg(feature = "native-tls")]
impl Client<aws_exec::conn::Https> {
    /// Construct a client over HTTPS, reading configuration from the
    /// environment.
    pub fn from_env() -> Self {
        Self::from_conf(crate::Config::builder().build())
    }

    /// Construct a client over HTTPS from the given configuration.
    pub fn from_conf(conf: crate::Config) -> Self {
        Client {
            handle: Arc::new(Handle {
                client: aws_exec::Client::https(),
                conf,
            }),
        }
    }
}

impl<C> Client<C> {
    /// Construct a client over a custom connector, eg. a
    /// `TestConnection`.
    pub fn from_conf_conn(conf: crate::Config, conn: C) -> Self {
        Client {
            handle: Arc::new(Handle {
                client: aws_exec::Client::new(conn),
                conf,
            }),
        }
    }

    pub fn conf(&self) -> &crate::Config {
        &self.handle.conf
    }

    pub fn create_stream(&self) -> fluent_builders::CreateStream<C> {
        fluent_builders::CreateStream::new(self.handle.clone())
    }

    pub fn delete_stream(&self) -> fluent_builders::DeleteStream<C> {
        fluent_builders::DeleteStream::new(self.handle.clone())
    }

    pub fn describe_stream(&self) -> fluent_builders::DescribeStream<C> {
        fluent_builders::DescribeStream::new(self.handle.clone())
    }

    pub fn list_streams(&self) -> fluent_builders::ListStreams<C> {
        fluent_builders::ListStreams::new(self.handle.clone())
    }

    pub fn get_data_endpoint(&self) -> fluent_builders::GetDataEndpoint<C> {
        fluent_builders::GetDataEndpoint::new(self.handle.clone())
    }

    pub fn tag_stream(&self) -> fluent_builders::TagStream<C> {
        fluent_builders::TagStream::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::Handle;
    use aws_exec::SdkError;
    use sdk_http::body::SdkBody;
    use std::sync::Arc;
    use tower::Service;

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    macro_rules! fluent_send {
        ($output:ty, $error:ty) => {
            /// Builds the input, marshals it into an operation, and
            /// dispatches it through the shared execution runtime.
            ///
            /// Input validation failures and marshalling failures surface
            /// as [`SdkError::ConstructionFailure`] without any request
            /// being sent.
            pub async fn send(self) -> Result<$output, SdkError<$error>>
            where
                C: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
                    + Send
                    + Clone
                    + 'static,
                C::Error: Into<BoxError> + Send + Sync + 'static,
                C::Future: Send + 'static,
            {
                let input = self
                    .inner
                    .build()
                    .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
                let op = input
                    .make_operation(&self.handle.conf)
                    .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
                self.handle.client.call(op).await
            }
        };
    }

    pub struct CreateStream<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_stream_input::Builder,
    }

    impl<C> CreateStream<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            CreateStream {
                handle,
                inner: Default::default(),
            }
        }

        pub fn device_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.device_name(inp);
            self
        }

        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_name(inp);
            self
        }

        pub fn media_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.media_type(inp);
            self
        }

        pub fn kms_key_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.kms_key_id(inp);
            self
        }

        pub fn data_retention_in_hours(mut self, inp: i32) -> Self {
            self.inner = self.inner.data_retention_in_hours(inp);
            self
        }

        fluent_send!(
            crate::output::CreateStreamOutput,
            crate::error::CreateStreamError
        );
    }

    pub struct DeleteStream<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_stream_input::Builder,
    }

    impl<C> DeleteStream<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            DeleteStream {
                handle,
                inner: Default::default(),
            }
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_arn(inp);
            self
        }

        pub fn current_version(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.current_version(inp);
            self
        }

        fluent_send!(
            crate::output::DeleteStreamOutput,
            crate::error::DeleteStreamError
        );
    }

    pub struct DescribeStream<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_stream_input::Builder,
    }

    impl<C> DescribeStream<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            DescribeStream {
                handle,
                inner: Default::default(),
            }
        }

        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_name(inp);
            self
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_arn(inp);
            self
        }

        fluent_send!(
            crate::output::DescribeStreamOutput,
            crate::error::DescribeStreamError
        );
    }

    pub struct ListStreams<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::list_streams_input::Builder,
    }

    impl<C> ListStreams<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            ListStreams {
                handle,
                inner: Default::default(),
            }
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn stream_name_condition(mut self, inp: crate::model::StreamNameCondition) -> Self {
            self.inner = self.inner.stream_name_condition(inp);
            self
        }

        fluent_send!(
            crate::output::ListStreamsOutput,
            crate::error::ListStreamsError
        );
    }

    pub struct GetDataEndpoint<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_data_endpoint_input::Builder,
    }

    impl<C> GetDataEndpoint<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            GetDataEndpoint {
                handle,
                inner: Default::default(),
            }
        }

        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_name(inp);
            self
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_arn(inp);
            self
        }

        pub fn api_name(mut self, inp: crate::model::APIName) -> Self {
            self.inner = self.inner.api_name(inp);
            self
        }

        fluent_send!(
            crate::output::GetDataEndpointOutput,
            crate::error::GetDataEndpointError
        );
    }

    pub struct TagStream<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::tag_stream_input::Builder,
    }

    impl<C> TagStream<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            TagStream {
                handle,
                inner: Default::default(),
            }
        }

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_arn(inp);
            self
        }

        pub fn stream_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.stream_name(inp);
            self
        }

        /// Adds a single tag, creating the tag map if it does not exist yet.
        pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.inner = self.inner.tag(key, value);
            self
        }

        pub fn tags(mut self, inp: std::collections::HashMap<String, String>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }

        fluent_send!(
            crate::output::TagStreamOutput,
            crate::error::TagStreamError
        );
    }
}
