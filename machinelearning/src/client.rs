// Code generated by a smithy-based code generator. DO NOT EDIT.
use std::sync::Arc;

pub(crate) struct Handle<C> {
    client: aws_exec::Client<C>,
    conf: crate::Config,
}

/// A fluent client for Amazon Machine Learning.
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

    pub fn create_ml_model(&self) -> fluent_builders::CreateMLModel<C> {
        fluent_builders::CreateMLModel::new(self.handle.clone())
    }

    pub fn get_ml_model(&self) -> fluent_builders::GetMLModel<C> {
        fluent_builders::GetMLModel::new(self.handle.clone())
    }

    pub fn delete_ml_model(&self) -> fluent_builders::DeleteMLModel<C> {
        fluent_builders::DeleteMLModel::new(self.handle.clone())
    }

    pub fn describe_ml_models(&self) -> fluent_builders::DescribeMLModels<C> {
        fluent_builders::DescribeMLModels::new(self.handle.clone())
    }

    pub fn update_ml_model(&self) -> fluent_builders::UpdateMLModel<C> {
        fluent_builders::UpdateMLModel::new(self.handle.clone())
    }

    pub fn add_tags(&self) -> fluent_builders::AddTags<C> {
        fluent_builders::AddTags::new(self.handle.clone())
    }

    pub fn predict(&self) -> fluent_builders::Predict<C> {
        fluent_builders::Predict::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::Handle;
    use aws_exec::SdkError;
    use sdk_http::body::SdkBody;
    use std::collections::HashMap;
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

    pub struct CreateMLModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_ml_model_input::Builder,
    }

    impl<C> CreateMLModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            CreateMLModel {
                handle,
                inner: Default::default(),
            }
        }

        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ml_model_id(inp);
            self
        }

        pub fn ml_model_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ml_model_name(inp);
            self
        }

        pub fn ml_model_type(mut self, inp: crate::model::MLModelType) -> Self {
            self.inner = self.inner.ml_model_type(inp);
            self
        }

        /// Adds a single training parameter, creating the map if it does not
        /// exist yet.
        pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.inner = self.inner.parameter(key, value);
            self
        }

        pub fn parameters(mut self, inp: HashMap<String, String>) -> Self {
            self.inner = self.inner.parameters(inp);
            self
        }

        pub fn training_data_source_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.training_data_source_id(inp);
            self
        }

        pub fn recipe(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.recipe(inp);
            self
        }

        pub fn recipe_uri(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.recipe_uri(inp);
            self
        }

        fluent_send!(
            crate::output::CreateMLModelOutput,
            crate::error::CreateMLModelError
        );
    }

    pub struct GetMLModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_ml_model_input::Builder,
    }

    impl<C> GetMLModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            GetMLModel {
                handle,
                inner: Default::default(),
            }
        }

        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ml_model_id(inp);
            self
        }

        pub fn verbose(mut self, inp: bool) -> Self {
            self.inner = self.inner.verbose(inp);
            self
        }

        fluent_send!(
            crate::output::GetMLModelOutput,
            crate::error::GetMLModelError
        );
    }

    pub struct DeleteMLModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_ml_model_input::Builder,
    }

    impl<C> DeleteMLModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            DeleteMLModel {
                handle,
                inner: Default::default(),
            }
        }

        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ml_model_id(inp);
            self
        }

        fluent_send!(
            crate::output::DeleteMLModelOutput,
            crate::error::DeleteMLModelError
        );
    }

    pub struct DescribeMLModels<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_ml_models_input::Builder,
    }

    impl<C> DescribeMLModels<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            DescribeMLModels {
                handle,
                inner: Default::default(),
            }
        }

        pub fn filter_variable(mut self, inp: crate::model::MLModelFilterVariable) -> Self {
            self.inner = self.inner.filter_variable(inp);
            self
        }

        pub fn eq(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.eq(inp);
            self
        }

        pub fn gt(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.gt(inp);
            self
        }

        pub fn lt(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.lt(inp);
            self
        }

        pub fn ge(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ge(inp);
            self
        }

        pub fn le(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.le(inp);
            self
        }

        pub fn ne(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ne(inp);
            self
        }

        pub fn prefix(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.prefix(inp);
            self
        }

        pub fn sort_order(mut self, inp: crate::model::SortOrder) -> Self {
            self.inner = self.inner.sort_order(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }

        fluent_send!(
            crate::output::DescribeMLModelsOutput,
            crate::error::DescribeMLModelsError
        );
    }

    pub struct UpdateMLModel<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::update_ml_model_input::Builder,
    }

    impl<C> UpdateMLModel<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            UpdateMLModel {
                handle,
                inner: Default::default(),
            }
        }

        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ml_model_id(inp);
            self
        }

        pub fn ml_model_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ml_model_name(inp);
            self
        }

        pub fn score_threshold(mut self, inp: f32) -> Self {
            self.inner = self.inner.score_threshold(inp);
            self
        }

        fluent_send!(
            crate::output::UpdateMLModelOutput,
            crate::error::UpdateMLModelError
        );
    }

    pub struct AddTags<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::add_tags_input::Builder,
    }

    impl<C> AddTags<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            AddTags {
                handle,
                inner: Default::default(),
            }
        }

        /// Appends a single tag, creating the list if it does not exist yet.
        pub fn tag(mut self, inp: crate::model::Tag) -> Self {
            self.inner = self.inner.tag(inp);
            self
        }

        pub fn tags(mut self, inp: Vec<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }

        pub fn resource_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_id(inp);
            self
        }

        pub fn resource_type(mut self, inp: crate::model::TaggableResourceType) -> Self {
            self.inner = self.inner.resource_type(inp);
            self
        }

        fluent_send!(crate::output::AddTagsOutput, crate::error::AddTagsError);
    }

    pub struct Predict<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::predict_input::Builder,
    }

    impl<C> Predict<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Predict {
                handle,
                inner: Default::default(),
            }
        }

        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.ml_model_id(inp);
            self
        }

        /// Adds a single observation variable, creating the record if it does
        /// not exist yet.
        pub fn record_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.inner = self.inner.record_entry(key, value);
            self
        }

        pub fn record(mut self, inp: HashMap<String, String>) -> Self {
            self.inner = self.inner.record(inp);
            self
        }

        pub fn predict_endpoint(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.predict_endpoint(inp);
            self
        }

        fluent_send!(crate::output::PredictOutput, crate::error::PredictError);
    }
}
