// Code generated by a smithy-based code generator. DO NOT EDIT.
use crate::config::Config;
use aws_core::retry::AwsErrorRetryPolicy;
use aws_core::SigningService;
use sdk_http::body::SdkBody;
use sdk_http::operation;
use sdk_http::operation::{BuildError, Metadata, Operation};
use serde::Serialize;
use std::collections::HashMap;

/// Serializes the input shape and wraps it in a ready-to-dispatch request.
/// All operations share the same wire shape: `POST /` with the operation
/// named by the `x-amz-target` header.
fn assemble<T: Serialize>(
    input: &T,
    target: &'static str,
    config: &Config,
) -> Result<operation::Request, BuildError> {
    let body = serde_json::to_vec(input).map_err(|e| BuildError::SerializationError(e.into()))?;
    let http_request = http::request::Builder::new()
        .method(http::Method::POST)
        .uri("/")
        .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
        .header(
            "x-amz-target",
            format!("{}.{}", crate::TARGET_PREFIX, target),
        )
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

/// Input for the <code>CreateMLModel</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMLModelInput {
    /// <p>A user-supplied ID that uniquely identifies the
    /// <code>MLModel</code>.</p>
    #[serde(rename = "MLModelId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_id: Option<String>,
    /// <p>A user-supplied name or description of the
    /// <code>MLModel</code>.</p>
    #[serde(rename = "MLModelName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_name: Option<String>,
    /// <p>The category of supervised learning that this <code>MLModel</code>
    /// will address.</p>
    #[serde(rename = "MLModelType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_type: Option<crate::model::MLModelType>,
    /// <p>A list of the training parameters in the <code>MLModel</code>. The
    /// list is implemented as a map of key-value pairs.</p>
    #[serde(rename = "Parameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    /// <p>The <code>DataSource</code> that points to the training data.</p>
    #[serde(rename = "TrainingDataSourceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_data_source_id: Option<String>,
    /// <p>The data recipe for creating the <code>MLModel</code>. You must
    /// specify either the recipe or its URI. If you don't specify a recipe
    /// or its URI, Amazon ML creates a default.</p>
    #[serde(rename = "Recipe")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    /// <p>The Amazon Simple Storage Service (Amazon S3) location and file
    /// name that contains the <code>MLModel</code> recipe.</p>
    #[serde(rename = "RecipeUri")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_uri: Option<String>,
}

impl CreateMLModelInput {
    pub fn builder() -> create_ml_model_input::Builder {
        create_ml_model_input::Builder::default()
    }

    /// Consumes the builder output and converts it into an operation ready to
    /// be dispatched by the shared client runtime.
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateMLModel, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "CreateMLModel", config)?;
        Ok(
            Operation::new(request, crate::operation::CreateMLModel::new())
                .with_metadata(Metadata::new("CreateMLModel", "machinelearning"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod create_ml_model_input {
    use super::CreateMLModelInput;
    use crate::model::MLModelType;
    use sdk_http::operation::BuildError;
    use std::collections::HashMap;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
        ml_model_name: Option<String>,
        ml_model_type: Option<MLModelType>,
        parameters: Option<HashMap<String, String>>,
        training_data_source_id: Option<String>,
        recipe: Option<String>,
        recipe_uri: Option<String>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn ml_model_name(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_name = Some(inp.into());
            self
        }

        pub fn ml_model_type(mut self, inp: MLModelType) -> Self {
            self.ml_model_type = Some(inp);
            self
        }

        /// Adds a single training parameter, creating the map if it does not
        /// exist yet.
        pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.parameters
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn parameters(mut self, inp: HashMap<String, String>) -> Self {
            self.parameters = Some(inp);
            self
        }

        pub fn training_data_source_id(mut self, inp: impl Into<String>) -> Self {
            self.training_data_source_id = Some(inp.into());
            self
        }

        pub fn recipe(mut self, inp: impl Into<String>) -> Self {
            self.recipe = Some(inp.into());
            self
        }

        pub fn recipe_uri(mut self, inp: impl Into<String>) -> Self {
            self.recipe_uri = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<CreateMLModelInput, BuildError> {
            let ml_model_id = self.ml_model_id.ok_or(BuildError::MissingField {
                field: "ml_model_id",
                details: "MLModelId is required when creating a model",
            })?;
            let ml_model_type = self.ml_model_type.ok_or(BuildError::MissingField {
                field: "ml_model_type",
                details: "MLModelType is required when creating a model",
            })?;
            let training_data_source_id =
                self.training_data_source_id.ok_or(BuildError::MissingField {
                    field: "training_data_source_id",
                    details: "TrainingDataSourceId is required when creating a model",
                })?;
            Ok(CreateMLModelInput {
                ml_model_id: Some(ml_model_id),
                ml_model_name: self.ml_model_name,
                ml_model_type: Some(ml_model_type),
                parameters: self.parameters,
                training_data_source_id: Some(training_data_source_id),
                recipe: self.recipe,
                recipe_uri: self.recipe_uri,
            })
        }
    }
}

/// Input for the <code>GetMLModel</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetMLModelInput {
    /// <p>The ID assigned to the <code>MLModel</code> at creation.</p>
    #[serde(rename = "MLModelId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_id: Option<String>,
    /// <p>Specifies whether the <code>GetMLModel</code> operation should
    /// return <code>Recipe</code> and <code>Schema</code>.</p>
    #[serde(rename = "Verbose")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl GetMLModelInput {
    pub fn builder() -> get_ml_model_input::Builder {
        get_ml_model_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetMLModel, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "GetMLModel", config)?;
        Ok(
            Operation::new(request, crate::operation::GetMLModel::new())
                .with_metadata(Metadata::new("GetMLModel", "machinelearning"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod get_ml_model_input {
    use super::GetMLModelInput;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
        verbose: Option<bool>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn verbose(mut self, inp: bool) -> Self {
            self.verbose = Some(inp);
            self
        }

        pub fn build(self) -> Result<GetMLModelInput, BuildError> {
            let ml_model_id = self.ml_model_id.ok_or(BuildError::MissingField {
                field: "ml_model_id",
                details: "MLModelId is required when fetching a model",
            })?;
            Ok(GetMLModelInput {
                ml_model_id: Some(ml_model_id),
                verbose: self.verbose,
            })
        }
    }
}

/// Input for the <code>DeleteMLModel</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteMLModelInput {
    /// <p>The ID assigned to the <code>MLModel</code> at creation.</p>
    #[serde(rename = "MLModelId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_id: Option<String>,
}

impl DeleteMLModelInput {
    pub fn builder() -> delete_ml_model_input::Builder {
        delete_ml_model_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteMLModel, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "DeleteMLModel", config)?;
        Ok(
            Operation::new(request, crate::operation::DeleteMLModel::new())
                .with_metadata(Metadata::new("DeleteMLModel", "machinelearning"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod delete_ml_model_input {
    use super::DeleteMLModelInput;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<DeleteMLModelInput, BuildError> {
            let ml_model_id = self.ml_model_id.ok_or(BuildError::MissingField {
                field: "ml_model_id",
                details: "MLModelId is required when deleting a model",
            })?;
            Ok(DeleteMLModelInput {
                ml_model_id: Some(ml_model_id),
            })
        }
    }
}

/// Input for the <code>DescribeMLModels</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribeMLModelsInput {
    /// <p>Use one of the following variables to filter a list of
    /// <code>MLModel</code>:</p>
    #[serde(rename = "FilterVariable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_variable: Option<crate::model::MLModelFilterVariable>,
    /// <p>The equal to operator. The <code>MLModel</code> results will have
    /// <code>FilterVariable</code> values that exactly match the value
    /// specified with <code>EQ</code>.</p>
    #[serde(rename = "EQ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<String>,
    /// <p>The greater than operator.</p>
    #[serde(rename = "GT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<String>,
    /// <p>The less than operator.</p>
    #[serde(rename = "LT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    /// <p>The greater than or equal to operator.</p>
    #[serde(rename = "GE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ge: Option<String>,
    /// <p>The less than or equal to operator.</p>
    #[serde(rename = "LE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub le: Option<String>,
    /// <p>The not equal to operator.</p>
    #[serde(rename = "NE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ne: Option<String>,
    /// <p>A string that is found at the beginning of a variable, such as
    /// <code>Name</code> or <code>Id</code>.</p>
    #[serde(rename = "Prefix")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// <p>A two-value parameter that determines the sequence of the
    /// resulting list of <code>MLModel</code>.</p>
    #[serde(rename = "SortOrder")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<crate::model::SortOrder>,
    /// <p>The ID of the page in the paginated results.</p>
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>The number of pages of information to include in the result. The
    /// range of acceptable values is <code>1</code> through
    /// <code>100</code>. The default value is <code>100</code>.</p>
    #[serde(rename = "Limit")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl DescribeMLModelsInput {
    pub fn builder() -> describe_ml_models_input::Builder {
        describe_ml_models_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeMLModels, AwsErrorRetryPolicy>, BuildError>
    {
        let request = assemble(self, "DescribeMLModels", config)?;
        Ok(
            Operation::new(request, crate::operation::DescribeMLModels::new())
                .with_metadata(Metadata::new("DescribeMLModels", "machinelearning"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod describe_ml_models_input {
    use super::DescribeMLModelsInput;
    use crate::model::{MLModelFilterVariable, SortOrder};
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        filter_variable: Option<MLModelFilterVariable>,
        eq: Option<String>,
        gt: Option<String>,
        lt: Option<String>,
        ge: Option<String>,
        le: Option<String>,
        ne: Option<String>,
        prefix: Option<String>,
        sort_order: Option<SortOrder>,
        next_token: Option<String>,
        limit: Option<i32>,
    }

    impl Builder {
        pub fn filter_variable(mut self, inp: MLModelFilterVariable) -> Self {
            self.filter_variable = Some(inp);
            self
        }

        pub fn eq(mut self, inp: impl Into<String>) -> Self {
            self.eq = Some(inp.into());
            self
        }

        pub fn gt(mut self, inp: impl Into<String>) -> Self {
            self.gt = Some(inp.into());
            self
        }

        pub fn lt(mut self, inp: impl Into<String>) -> Self {
            self.lt = Some(inp.into());
            self
        }

        pub fn ge(mut self, inp: impl Into<String>) -> Self {
            self.ge = Some(inp.into());
            self
        }

        pub fn le(mut self, inp: impl Into<String>) -> Self {
            self.le = Some(inp.into());
            self
        }

        pub fn ne(mut self, inp: impl Into<String>) -> Self {
            self.ne = Some(inp.into());
            self
        }

        pub fn prefix(mut self, inp: impl Into<String>) -> Self {
            self.prefix = Some(inp.into());
            self
        }

        pub fn sort_order(mut self, inp: SortOrder) -> Self {
            self.sort_order = Some(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }

        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }

        pub fn build(self) -> Result<DescribeMLModelsInput, BuildError> {
            Ok(DescribeMLModelsInput {
                filter_variable: self.filter_variable,
                eq: self.eq,
                gt: self.gt,
                lt: self.lt,
                ge: self.ge,
                le: self.le,
                ne: self.ne,
                prefix: self.prefix,
                sort_order: self.sort_order,
                next_token: self.next_token,
                limit: self.limit,
            })
        }
    }
}

/// Input for the <code>UpdateMLModel</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMLModelInput {
    /// <p>The ID assigned to the <code>MLModel</code> during creation.</p>
    #[serde(rename = "MLModelId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_id: Option<String>,
    /// <p>A user-supplied name or description of the
    /// <code>MLModel</code>.</p>
    #[serde(rename = "MLModelName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_name: Option<String>,
    /// <p>The <code>ScoreThreshold</code> used in binary classification
    /// <code>MLModel</code> that marks the boundary between a positive
    /// prediction and a negative prediction.</p>
    #[serde(rename = "ScoreThreshold")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f32>,
}

impl UpdateMLModelInput {
    pub fn builder() -> update_ml_model_input::Builder {
        update_ml_model_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UpdateMLModel, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "UpdateMLModel", config)?;
        Ok(
            Operation::new(request, crate::operation::UpdateMLModel::new())
                .with_metadata(Metadata::new("UpdateMLModel", "machinelearning"))
                .with_retry_policy(AwsErrorRetryPolicy::new()),
        )
    }
}

pub mod update_ml_model_input {
    use super::UpdateMLModelInput;
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
        ml_model_name: Option<String>,
        score_threshold: Option<f32>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn ml_model_name(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_name = Some(inp.into());
            self
        }

        pub fn score_threshold(mut self, inp: f32) -> Self {
            self.score_threshold = Some(inp);
            self
        }

        pub fn build(self) -> Result<UpdateMLModelInput, BuildError> {
            let ml_model_id = self.ml_model_id.ok_or(BuildError::MissingField {
                field: "ml_model_id",
                details: "MLModelId is required when updating a model",
            })?;
            Ok(UpdateMLModelInput {
                ml_model_id: Some(ml_model_id),
                ml_model_name: self.ml_model_name,
                score_threshold: self.score_threshold,
            })
        }
    }
}

/// Input for the <code>AddTags</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddTagsInput {
    /// <p>The key-value pairs to use to create tags. If you specify a key
    /// without specifying a value, Amazon ML creates a tag with the specified
    /// key and a value of null.</p>
    #[serde(rename = "Tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
    /// <p>The ID of the ML object to tag. For example,
    /// <code>exampleModelId</code>.</p>
    #[serde(rename = "ResourceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// <p>The type of the ML object to tag.</p>
    #[serde(rename = "ResourceType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<crate::model::TaggableResourceType>,
}

impl AddTagsInput {
    pub fn builder() -> add_tags_input::Builder {
        add_tags_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::AddTags, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "AddTags", config)?;
        Ok(Operation::new(request, crate::operation::AddTags::new())
            .with_metadata(Metadata::new("AddTags", "machinelearning"))
            .with_retry_policy(AwsErrorRetryPolicy::new()))
    }
}

pub mod add_tags_input {
    use super::AddTagsInput;
    use crate::model::{Tag, TaggableResourceType};
    use sdk_http::operation::BuildError;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        tags: Option<Vec<Tag>>,
        resource_id: Option<String>,
        resource_type: Option<TaggableResourceType>,
    }

    impl Builder {
        /// Appends a single tag, creating the list if it does not exist yet.
        pub fn tag(mut self, inp: Tag) -> Self {
            self.tags.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn tags(mut self, inp: Vec<Tag>) -> Self {
            self.tags = Some(inp);
            self
        }

        pub fn resource_id(mut self, inp: impl Into<String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }

        pub fn resource_type(mut self, inp: TaggableResourceType) -> Self {
            self.resource_type = Some(inp);
            self
        }

        pub fn build(self) -> Result<AddTagsInput, BuildError> {
            let tags = self.tags.ok_or(BuildError::MissingField {
                field: "tags",
                details: "Tags is required when tagging a resource",
            })?;
            let resource_id = self.resource_id.ok_or(BuildError::MissingField {
                field: "resource_id",
                details: "ResourceId is required when tagging a resource",
            })?;
            let resource_type = self.resource_type.ok_or(BuildError::MissingField {
                field: "resource_type",
                details: "ResourceType is required when tagging a resource",
            })?;
            Ok(AddTagsInput {
                tags: Some(tags),
                resource_id: Some(resource_id),
                resource_type: Some(resource_type),
            })
        }
    }
}

/// Input for the <code>Predict</code> operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictInput {
    /// <p>A unique identifier of the <code>MLModel</code>.</p>
    #[serde(rename = "MLModelId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_id: Option<String>,
    /// <p>A map of variable name-value pairs that represent an observation.</p>
    #[serde(rename = "Record")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<HashMap<String, String>>,
    #[serde(rename = "PredictEndpoint")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predict_endpoint: Option<String>,
}

impl PredictInput {
    pub fn builder() -> predict_input::Builder {
        predict_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::Predict, AwsErrorRetryPolicy>, BuildError> {
        let request = assemble(self, "Predict", config)?;
        Ok(Operation::new(request, crate::operation::Predict::new())
            .with_metadata(Metadata::new("Predict", "machinelearning"))
            .with_retry_policy(AwsErrorRetryPolicy::new()))
    }
}

pub mod predict_input {
    use super::PredictInput;
    use sdk_http::operation::BuildError;
    use std::collections::HashMap;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
        record: Option<HashMap<String, String>>,
        predict_endpoint: Option<String>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        /// Adds a single observation variable, creating the record if it
        /// does not exist yet.
        pub fn record_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.record
                .get_or_insert_with(HashMap::new)
                .insert(key.into(), value.into());
            self
        }

        pub fn record(mut self, inp: HashMap<String, String>) -> Self {
            self.record = Some(inp);
            self
        }

        pub fn predict_endpoint(mut self, inp: impl Into<String>) -> Self {
            self.predict_endpoint = Some(inp.into());
            self
        }

        pub fn build(self) -> Result<PredictInput, BuildError> {
            let ml_model_id = self.ml_model_id.ok_or(BuildError::MissingField {
                field: "ml_model_id",
                details: "MLModelId is required when requesting a prediction",
            })?;
            let record = self.record.ok_or(BuildError::MissingField {
                field: "record",
                details: "Record is required when requesting a prediction",
            })?;
            let predict_endpoint = self.predict_endpoint.ok_or(BuildError::MissingField {
                field: "predict_endpoint",
                details: "PredictEndpoint is required when requesting a prediction",
            })?;
            Ok(PredictInput {
                ml_model_id: Some(ml_model_id),
                record: Some(record),
                predict_endpoint: Some(predict_endpoint),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CreateMLModelInput, PredictInput};
    use crate::model::MLModelType;

    #[test]
    fn create_ml_model_requires_id_type_and_data_source() {
        CreateMLModelInput::builder()
            .ml_model_id("ml-1")
            .ml_model_type(MLModelType::Binary)
            .build()
            .expect_err("training_data_source_id is required");
        CreateMLModelInput::builder()
            .ml_model_id("ml-1")
            .ml_model_type(MLModelType::Binary)
            .training_data_source_id("ds-1")
            .build()
            .expect("all required fields set");
    }

    #[test]
    fn predict_requires_endpoint() {
        let err = PredictInput::builder()
            .ml_model_id("ml-1")
            .record_entry("age", "42")
            .build()
            .expect_err("predict_endpoint is required");
        assert!(err.to_string().contains("predict_endpoint"));
    }

    #[test]
    fn field_renames_use_the_wire_names() {
        let input = CreateMLModelInput::builder()
            .ml_model_id("ml-1")
            .ml_model_type(MLModelType::Regression)
            .training_data_source_id("ds-1")
            .build()
            .unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["MLModelId"], "ml-1");
        assert_eq!(json["MLModelType"], "REGRESSION");
        assert_eq!(json["TrainingDataSourceId"], "ds-1");
        assert!(json.get("MLModelName").is_none());
    }
}
