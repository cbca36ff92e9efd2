// Code generated by a smithy-based code generator. DO NOT EDIT.
use crate::model::{MLModel, Prediction, TaggableResourceType};
use serde::Deserialize;

/// Output for the <code>CreateMLModel</code> operation.
///
/// <p>The <code>CreateMLModel</code> operation is asynchronous: the returned
/// ID refers to a model whose status is initially <code>PENDING</code>.</p>
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CreateMLModelOutput {
    /// <p>A user-supplied ID that uniquely identifies the
    /// <code>MLModel</code>. This value should be identical to the value of
    /// the <code>MLModelId</code> in the request.</p>
    #[serde(rename = "MLModelId")]
    #[serde(default)]
    pub ml_model_id: Option<String>,
}

impl CreateMLModelOutput {
    pub fn builder() -> create_ml_model_output::Builder {
        create_ml_model_output::Builder::default()
    }
}

pub mod create_ml_model_output {
    use super::CreateMLModelOutput;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn build(self) -> CreateMLModelOutput {
            CreateMLModelOutput {
                ml_model_id: self.ml_model_id,
            }
        }
    }
}

/// Output for the <code>GetMLModel</code> operation. The model metadata is
/// returned flattened at the top level rather than as a nested
/// <code>MLModel</code> document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GetMLModelOutput {
    #[serde(rename = "MLModelId")]
    #[serde(default)]
    pub ml_model_id: Option<String>,
    #[serde(rename = "TrainingDataSourceId")]
    #[serde(default)]
    pub training_data_source_id: Option<String>,
    #[serde(rename = "CreatedByIamUser")]
    #[serde(default)]
    pub created_by_iam_user: Option<String>,
    #[serde(rename = "CreatedAt")]
    #[serde(default)]
    pub created_at: Option<sdk_types::Instant>,
    #[serde(rename = "LastUpdatedAt")]
    #[serde(default)]
    pub last_updated_at: Option<sdk_types::Instant>,
    #[serde(rename = "Name")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Status")]
    #[serde(default)]
    pub status: Option<crate::model::EntityStatus>,
    #[serde(rename = "SizeInBytes")]
    #[serde(default)]
    pub size_in_bytes: Option<i64>,
    #[serde(rename = "EndpointInfo")]
    #[serde(default)]
    pub endpoint_info: Option<crate::model::RealtimeEndpointInfo>,
    #[serde(rename = "TrainingParameters")]
    #[serde(default)]
    pub training_parameters: Option<std::collections::HashMap<String, String>>,
    #[serde(rename = "InputDataLocationS3")]
    #[serde(default)]
    pub input_data_location_s3: Option<String>,
    #[serde(rename = "MLModelType")]
    #[serde(default)]
    pub ml_model_type: Option<crate::model::MLModelType>,
    #[serde(rename = "ScoreThreshold")]
    #[serde(default)]
    pub score_threshold: Option<f32>,
    #[serde(rename = "ScoreThresholdLastUpdatedAt")]
    #[serde(default)]
    pub score_threshold_last_updated_at: Option<sdk_types::Instant>,
    #[serde(rename = "LogUri")]
    #[serde(default)]
    pub log_uri: Option<String>,
    #[serde(rename = "Message")]
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "ComputeTime")]
    #[serde(default)]
    pub compute_time: Option<i64>,
    #[serde(rename = "FinishedAt")]
    #[serde(default)]
    pub finished_at: Option<sdk_types::Instant>,
    #[serde(rename = "StartedAt")]
    #[serde(default)]
    pub started_at: Option<sdk_types::Instant>,
    /// <p>The recipe to use when training the <code>MLModel</code>. The
    /// <code>Recipe</code> content is only returned if <code>Verbose</code>
    /// is true in the request.</p>
    #[serde(rename = "Recipe")]
    #[serde(default)]
    pub recipe: Option<String>,
    /// <p>The schema used by all of the data files referenced by the
    /// <code>DataSource</code>. Only returned if <code>Verbose</code> is
    /// true in the request.</p>
    #[serde(rename = "Schema")]
    #[serde(default)]
    pub schema: Option<String>,
}

impl GetMLModelOutput {
    pub fn builder() -> get_ml_model_output::Builder {
        get_ml_model_output::Builder::default()
    }
}

pub mod get_ml_model_output {
    use super::GetMLModelOutput;
    use crate::model::{EntityStatus, MLModelType, RealtimeEndpointInfo};
    use std::collections::HashMap;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
        training_data_source_id: Option<String>,
        created_by_iam_user: Option<String>,
        created_at: Option<sdk_types::Instant>,
        last_updated_at: Option<sdk_types::Instant>,
        name: Option<String>,
        status: Option<EntityStatus>,
        size_in_bytes: Option<i64>,
        endpoint_info: Option<RealtimeEndpointInfo>,
        training_parameters: Option<HashMap<String, String>>,
        input_data_location_s3: Option<String>,
        ml_model_type: Option<MLModelType>,
        score_threshold: Option<f32>,
        score_threshold_last_updated_at: Option<sdk_types::Instant>,
        log_uri: Option<String>,
        message: Option<String>,
        compute_time: Option<i64>,
        finished_at: Option<sdk_types::Instant>,
        started_at: Option<sdk_types::Instant>,
        recipe: Option<String>,
        schema: Option<String>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn training_data_source_id(mut self, inp: impl Into<String>) -> Self {
            self.training_data_source_id = Some(inp.into());
            self
        }

        pub fn created_by_iam_user(mut self, inp: impl Into<String>) -> Self {
            self.created_by_iam_user = Some(inp.into());
            self
        }

        pub fn created_at(mut self, inp: sdk_types::Instant) -> Self {
            self.created_at = Some(inp);
            self
        }

        pub fn last_updated_at(mut self, inp: sdk_types::Instant) -> Self {
            self.last_updated_at = Some(inp);
            self
        }

        pub fn name(mut self, inp: impl Into<String>) -> Self {
            self.name = Some(inp.into());
            self
        }

        pub fn status(mut self, inp: EntityStatus) -> Self {
            self.status = Some(inp);
            self
        }

        pub fn size_in_bytes(mut self, inp: i64) -> Self {
            self.size_in_bytes = Some(inp);
            self
        }

        pub fn endpoint_info(mut self, inp: RealtimeEndpointInfo) -> Self {
            self.endpoint_info = Some(inp);
            self
        }

        pub fn training_parameters(mut self, inp: HashMap<String, String>) -> Self {
            self.training_parameters = Some(inp);
            self
        }

        pub fn input_data_location_s3(mut self, inp: impl Into<String>) -> Self {
            self.input_data_location_s3 = Some(inp.into());
            self
        }

        pub fn ml_model_type(mut self, inp: MLModelType) -> Self {
            self.ml_model_type = Some(inp);
            self
        }

        pub fn score_threshold(mut self, inp: f32) -> Self {
            self.score_threshold = Some(inp);
            self
        }

        pub fn score_threshold_last_updated_at(mut self, inp: sdk_types::Instant) -> Self {
            self.score_threshold_last_updated_at = Some(inp);
            self
        }

        pub fn log_uri(mut self, inp: impl Into<String>) -> Self {
            self.log_uri = Some(inp.into());
            self
        }

        pub fn message(mut self, inp: impl Into<String>) -> Self {
            self.message = Some(inp.into());
            self
        }

        pub fn compute_time(mut self, inp: i64) -> Self {
            self.compute_time = Some(inp);
            self
        }

        pub fn finished_at(mut self, inp: sdk_types::Instant) -> Self {
            self.finished_at = Some(inp);
            self
        }

        pub fn started_at(mut self, inp: sdk_types::Instant) -> Self {
            self.started_at = Some(inp);
            self
        }

        pub fn recipe(mut self, inp: impl Into<String>) -> Self {
            self.recipe = Some(inp.into());
            self
        }

        pub fn schema(mut self, inp: impl Into<String>) -> Self {
            self.schema = Some(inp.into());
            self
        }

        pub fn build(self) -> GetMLModelOutput {
            GetMLModelOutput {
                ml_model_id: self.ml_model_id,
                training_data_source_id: self.training_data_source_id,
                created_by_iam_user: self.created_by_iam_user,
                created_at: self.created_at,
                last_updated_at: self.last_updated_at,
                name: self.name,
                status: self.status,
                size_in_bytes: self.size_in_bytes,
                endpoint_info: self.endpoint_info,
                training_parameters: self.training_parameters,
                input_data_location_s3: self.input_data_location_s3,
                ml_model_type: self.ml_model_type,
                score_threshold: self.score_threshold,
                score_threshold_last_updated_at: self.score_threshold_last_updated_at,
                log_uri: self.log_uri,
                message: self.message,
                compute_time: self.compute_time,
                finished_at: self.finished_at,
                started_at: self.started_at,
                recipe: self.recipe,
                schema: self.schema,
            }
        }
    }
}

/// Output for the <code>DeleteMLModel</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteMLModelOutput {
    /// <p>A user-supplied ID that uniquely identifies the
    /// <code>MLModel</code>. This value should be identical to the value of
    /// the <code>MLModelId</code> in the request.</p>
    #[serde(rename = "MLModelId")]
    #[serde(default)]
    pub ml_model_id: Option<String>,
}

impl DeleteMLModelOutput {
    pub fn builder() -> delete_ml_model_output::Builder {
        delete_ml_model_output::Builder::default()
    }
}

pub mod delete_ml_model_output {
    use super::DeleteMLModelOutput;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn build(self) -> DeleteMLModelOutput {
            DeleteMLModelOutput {
                ml_model_id: self.ml_model_id,
            }
        }
    }
}

/// Output for the <code>DescribeMLModels</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DescribeMLModelsOutput {
    /// <p>A list of <code>MLModel</code> that meet the search criteria.</p>
    #[serde(rename = "Results")]
    #[serde(default)]
    pub results: Option<Vec<MLModel>>,
    /// <p>The ID of the next page in the paginated results that indicates at
    /// least one more page follows.</p>
    #[serde(rename = "NextToken")]
    #[serde(default)]
    pub next_token: Option<String>,
}

impl DescribeMLModelsOutput {
    pub fn builder() -> describe_ml_models_output::Builder {
        describe_ml_models_output::Builder::default()
    }
}

pub mod describe_ml_models_output {
    use super::DescribeMLModelsOutput;
    use crate::model::MLModel;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        results: Option<Vec<MLModel>>,
        next_token: Option<String>,
    }

    impl Builder {
        /// Appends a single result, creating the list if it does not exist
        /// yet.
        pub fn result(mut self, inp: MLModel) -> Self {
            self.results.get_or_insert_with(Vec::new).push(inp);
            self
        }

        pub fn results(mut self, inp: Vec<MLModel>) -> Self {
            self.results = Some(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }

        pub fn build(self) -> DescribeMLModelsOutput {
            DescribeMLModelsOutput {
                results: self.results,
                next_token: self.next_token,
            }
        }
    }
}

/// Output for the <code>UpdateMLModel</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UpdateMLModelOutput {
    /// <p>The ID assigned to the <code>MLModel</code> during creation. This
    /// value should be identical to the value of the <code>MLModelId</code>
    /// in the request.</p>
    #[serde(rename = "MLModelId")]
    #[serde(default)]
    pub ml_model_id: Option<String>,
}

impl UpdateMLModelOutput {
    pub fn builder() -> update_ml_model_output::Builder {
        update_ml_model_output::Builder::default()
    }
}

pub mod update_ml_model_output {
    use super::UpdateMLModelOutput;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        ml_model_id: Option<String>,
    }

    impl Builder {
        pub fn ml_model_id(mut self, inp: impl Into<String>) -> Self {
            self.ml_model_id = Some(inp.into());
            self
        }

        pub fn build(self) -> UpdateMLModelOutput {
            UpdateMLModelOutput {
                ml_model_id: self.ml_model_id,
            }
        }
    }
}

/// Output for the <code>AddTags</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AddTagsOutput {
    /// <p>The ID of the ML object that was tagged.</p>
    #[serde(rename = "ResourceId")]
    #[serde(default)]
    pub resource_id: Option<String>,
    /// <p>The type of the ML object that was tagged.</p>
    #[serde(rename = "ResourceType")]
    #[serde(default)]
    pub resource_type: Option<TaggableResourceType>,
}

impl AddTagsOutput {
    pub fn builder() -> add_tags_output::Builder {
        add_tags_output::Builder::default()
    }
}

pub mod add_tags_output {
    use super::AddTagsOutput;
    use crate::model::TaggableResourceType;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        resource_id: Option<String>,
        resource_type: Option<TaggableResourceType>,
    }

    impl Builder {
        pub fn resource_id(mut self, inp: impl Into<String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }

        pub fn resource_type(mut self, inp: TaggableResourceType) -> Self {
            self.resource_type = Some(inp);
            self
        }

        pub fn build(self) -> AddTagsOutput {
            AddTagsOutput {
                resource_id: self.resource_id,
                resource_type: self.resource_type,
            }
        }
    }
}

/// Output for the <code>Predict</code> operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PredictOutput {
    #[serde(rename = "Prediction")]
    #[serde(default)]
    pub prediction: Option<Prediction>,
}

impl PredictOutput {
    pub fn builder() -> predict_output::Builder {
        predict_output::Builder::default()
    }
}

pub mod predict_output {
    use super::PredictOutput;
    use crate::model::Prediction;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        prediction: Option<Prediction>,
    }

    impl Builder {
        pub fn prediction(mut self, inp: Prediction) -> Self {
            self.prediction = Some(inp);
            self
        }

        pub fn build(self) -> PredictOutput {
            PredictOutput {
                prediction: self.prediction,
            }
        }
    }
}
