// Code generated by a smithy-based code generator. DO NOT EDIT.
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;

/// The error returned when a string does not match any recognized value of a
/// closed enum. Unrecognized values are never accepted silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    type_name: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        UnknownVariantError {
            type_name,
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` is not a valid {} value",
            self.value, self.type_name
        )
    }
}

impl std::error::Error for UnknownVariantError {}

macro_rules! string_enum_serde {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(de::Error::custom)
            }
        }
    };
}

/// <p>The category of supervised learning that this <code>MLModel</code>
/// addresses:</p>
/// <ul>
/// <li><code>REGRESSION</code> — predicts a numeric value.</li>
/// <li><code>BINARY</code> — predicts one of two possible outcomes.</li>
/// <li><code>MULTICLASS</code> — predicts one of several outcomes.</li>
/// </ul>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MLModelType {
    Regression,
    Binary,
    Multiclass,
}

impl MLModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MLModelType::Regression => "REGRESSION",
            MLModelType::Binary => "BINARY",
            MLModelType::Multiclass => "MULTICLASS",
        }
    }
}

impl FromStr for MLModelType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REGRESSION" => Ok(MLModelType::Regression),
            "BINARY" => Ok(MLModelType::Binary),
            "MULTICLASS" => Ok(MLModelType::Multiclass),
            other => Err(UnknownVariantError::new("MLModelType", other)),
        }
    }
}

string_enum_serde!(MLModelType);

/// <p>Entity status with the following possible values:</p>
/// <ul>
/// <li><code>PENDING</code></li>
/// <li><code>INPROGRESS</code></li>
/// <li><code>FAILED</code></li>
/// <li><code>COMPLETED</code></li>
/// <li><code>DELETED</code></li>
/// </ul>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityStatus {
    Pending,
    Inprogress,
    Failed,
    Completed,
    Deleted,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Pending => "PENDING",
            EntityStatus::Inprogress => "INPROGRESS",
            EntityStatus::Failed => "FAILED",
            EntityStatus::Completed => "COMPLETED",
            EntityStatus::Deleted => "DELETED",
        }
    }
}

impl FromStr for EntityStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(EntityStatus::Pending),
            "INPROGRESS" => Ok(EntityStatus::Inprogress),
            "FAILED" => Ok(EntityStatus::Failed),
            "COMPLETED" => Ok(EntityStatus::Completed),
            "DELETED" => Ok(EntityStatus::Deleted),
            other => Err(UnknownVariantError::new("EntityStatus", other)),
        }
    }
}

string_enum_serde!(EntityStatus);

/// <p>The sort order specified in a listing condition. Possible values
/// include the following:</p>
/// <ul>
/// <li><code>asc</code> — arrange the list in ascending order.</li>
/// <li><code>dsc</code> — arrange the list in descending order.</li>
/// </ul>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Dsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Dsc => "dsc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "dsc" => Ok(SortOrder::Dsc),
            other => Err(UnknownVariantError::new("SortOrder", other)),
        }
    }
}

string_enum_serde!(SortOrder);

/// <p>The variable to use when filtering <code>MLModel</code> listings.</p>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MLModelFilterVariable {
    CreatedAt,
    LastUpdatedAt,
    Status,
    Name,
    IAMUser,
    TrainingDataSourceId,
    RealTimeEndpointStatus,
    MLModelType,
    Algorithm,
    TrainingDataURI,
}

impl MLModelFilterVariable {
    pub fn as_str(&self) -> &'static str {
        match self {
            MLModelFilterVariable::CreatedAt => "CreatedAt",
            MLModelFilterVariable::LastUpdatedAt => "LastUpdatedAt",
            MLModelFilterVariable::Status => "Status",
            MLModelFilterVariable::Name => "Name",
            MLModelFilterVariable::IAMUser => "IAMUser",
            MLModelFilterVariable::TrainingDataSourceId => "TrainingDataSourceId",
            MLModelFilterVariable::RealTimeEndpointStatus => "RealTimeEndpointStatus",
            MLModelFilterVariable::MLModelType => "MLModelType",
            MLModelFilterVariable::Algorithm => "Algorithm",
            MLModelFilterVariable::TrainingDataURI => "TrainingDataURI",
        }
    }
}

impl FromStr for MLModelFilterVariable {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CreatedAt" => Ok(MLModelFilterVariable::CreatedAt),
            "LastUpdatedAt" => Ok(MLModelFilterVariable::LastUpdatedAt),
            "Status" => Ok(MLModelFilterVariable::Status),
            "Name" => Ok(MLModelFilterVariable::Name),
            "IAMUser" => Ok(MLModelFilterVariable::IAMUser),
            "TrainingDataSourceId" => Ok(MLModelFilterVariable::TrainingDataSourceId),
            "RealTimeEndpointStatus" => Ok(MLModelFilterVariable::RealTimeEndpointStatus),
            "MLModelType" => Ok(MLModelFilterVariable::MLModelType),
            "Algorithm" => Ok(MLModelFilterVariable::Algorithm),
            "TrainingDataURI" => Ok(MLModelFilterVariable::TrainingDataURI),
            other => Err(UnknownVariantError::new("MLModelFilterVariable", other)),
        }
    }
}

string_enum_serde!(MLModelFilterVariable);

/// <p>The current status of the real-time endpoint for the
/// <code>MLModel</code>.</p>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealtimeEndpointStatus {
    None,
    Ready,
    Updating,
    Failed,
}

impl RealtimeEndpointStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RealtimeEndpointStatus::None => "NONE",
            RealtimeEndpointStatus::Ready => "READY",
            RealtimeEndpointStatus::Updating => "UPDATING",
            RealtimeEndpointStatus::Failed => "FAILED",
        }
    }
}

impl FromStr for RealtimeEndpointStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(RealtimeEndpointStatus::None),
            "READY" => Ok(RealtimeEndpointStatus::Ready),
            "UPDATING" => Ok(RealtimeEndpointStatus::Updating),
            "FAILED" => Ok(RealtimeEndpointStatus::Failed),
            other => Err(UnknownVariantError::new("RealtimeEndpointStatus", other)),
        }
    }
}

string_enum_serde!(RealtimeEndpointStatus);

/// <p>The type of the resource that a tag can be attached to.</p>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaggableResourceType {
    BatchPrediction,
    DataSource,
    Evaluation,
    MLModel,
}

impl TaggableResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaggableResourceType::BatchPrediction => "BatchPrediction",
            TaggableResourceType::DataSource => "DataSource",
            TaggableResourceType::Evaluation => "Evaluation",
            TaggableResourceType::MLModel => "MLModel",
        }
    }
}

impl FromStr for TaggableResourceType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BatchPrediction" => Ok(TaggableResourceType::BatchPrediction),
            "DataSource" => Ok(TaggableResourceType::DataSource),
            "Evaluation" => Ok(TaggableResourceType::Evaluation),
            "MLModel" => Ok(TaggableResourceType::MLModel),
            other => Err(UnknownVariantError::new("TaggableResourceType", other)),
        }
    }
}

string_enum_serde!(TaggableResourceType);

/// <p>A custom key-value pair associated with an ML object, such as an ML
/// model.</p>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// <p>A unique identifier for the tag. Valid characters include Unicode
    /// letters, digits, white space, _, ., /, =, +, -, %, and @.</p>
    #[serde(rename = "Key")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>An optional string, typically used to describe or define the
    /// tag.</p>
    #[serde(rename = "Value")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn builder() -> tag::Builder {
        tag::Builder::default()
    }
}

pub mod tag {
    use super::Tag;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }

    impl Builder {
        pub fn key(mut self, inp: impl Into<String>) -> Self {
            self.key = Some(inp.into());
            self
        }

        pub fn value(mut self, inp: impl Into<String>) -> Self {
            self.value = Some(inp.into());
            self
        }

        pub fn build(self) -> Tag {
            Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}

/// <p>Describes the real-time endpoint information for an
/// <code>MLModel</code>.</p>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeEndpointInfo {
    /// <p>The maximum processing rate for the real-time endpoint for
    /// <code>MLModel</code>, measured in incoming requests per second.</p>
    #[serde(rename = "PeakRequestsPerSecond")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_requests_per_second: Option<i32>,
    /// <p>The time that the request to create the real-time endpoint for the
    /// <code>MLModel</code> was received.</p>
    #[serde(rename = "CreatedAt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<sdk_types::Instant>,
    /// <p>The URI that specifies where to send real-time prediction
    /// requests for the <code>MLModel</code>.</p>
    #[serde(rename = "EndpointUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// <p>The current status of the real-time endpoint.</p>
    #[serde(rename = "EndpointStatus")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_status: Option<RealtimeEndpointStatus>,
}

impl RealtimeEndpointInfo {
    pub fn builder() -> realtime_endpoint_info::Builder {
        realtime_endpoint_info::Builder::default()
    }
}

pub mod realtime_endpoint_info {
    use super::{RealtimeEndpointInfo, RealtimeEndpointStatus};

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        peak_requests_per_second: Option<i32>,
        created_at: Option<sdk_types::Instant>,
        endpoint_url: Option<String>,
        endpoint_status: Option<RealtimeEndpointStatus>,
    }

    impl Builder {
        pub fn peak_requests_per_second(mut self, inp: i32) -> Self {
            self.peak_requests_per_second = Some(inp);
            self
        }

        pub fn created_at(mut self, inp: sdk_types::Instant) -> Self {
            self.created_at = Some(inp);
            self
        }

        pub fn endpoint_url(mut self, inp: impl Into<String>) -> Self {
            self.endpoint_url = Some(inp.into());
            self
        }

        pub fn endpoint_status(mut self, inp: RealtimeEndpointStatus) -> Self {
            self.endpoint_status = Some(inp);
            self
        }

        pub fn build(self) -> RealtimeEndpointInfo {
            RealtimeEndpointInfo {
                peak_requests_per_second: self.peak_requests_per_second,
                created_at: self.created_at,
                endpoint_url: self.endpoint_url,
                endpoint_status: self.endpoint_status,
            }
        }
    }
}

/// <p>Represents the output of a <code>GetMLModel</code> operation.</p>
/// <p>The content consists of the detailed metadata and the current status
/// of the <code>MLModel</code>.</p>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MLModel {
    /// <p>The ID assigned to the <code>MLModel</code> at creation.</p>
    #[serde(rename = "MLModelId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_id: Option<String>,
    /// <p>The ID of the training <code>DataSource</code>.</p>
    #[serde(rename = "TrainingDataSourceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_data_source_id: Option<String>,
    /// <p>The AWS user account from which the <code>MLModel</code> was
    /// created.</p>
    #[serde(rename = "CreatedByIamUser")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_iam_user: Option<String>,
    /// <p>The time that the <code>MLModel</code> was created.</p>
    #[serde(rename = "CreatedAt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<sdk_types::Instant>,
    /// <p>The time of the most recent edit to the <code>MLModel</code>.</p>
    #[serde(rename = "LastUpdatedAt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<sdk_types::Instant>,
    /// <p>A user-supplied name or description of the
    /// <code>MLModel</code>.</p>
    #[serde(rename = "Name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The current status of the <code>MLModel</code>.</p>
    #[serde(rename = "Status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(rename = "SizeInBytes")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,
    /// <p>The current endpoint of the <code>MLModel</code>.</p>
    #[serde(rename = "EndpointInfo")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_info: Option<RealtimeEndpointInfo>,
    /// <p>A list of the training parameters in the <code>MLModel</code>.</p>
    #[serde(rename = "TrainingParameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_parameters: Option<HashMap<String, String>>,
    /// <p>The location of the data file or directory in Amazon Simple
    /// Storage Service (Amazon S3).</p>
    #[serde(rename = "InputDataLocationS3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_location_s3: Option<String>,
    /// <p>Identifies the <code>MLModel</code> category.</p>
    #[serde(rename = "MLModelType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_model_type: Option<MLModelType>,
    #[serde(rename = "ScoreThreshold")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f32>,
    /// <p>The time of the most recent edit to the
    /// <code>ScoreThreshold</code>.</p>
    #[serde(rename = "ScoreThresholdLastUpdatedAt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold_last_updated_at: Option<sdk_types::Instant>,
    /// <p>A description of the most recent details about accessing the
    /// <code>MLModel</code>.</p>
    #[serde(rename = "Message")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "ComputeTime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_time: Option<i64>,
    #[serde(rename = "FinishedAt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<sdk_types::Instant>,
    #[serde(rename = "StartedAt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<sdk_types::Instant>,
}

impl MLModel {
    pub fn builder() -> ml_model::Builder {
        ml_model::Builder::default()
    }
}

pub mod ml_model {
    use super::{EntityStatus, MLModel, MLModelType, RealtimeEndpointInfo};
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
        message: Option<String>,
        compute_time: Option<i64>,
        finished_at: Option<sdk_types::Instant>,
        started_at: Option<sdk_types::Instant>,
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

        pub fn build(self) -> MLModel {
            MLModel {
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
                message: self.message,
                compute_time: self.compute_time,
                finished_at: self.finished_at,
                started_at: self.started_at,
            }
        }
    }
}

/// <p>The output from a <code>Predict</code> operation.</p>
///
/// Exactly one of `predicted_value` or `predicted_label` is populated,
/// depending on the `MLModel` type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// <p>The prediction label for either a <code>BINARY</code> or
    /// <code>MULTICLASS</code> <code>MLModel</code>.</p>
    #[serde(rename = "predictedLabel")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_label: Option<String>,
    /// <p>The prediction value for <code>REGRESSION</code>
    /// <code>MLModel</code>.</p>
    #[serde(rename = "predictedValue")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_value: Option<f32>,
    #[serde(rename = "predictedScores")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_scores: Option<HashMap<String, f32>>,
    #[serde(rename = "details")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl Prediction {
    pub fn builder() -> prediction::Builder {
        prediction::Builder::default()
    }
}

pub mod prediction {
    use super::Prediction;
    use std::collections::HashMap;

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        predicted_label: Option<String>,
        predicted_value: Option<f32>,
        predicted_scores: Option<HashMap<String, f32>>,
        details: Option<HashMap<String, String>>,
    }

    impl Builder {
        pub fn predicted_label(mut self, inp: impl Into<String>) -> Self {
            self.predicted_label = Some(inp.into());
            self
        }

        pub fn predicted_value(mut self, inp: f32) -> Self {
            self.predicted_value = Some(inp);
            self
        }

        pub fn predicted_scores(mut self, inp: HashMap<String, f32>) -> Self {
            self.predicted_scores = Some(inp);
            self
        }

        pub fn details(mut self, inp: HashMap<String, String>) -> Self {
            self.details = Some(inp);
            self
        }

        pub fn build(self) -> Prediction {
            Prediction {
                predicted_label: self.predicted_label,
                predicted_value: self.predicted_value,
                predicted_scores: self.predicted_scores,
                details: self.details,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{EntityStatus, MLModel, MLModelType, SortOrder, TaggableResourceType};
    use std::str::FromStr;

    #[test]
    fn enum_round_trip() {
        for ty in &[
            MLModelType::Regression,
            MLModelType::Binary,
            MLModelType::Multiclass,
        ] {
            assert_eq!(MLModelType::from_str(ty.as_str()), Ok(*ty));
        }
        assert_eq!(EntityStatus::from_str("INPROGRESS"), Ok(EntityStatus::Inprogress));
        assert_eq!(SortOrder::from_str("dsc"), Ok(SortOrder::Dsc));
        assert_eq!(
            TaggableResourceType::from_str("MLModel"),
            Ok(TaggableResourceType::MLModel)
        );
    }

    #[test]
    fn enum_parse_rejects_unknown_values() {
        MLModelType::from_str("LINEAR").expect_err("LINEAR is not a model type");
        MLModelType::from_str("regression").expect_err("values are case sensitive");
        SortOrder::from_str("").expect_err("empty input is rejected");
        EntityStatus::from_str("RUNNING").expect_err("RUNNING is not an entity status");
    }

    #[test]
    fn ml_model_equality_is_value_based() {
        let model = MLModel::builder()
            .ml_model_id("ml-1")
            .status(EntityStatus::Completed)
            .score_threshold(0.5)
            .build();
        let same = MLModel::builder()
            .ml_model_id("ml-1")
            .status(EntityStatus::Completed)
            .score_threshold(0.5)
            .build();
        let different = MLModel::builder()
            .ml_model_id("ml-1")
            .status(EntityStatus::Completed)
            .score_threshold(0.9)
            .build();
        assert_eq!(model, same);
        assert_ne!(model, different);
    }

    #[test]
    fn serialized_enum_uses_the_wire_literal() {
        let json = serde_json::to_string(&MLModelType::Multiclass).unwrap();
        assert_eq!(json, "\"MULTICLASS\"");
        let parsed: MLModelType = serde_json::from_str("\"BINARY\"").unwrap();
        assert_eq!(parsed, MLModelType::Binary);
        serde_json::from_str::<MLModelType>("\"TERNARY\"").expect_err("unknown literal");
    }
}
