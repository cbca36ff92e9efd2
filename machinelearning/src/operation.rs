// Code generated by a smithy-based code generator. DO NOT EDIT.
use crate::error::{
    AddTagsError, CreateMLModelError, DeleteMLModelError, DescribeMLModelsError, GetMLModelError,
    PredictError, UpdateMLModelError,
};
use crate::output::{
    AddTagsOutput, CreateMLModelOutput, DeleteMLModelOutput, DescribeMLModelsOutput,
    GetMLModelOutput, PredictOutput, UpdateMLModelOutput,
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

/// <p>Creates a new <code>MLModel</code> using the <code>DataSource</code>
/// and the recipe as information sources.</p>
/// <p><code>CreateMLModel</code> is an asynchronous operation: it returns
/// immediately with the model in the <code>PENDING</code> status.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct CreateMLModel {
    _private: (),
}

impl CreateMLModel {
    /// Creates a new builder-style object to manufacture
    /// [`CreateMLModelInput`](crate::input::CreateMLModelInput).
    pub fn builder() -> crate::input::create_ml_model_input::Builder {
        crate::input::CreateMLModelInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for CreateMLModel {
    type Output = Result<CreateMLModelOutput, CreateMLModelError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::create_ml_model_error(response));
        }
        parse_payload(response.body(), CreateMLModelError::Unhandled)
    }
}

/// <p>Returns an <code>MLModel</code> that includes detailed metadata, data
/// source information, and the current status of the
/// <code>MLModel</code>.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct GetMLModel {
    _private: (),
}

impl GetMLModel {
    /// Creates a new builder-style object to manufacture
    /// [`GetMLModelInput`](crate::input::GetMLModelInput).
    pub fn builder() -> crate::input::get_ml_model_input::Builder {
        crate::input::GetMLModelInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for GetMLModel {
    type Output = Result<GetMLModelOutput, GetMLModelError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::get_ml_model_error(response));
        }
        parse_payload(response.body(), GetMLModelError::Unhandled)
    }
}

/// <p>Assigns the <code>DELETED</code> status to an <code>MLModel</code>,
/// rendering it unusable.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteMLModel {
    _private: (),
}

impl DeleteMLModel {
    /// Creates a new builder-style object to manufacture
    /// [`DeleteMLModelInput`](crate::input::DeleteMLModelInput).
    pub fn builder() -> crate::input::delete_ml_model_input::Builder {
        crate::input::DeleteMLModelInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for DeleteMLModel {
    type Output = Result<DeleteMLModelOutput, DeleteMLModelError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::delete_ml_model_error(response));
        }
        parse_payload(response.body(), DeleteMLModelError::Unhandled)
    }
}

/// <p>Returns a list of <code>MLModel</code> that match the search criteria
/// in the request.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct DescribeMLModels {
    _private: (),
}

impl DescribeMLModels {
    /// Creates a new builder-style object to manufacture
    /// [`DescribeMLModelsInput`](crate::input::DescribeMLModelsInput).
    pub fn builder() -> crate::input::describe_ml_models_input::Builder {
        crate::input::DescribeMLModelsInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for DescribeMLModels {
    type Output = Result<DescribeMLModelsOutput, DescribeMLModelsError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::describe_ml_models_error(response));
        }
        parse_payload(response.body(), DescribeMLModelsError::Unhandled)
    }
}

/// <p>Updates the <code>MLModelName</code> and the
/// <code>ScoreThreshold</code> of an <code>MLModel</code>.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateMLModel {
    _private: (),
}

impl UpdateMLModel {
    /// Creates a new builder-style object to manufacture
    /// [`UpdateMLModelInput`](crate::input::UpdateMLModelInput).
    pub fn builder() -> crate::input::update_ml_model_input::Builder {
        crate::input::UpdateMLModelInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for UpdateMLModel {
    type Output = Result<UpdateMLModelOutput, UpdateMLModelError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::update_ml_model_error(response));
        }
        parse_payload(response.body(), UpdateMLModelError::Unhandled)
    }
}

/// <p>Adds one or more tags to an object, up to a limit of 10. Each tag
/// consists of a key and an optional value.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct AddTags {
    _private: (),
}

impl AddTags {
    /// Creates a new builder-style object to manufacture
    /// [`AddTagsInput`](crate::input::AddTagsInput).
    pub fn builder() -> crate::input::add_tags_input::Builder {
        crate::input::AddTagsInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for AddTags {
    type Output = Result<AddTagsOutput, AddTagsError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::add_tags_error(response));
        }
        parse_payload(response.body(), AddTagsError::Unhandled)
    }
}

/// <p>Generates a prediction for the observation using the specified
/// <code>MLModel</code>.</p>
#[derive(Clone, Copy, Debug, Default)]
pub struct Predict {
    _private: (),
}

impl Predict {
    /// Creates a new builder-style object to manufacture
    /// [`PredictInput`](crate::input::PredictInput).
    pub fn builder() -> crate::input::predict_input::Builder {
        crate::input::PredictInput::builder()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseStrictResponse for Predict {
    type Output = Result<PredictOutput, PredictError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if aws_core::json_errors::is_error(response) {
            return Err(crate::error::predict_error(response));
        }
        parse_payload(response.body(), PredictError::Unhandled)
    }
}

#[cfg(test)]
mod test {
    use super::{GetMLModel, Predict};
    use crate::error::GetMLModelError;
    use crate::model::{EntityStatus, MLModelType};
    use bytes::Bytes;
    use sdk_http::response::ParseStrictResponse;

    #[test]
    fn success_body_deserializes_into_output() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"MLModelId":"ml-1","Status":"COMPLETED","MLModelType":"BINARY","ScoreThreshold":0.5,"CreatedAt":1.422220279E9}"#,
            ))
            .unwrap();
        let output = GetMLModel::new().parse(&response).expect("valid response");
        assert_eq!(output.ml_model_id.as_deref(), Some("ml-1"));
        assert_eq!(output.status, Some(EntityStatus::Completed));
        assert_eq!(output.ml_model_type, Some(MLModelType::Binary));
        assert_eq!(output.score_threshold, Some(0.5));
    }

    #[test]
    fn prediction_fields_use_lower_camel_case() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"Prediction":{"predictedLabel":"1","predictedScores":{"1":0.92}}}"#,
            ))
            .unwrap();
        let output = Predict::new().parse(&response).expect("valid response");
        let prediction = output.prediction.expect("prediction present");
        assert_eq!(prediction.predicted_label.as_deref(), Some("1"));
        assert_eq!(
            prediction.predicted_scores.unwrap().get("1"),
            Some(&0.92f32)
        );
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"[1,2"))
            .unwrap();
        let err = GetMLModel::new()
            .parse(&response)
            .expect_err("malformed body");
        assert!(matches!(err, GetMLModelError::Unhandled(_)));
    }
}
