// Code generated by a smithy-based code generator. DO NOT EDIT.
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
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

/// <p>The status of the stream.</p>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamStatus {
    Creating,
    Active,
    Updating,
    Deleting,
}

impl StreamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamStatus::Creating => "CREATING",
            StreamStatus::Active => "ACTIVE",
            StreamStatus::Updating => "UPDATING",
            StreamStatus::Deleting => "DELETING",
        }
    }
}

impl FromStr for StreamStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATING" => Ok(StreamStatus::Creating),
            "ACTIVE" => Ok(StreamStatus::Active),
            "UPDATING" => Ok(StreamStatus::Updating),
            "DELETING" => Ok(StreamStatus::Deleting),
            other => Err(UnknownVariantError::new("StreamStatus", other)),
        }
    }
}

impl Serialize for StreamStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StreamStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// <p>The name of the API for which the data endpoint is requested.</p>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum APIName {
    PutMedia,
    GetMedia,
    ListFragments,
    GetMediaForFragmentList,
    GetHlsStreamingSessionUrl,
    GetDashStreamingSessionUrl,
    GetClip,
}

impl APIName {
    pub fn as_str(&self) -> &'static str {
        match self {
            APIName::PutMedia => "PUT_MEDIA",
            APIName::GetMedia => "GET_MEDIA",
            APIName::ListFragments => "LIST_FRAGMENTS",
            APIName::GetMediaForFragmentList => "GET_MEDIA_FOR_FRAGMENT_LIST",
            APIName::GetHlsStreamingSessionUrl => "GET_HLS_STREAMING_SESSION_URL",
            APIName::GetDashStreamingSessionUrl => "GET_DASH_STREAMING_SESSION_URL",
            APIName::GetClip => "GET_CLIP",
        }
    }
}

impl FromStr for APIName {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUT_MEDIA" => Ok(APIName::PutMedia),
            "GET_MEDIA" => Ok(APIName::GetMedia),
            "LIST_FRAGMENTS" => Ok(APIName::ListFragments),
            "GET_MEDIA_FOR_FRAGMENT_LIST" => Ok(APIName::GetMediaForFragmentList),
            "GET_HLS_STREAMING_SESSION_URL" => Ok(APIName::GetHlsStreamingSessionUrl),
            "GET_DASH_STREAMING_SESSION_URL" => Ok(APIName::GetDashStreamingSessionUrl),
            "GET_CLIP" => Ok(APIName::GetClip),
            other => Err(UnknownVariantError::new("APIName", other)),
        }
    }
}

impl Serialize for APIName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for APIName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// <p>The comparison operator used with a stream name condition.</p>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    BeginsWith,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::BeginsWith => "BEGINS_WITH",
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINS_WITH" => Ok(ComparisonOperator::BeginsWith),
            other => Err(UnknownVariantError::new("ComparisonOperator", other)),
        }
    }
}

impl Serialize for ComparisonOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComparisonOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// <p>Specifies the condition that streams must satisfy to be returned when
/// you list streams. You specify an optional comparison operator, and a
/// stream name prefix.</p>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamNameCondition {
    /// <p>A comparison operator. Currently, you can specify only the
    /// <code>BEGINS_WITH</code> operator.</p>
    #[serde(rename = "ComparisonOperator")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    /// <p>A value to compare.</p>
    #[serde(rename = "ComparisonValue")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_value: Option<String>,
}

impl StreamNameCondition {
    pub fn builder() -> stream_name_condition::Builder {
        stream_name_condition::Builder::default()
    }
}

pub mod stream_name_condition {
    use super::{ComparisonOperator, StreamNameCondition};

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        comparison_operator: Option<ComparisonOperator>,
        comparison_value: Option<String>,
    }

    impl Builder {
        pub fn comparison_operator(mut self, inp: ComparisonOperator) -> Self {
            self.comparison_operator = Some(inp);
            self
        }

        pub fn comparison_value(mut self, inp: impl Into<String>) -> Self {
            self.comparison_value = Some(inp.into());
            self
        }

        pub fn build(self) -> StreamNameCondition {
            StreamNameCondition {
                comparison_operator: self.comparison_operator,
                comparison_value: self.comparison_value,
            }
        }
    }
}

/// <p>An object describing a Kinesis video stream.</p>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamInfo {
    /// <p>The name of the device that is associated with the stream.</p>
    #[serde(rename = "DeviceName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// <p>The name of the stream.</p>
    #[serde(rename = "StreamName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// <p>The Amazon Resource Name (ARN) of the stream.</p>
    #[serde(rename = "StreamARN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// <p>The <code>MediaType</code> of the stream.</p>
    #[serde(rename = "MediaType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// <p>The ID of the AWS Key Management Service (AWS KMS) key that Kinesis
    /// Video Streams uses to encrypt data on the stream.</p>
    #[serde(rename = "KmsKeyId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// <p>The version of the stream.</p>
    #[serde(rename = "Version")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// <p>The status of the stream.</p>
    #[serde(rename = "Status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StreamStatus>,
    /// <p>A time stamp that indicates when the stream was created.</p>
    #[serde(rename = "CreationTime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<sdk_types::Instant>,
    /// <p>How long the stream retains data, in hours.</p>
    #[serde(rename = "DataRetentionInHours")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retention_in_hours: Option<i32>,
}

impl StreamInfo {
    pub fn builder() -> stream_info::Builder {
        stream_info::Builder::default()
    }
}

pub mod stream_info {
    use super::{StreamInfo, StreamStatus};

    #[derive(Debug, Default, Clone)]
    pub struct Builder {
        device_name: Option<String>,
        stream_name: Option<String>,
        stream_arn: Option<String>,
        media_type: Option<String>,
        kms_key_id: Option<String>,
        version: Option<String>,
        status: Option<StreamStatus>,
        creation_time: Option<sdk_types::Instant>,
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

        pub fn stream_arn(mut self, inp: impl Into<String>) -> Self {
            self.stream_arn = Some(inp.into());
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

        pub fn version(mut self, inp: impl Into<String>) -> Self {
            self.version = Some(inp.into());
            self
        }

        pub fn status(mut self, inp: StreamStatus) -> Self {
            self.status = Some(inp);
            self
        }

        pub fn creation_time(mut self, inp: sdk_types::Instant) -> Self {
            self.creation_time = Some(inp);
            self
        }

        pub fn data_retention_in_hours(mut self, inp: i32) -> Self {
            self.data_retention_in_hours = Some(inp);
            self
        }

        pub fn build(self) -> StreamInfo {
            StreamInfo {
                device_name: self.device_name,
                stream_name: self.stream_name,
                stream_arn: self.stream_arn,
                media_type: self.media_type,
                kms_key_id: self.kms_key_id,
                version: self.version,
                status: self.status,
                creation_time: self.creation_time,
                data_retention_in_hours: self.data_retention_in_hours,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{APIName, ComparisonOperator, StreamInfo, StreamStatus};
    use std::str::FromStr;

    #[test]
    fn enum_round_trip() {
        for status in &[
            StreamStatus::Creating,
            StreamStatus::Active,
            StreamStatus::Updating,
            StreamStatus::Deleting,
        ] {
            assert_eq!(StreamStatus::from_str(status.as_str()), Ok(*status));
        }
        assert_eq!(APIName::from_str("GET_MEDIA"), Ok(APIName::GetMedia));
        assert_eq!(
            ComparisonOperator::from_str("BEGINS_WITH"),
            Ok(ComparisonOperator::BeginsWith)
        );
    }

    #[test]
    fn enum_parse_rejects_unknown_values() {
        StreamStatus::from_str("PAUSED").expect_err("PAUSED is not a stream status");
        StreamStatus::from_str("").expect_err("empty input is rejected");
        StreamStatus::from_str("active").expect_err("values are case sensitive");
        APIName::from_str("PUT_VIDEO").expect_err("PUT_VIDEO is not an API name");
    }

    #[test]
    fn stream_info_equality_is_value_based() {
        let info = StreamInfo::builder()
            .stream_name("demo")
            .status(StreamStatus::Active)
            .data_retention_in_hours(24)
            .build();
        let same = StreamInfo::builder()
            .stream_name("demo")
            .status(StreamStatus::Active)
            .data_retention_in_hours(24)
            .build();
        let different = StreamInfo::builder()
            .stream_name("demo")
            .status(StreamStatus::Deleting)
            .data_retention_in_hours(24)
            .build();
        assert_eq!(info, same);
        assert_ne!(info, different);
    }
}
