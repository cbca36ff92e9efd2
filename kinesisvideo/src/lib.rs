// Code generated by a smithy-based code generator. DO NOT EDIT.
//! <p>Amazon Kinesis Video Streams control plane: create, describe, list, tag
//! and delete video streams, and look up per-stream data endpoints.</p>

pub use aws_core::Region;
pub use config::Config;
pub use sdk_types::Instant;

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

#[cfg(feature = "client")]
pub use client::Client;

pub(crate) static SERVICE_NAME: &str = "kinesisvideo";
