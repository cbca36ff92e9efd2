// Code generated by a smithy-based code generator. DO NOT EDIT.
//! Definition of the public APIs exposed by Amazon Machine Learning

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

pub(crate) static SERVICE_NAME: &str = "machinelearning";

/// Target prefix for the `x-amz-target` header on every request.
pub(crate) static TARGET_PREFIX: &str = "AmazonML_20141212";
