//! Schema types for the structured output of a backend deployment.
//!
//! A deployment produces one record per provisioned capability, keyed by a
//! namespace string such as [`graphql::GRAPHQL_OUTPUT_KEY`]. Each record is
//! wrapped in a versioned envelope. Raw output must pass
//! [`UnifiedBackendOutput::from_value`] before anything downstream reads it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod graphql;

use graphql::{GRAPHQL_OUTPUT_KEY, GRAPHQL_OUTPUT_VERSION, GraphqlOutputPayload};

/// Errors raised when raw backend output fails schema conformance
#[derive(Debug, thiserror::Error)]
pub enum BackendOutputError {
    #[error("backend output does not conform to the unified schema: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported version {version} for backend output entry {key}")]
    UnexpectedVersion { key: String, version: String },
}

/// Versioned envelope wrapping one capability's raw output record
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BackendOutputEntry<T> {
    pub version: String,
    pub payload: T,
}

/// The full structured output of a backend deployment, keyed by capability
/// namespace. A namespace key that is absent means the capability was not
/// deployed, which is a legitimate state rather than an error.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct UnifiedBackendOutput {
    #[serde(
        rename = "AWS::Amplify::GraphQL",
        skip_serializing_if = "Option::is_none"
    )]
    pub graphql_output: Option<BackendOutputEntry<GraphqlOutputPayload>>,

    /// Entries for capabilities this crate has no typed schema for. They
    /// still have to match the versioned envelope shape.
    #[serde(flatten)]
    pub other: BTreeMap<String, BackendOutputEntry<Value>>,
}

impl UnifiedBackendOutput {
    /// Validate raw deployment output against the unified schema.
    ///
    /// Returns the typed output on success. Any conformance failure is fatal
    /// to the caller's generation run, so no partially-valid output is ever
    /// produced.
    pub fn from_value(raw: Value) -> Result<Self, BackendOutputError> {
        let output: Self = serde_json::from_value(raw)?;
        if let Some(entry) = &output.graphql_output
            && entry.version != GRAPHQL_OUTPUT_VERSION
        {
            return Err(BackendOutputError::UnexpectedVersion {
                key: GRAPHQL_OUTPUT_KEY.to_string(),
                version: entry.version.clone(),
            });
        }
        Ok(output)
    }
}
