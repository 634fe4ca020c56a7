//! Resolution of the model introspection schema referenced by backend output.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod s3;

/// A structured description of a GraphQL data model. Opaque to this crate;
/// it is attached to the client config verbatim.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ModelIntrospectionSchema(pub serde_json::Value);

/// Errors raised while resolving a model introspection schema
#[derive(Debug, thiserror::Error)]
pub enum ModelIntrospectionError {
    #[error("unsupported model schema uri: {0}")]
    UnsupportedUri(String),

    #[error("http error")]
    Http(#[from] reqwest::Error),

    #[error("model schema document is not valid JSON: {0}")]
    InvalidSchemaDocument(#[from] serde_json::Error),
}

/// Able to turn a stored schema location into the schema itself.
#[async_trait]
pub trait ModelIntrospectionSchemaAdapter {
    /// Retrieve and parse the model introspection schema stored at `uri`.
    ///
    /// `Ok(None)` means no schema exists at that location; callers treat it
    /// as "nothing to attach", never as a failure. Communication and parse
    /// errors are real failures and must be surfaced.
    async fn get_model_introspection_schema_from_s3_uri(
        &self,
        uri: &str,
    ) -> Result<Option<ModelIntrospectionSchema>, ModelIntrospectionError>;
}
