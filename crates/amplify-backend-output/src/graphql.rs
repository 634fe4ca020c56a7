//! Output schema for the GraphQL API capability.

use serde::{Deserialize, Serialize};

/// Namespace key identifying the GraphQL API entry in backend output
pub const GRAPHQL_OUTPUT_KEY: &str = "AWS::Amplify::GraphQL";

/// The only schema version of the GraphQL output payload this crate accepts
pub const GRAPHQL_OUTPUT_VERSION: &str = "1";

/// Raw deployment output describing a provisioned GraphQL API.
///
/// All fields are set at deployment time and are read-only here. The model
/// schema itself is not embedded; `amplify_api_model_schema_s3_uri` points at
/// the remotely stored introspection document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlOutputPayload {
    pub aws_appsync_api_endpoint: String,
    pub aws_appsync_region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_appsync_api_key: Option<String>,
    pub aws_appsync_authentication_type: String,
    #[serde(default)]
    pub aws_appsync_additional_authentication_types: Vec<String>,
    pub aws_appsync_conflict_resolution_mode: String,
    pub amplify_api_model_schema_s3_uri: String,
}
