use serde::{Deserialize, Serialize};

use crate::model_introspection::ModelIntrospectionSchema;

/// The GraphQL API portion of the client config.
///
/// Field names match what frontend libraries expect verbatim. Optional
/// fields are skipped entirely during serialization; consumers test for key
/// presence, so absence must never surface as an explicit `null`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GraphqlClientConfig {
    #[serde(rename = "aws_appsync_graphqlEndpoint")]
    pub aws_appsync_graphql_endpoint: String,

    pub aws_appsync_region: String,

    #[serde(
        rename = "aws_appsync_apiKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub aws_appsync_api_key: Option<String>,

    #[serde(rename = "aws_appsync_authenticationType")]
    pub aws_appsync_authentication_type: String,

    #[serde(rename = "aws_appsync_additionalAuthenticationTypes")]
    pub aws_appsync_additional_authentication_types: Vec<String>,

    #[serde(rename = "aws_appsync_conflictResolutionMode")]
    pub aws_appsync_conflict_resolution_mode: String,

    #[serde(
        rename = "modelIntrospection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub model_introspection: Option<ModelIntrospectionSchema>,
}
