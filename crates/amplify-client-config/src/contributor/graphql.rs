//! Translator for the GraphQL API portion of the client config.

use amplify_backend_output::UnifiedBackendOutput;
use async_trait::async_trait;
use tracing::debug;

use crate::client_config::graphql::GraphqlClientConfig;
use crate::client_config::{ClientConfigFragment, to_fragment};
use crate::contributor::ClientConfigContributor;
use crate::errors::ClientConfigContributorError;
use crate::model_introspection::ModelIntrospectionSchemaAdapter;

pub struct GraphqlClientConfigContributor<A> {
    model_introspection_schema_adapter: A,
}

impl<A> GraphqlClientConfigContributor<A> {
    pub fn new(model_introspection_schema_adapter: A) -> Self {
        Self {
            model_introspection_schema_adapter,
        }
    }
}

#[async_trait]
impl<A> ClientConfigContributor for GraphqlClientConfigContributor<A>
where
    A: ModelIntrospectionSchemaAdapter + Send + Sync,
{
    /// Map the GraphQL output payload 1:1 into config fields, then attach
    /// the model introspection schema when the adapter can resolve one.
    async fn contribute(
        &self,
        backend_output: &UnifiedBackendOutput,
    ) -> Result<ClientConfigFragment, ClientConfigContributorError> {
        let Some(entry) = &backend_output.graphql_output else {
            return Ok(ClientConfigFragment::new());
        };
        let payload = &entry.payload;

        let mut config = GraphqlClientConfig {
            aws_appsync_graphql_endpoint: payload.aws_appsync_api_endpoint.clone(),
            aws_appsync_region: payload.aws_appsync_region.clone(),
            aws_appsync_api_key: payload.aws_appsync_api_key.clone(),
            aws_appsync_authentication_type: payload.aws_appsync_authentication_type.clone(),
            aws_appsync_additional_authentication_types: payload
                .aws_appsync_additional_authentication_types
                .clone(),
            aws_appsync_conflict_resolution_mode: payload
                .aws_appsync_conflict_resolution_mode
                .clone(),
            model_introspection: None,
        };

        config.model_introspection = self
            .model_introspection_schema_adapter
            .get_model_introspection_schema_from_s3_uri(&payload.amplify_api_model_schema_s3_uri)
            .await?;
        if config.model_introspection.is_none() {
            debug!(
                uri = %payload.amplify_api_model_schema_s3_uri,
                "no model introspection schema to attach"
            );
        }

        Ok(to_fragment(&config)?)
    }
}
