//! Orchestration of end-to-end client config generation.

use std::future::Future;

use amplify_backend_output::UnifiedBackendOutput;
use serde_json::Value;
use tracing::debug;

use crate::client_config::ClientConfig;
use crate::contributor::ClientConfigContributor;
use crate::errors::{BoxError, ClientConfigError};

/// Generates the full client config by fanning validated backend output out
/// to a fixed sequence of contributors and merging their fragments.
///
/// Contributors run strictly in registration order, one at a time, so the
/// merge result is deterministic. There is no recovery here: the first
/// provider, validation, or contributor failure aborts the run with no
/// partial config.
pub struct UnifiedClientConfigGenerator<F> {
    fetch_output: F,
    contributors: Vec<Box<dyn ClientConfigContributor>>,
}

impl<F, Fut> UnifiedClientConfigGenerator<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Value, BoxError>>,
{
    /// `fetch_output` is how this generator retrieves raw backend output.
    /// The retrieval mechanism, including any retry or timeout policy, is
    /// owned by the caller.
    pub fn new(fetch_output: F, contributors: Vec<Box<dyn ClientConfigContributor>>) -> Self {
        Self {
            fetch_output,
            contributors,
        }
    }

    /// Fetch backend output, invoke each contributor on the validated result
    /// and merge the fragments into a single config object.
    ///
    /// The merge is a right-biased shallow union: a later contributor wins
    /// on a field collision. Contributors own disjoint field namespaces, so
    /// a collision indicates a bug in a contributor rather than something
    /// this layer handles.
    pub async fn generate_client_config(&self) -> Result<ClientConfig, ClientConfigError> {
        let raw = (self.fetch_output)()
            .await
            .map_err(ClientConfigError::Provider)?;
        let backend_output = UnifiedBackendOutput::from_value(raw)?;
        debug!("backend output passed schema validation");

        let mut accumulator = ClientConfig::new();
        for contributor in &self.contributors {
            let fragment = contributor.contribute(&backend_output).await?;
            debug!(fields = fragment.len(), "merging contributor fragment");
            accumulator.extend(fragment);
        }
        Ok(accumulator)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::client_config::ClientConfigFragment;
    use crate::contributor::graphql::GraphqlClientConfigContributor;
    use crate::errors::ClientConfigContributorError;
    use crate::model_introspection::{
        ModelIntrospectionError, ModelIntrospectionSchema, ModelIntrospectionSchemaAdapter,
    };

    struct StaticContributor {
        fragment: ClientConfigFragment,
        calls: Arc<AtomicUsize>,
    }

    impl StaticContributor {
        fn boxed(fields: Value, calls: &Arc<AtomicUsize>) -> Box<dyn ClientConfigContributor> {
            let Value::Object(fragment) = fields else {
                panic!("static contributor fields must be an object");
            };
            Box::new(Self {
                fragment,
                calls: Arc::clone(calls),
            })
        }
    }

    #[async_trait]
    impl ClientConfigContributor for StaticContributor {
        async fn contribute(
            &self,
            _backend_output: &UnifiedBackendOutput,
        ) -> Result<ClientConfigFragment, ClientConfigContributorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.fragment.clone())
        }
    }

    struct FailingContributor;

    #[async_trait]
    impl ClientConfigContributor for FailingContributor {
        async fn contribute(
            &self,
            _backend_output: &UnifiedBackendOutput,
        ) -> Result<ClientConfigFragment, ClientConfigContributorError> {
            Err(ClientConfigContributorError::Other("boom".into()))
        }
    }

    /// Adapter stub for end-to-end runs; `None` behaves like a missing
    /// schema document.
    struct FixedSchemaAdapter(Option<Value>);

    #[async_trait]
    impl ModelIntrospectionSchemaAdapter for FixedSchemaAdapter {
        async fn get_model_introspection_schema_from_s3_uri(
            &self,
            _uri: &str,
        ) -> Result<Option<ModelIntrospectionSchema>, ModelIntrospectionError> {
            Ok(self.0.clone().map(ModelIntrospectionSchema))
        }
    }

    struct FailingAdapter;

    #[async_trait]
    impl ModelIntrospectionSchemaAdapter for FailingAdapter {
        async fn get_model_introspection_schema_from_s3_uri(
            &self,
            uri: &str,
        ) -> Result<Option<ModelIntrospectionSchema>, ModelIntrospectionError> {
            Err(ModelIntrospectionError::UnsupportedUri(uri.to_string()))
        }
    }

    fn graphql_backend_output() -> Value {
        json!({
            "AWS::Amplify::GraphQL": {
                "version": "1",
                "payload": {
                    "awsAppsyncApiEndpoint": "https://example.appsync-api.us-east-1.amazonaws.com/graphql",
                    "awsAppsyncRegion": "us-east-1",
                    "awsAppsyncApiKey": "da2-testkey",
                    "awsAppsyncAuthenticationType": "API_KEY",
                    "awsAppsyncAdditionalAuthenticationTypes": ["AWS_IAM"],
                    "awsAppsyncConflictResolutionMode": "AUTOMERGE",
                    "amplifyApiModelSchemaS3Uri": "s3://bucket/model-schema.json",
                }
            }
        })
    }

    #[tokio::test]
    async fn empty_backend_output_yields_empty_config() {
        let generator = UnifiedClientConfigGenerator::new(
            || async { Ok(json!({})) },
            vec![Box::new(GraphqlClientConfigContributor::new(
                FixedSchemaAdapter(Some(json!({ "models": [] }))),
            ))],
        );

        let config = generator.generate_client_config().await.unwrap();
        assert!(config.is_empty());
    }

    #[tokio::test]
    async fn generates_graphql_config_with_model_introspection() {
        let generator = UnifiedClientConfigGenerator::new(
            || async { Ok(graphql_backend_output()) },
            vec![Box::new(GraphqlClientConfigContributor::new(
                FixedSchemaAdapter(Some(json!({ "models": [] }))),
            ))],
        );

        let config = generator.generate_client_config().await.unwrap();

        assert_eq!(
            config.get("aws_appsync_graphqlEndpoint"),
            Some(&json!(
                "https://example.appsync-api.us-east-1.amazonaws.com/graphql"
            ))
        );
        assert_eq!(
            config.get("modelIntrospection"),
            Some(&json!({ "models": [] }))
        );
    }

    #[tokio::test]
    async fn generates_graphql_config_without_model_introspection() {
        let generator = UnifiedClientConfigGenerator::new(
            || async { Ok(graphql_backend_output()) },
            vec![Box::new(GraphqlClientConfigContributor::new(
                FixedSchemaAdapter(None),
            ))],
        );

        let config = generator.generate_client_config().await.unwrap();

        assert_eq!(config.len(), 6);
        assert!(!config.contains_key("modelIntrospection"));
        assert_eq!(config.get("aws_appsync_region"), Some(&json!("us-east-1")));
    }

    #[tokio::test]
    async fn adapter_failure_fails_whole_generation() {
        let generator = UnifiedClientConfigGenerator::new(
            || async { Ok(graphql_backend_output()) },
            vec![Box::new(GraphqlClientConfigContributor::new(
                FailingAdapter,
            ))],
        );

        let result = generator.generate_client_config().await;

        assert!(matches!(
            result,
            Err(ClientConfigError::Contributor(
                ClientConfigContributorError::ModelIntrospection(
                    ModelIntrospectionError::UnsupportedUri(_)
                )
            ))
        ));
    }

    #[tokio::test]
    async fn later_contributor_wins_on_field_collision() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = UnifiedClientConfigGenerator::new(
            || async { Ok(json!({})) },
            vec![
                StaticContributor::boxed(json!({ "shared": "first", "only": 1 }), &calls),
                StaticContributor::boxed(json!({ "shared": "second" }), &calls),
            ],
        );

        let config = generator.generate_client_config().await.unwrap();

        assert_eq!(config.get("shared"), Some(&json!("second")));
        assert_eq!(config.get("only"), Some(&json!(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn provider_failure_aborts_generation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = UnifiedClientConfigGenerator::new(
            || async { Err("deployment metadata unavailable".into()) },
            vec![StaticContributor::boxed(json!({ "a": 1 }), &calls)],
        );

        let result = generator.generate_client_config().await;

        assert!(matches!(result, Err(ClientConfigError::Provider(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn validation_failure_runs_no_contributor() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = UnifiedClientConfigGenerator::new(
            || async { Ok(json!({ "AWS::Amplify::GraphQL": { "payload": {} } })) },
            vec![StaticContributor::boxed(json!({ "a": 1 }), &calls)],
        );

        let result = generator.generate_client_config().await;

        assert!(matches!(result, Err(ClientConfigError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn contributor_failure_yields_no_partial_config() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = UnifiedClientConfigGenerator::new(
            || async { Ok(json!({})) },
            vec![
                StaticContributor::boxed(json!({ "a": 1 }), &calls),
                Box::new(FailingContributor),
            ],
        );

        let result = generator.generate_client_config().await;

        assert!(matches!(
            result,
            Err(ClientConfigError::Contributor(
                ClientConfigContributorError::Other(_)
            ))
        ));
    }
}
