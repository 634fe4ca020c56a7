use amplify_backend_output::BackendOutputError;

use crate::model_introspection::ModelIntrospectionError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error raised by a single client config contributor
#[derive(Debug, thiserror::Error)]
pub enum ClientConfigContributorError {
    #[error("failed to resolve model introspection schema: {0}")]
    ModelIntrospection(#[from] ModelIntrospectionError),

    #[error("could not serialize config fragment: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Escape hatch for contributor implementations outside this crate
    #[error("{0}")]
    Other(BoxError),
}

/// An error in client config generation.
///
/// Every variant is fatal: generation either fully succeeds with a complete
/// config or fails with a single cause, never a partial result.
#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("failed to fetch backend output: {0}")]
    Provider(#[source] BoxError),

    #[error(transparent)]
    Validation(#[from] BackendOutputError),

    #[error(transparent)]
    Contributor(#[from] ClientConfigContributorError),
}
