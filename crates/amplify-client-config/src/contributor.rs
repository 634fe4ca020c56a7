use amplify_backend_output::UnifiedBackendOutput;
use async_trait::async_trait;

use crate::client_config::ClientConfigFragment;
use crate::errors::ClientConfigContributorError;

pub mod graphql;

/// A unit that derives one named slice of client configuration from backend
/// output. Contributors may perform I/O but must never mutate the output
/// they are given.
#[async_trait]
pub trait ClientConfigContributor: Send + Sync {
    /// Produce this contributor's fragment of the client config.
    ///
    /// A namespace key absent from `backend_output` means the capability was
    /// not deployed: the contributor returns an empty fragment, never an
    /// error. Errors are reserved for real failures while building a
    /// fragment, and abort the whole generation run.
    async fn contribute(
        &self,
        backend_output: &UnifiedBackendOutput,
    ) -> Result<ClientConfigFragment, ClientConfigContributorError>;
}
