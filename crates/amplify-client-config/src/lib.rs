//! Translation layer between backend deployment output and the single
//! configuration object a frontend consumes.
//!
//! The pipeline is: fetch raw backend output through an injected provider,
//! validate it against the unified output schema, hand the validated output
//! to each registered [`contributor::ClientConfigContributor`] in turn, and
//! merge the returned fragments into one flat [`client_config::ClientConfig`].

pub mod client_config;
pub mod contributor;
pub mod errors;
pub mod generator;
pub mod model_introspection;
