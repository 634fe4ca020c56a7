//! Shapes of the generated client configuration.

use serde::Serialize;
use serde_json::{Map, Value};

pub mod graphql;

/// A partial config object produced by exactly one contributor. Contributors
/// own disjoint field namespaces, so fragments never collide in practice.
pub type ClientConfigFragment = Map<String, Value>;

/// The merged client configuration handed back to the caller. Field order
/// follows contributor invocation order.
pub type ClientConfig = Map<String, Value>;

/// Serialize a typed config into a fragment.
///
/// Fields the type skips during serialization end up genuinely absent from
/// the fragment, which is how "no data" is signaled downstream.
pub(crate) fn to_fragment<T: Serialize>(
    config: &T,
) -> Result<ClientConfigFragment, serde_json::Error> {
    match serde_json::to_value(config)? {
        Value::Object(fragment) => Ok(fragment),
        other => Err(serde::ser::Error::custom(format!(
            "config fragment must be a JSON object, got {other}"
        ))),
    }
}
