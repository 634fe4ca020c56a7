//! Adapter that resolves `s3://` schema locations over HTTPS.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use super::{ModelIntrospectionError, ModelIntrospectionSchema, ModelIntrospectionSchemaAdapter};

/// Implementation of [`ModelIntrospectionSchemaAdapter`] that fetches the
/// schema document through the bucket's virtual-hosted-style HTTPS endpoint.
///
/// A missing object (404, or the 403 S3 answers when the caller may not list
/// the bucket) is reported as absence, not as an error.
pub struct S3ModelIntrospectionSchemaAdapter {
    region: String,
    client: reqwest::Client,
    endpoint_override: Option<Url>,
}

impl S3ModelIntrospectionSchemaAdapter {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            client: reqwest::Client::new(),
            endpoint_override: None,
        }
    }

    /// Route object requests to `endpoint` (path-style) instead of the
    /// regional S3 endpoint. Used to point at test servers or S3-compatible
    /// stores.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    fn object_url(&self, uri: &str) -> Result<Url, ModelIntrospectionError> {
        let unsupported = || ModelIntrospectionError::UnsupportedUri(uri.to_string());

        let parsed = Url::parse(uri).map_err(|_| unsupported())?;
        if parsed.scheme() != "s3" {
            return Err(unsupported());
        }
        let bucket = parsed.host_str().ok_or_else(|| unsupported())?;
        let key = parsed.path().trim_start_matches('/');
        if key.is_empty() {
            return Err(unsupported());
        }

        match &self.endpoint_override {
            Some(endpoint) => endpoint.join(&format!("{bucket}/{key}")),
            None => Url::parse(&format!(
                "https://{bucket}.s3.{}.amazonaws.com/{key}",
                self.region
            )),
        }
        .map_err(|_| unsupported())
    }
}

#[async_trait]
impl ModelIntrospectionSchemaAdapter for S3ModelIntrospectionSchemaAdapter {
    async fn get_model_introspection_schema_from_s3_uri(
        &self,
        uri: &str,
    ) -> Result<Option<ModelIntrospectionSchema>, ModelIntrospectionError> {
        let object_url = self.object_url(uri)?;
        let response = self.client.get(object_url).send().await?;

        if matches!(
            response.status(),
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN
        ) {
            debug!(uri, "no model introspection schema stored at uri");
            return Ok(None);
        }

        let bytes = response.error_for_status()?.bytes().await?;
        let document = serde_json::from_slice(&bytes)?;
        Ok(Some(ModelIntrospectionSchema(document)))
    }
}
