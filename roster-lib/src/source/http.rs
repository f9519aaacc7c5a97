//! HTTP row source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{RowSource, decode_rows};
use crate::error::FetchError;
use crate::model::Entity;

/// Fetches the roster with a single unauthenticated GET.
///
/// # Example
///
/// ```ignore
/// let source = HttpRowSource::builder()
///     .endpoint("http://localhost:3000/characters")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let rows = source.fetch().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpRowSource {
    endpoint: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl HttpRowSource {
    /// Creates a new builder for constructing a source.
    pub fn builder() -> HttpRowSourceBuilder<Missing> {
        HttpRowSourceBuilder::new()
    }

    /// Returns the endpoint this source reads from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RowSource for HttpRowSource {
    async fn fetch(&self) -> Result<Vec<Entity>, FetchError> {
        log::debug!("GET {}", self.endpoint);

        let mut request = self.http_client.get(self.endpoint.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        decode_rows(&body)
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`HttpRowSource`].
///
/// The endpoint is required; `build` only exists once it is set.
pub struct HttpRowSourceBuilder<Endpoint> {
    endpoint: Endpoint,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl HttpRowSourceBuilder<Missing> {
    fn new() -> Self {
        Self {
            endpoint: Missing,
            timeout: None,
            http_client: None,
        }
    }

    /// Sets the endpoint URL (required).
    pub fn endpoint(self, endpoint: impl Into<String>) -> HttpRowSourceBuilder<Set<String>> {
        HttpRowSourceBuilder {
            endpoint: Set(endpoint.into()),
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl<E> HttpRowSourceBuilder<E> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl HttpRowSourceBuilder<Set<String>> {
    /// Builds the source.
    ///
    /// Fails with [`FetchError::InvalidUrl`] if the endpoint does not parse
    /// or is not http(s).
    pub fn build(self) -> Result<HttpRowSource, FetchError> {
        let raw = self.endpoint.0;
        let endpoint =
            Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{raw}: unsupported scheme '{}'",
                endpoint.scheme()
            )));
        }

        Ok(HttpRowSource {
            endpoint,
            http_client: self.http_client.unwrap_or_default(),
            timeout: self.timeout,
        })
    }
}
