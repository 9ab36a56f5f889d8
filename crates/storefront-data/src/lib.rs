//! Catalog API client for the storefront.
//!
//! Provides a small fetch layer over a pluggable [`Transport`] and the
//! [`CatalogClient`] that wraps the four catalog reads.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::CatalogClient;
//!
//! let catalog = CatalogClient::new("https://fakestoreapi.com")?;
//!
//! let (products, categories) = tokio::join!(
//!     catalog.list_products(),
//!     catalog.list_categories(),
//! );
//! ```

mod catalog;
mod error;
mod memo;
mod response;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Url;

pub use catalog::{CatalogClient, QueryKey, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use memo::QueryCache;
pub use response::Response;
pub use transport::{ReqwestTransport, Request, Transport};

/// HTTP client for reading JSON from one API.
///
/// No retry, backoff or timeout is applied; a failed read is returned as is.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Url,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl FetchClient {
    /// Create a client for `base_url` using the `reqwest` transport.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_transport(base_url, ReqwestTransport::new())
    }

    /// Create a client that sends through a custom transport.
    pub fn with_transport(
        base_url: &str,
        transport: impl Transport + 'static,
    ) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Ok(Self {
            base_url,
            default_headers,
            transport: Arc::new(transport),
        })
    }

    /// Build the URL for a path below the base URL.
    ///
    /// Each segment is percent-encoded on its own, so a segment may contain
    /// spaces, apostrophes or slashes.
    pub fn url_for<I>(&self, segments: I) -> Result<Url, FetchError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a path and return the response, failing on non-2xx statuses.
    pub async fn get<I>(&self, segments: I) -> Result<Response, FetchError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let url = self.url_for(segments)?;
        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key.clone(), value.clone());
        }

        tracing::debug!(url = %request.url, "GET");
        let response = self.transport.send(request).await?;
        tracing::debug!(url = %response.url, status = response.status, bytes = response.body.len(), "response");
        response.error_for_status()
    }
}
