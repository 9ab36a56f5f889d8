//! Outbound request transport.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Url;

use crate::{FetchError, Response};

/// A GET request ready to send.
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Create a GET request for a URL.
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Sends requests and reads full responses.
///
/// Implementations must not interpret the status code; that is left to
/// [`Response::error_for_status`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// Transport backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let url = request.url.to_string();
        let mut builder = self.client.get(request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let resp = builder.send().await?;

        let status = resp.status().as_u16();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = resp.bytes().await?.to_vec();

        Ok(Response::new(url, status, headers, body))
    }
}
