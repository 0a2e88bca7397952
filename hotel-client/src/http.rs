//! HTTP transport
//!
//! `NetworkHttpClient` remembers the newest `x-observed-position` value the
//! server has sent and attaches it to every following request, so queries
//! issued after a command see at least the state that command produced.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::{OBSERVED_POSITION_HEADER, ObservedPosition};

use crate::{ClientConfig, ClientError, ClientResult};

/// Transport used by [`HotelApi`](crate::HotelApi)
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    fn observed_position(&self) -> Option<ObservedPosition>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    observed_position: Arc<RwLock<Option<ObservedPosition>>>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            observed_position: Arc::new(RwLock::new(None)),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_observed_position(&self, request: RequestBuilder) -> RequestBuilder {
        match self.observed_position() {
            Some(position) => request.header(OBSERVED_POSITION_HEADER, position.to_string()),
            None => request,
        }
    }

    fn remember_observed_position(&self, response: &reqwest::Response) {
        let Some(value) = response.headers().get(OBSERVED_POSITION_HEADER) else {
            return;
        };
        let observed = match value.to_str().ok().map(str::parse::<ObservedPosition>) {
            Some(Ok(position)) => position,
            _ => {
                tracing::warn!(value = ?value, "Ignoring malformed observed position");
                return;
            }
        };

        let mut guard = self
            .observed_position
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let merged = ObservedPosition::merge(*guard, observed);
        if Some(merged) != *guard {
            tracing::trace!(position = %merged, "Observed position advanced");
        }
        *guard = Some(merged);
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        self.remember_observed_position(&response);

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                StatusCode::SERVICE_UNAVAILABLE => Err(ClientError::NotUpToDate),
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    message: text,
                }),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Response body did not match the expected shape");
            ClientError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let req = self.with_observed_position(self.client.get(&url));
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let req = self.with_observed_position(self.client.post(&url).json(body));
        let response = req.send().await?;
        self.handle_response(response).await
    }

    fn observed_position(&self) -> Option<ObservedPosition> {
        *self
            .observed_position
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
