//! HTTP client for the backend REST API
//!
//! Thin JSON transport: the collection endpoints return bare arrays,
//! mutation endpoints return ad-hoc bodies that callers either type
//! explicitly or discard. No retries, no request cancellation: a
//! failed call surfaces as an error and the caller's prior state
//! stands.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error body shape the backend uses for failures.
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for making requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!("GET {}", path);
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        tracing::debug!("GET {} (query)", path);
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body and a typed response
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body, discarding the response body
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        tracing::debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_status(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty(&self, path: &str) -> ClientResult<()> {
        tracing::debug!("POST {}", path);
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_status(response).await
    }

    /// Make a POST request with a raw text/plain body
    pub async fn post_text(&self, path: &str, body: &str) -> ClientResult<()> {
        tracing::debug!("POST {} (text)", path);
        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body.to_string())
            .send()
            .await?;
        Self::handle_status(response).await
    }

    /// Make a PUT request with JSON body, discarding the response body
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        tracing::debug!("PUT {}", path);
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_status(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        tracing::debug!("DELETE {}", path);
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_status(response).await
    }

    /// Handle an HTTP response with a JSON body
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        response.json().await.map_err(Into::into)
    }

    /// Handle an HTTP response where only success matters
    async fn handle_status(response: Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        Ok(())
    }

    /// Map an error status to a client error, preferring the backend's
    /// `{"detail": ...}` message when the body carries one.
    async fn error_from(status: StatusCode, response: Response) -> ClientError {
        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.detail)
            .unwrap_or(text);
        tracing::warn!("Request failed with {}: {}", status, detail);
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(detail),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(detail)
            }
            _ => ClientError::Internal(detail),
        }
    }
}
