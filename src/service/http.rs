//! reqwest-backed client for the calculator API.

use super::{CalculatorService, ServiceError};
use crate::config::ClientConfig;
use crate::core::{CalculationRequest, HistoryEntry};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct CalculateResponse {
    result: f64,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP client for the calculator API rooted at a base URL.
///
/// No timeout and no retries are configured; a request lasts as long as
/// the transport lets it.
#[derive(Clone, Debug)]
pub struct HttpCalculatorService {
    client: Client,
    base_url: String,
}

impl HttpCalculatorService {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:5005`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .user_agent(concat!("tally/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                tracing::error!(?e, "HttpCalculatorService: failed to create HTTP client");
                ServiceError::Transport(format!("Failed to create HTTP client: {e}"))
            })?;

        let base_url: String = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ServiceError> {
        Self::new(config.api_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into an error, preferring the service's
    /// own `{error}` message when it sent one.
    async fn failure(response: Response) -> ServiceError {
        let status = response.status().as_u16();
        match response.json::<ErrorResponse>().await {
            Ok(body) => ServiceError::Rejected {
                status,
                message: body.error,
            },
            Err(_) => ServiceError::UnexpectedStatus { status },
        }
    }
}

#[async_trait]
impl CalculatorService for HttpCalculatorService {
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, ServiceError> {
        debug!(%request, "POST /api/calculate");

        let response = self
            .client
            .post(self.endpoint("/api/calculate"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let body: CalculateResponse = response.json().await?;
        Ok(body.result)
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ServiceError> {
        debug!("GET /api/history");

        let response = self.client.get(self.endpoint("/api/history")).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let entries: Vec<HistoryEntry> = response.json().await?;
        Ok(entries)
    }

    async fn clear_history(&self) -> Result<(), ServiceError> {
        debug!("DELETE /api/history");

        let response = self
            .client
            .delete(self.endpoint("/api/history"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        Ok(())
    }

    async fn health(&self) -> Result<String, ServiceError> {
        debug!("GET /api/health");

        let response = self.client.get(self.endpoint("/api/health")).send().await?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        let body: HealthResponse = response.json().await?;
        Ok(body.status)
    }
}
