use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use crate::errors::CoreError;
use crate::models::analysis::{AnalysisRequest, BackendErrorBody, BusinessAnalysis};
use super::traits::AnalysisProvider;

/// Default analysis endpoint: the dashboard's own backend, which holds the AI key.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/analyze";

/// Analysis backend reached over HTTP.
///
/// - **Request**: `POST {endpoint}` with an [`AnalysisRequest`] JSON body.
/// - **Success**: `200` with a [`BusinessAnalysis`] JSON body.
/// - **Failure**: any other status (message taken from `{"error": ...}` when
///   present), a transport error, or a body that fails decoding/validation.
///
/// No timeout is configured; AI backends may legitimately take a while.
pub struct HttpAnalysisProvider {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAnalysisProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AnalysisProvider for HttpAnalysisProvider {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<BusinessAnalysis, CoreError> {
        debug!(
            endpoint = %self.endpoint,
            transactions = request.transactions.len(),
            location = %request.location,
            "sending analysis request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let err = CoreError::from(e);
                error!(error = %err, "analysis backend request failed");
                err
            })?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            let message = serde_json::from_str::<BackendErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Server responded with status {}", status.as_u16()));
            error!(status = status.as_u16(), %message, "analysis backend rejected request");
            return Err(CoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        BusinessAnalysis::from_json(&body).map_err(|e| {
            error!(error = %e, "analysis response rejected");
            e
        })
    }
}
