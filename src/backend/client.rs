//! HTTP client for the Loan.ly call backend
//!
//! Speaks plain JSON over HTTP: a single `POST {base_url}/call` per
//! submission, no retries.

use crate::error::CallError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::traits::{CallAccepted, CallRequest, CallService};

/// Error body the backend returns on non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the call backend
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL this client targets
    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn call_url(&self) -> String {
        format!("{}/call", self.base_url)
    }
}

#[async_trait]
impl CallService for BackendClient {
    async fn initiate_call(&self, request: CallRequest) -> Result<CallAccepted, CallError> {
        let url = self.call_url();
        debug!("POST {url} for {}", request.phone);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CallError::Transport(format!("Could not reach the call service: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("Call request failed with status {status}"));
            return Err(CallError::Remote(message));
        }

        let accepted: CallAccepted = response
            .json()
            .await
            .map_err(|e| CallError::Transport(format!("Unexpected response from backend: {e}")))?;

        info!(call_sid = accepted.call_sid.as_deref(), "call initiated");
        Ok(accepted)
    }
}
