//! Trait abstraction for the call backend to enable mocking in tests

use crate::error::CallError;
use crate::state::CreditType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Payload for initiating an outbound call.
///
/// Only ever constructed with a trimmed, non-empty name and a canonical
/// `+91` ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    pub name: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub credit_type: CreditType,
}

/// Success response from the backend; the body is allowed to carry
/// anything, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallAccepted {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub call_sid: Option<String>,
}

/// Trait for call-backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallService: Send + Sync {
    /// Ask the backend to place an outbound call for this request
    async fn initiate_call(&self, request: CallRequest) -> Result<CallAccepted, CallError>;
}
