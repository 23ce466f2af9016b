//! Error taxonomy for the call-request workflow

use thiserror::Error;

/// Errors that can surface while submitting a call request.
///
/// None of these are fatal: every variant is rendered as a status-bar
/// notice and the form returns to the idle state.
#[derive(Debug, Error)]
pub enum CallError {
    /// Name or phone missing before any network activity.
    #[error("Please fill in your name and phone number")]
    MissingFields,

    /// Normalized phone is not a `+91` ten-digit number.
    #[error("Please enter a valid 10-digit Indian mobile number")]
    InvalidPhone,

    /// The backend answered with a non-success status; the message is the
    /// `error` field of the response body when present.
    #[error("{0}")]
    Remote(String),

    /// Network failure or a response body that could not be decoded.
    #[error("{0}")]
    Transport(String),
}
