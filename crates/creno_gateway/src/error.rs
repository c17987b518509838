// --- File: crates/creno_gateway/src/error.rs ---
use creno_common::{external_service_error, CrenoError, HttpStatusCode};
use thiserror::Error;

/// Gateway-specific error types, returned by the mutating booking API calls.
///
/// Read-only fetches never produce these; their failures are absorbed into
/// [`crate::FetchOutcome::Failed`].
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Error occurred while issuing the HTTP request
    #[error("Booking API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Error returned by the booking API
    #[error("Booking API returned an error: {message} (Status: {status_code})")]
    Api { status_code: u16, message: String },

    /// Error parsing a booking API response body
    #[error("Failed to parse booking API response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GatewayError {
    /// The server-provided message for logical failures, when there is one.
    ///
    /// Transport and decode failures carry no user-facing message; callers
    /// substitute their own generic fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Convert GatewayError to CrenoError
impl From<GatewayError> for CrenoError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Request(e) => {
                CrenoError::HttpError(format!("Booking API request error: {}", e))
            }
            GatewayError::Api {
                status_code,
                message,
            } => external_service_error(
                "Booking API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            GatewayError::Parse(e) => {
                CrenoError::ParseError(format!("Booking API response parse error: {}", e))
            }
        }
    }
}

impl HttpStatusCode for GatewayError {
    fn status_code(&self) -> u16 {
        match self {
            GatewayError::Request(_) => 502,
            GatewayError::Api { status_code, .. } => *status_code,
            GatewayError::Parse(_) => 502,
        }
    }
}
