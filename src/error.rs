//! Error Taxonomy
//!
//! Every failure the client can observe, normalized into one enum so that
//! mutation flows and list loaders handle them uniformly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Client-side validation failure. Never reaches the network.
    #[error("{field}: {reason}")]
    Validation { field: String, reason: String },

    /// Server responded with a non-2xx status.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// No response at all (DNS, refused connection, timeout). Superseded
    /// requests never surface here; the staleness guard drops them before
    /// any error can reach the user.
    #[error("Network error - check your connection")]
    Network,

    /// Response body did not decode as the expected shape.
    #[error("bad response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_passes_through() {
        let err = ApiError::RequestFailed {
            status: 422,
            message: "title already exists".to_string(),
        };
        assert_eq!(err.to_string(), "title already exists");
    }

    #[test]
    fn validation_names_the_field() {
        assert_eq!(
            ApiError::validation("year", "out of range").to_string(),
            "year: out of range"
        );
    }
}
