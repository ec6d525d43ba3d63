//! Error types for the list-fetch client.
//!
//! # Design
//! `FetchError` covers the three ways a fetch can fail. Its `Display` output
//! is the message shown to the user in the `Failed` state, so transport
//! failures collapse to one generic line while the underlying detail is kept
//! in the variant for logging. A decoded body of the wrong shape is not an
//! error at all; see `envelope::normalize`.

use thiserror::Error;

/// Errors produced while fetching a resource collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connect, DNS, timeout).
    #[error("Failed to fetch")]
    Transport(String),

    /// A response arrived with a status outside 200..=299.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The success body was not valid JSON or exceeded the read limit.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Underlying cause, for diagnostics only.
    pub fn detail(&self) -> Option<&str> {
        match self {
            FetchError::Transport(detail) | FetchError::Decode(detail) => Some(detail),
            FetchError::HttpStatus { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource: {0}")]
pub struct UnknownResource(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_hides_detail() {
        let err = FetchError::Transport("connection refused (os error 111)".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
        assert_eq!(err.detail(), Some("connection refused (os error 111)"));
    }

    #[test]
    fn status_message_embeds_code() {
        let err = FetchError::HttpStatus { status: 503 };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert!(err.detail().is_none());
    }
}
