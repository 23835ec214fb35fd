//! Error types for the conversation store.

use thiserror::Error;

/// Errors that can occur while querying the remote conversation table.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed (transport error or undecodable body).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Backend URL did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Backend rejected the credentials.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Backend answered with a non-success status.
    #[error("Backend returned status {status}: {message}")]
    Backend {
        /// HTTP status code the backend answered with.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// Whole-table query matched no rows.
    #[error("No conversations found")]
    NoConversations,

    /// Sender-filtered query matched no rows.
    #[error("No conversations found for {0}")]
    NoConversationsForSender(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Whether this is the empty-result condition rather than a backend
    /// failure. Decides between a 404 and a 500 at the HTTP layer.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoConversations | Self::NoConversationsForSender(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(StoreError::NoConversations.is_not_found());
        assert!(StoreError::NoConversationsForSender("+1999".to_string()).is_not_found());
        assert!(!StoreError::HttpClient("bad client".to_string()).is_not_found());
        assert!(!StoreError::Backend {
            status: 500,
            message: "boom".to_string(),
        }
        .is_not_found());
    }

    #[test]
    fn test_not_found_message_includes_the_filter() {
        let err = StoreError::NoConversationsForSender("+1999".to_string());
        assert_eq!(err.to_string(), "No conversations found for +1999");
        assert_eq!(StoreError::NoConversations.to_string(), "No conversations found");
    }
}
