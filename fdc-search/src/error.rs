//! Error types for the fdc-search crate.
//!
//! Messages are stable and safe to show to users. API keys never appear
//! in error messages: transport errors are stripped of their request URL
//! before being wrapped.

/// Errors that can occur while resolving an ingredient.
///
/// "No match" is not an error; see [`crate::Resolution::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The ingredient query was empty or whitespace-only.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request to FoodData Central could not be sent or completed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// FoodData Central answered with a non-success status code.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response body was not a valid search result document.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Whether this error came from the upstream search call rather than
    /// from the caller's input or configuration.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Decode(_))
    }
}

/// Convenience type alias for fdc-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
