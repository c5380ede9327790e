//! RegioJet client error types.

/// Errors that can occur when querying the RegioJet API.
#[derive(Debug, thiserror::Error)]
pub enum RegioJetError {
    /// HTTP request failed (network unreachable, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code. The body is kept as opaque
    /// text; the upstream has no documented error schema.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON array of route objects.
    #[error("malformed response: {message}")]
    MalformedResponse {
        message: String,
        /// Truncated copy of the offending body, for diagnostics.
        body: Option<String>,
    },

    /// Client configuration was unusable (e.g. a language code that is not
    /// a valid header value).
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Mock fixture could not be loaded.
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RegioJetError::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API error 404: Not Found");

        let err = RegioJetError::MalformedResponse {
            message: "expected an array".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("malformed response"));
        assert!(err.to_string().contains("expected an array"));

        let err = RegioJetError::Config {
            message: "invalid language header".into(),
        };
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
