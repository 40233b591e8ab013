//! Typed error enum for the REST client.

use thiserror::Error;

/// Errors from the record count request.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("{error_code} (HTTP {code}): {message}")]
    Api { code: u16, error_code: String, message: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no sObject types requested")]
    EmptyRequest,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Whether the platform rejected the credentials rather than the request.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::HttpStatus { code, .. } | Self::Api { code, .. } => matches!(code, 401 | 403),
            _ => false,
        }
    }

    /// Whether the server answered but the body did not have the expected shape.
    #[must_use]
    pub const fn is_malformed_response(&self) -> bool {
        matches!(self, Self::JsonParse { .. })
    }
}
