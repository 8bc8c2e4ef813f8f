//! Error types for the Nanonets client.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the Nanonets API.
///
/// Transport failures, non-2xx responses and undecodable bodies are kept in
/// separate variants so callers can tell "the server rejected this" apart
/// from "the server accepted this but sent something unparseable".
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout, body read),
    /// or the underlying HTTP client could not be built.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a status outside `200..300`.
    #[error("API error: {body} (status {status})")]
    Api {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Raw response body, read in full.
        body: String,
    },

    /// A successful response did not contain the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized; nothing was sent.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A file selected for upload could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file that failed to open or read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The client was configured with invalid settings.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn api(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status of an [`Error::Api`], if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an [`Error::Api`], if this is one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the request failed before a response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// Whether the server responded with a non-2xx status.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Whether a 2xx response carried a body that could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Whether the server answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status_and_body() {
        let err = Error::api(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#);

        assert!(err.is_api());
        assert!(err.is_not_found());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.body(), Some(r#"{"error":"not found"}"#));
        assert_eq!(
            err.to_string(),
            r#"API error: {"error":"not found"} (status 404 Not Found)"#
        );
    }

    #[test]
    fn decode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::Decode(source);

        assert!(err.is_decode());
        assert!(!err.is_api());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }

    #[test]
    fn io_error_names_the_path() {
        let err = Error::Io {
            path: PathBuf::from("/tmp/missing.pdf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(err.to_string().starts_with("failed to read /tmp/missing.pdf"));
    }
}
