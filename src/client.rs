//! Transport trait and error types.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Failed to serialize request: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to read document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a request was rejected before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequestKind {
    /// Zero or more than one of text, html and url were supplied.
    AmbiguousInput,
    /// HTML input still points at a file that has not been read.
    UnresolvedDocument,
    /// HTML bytes are not UTF-8.
    InvalidEncoding,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid request ({kind:?}): {message}")]
pub struct InvalidRequestError {
    pub kind: InvalidRequestKind,
    pub message: String,
}

impl InvalidRequestError {
    pub fn new(kind: InvalidRequestKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Network-level failures and non-success responses.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Service error ({status}): {message}")]
    Status { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The body is not valid JSON.
    MalformedBody,
    /// The body is JSON but some value has the wrong type.
    UnexpectedShape,
}

#[derive(Error, Debug)]
#[error("Failed to decode response ({kind:?}): {source}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    #[source]
    pub source: serde_json::Error,
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        let kind = match source.classify() {
            Category::Data => DecodeErrorKind::UnexpectedShape,
            Category::Syntax | Category::Eof | Category::Io => DecodeErrorKind::MalformedBody,
        };
        Self { kind, source }
    }
}

/// A request as handed to the transport. Authentication is the transport's
/// concern and is not part of this value.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    /// Path and query, relative to the service base URL
    pub path: String,
    /// JSON body
    pub body: Bytes,
}

/// Raw response as returned by the transport, whatever its status.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and delivers exactly one response or error.
///
/// Implement this trait to plug in a different HTTP stack or a test double.
/// The default implementation is [`HttpClient`](crate::http::HttpClient).
///
/// # Example
/// ```rust,ignore
/// struct Canned(Bytes);
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportError> {
///         Ok(TransportResponse { status: 200, body: self.0.clone() })
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to the service and return the raw response.
    ///
    /// Non-success statuses are returned as responses, not errors; the
    /// caller decides how to interpret them. A call that times out must
    /// return [`TransportError::Timeout`].
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("{,}").unwrap_err();
        assert_eq!(DecodeError::from(syntax).kind, DecodeErrorKind::MalformedBody);

        let eof = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        assert_eq!(DecodeError::from(eof).kind, DecodeErrorKind::MalformedBody);

        let data = serde_json::from_str::<Vec<u32>>("{}").unwrap_err();
        assert_eq!(DecodeError::from(data).kind, DecodeErrorKind::UnexpectedShape);
    }

    #[test]
    fn test_errors_convert_into_client_error() {
        let err: ClientError =
            InvalidRequestError::new(InvalidRequestKind::AmbiguousInput, "got 2").into();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
        assert_eq!(err.to_string(), "Invalid request (AmbiguousInput): got 2");

        let err: ClientError = TransportError::Timeout.into();
        assert!(matches!(err, ClientError::Transport(TransportError::Timeout)));
    }

    #[test]
    fn test_success_range() {
        let ok = TransportResponse { status: 201, body: Bytes::new() };
        let bad = TransportResponse { status: 400, body: Bytes::new() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
