//! Natural Language Understanding service client.
//!
//! Ties the pieces together: resolves document input, serializes the
//! request, sends it through a [`Transport`] and decodes the response.

use bytes::Bytes;
use itertools::Itertools;
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::{ClientError, Transport, TransportError, TransportRequest};
use crate::http::HttpClient;
use crate::model::{decode, AnalysisResult};
use crate::options::{HttpTransport, ServiceOptions, TransportOptions};
use crate::request::AnalysisRequest;

/// Client for the analyze endpoint.
///
/// Holds no per-call state, so one instance can serve many concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct NaturalLanguageUnderstanding<T = HttpClient> {
    service_options: ServiceOptions,
    transport: T,
}

impl NaturalLanguageUnderstanding<HttpClient> {
    /// Create a client that talks HTTP to `service_options.base_url`.
    pub fn new(
        service_options: ServiceOptions,
        transport_options: TransportOptions<HttpTransport>,
    ) -> Result<Self, ClientError> {
        let transport = HttpClient::new(&service_options.base_url, &transport_options)?;
        Ok(Self::with_transport(service_options, transport))
    }
}

impl<T: Transport> NaturalLanguageUnderstanding<T> {
    /// Create a client over any transport.
    pub fn with_transport(service_options: ServiceOptions, transport: T) -> Self {
        Self {
            service_options,
            transport,
        }
    }

    pub fn service_options(&self) -> &ServiceOptions {
        &self.service_options
    }

    /// Run the analyses enabled in `request`.
    ///
    /// HTML given as a file path is read from disk first. Errors are
    /// returned as-is; nothing is retried and no partial result is ever
    /// produced.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        let loaded;
        let request = match request.html_file() {
            Some(path) => {
                let contents = tokio::fs::read(path)
                    .await
                    .map_err(|source| ClientError::Document {
                        path: path.to_path_buf(),
                        source,
                    })?;
                loaded = request.with_html_contents(Bytes::from(contents));
                &loaded
            }
            None => request,
        };

        let body = request.to_payload()?;

        debug!(
            input = request.input().key(),
            features = %request.features().enabled().iter().join(","),
            "analyzing content"
        );

        let response = self
            .transport
            .send(TransportRequest {
                method: Method::POST,
                path: self.service_options.analyze_path(),
                body,
            })
            .await?;

        if !response.is_success() {
            let err = Self::handle_error_response(response.status, &response.body);
            warn!(status = response.status, error = %err, "analyze request failed");
            return Err(err.into());
        }

        Ok(decode(&response.body)?)
    }

    /// Turn a non-success response into a transport error, preferring the
    /// service's own message.
    fn handle_error_response(status: u16, body: &[u8]) -> TransportError {
        let message = match serde_json::from_slice::<ServiceErrorResponse>(body) {
            Ok(error_resp) => error_resp.error,
            Err(_) => String::from_utf8_lossy(body).into_owned(),
        };
        TransportError::Status { status, message }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceErrorResponse {
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{DecodeErrorKind, InvalidRequestKind, TransportResponse};
    use crate::features::{CategoriesOptions, ConceptsOptions, Features, SentimentOptions};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Replies with a fixed status and body and records what it was sent.
    struct CannedTransport {
        status: u16,
        body: &'static str,
        sent: Mutex<Vec<TransportRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent_bodies(&self) -> Vec<Value> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|r| serde_json::from_slice(&r.body).unwrap())
                .collect()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
            self.sent.lock().unwrap().push(request);
            Ok(TransportResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    struct TimingOut;

    #[async_trait]
    impl Transport for TimingOut {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportError> {
            Err(TransportError::Timeout)
        }
    }

    fn text_request(text: &str, features: Features) -> AnalysisRequest {
        AnalysisRequest::builder()
            .text(text)
            .features(features)
            .build()
            .unwrap()
    }

    fn categories() -> Features {
        Features::default().with_categories(CategoriesOptions::default())
    }

    #[tokio::test]
    async fn test_analyze_posts_payload_to_versioned_path() {
        let transport = Arc::new(CannedTransport::new(
            200,
            r#"{"language":"en","categories":[{"label":"/art","score":0.9}]}"#,
        ));
        let service = NaturalLanguageUnderstanding::with_transport(
            ServiceOptions::default().with_version("2016-05-17"),
            transport.clone(),
        );

        let result = service
            .analyze(&text_request("Some art text", categories()))
            .await
            .unwrap();

        assert_eq!(result.categories.unwrap()[0].label.as_deref(), Some("/art"));

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].path, "/v1/analyze?version=2016-05-17");
        drop(sent);

        assert_eq!(
            transport.sent_bodies()[0],
            json!({ "text": "Some art text", "features": { "categories": {} } })
        );
    }

    #[tokio::test]
    async fn test_service_error_message_is_surfaced() {
        let transport = CannedTransport::new(
            422,
            r#"{"error":"not enough text for language id","code":422}"#,
        );
        let service = NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), transport);

        let err = service
            .analyze(&text_request("x", categories()))
            .await
            .unwrap_err();

        match err {
            ClientError::Transport(TransportError::Status { status, message }) => {
                assert_eq!(status, 422);
                assert_eq!(message, "not enough text for language id");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_kept_verbatim() {
        let transport = CannedTransport::new(502, "Bad Gateway");
        let service = NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), transport);

        let err = service
            .analyze(&text_request("x", categories()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Transport(TransportError::Status { status: 502, ref message }) if message == "Bad Gateway"
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_not_an_empty_result() {
        let service = NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), TimingOut);

        let err = service
            .analyze(&text_request("x", categories()))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(TransportError::Timeout)));
    }

    #[tokio::test]
    async fn test_truncated_success_body_is_decode_error() {
        let transport = CannedTransport::new(200, r#"{"language":"en","sentiment":{"docu"#);
        let service = NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), transport);

        let err = service
            .analyze(&text_request("x", categories()))
            .await
            .unwrap_err();

        match err {
            ClientError::Decode(err) => assert_eq!(err.kind, DecodeErrorKind::MalformedBody),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_html_file_is_read_and_sent_as_markup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html><title>Beer</title></html>").unwrap();

        let transport = Arc::new(CannedTransport::new(200, r#"{"language":"en"}"#));
        let service =
            NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), transport.clone());

        let request = AnalysisRequest::builder()
            .html_file(file.path())
            .features(Features::default().with_concepts(ConceptsOptions::default()))
            .build()
            .unwrap();

        service.analyze(&request).await.unwrap();

        assert_eq!(
            transport.sent_bodies()[0],
            json!({ "html": "<html><title>Beer</title></html>", "features": { "concepts": {} } })
        );
        // the caller's request is left untouched
        assert_eq!(request.html_file(), Some(file.path()));
    }

    #[tokio::test]
    async fn test_missing_html_file_fails_before_sending() {
        let transport = Arc::new(CannedTransport::new(200, "{}"));
        let service =
            NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), transport.clone());

        let request = AnalysisRequest::builder()
            .html_file("/definitely/not/here.html")
            .build()
            .unwrap();

        let err = service.analyze(&request).await.unwrap_err();
        assert!(matches!(err, ClientError::Document { .. }));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_html_encoding_fails_before_sending() {
        let transport = Arc::new(CannedTransport::new(200, "{}"));
        let service =
            NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), transport.clone());

        let request = AnalysisRequest::builder()
            .html_bytes(vec![0xc3, 0x28])
            .build()
            .unwrap();

        let err = service.analyze(&request).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidRequest(ref e) if e.kind == InvalidRequestKind::InvalidEncoding
        ));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let transport = Arc::new(CannedTransport::new(200, r#"{"language":"en"}"#));
        let service =
            NaturalLanguageUnderstanding::with_transport(ServiceOptions::default(), transport.clone());

        let first = text_request("first", categories());
        let second = text_request(
            "second",
            Features::default().with_sentiment(SentimentOptions::default().with_document(true)),
        );

        let (a, b) = tokio::join!(service.analyze(&first), service.analyze(&second));
        assert!(a.is_ok());
        assert!(b.is_ok());

        let mut bodies = transport.sent_bodies();
        bodies.sort_by_key(|body| body["text"].as_str().unwrap().to_string());
        assert_eq!(
            bodies,
            vec![
                json!({ "text": "first", "features": { "categories": {} } }),
                json!({ "text": "second", "features": { "sentiment": { "document": true } } }),
            ]
        );
    }
}
