//! HTTP transport over `reqwest`.
//!
//! This module provides HTTP client construction from transport options
//! and the default [`Transport`] implementation used by the service client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use std::collections::HashMap;
use tracing::debug;

use crate::client::{ClientError, Transport, TransportError, TransportRequest, TransportResponse};
use crate::options::{Credentials, HttpTransport, TransportOptions};

/// Build a configured HTTP client from transport options.
///
/// This applies common configuration like timeouts and proxies.
///
/// # Example
/// ```ignore
/// let client = build_http_client(&transport_options)?;
/// ```
pub fn build_http_client(
    transport_options: &TransportOptions<HttpTransport>,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();

    if let Some(timeout) = transport_options.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(proxy_url) = &transport_options.provider.proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }

    builder.build()
}

/// Add extra headers to a request if specified in transport options.
///
/// # Example
/// ```ignore
/// let mut req = client.post(url);
/// req = add_extra_headers(req, &transport_options.provider.extra_headers);
/// ```
pub fn add_extra_headers(
    mut request: RequestBuilder,
    extra_headers: &Option<HashMap<String, String>>,
) -> RequestBuilder {
    if let Some(headers) = extra_headers {
        for (key, value) in headers {
            request = request.header(key, value);
        }
    }
    request
}

/// Default transport: authenticated JSON POSTs against a base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpClient {
    /// Create a transport for `base_url`. Credentials are required.
    pub fn new(
        base_url: impl Into<String>,
        transport_options: &TransportOptions<HttpTransport>,
    ) -> Result<Self, ClientError> {
        let credentials = transport_options
            .provider
            .credentials
            .clone()
            .ok_or_else(|| ClientError::Config("Credentials are required".to_string()))?;

        let http = build_http_client(transport_options)
            .map_err(|e| ClientError::Config(format!("Invalid HTTP configuration: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            extra_headers: transport_options.provider.extra_headers.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let (username, password) = self.credentials.basic_auth();

        let mut req = self
            .http
            .request(request.method, &url)
            .basic_auth(username, Some(password))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        req = add_extra_headers(req, &self.extra_headers);

        debug!(url = %url, bytes = request.body.len(), "sending request");

        let response = req.body(request.body).send().await.map_err(into_transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(into_transport_error)?;

        debug!(status, bytes = body.len(), "received response");

        Ok(TransportResponse { status, body })
    }
}

fn into_transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Http(err)
    }
}
