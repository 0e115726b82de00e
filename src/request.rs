//! Analysis request construction and wire serialization.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde::Serialize;

use crate::client::{ClientError, InvalidRequestError, InvalidRequestKind};
use crate::features::Features;

/// Where HTML input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    /// Markup held in memory.
    Markup(String),
    /// Raw document bytes, expected to be UTF-8.
    Bytes(Bytes),
    /// A document on disk. The service client reads it before sending;
    /// the request itself never touches the filesystem.
    File(PathBuf),
}

/// The single piece of content a request analyzes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Html(HtmlSource),
    Url(String),
}

impl Input {
    /// Wire key this input is sent under.
    pub fn key(&self) -> &'static str {
        match self {
            Input::Text(_) => "text",
            Input::Html(_) => "html",
            Input::Url(_) => "url",
        }
    }
}

/// A validated analysis request. Built once through
/// [`AnalysisRequestBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    input: Input,
    features: Features,
    return_analyzed_text: Option<bool>,
    language: Option<String>,
    clean: Option<bool>,
    xpath: Option<String>,
    fallback_to_raw: Option<bool>,
    limit_text_characters: Option<u32>,
}

impl AnalysisRequest {
    /// Start a new request.
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn return_analyzed_text(&self) -> bool {
        self.return_analyzed_text.unwrap_or(false)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Path of an HTML document that still has to be read, if any.
    pub fn html_file(&self) -> Option<&Path> {
        match &self.input {
            Input::Html(HtmlSource::File(path)) => Some(path.as_path()),
            _ => None,
        }
    }

    /// Copy of this request with HTML input replaced by loaded document bytes.
    pub fn with_html_contents(&self, contents: Bytes) -> Self {
        Self {
            input: Input::Html(HtmlSource::Bytes(contents)),
            ..self.clone()
        }
    }

    /// Serialize to the JSON body the service expects.
    ///
    /// Fails if the HTML input is an unread file reference or is not UTF-8.
    pub fn to_payload(&self) -> Result<Bytes, ClientError> {
        let mut payload = Payload {
            text: None,
            html: None,
            url: None,
            features: &self.features,
            language: self.language.as_deref(),
            return_analyzed_text: self.return_analyzed_text,
            clean: self.clean,
            xpath: self.xpath.as_deref(),
            fallback_to_raw: self.fallback_to_raw,
            limit_text_characters: self.limit_text_characters,
        };

        match &self.input {
            Input::Text(text) => payload.text = Some(text.as_str()),
            Input::Url(url) => payload.url = Some(url.as_str()),
            Input::Html(HtmlSource::Markup(markup)) => payload.html = Some(markup.as_str()),
            Input::Html(HtmlSource::Bytes(bytes)) => {
                let markup = std::str::from_utf8(bytes).map_err(|e| {
                    InvalidRequestError::new(
                        InvalidRequestKind::InvalidEncoding,
                        format!("HTML input is not valid UTF-8: {}", e),
                    )
                })?;
                payload.html = Some(markup);
            }
            Input::Html(HtmlSource::File(path)) => {
                return Err(InvalidRequestError::new(
                    InvalidRequestKind::UnresolvedDocument,
                    format!("HTML document {} has not been loaded", path.display()),
                )
                .into());
            }
        }

        let body = serde_json::to_vec(&payload).map_err(ClientError::Serialize)?;
        Ok(Bytes::from(body))
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    features: &'a Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_analyzed_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xpath: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_to_raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_text_characters: Option<u32>,
}

/// Collects request parameters and checks them on [`build`](Self::build).
///
/// # Example
/// ```rust
/// use nlu::features::{ConceptsOptions, Features};
/// use nlu::request::AnalysisRequest;
///
/// let request = AnalysisRequest::builder()
///     .text("In 2009, Elliot Turner launched AlchemyAPI.")
///     .features(Features::default().with_concepts(ConceptsOptions::default().with_limit(5)))
///     .return_analyzed_text(true)
///     .build()
///     .unwrap();
/// assert!(request.return_analyzed_text());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequestBuilder {
    text: Option<String>,
    html: Option<HtmlSource>,
    url: Option<String>,
    features: Features,
    return_analyzed_text: Option<bool>,
    language: Option<String>,
    clean: Option<bool>,
    xpath: Option<String>,
    fallback_to_raw: Option<bool>,
    limit_text_characters: Option<u32>,
}

impl AnalysisRequestBuilder {
    /// Analyze plain text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Analyze HTML markup.
    pub fn html(mut self, markup: impl Into<String>) -> Self {
        self.html = Some(HtmlSource::Markup(markup.into()));
        self
    }

    /// Analyze an HTML document given as raw bytes.
    pub fn html_bytes(mut self, bytes: impl Into<Bytes>) -> Self {
        self.html = Some(HtmlSource::Bytes(bytes.into()));
        self
    }

    /// Analyze an HTML document stored on disk.
    pub fn html_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.html = Some(HtmlSource::File(path.into()));
        self
    }

    /// Analyze the page at a public URL. The service fetches it.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn return_analyzed_text(mut self, value: bool) -> Self {
        self.return_analyzed_text = Some(value);
        self
    }

    /// ISO 639-1 code overriding language detection.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Remove boilerplate from HTML and URL input.
    pub fn clean(mut self, value: bool) -> Self {
        self.clean = Some(value);
        self
    }

    /// Restrict HTML and URL input to the nodes matching an XPath query.
    pub fn xpath(mut self, query: impl Into<String>) -> Self {
        self.xpath = Some(query.into());
        self
    }

    /// Use raw HTML content if text cleaning fails.
    pub fn fallback_to_raw(mut self, value: bool) -> Self {
        self.fallback_to_raw = Some(value);
        self
    }

    /// Cap the number of characters the service will process.
    pub fn limit_text_characters(mut self, limit: u32) -> Self {
        self.limit_text_characters = Some(limit);
        self
    }

    /// Validate and produce the request.
    ///
    /// Exactly one of text, HTML or URL must have been supplied.
    pub fn build(self) -> Result<AnalysisRequest, InvalidRequestError> {
        let mut inputs: Vec<Input> = Vec::with_capacity(1);
        if let Some(text) = self.text {
            inputs.push(Input::Text(text));
        }
        if let Some(html) = self.html {
            inputs.push(Input::Html(html));
        }
        if let Some(url) = self.url {
            inputs.push(Input::Url(url));
        }

        let supplied = inputs.len();
        let input = match inputs.pop() {
            Some(input) if supplied == 1 => input,
            _ => {
                return Err(InvalidRequestError::new(
                    InvalidRequestKind::AmbiguousInput,
                    format!(
                        "exactly one of text, html or url is required, got {}",
                        supplied
                    ),
                ))
            }
        };

        Ok(AnalysisRequest {
            input,
            features: self.features,
            return_analyzed_text: self.return_analyzed_text,
            language: self.language,
            clean: self.clean,
            xpath: self.xpath,
            fallback_to_raw: self.fallback_to_raw,
            limit_text_characters: self.limit_text_characters,
        })
    }
}
