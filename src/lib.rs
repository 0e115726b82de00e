//! # nlu - Natural Language Understanding client
//!
//! A small, pragmatic Rust client for a hosted text-analysis service. It
//! builds analyze requests, sends them over HTTP and decodes the JSON
//! response into typed results. All language understanding happens on the
//! server.
//!
//! ## Features
//! - Async-first, tokio compatible
//! - Nine independently configurable analyses: concepts, emotion, entities,
//!   keywords, metadata, relations, semantic roles, sentiment, categories
//! - Text, HTML (markup, bytes or file) and URL input, exactly one per request
//! - Every result field is optional; missing data is `None`, never zero
//! - Pluggable transport via the [`Transport`] trait
//!
//! ## Architecture
//!
//! - **[`AnalysisRequest`]**: validated request, built with
//!   [`AnalysisRequestBuilder`](request::AnalysisRequestBuilder)
//! - **[`Features`]**: per-analysis options; presence enables an analysis
//! - **[`AnalysisResult`]**: decoded response tree
//! - **[`NaturalLanguageUnderstanding`]**: sends requests through a transport
//!
//! ## Example
//! ```no_run
//! use nlu::features::{Features, SentimentOptions};
//! use nlu::options::{Credentials, HttpTransport, ServiceOptions, TransportOptions};
//! use nlu::{AnalysisRequest, NaturalLanguageUnderstanding};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = NaturalLanguageUnderstanding::new(
//!         ServiceOptions::default(),
//!         TransportOptions::new(HttpTransport::new(Credentials::basic("username", "password"))),
//!     )?;
//!
//!     let request = AnalysisRequest::builder()
//!         .text("In 2009, Elliot Turner launched AlchemyAPI and got immediate traction.")
//!         .features(Features::default().with_sentiment(
//!             SentimentOptions::default().with_targets(["Elliot Turner", "traction"]),
//!         ))
//!         .build()?;
//!
//!     let result = service.analyze(&request).await?;
//!     println!("{:?}", result.sentiment);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod features;
pub mod http;
pub mod model;
pub mod options;
pub mod request;
pub mod service;

// Re-exports for convenience
pub use client::{
    ClientError, DecodeError, DecodeErrorKind, InvalidRequestError, InvalidRequestKind, Transport,
    TransportError,
};
pub use features::Features;
pub use model::{decode, AnalysisResult};
pub use request::AnalysisRequest;
pub use service::NaturalLanguageUnderstanding;
