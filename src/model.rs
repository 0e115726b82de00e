//! Typed analysis results and the decoder that produces them.
//!
//! Every field is optional. A feature that was not requested, or for which
//! the service found nothing, decodes to `None` rather than to an empty or
//! zero value.

use serde::{Deserialize, Serialize};

use crate::client::DecodeError;

/// Decode a raw response body into an [`AnalysisResult`].
///
/// Decoding is all-or-nothing: invalid JSON yields
/// [`DecodeErrorKind::MalformedBody`](crate::client::DecodeErrorKind::MalformedBody),
/// a value of the wrong type anywhere in the tree yields
/// [`DecodeErrorKind::UnexpectedShape`](crate::client::DecodeErrorKind::UnexpectedShape).
pub fn decode(body: &[u8]) -> Result<AnalysisResult, DecodeError> {
    serde_json::from_slice(body).map_err(DecodeError::from)
}

/// Top-level response of the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Language of the analyzed content (ISO 639-1)
    pub language: Option<String>,

    /// Normalized input, present when `return_analyzed_text` was set
    pub analyzed_text: Option<String>,

    /// URL that was fetched, for URL input
    pub retrieved_url: Option<String>,

    pub usage: Option<Usage>,

    pub concepts: Option<Vec<Concept>>,
    pub emotion: Option<EmotionResult>,
    pub entities: Option<Vec<Entity>>,
    pub keywords: Option<Vec<Keyword>>,
    pub metadata: Option<Metadata>,
    pub relations: Option<Vec<Relation>>,
    pub semantic_roles: Option<Vec<SemanticRole>>,
    pub sentiment: Option<SentimentResult>,
    pub categories: Option<Vec<Category>>,
}

impl AnalysisResult {
    /// Parse a response body. Same as [`decode`].
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        decode(body)
    }
}

/// Billing information returned with each response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// Number of features used
    pub features: Option<u64>,
    pub text_characters: Option<u64>,
    pub text_units: Option<u64>,
}

/// A high-level concept, not necessarily mentioned verbatim in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(rename = "text", alias = "name")]
    pub name: Option<String>,
    pub relevance: Option<f64>,
    /// Link to the concept's DBpedia resource
    pub dbpedia_resource: Option<String>,
}

/// Sentiment attached to an entity or keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSentiment {
    /// Score from -1 (negative) to 1 (positive)
    pub score: Option<f64>,
    pub label: Option<String>,
}

/// Scores for the five emotions, each from 0 to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub document: Option<DocumentEmotion>,
    pub targets: Option<Vec<TargetedEmotion>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEmotion {
    pub emotion: Option<EmotionScores>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetedEmotion {
    pub text: Option<String>,
    pub emotion: Option<EmotionScores>,
}

/// A named entity (person, company, location...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub text: Option<String>,
    pub relevance: Option<f64>,
    /// Number of mentions in the input
    pub count: Option<u64>,
    pub sentiment: Option<FeatureSentiment>,
    pub emotion: Option<EmotionScores>,
    pub disambiguation: Option<Disambiguation>,
}

/// Linked-data information for an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disambiguation {
    pub name: Option<String>,
    pub dbpedia_resource: Option<String>,
    pub subtype: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: Option<String>,
    pub relevance: Option<f64>,
    pub sentiment: Option<FeatureSentiment>,
    pub emotion: Option<EmotionScores>,
}

/// Document metadata, available for HTML and URL input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub publication_date: Option<String>,
    pub authors: Option<Vec<Author>>,
    pub image: Option<String>,
    pub feeds: Option<Vec<Feed>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
}

/// RSS or Atom feed found in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub link: Option<String>,
}

/// A relation between two or more entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub score: Option<f64>,
    pub sentence: Option<String>,
    #[serde(rename = "type")]
    pub relation_type: Option<String>,
    pub arguments: Option<Vec<RelationArgument>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationArgument {
    pub text: Option<String>,
    pub entities: Option<Vec<RelationEntity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEntity {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
}

/// Subject/action/object breakdown of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticRole {
    pub sentence: Option<String>,
    pub subject: Option<RoleArgument>,
    pub action: Option<RoleAction>,
    pub object: Option<RoleArgument>,
}

/// Subject or object of a semantic role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleArgument {
    pub text: Option<String>,
    pub entities: Option<Vec<RoleEntity>>,
    pub keywords: Option<Vec<RoleKeyword>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleEntity {
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleKeyword {
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAction {
    pub text: Option<String>,
    /// Lemmatized form of the action
    pub normalized: Option<String>,
    pub verb: Option<RoleVerb>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleVerb {
    pub text: Option<String>,
    pub tense: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub document: Option<DocumentSentiment>,
    pub targets: Option<Vec<TargetedSentiment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSentiment {
    pub score: Option<f64>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetedSentiment {
    pub text: Option<String>,
    pub score: Option<f64>,
}

/// A node in the five-level category taxonomy, e.g. `/art and entertainment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: Option<String>,
    pub score: Option<f64>,
}
