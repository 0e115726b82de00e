//! Per-feature analysis options.
//!
//! A feature is enabled by the mere presence of its options object in the
//! request's `features` map; every field inside an options object is
//! optional and omitted from the payload when unset.

use serde::{Deserialize, Serialize};

/// Options for concept tagging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptsOptions {
    /// Maximum number of concepts to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ConceptsOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Options for emotion analysis, document-wide and for target phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionOptions {
    /// Set to false to skip document-level emotion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,

    /// Phrases to score individually, sent in the given order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl EmotionOptions {
    pub fn with_document(mut self, document: bool) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = Some(targets.into_iter().map(Into::into).collect());
        self
    }
}

/// Options for entity extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitiesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Score sentiment for every detected entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,

    /// Score emotion for every detected entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,

    /// Custom model ID deployed on the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl EntitiesOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sentiment(mut self, sentiment: bool) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn with_emotion(mut self, emotion: bool) -> Self {
        self.emotion = Some(emotion);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Options for keyword extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<bool>,
}

impl KeywordsOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sentiment(mut self, sentiment: bool) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn with_emotion(mut self, emotion: bool) -> Self {
        self.emotion = Some(emotion);
        self
    }
}

/// Metadata extraction takes no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataOptions {}

/// Options for relation extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationsOptions {
    /// Custom model ID deployed on the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl RelationsOptions {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Options for semantic role (subject/action/object) parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticRolesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return keywords found in each role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<bool>,

    /// Return entities found in each role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<bool>,

    /// Only return roles whose subject or object contains an entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_entities: Option<bool>,
}

impl SemanticRolesOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_keywords(mut self, keywords: bool) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_entities(mut self, entities: bool) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_require_entities(mut self, require_entities: bool) -> Self {
        self.require_entities = Some(require_entities);
        self
    }
}

/// Options for sentiment analysis, document-wide and for target phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl SentimentOptions {
    pub fn with_document(mut self, document: bool) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = Some(targets.into_iter().map(Into::into).collect());
        self
    }
}

/// Category classification takes no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesOptions {}

/// The set of analyses to run. Unset fields are disabled and never reach
/// the wire.
///
/// # Example
/// ```rust
/// use nlu::features::{ConceptsOptions, Features, SentimentOptions};
///
/// let features = Features::default()
///     .with_concepts(ConceptsOptions::default().with_limit(5))
///     .with_sentiment(SentimentOptions::default().with_targets(["traction"]));
/// assert_eq!(features.enabled(), vec!["concepts", "sentiment"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<ConceptsOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntitiesOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<RelationsOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_roles: Option<SemanticRolesOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoriesOptions>,
}

impl Features {
    pub fn with_concepts(mut self, options: ConceptsOptions) -> Self {
        self.concepts = Some(options);
        self
    }

    pub fn with_emotion(mut self, options: EmotionOptions) -> Self {
        self.emotion = Some(options);
        self
    }

    pub fn with_entities(mut self, options: EntitiesOptions) -> Self {
        self.entities = Some(options);
        self
    }

    pub fn with_keywords(mut self, options: KeywordsOptions) -> Self {
        self.keywords = Some(options);
        self
    }

    pub fn with_metadata(mut self, options: MetadataOptions) -> Self {
        self.metadata = Some(options);
        self
    }

    pub fn with_relations(mut self, options: RelationsOptions) -> Self {
        self.relations = Some(options);
        self
    }

    pub fn with_semantic_roles(mut self, options: SemanticRolesOptions) -> Self {
        self.semantic_roles = Some(options);
        self
    }

    pub fn with_sentiment(mut self, options: SentimentOptions) -> Self {
        self.sentiment = Some(options);
        self
    }

    pub fn with_categories(mut self, options: CategoriesOptions) -> Self {
        self.categories = Some(options);
        self
    }

    /// Wire names of the enabled features, in payload order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("concepts", self.concepts.is_some()),
            ("emotion", self.emotion.is_some()),
            ("entities", self.entities.is_some()),
            ("keywords", self.keywords.is_some()),
            ("metadata", self.metadata.is_some()),
            ("relations", self.relations.is_some()),
            ("semantic_roles", self.semantic_roles.is_some()),
            ("sentiment", self.sentiment.is_some()),
            ("categories", self.categories.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value
            .as_object()
            .expect("features serialize to an object")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_disabled_features_are_omitted() {
        let features = Features::default();
        assert_eq!(serde_json::to_value(&features).unwrap(), json!({}));
        assert!(features.is_empty());
    }

    #[test]
    fn test_payload_keys_match_enabled_features() {
        let features = Features::default()
            .with_metadata(MetadataOptions::default())
            .with_semantic_roles(SemanticRolesOptions::default())
            .with_categories(CategoriesOptions::default());

        let value = serde_json::to_value(&features).unwrap();
        let mut expected: Vec<String> = features.enabled().iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(keys(&value), expected);
        assert_eq!(keys(&value), vec!["categories", "metadata", "semantic_roles"]);
    }

    #[test]
    fn test_every_feature_enabled() {
        let features = Features::default()
            .with_concepts(ConceptsOptions::default())
            .with_emotion(EmotionOptions::default())
            .with_entities(EntitiesOptions::default())
            .with_keywords(KeywordsOptions::default())
            .with_metadata(MetadataOptions::default())
            .with_relations(RelationsOptions::default())
            .with_semantic_roles(SemanticRolesOptions::default())
            .with_sentiment(SentimentOptions::default())
            .with_categories(CategoriesOptions::default());

        assert_eq!(features.enabled().len(), 9);
        assert_eq!(keys(&serde_json::to_value(&features).unwrap()).len(), 9);
    }

    #[test]
    fn test_parameterless_options_serialize_as_empty_objects() {
        let features = Features::default()
            .with_metadata(MetadataOptions::default())
            .with_relations(RelationsOptions::default());

        assert_eq!(
            serde_json::to_value(&features).unwrap(),
            json!({ "metadata": {}, "relations": {} })
        );
    }

    #[test]
    fn test_option_fields_serialize_when_set() {
        let features = Features::default()
            .with_entities(EntitiesOptions::default().with_limit(2).with_sentiment(true))
            .with_semantic_roles(
                SemanticRolesOptions::default()
                    .with_limit(7)
                    .with_keywords(true)
                    .with_entities(true)
                    .with_require_entities(false),
            );

        assert_eq!(
            serde_json::to_value(&features).unwrap(),
            json!({
                "entities": { "limit": 2, "sentiment": true },
                "semantic_roles": {
                    "limit": 7,
                    "keywords": true,
                    "entities": true,
                    "require_entities": false
                }
            })
        );
    }

    #[test]
    fn test_targets_keep_order_and_duplicates() {
        let options = EmotionOptions::default()
            .with_targets(["media", "democracy", "media", "economies"]);

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "targets": ["media", "democracy", "media", "economies"] })
        );
    }

    #[test]
    fn test_sentiment_document_and_targets() {
        let options = SentimentOptions::default()
            .with_document(true)
            .with_targets(["Elliot Turner", "traction"]);

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "document": true, "targets": ["Elliot Turner", "traction"] })
        );
    }
}
