//! Annotated document model: tokens, sentences, entity mentions.
//!
//! These types are produced by an [`Annotator`](crate::annotate::Annotator)
//! and read-only to the analysis core. A `Document` lives for one request.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tag::{DepLabel, PosTag};

/// Named entity label.
///
/// Standard labels following OntoNotes conventions, with an escape hatch for
/// anything else a backend produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EntityLabel {
    /// Person name (PERSON)
    Person,
    /// Organization (ORG)
    Org,
    /// Geo-political entity: countries, cities, states (GPE)
    Gpe,
    /// Date expression (DATE)
    Date,
    /// Monetary value (MONEY)
    Money,
    /// Percentage (PERCENT)
    Percent,
    /// Other entity label
    Other(String),
}

impl EntityLabel {
    /// Convert to the standard label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Date => "DATE",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Other(s) => s.as_str(),
        }
    }

    /// Parse from a label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "PERSON" | "PER" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" => EntityLabel::Org,
            "GPE" | "LOC" | "LOCATION" => EntityLabel::Gpe,
            "DATE" | "TIME" => EntityLabel::Date,
            "MONEY" => EntityLabel::Money,
            "PERCENT" => EntityLabel::Percent,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl Serialize for EntityLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for EntityLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EntityLabel::from_label(&s))
    }
}

/// A single annotated token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Dependency label
    pub dep: DepLabel,
    /// Document-relative position (for ordering comparisons)
    pub doc_index: usize,
    /// Start byte offset in the document text
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Entity label when this token is part of a named entity mention
    pub ent_type: Option<EntityLabel>,
}

impl Token {
    /// Create a token with no span or entity information.
    #[must_use]
    pub fn new(text: impl Into<String>, pos: PosTag, dep: DepLabel, doc_index: usize) -> Self {
        Self {
            text: text.into(),
            pos,
            dep,
            doc_index,
            start: 0,
            end: 0,
            ent_type: None,
        }
    }

    /// Set the byte span.
    #[must_use]
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Mark this token as part of a named entity.
    #[must_use]
    pub fn with_entity(mut self, label: EntityLabel) -> Self {
        self.ent_type = Some(label);
        self
    }

    /// Is this token a pronoun?
    #[must_use]
    pub fn is_pronoun(&self) -> bool {
        self.pos == PosTag::Pron
    }
}

/// A named entity mention within a sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Mention text
    pub text: String,
    /// Entity label
    pub label: EntityLabel,
    /// Start byte offset in the document text
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Entity {
    /// Create a new entity mention.
    #[must_use]
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }
}

/// An annotated sentence: ordered tokens plus entity mentions.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the document, 0-based
    pub index: usize,
    /// Sentence text
    pub text: String,
    /// Start byte offset in the document text
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Tokens in order
    pub tokens: Vec<Token>,
    /// Entity mentions in order
    pub entities: Vec<Entity>,
}

impl Sentence {
    /// Create an empty sentence.
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            start: 0,
            end: 0,
            tokens: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Set the byte span.
    #[must_use]
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the tokens.
    #[must_use]
    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Set the entity mentions.
    #[must_use]
    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.entities = entities;
        self
    }

    /// Iterate over pronoun tokens.
    pub fn pronouns(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_pronoun())
    }
}

/// A fully annotated document: the unit of one analysis request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// The raw input text
    pub text: String,
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Create a document from already-annotated sentences.
    #[must_use]
    pub fn new(text: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            text: text.into(),
            sentences,
        }
    }

    /// Number of sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Is the document empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Get a sentence by index.
    #[must_use]
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Sentences strictly before `index`, in document order.
    #[must_use]
    pub fn sentences_before(&self, index: usize) -> &[Sentence] {
        &self.sentences[..index.min(self.sentences.len())]
    }
}
