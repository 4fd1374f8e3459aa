//! Annotation backends: raw text → annotated [`Document`].
//!
//! The analysis core consumes annotation through the [`Annotator`] trait and
//! treats the engine behind it as a black box. The contract: synchronous,
//! deterministic for a given backend, side-effect free, returning sentences
//! in document order with tokens carrying pos tags, dependency labels,
//! document-relative positions, and entity labels.
//!
//! [`RuleAnnotator`] is the built-in backend: a layered pipeline of
//! heuristics (segmentation → tokenization → pos tagging → dependency
//! labeling → entity extraction) with no model files and no I/O. It is
//! intentionally modest: good enough to drive centering analysis on plain
//! English prose, not a general-purpose parser. Backends wrapping a real
//! parser can implement the same trait.

mod deps;
mod ner;
mod pos;
mod segment;
mod tokenize;

use crate::document::{Document, Sentence, Token};
use crate::error::Result;

/// Trait for annotation backends.
///
/// Implementations must be safe to share read-only across threads; one
/// instance typically lives for the whole process and serves every request.
pub trait Annotator: Send + Sync {
    /// Annotate text into a document of sentences.
    fn annotate(&self, text: &str) -> Result<Document>;

    /// Get the backend name/identifier.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Get a description of the backend.
    fn description(&self) -> &'static str {
        "Unknown annotation backend"
    }
}

/// Rule-based annotation backend: lexicons, word shape, and positional
/// heuristics. Always available, no external resources.
#[derive(Debug, Clone, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    /// Create a new rule-based annotator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Document> {
        let entities = ner::extract(text);
        let mut sentences = Vec::new();
        let mut doc_index = 0;

        for (index, (s_start, s_end)) in segment::split_sentences(text).into_iter().enumerate() {
            let sentence_text = &text[s_start..s_end];
            let raw = tokenize::tokenize(sentence_text);
            let tags = pos::tag(&raw);
            let tagged: Vec<(&str, _)> = raw
                .iter()
                .zip(tags.iter())
                .map(|(t, p)| (t.text, *p))
                .collect();
            let deps = deps::label(&tagged);

            let tokens: Vec<Token> = raw
                .iter()
                .zip(tags.iter().zip(deps.into_iter()))
                .enumerate()
                .map(|(i, (r, (pos, dep)))| {
                    let start = s_start + r.start;
                    let end = s_start + r.end;
                    let mut token =
                        Token::new(r.text, *pos, dep, doc_index + i).with_span(start, end);
                    if let Some(mention) = entities
                        .iter()
                        .find(|e| start < e.end && e.start < end)
                    {
                        token = token.with_entity(mention.label.clone());
                    }
                    token
                })
                .collect();
            doc_index += tokens.len();

            let sentence_entities = entities
                .iter()
                .filter(|e| e.start >= s_start && e.end <= s_end)
                .cloned()
                .collect();

            sentences.push(
                Sentence::new(index, sentence_text)
                    .with_span(s_start, s_end)
                    .with_tokens(tokens)
                    .with_entities(sentence_entities),
            );
        }

        Ok(Document::new(text, sentences))
    }

    fn name(&self) -> &'static str {
        "rule"
    }

    fn description(&self) -> &'static str {
        "Rule-based annotation (lexicon pos tagging, positional dependencies, heuristic NER)"
    }
}

/// A mock annotation backend for testing.
///
/// Returns a preset document regardless of input, so tests can exercise the
/// analysis and transport layers with hand-built annotations.
#[derive(Debug, Clone, Default)]
pub struct MockAnnotator {
    document: Document,
}

impl MockAnnotator {
    /// Create a mock that returns an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document to return.
    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }
}

impl Annotator for MockAnnotator {
    fn annotate(&self, _text: &str) -> Result<Document> {
        Ok(self.document.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn description(&self) -> &'static str {
        "Mock annotation backend for testing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{DepLabel, PosTag};

    #[test]
    fn test_pipeline_simple_sentence() {
        let doc = RuleAnnotator::new().annotate("The cat chased the mouse.").unwrap();
        assert_eq!(doc.len(), 1);

        let sent = &doc.sentences[0];
        let texts: Vec<_> = sent.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["The", "cat", "chased", "the", "mouse", "."]);
        assert_eq!(sent.tokens[1].pos, PosTag::Noun);
        assert_eq!(sent.tokens[1].dep, DepLabel::Nsubj);
        assert_eq!(sent.tokens[2].dep, DepLabel::Root);
        assert_eq!(sent.tokens[4].dep, DepLabel::Dobj);
    }

    #[test]
    fn test_doc_indices_are_document_relative() {
        let doc = RuleAnnotator::new()
            .annotate("Mary arrived. She smiled.")
            .unwrap();
        assert_eq!(doc.len(), 2);

        let all: Vec<usize> = doc
            .sentences
            .iter()
            .flat_map(|s| s.tokens.iter().map(|t| t.doc_index))
            .collect();
        let expected: Vec<usize> = (0..all.len()).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_entities_attached_to_sentence_and_tokens() {
        let doc = RuleAnnotator::new().annotate("Mary lives in Paris.").unwrap();
        let sent = &doc.sentences[0];

        assert!(sent.entities.iter().any(|e| e.text == "Mary"));
        assert!(sent.entities.iter().any(|e| e.text == "Paris"));

        let mary = sent.tokens.iter().find(|t| t.text == "Mary").unwrap();
        assert!(mary.ent_type.is_some());
        let lives = sent.tokens.iter().find(|t| t.text == "lives").unwrap();
        assert!(lives.ent_type.is_none());
    }

    #[test]
    fn test_empty_text_yields_empty_document() {
        let doc = RuleAnnotator::new().annotate("").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let annotator = RuleAnnotator::new();
        let text = "John said he left. Mary smiled.";
        assert_eq!(
            annotator.annotate(text).unwrap(),
            annotator.annotate(text).unwrap()
        );
    }

    #[test]
    fn test_mock_returns_preset() {
        let preset = Document::new("x", vec![Sentence::new(0, "x")]);
        let mock = MockAnnotator::new().with_document(preset.clone());
        assert_eq!(mock.annotate("anything").unwrap(), preset);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn annotate_never_panics(text in ".{0,300}") {
            let _ = RuleAnnotator::new().annotate(&text);
        }

        #[test]
        fn token_spans_nest_in_sentence_spans(text in ".{0,300}") {
            let doc = RuleAnnotator::new().annotate(&text).unwrap();
            for sent in &doc.sentences {
                for token in &sent.tokens {
                    prop_assert!(token.start >= sent.start);
                    prop_assert!(token.end <= sent.end);
                    prop_assert_eq!(&text[token.start..token.end], token.text.as_str());
                }
            }
        }

        #[test]
        fn doc_indices_strictly_increase(text in ".{0,300}") {
            let doc = RuleAnnotator::new().annotate(&text).unwrap();
            let indices: Vec<usize> = doc
                .sentences
                .iter()
                .flat_map(|s| s.tokens.iter().map(|t| t.doc_index))
                .collect();
            for pair in indices.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }
}
