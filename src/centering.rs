//! Centering analysis: backward- and forward-looking centers.
//!
//! This is the heart of the crate. For each sentence of an annotated
//! [`Document`], two independent center sets are computed:
//!
//! - **Backward-looking centers** ([`backward_centers`]): for every pronoun,
//!   the most likely antecedent. Resolution first looks inside the pronoun's
//!   own sentence (for subject and possessive pronouns), then walks earlier
//!   sentences nearest-first, and finally gives up with [`UNRESOLVED`].
//! - **Forward-looking centers** ([`forward_centers`]): the salient mentions
//!   a sentence introduces (nouns, proper nouns, and anything carrying an
//!   entity label) as candidates for future reference.
//!
//! The analysis is stateless: every call starts from an empty map, nothing
//! carries over between sentences or between calls, and running it twice on
//! the same document yields identical results.

use crate::document::{Document, Sentence, Token};
use crate::tag::{DepLabel, PosTag};

/// Sentinel antecedent for pronouns that could not be resolved.
pub const UNRESOLVED: &str = "Unknown";

/// Per-sentence pronoun → antecedent mapping.
///
/// Keyed by pronoun surface text: if the same surface form occurs twice in a
/// sentence, the later occurrence's resolution overwrites the earlier entry,
/// in place. That collapsing is a deliberate approximation of this analysis,
/// not an accident; callers that need token-level resolutions should resolve
/// per token instead.
///
/// Iteration order is insertion order of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AntecedentMap {
    entries: Vec<(String, String)>,
}

impl AntecedentMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resolution, overwriting any existing entry for the same
    /// pronoun surface text while keeping its original position.
    pub fn insert(&mut self, pronoun: impl Into<String>, antecedent: impl Into<String>) {
        let pronoun = pronoun.into();
        let antecedent = antecedent.into();
        match self.entries.iter_mut().find(|(p, _)| *p == pronoun) {
            Some(entry) => entry.1 = antecedent,
            None => self.entries.push((pronoun, antecedent)),
        }
    }

    /// Look up the antecedent for a pronoun surface text.
    #[must_use]
    pub fn get(&self, pronoun: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == pronoun)
            .map(|(_, a)| a.as_str())
    }

    /// Number of distinct pronoun surface texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the map empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (pronoun, antecedent) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }
}

/// A forward-looking center: a salient mention and its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardCenter {
    /// Mention surface text
    pub text: String,
    /// Entity label when the token is entity-tagged, else its pos label
    pub center_type: String,
}

/// Compute the backward-looking centers for the sentence at `index`.
///
/// The map is built fresh for this sentence; no state is shared with other
/// sentences or earlier calls. Out-of-range indices yield an empty map.
#[must_use]
pub fn backward_centers(doc: &Document, index: usize) -> AntecedentMap {
    let mut map = AntecedentMap::new();
    let Some(sentence) = doc.sentence(index) else {
        return map;
    };

    for pronoun in sentence.pronouns() {
        let antecedent = resolve_pronoun(doc, sentence, pronoun);
        map.insert(&pronoun.text, antecedent);
    }

    map
}

/// Resolve a single pronoun to an antecedent string.
fn resolve_pronoun(doc: &Document, sentence: &Sentence, pronoun: &Token) -> String {
    // Subject and possessive pronouns first try earlier tokens of their own
    // sentence; everything else goes straight to the prior-sentence scan.
    if matches!(pronoun.dep, DepLabel::Poss | DepLabel::Nsubj) {
        if let Some(token) = sentence
            .tokens
            .iter()
            .filter(|t| t.doc_index < pronoun.doc_index)
            .find(|t| is_intra_candidate(t))
        {
            return token.text.clone();
        }
    }

    // Nearest prior sentence with at least one salient token wins; its first
    // such token is the antecedent.
    for prior in doc.sentences_before(sentence.index).iter().rev() {
        if let Some(token) = prior.tokens.iter().find(|t| is_prior_candidate(t)) {
            return token.text.clone();
        }
    }

    UNRESOLVED.to_string()
}

/// Intra-sentential salience test: subjects, direct objects, proper nouns.
fn is_intra_candidate(token: &Token) -> bool {
    token.dep.is_core_argument() || token.pos == PosTag::Propn
}

/// Prior-sentence salience test: nominals and the sentence root.
fn is_prior_candidate(token: &Token) -> bool {
    token.pos.is_nominal() || token.dep == DepLabel::Root
}

/// Extract the forward-looking centers of a sentence.
///
/// A token qualifies when it is a noun or proper noun, or carries an entity
/// label. Emitted in token order; the type is the entity label when present,
/// else the pos label.
#[must_use]
pub fn forward_centers(sentence: &Sentence) -> Vec<ForwardCenter> {
    sentence
        .tokens
        .iter()
        .filter(|t| t.pos.is_nominal() || t.ent_type.is_some())
        .map(|t| ForwardCenter {
            text: t.text.clone(),
            center_type: t
                .ent_type
                .as_ref()
                .map(|l| l.as_label().to_string())
                .unwrap_or_else(|| t.pos.as_label().to_string()),
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_pos() -> impl Strategy<Value = PosTag> {
        prop_oneof![
            Just(PosTag::Noun),
            Just(PosTag::Propn),
            Just(PosTag::Pron),
            Just(PosTag::Verb),
            Just(PosTag::Det),
            Just(PosTag::Punct),
        ]
    }

    fn arb_dep() -> impl Strategy<Value = DepLabel> {
        prop_oneof![
            Just(DepLabel::Nsubj),
            Just(DepLabel::Dobj),
            Just(DepLabel::Poss),
            Just(DepLabel::Root),
            Just(DepLabel::Det),
            Just(DepLabel::Dep),
        ]
    }

    fn arb_document() -> impl Strategy<Value = Document> {
        prop::collection::vec(
            prop::collection::vec(("[a-zA-Z]{1,8}", arb_pos(), arb_dep()), 1..8),
            1..5,
        )
        .prop_map(|sentences| {
            let mut doc_index = 0;
            let sents = sentences
                .into_iter()
                .enumerate()
                .map(|(i, toks)| {
                    let tokens = toks
                        .into_iter()
                        .map(|(text, pos, dep)| {
                            let t = Token::new(text, pos, dep, doc_index);
                            doc_index += 1;
                            t
                        })
                        .collect();
                    Sentence::new(i, "").with_tokens(tokens)
                })
                .collect();
            Document::new("", sents)
        })
    }

    proptest! {
        #[test]
        fn backward_never_panics(doc in arb_document(), idx in 0usize..8) {
            let _ = backward_centers(&doc, idx);
        }

        #[test]
        fn one_entry_per_distinct_pronoun_surface(doc in arb_document()) {
            for i in 0..doc.len() {
                let map = backward_centers(&doc, i);
                let mut surfaces: Vec<&str> = doc.sentences[i]
                    .pronouns()
                    .map(|t| t.text.as_str())
                    .collect();
                surfaces.sort_unstable();
                surfaces.dedup();
                prop_assert_eq!(map.len(), surfaces.len());
            }
        }

        #[test]
        fn analysis_is_idempotent(doc in arb_document()) {
            for i in 0..doc.len() {
                prop_assert_eq!(backward_centers(&doc, i), backward_centers(&doc, i));
                prop_assert_eq!(
                    forward_centers(&doc.sentences[i]),
                    forward_centers(&doc.sentences[i])
                );
            }
        }

        #[test]
        fn forward_centers_preserve_token_order(doc in arb_document()) {
            for sent in &doc.sentences {
                let centers = forward_centers(sent);
                let qualifying: Vec<&str> = sent
                    .tokens
                    .iter()
                    .filter(|t| t.pos.is_nominal() || t.ent_type.is_some())
                    .map(|t| t.text.as_str())
                    .collect();
                let produced: Vec<&str> =
                    centers.iter().map(|c| c.text.as_str()).collect();
                prop_assert_eq!(produced, qualifying);
            }
        }
    }
}
