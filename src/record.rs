//! Wire-format records: the per-sentence analysis payload.
//!
//! These types are the serialization boundary. Everything upstream works
//! with [`Document`] and the centering types; this module flattens them
//! into the JSON shape clients consume: one record per sentence carrying
//! tokens, entity mentions, backward-looking centers, and forward-looking
//! centers.

use serde::{Deserialize, Serialize};

use crate::annotate::Annotator;
use crate::centering;
use crate::document::{Document, EntityLabel};
use crate::error::Result;
use crate::tag::{DepLabel, PosTag};

/// One token on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Surface text
    pub text: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Dependency label
    pub dep: DepLabel,
}

/// One entity mention on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Mention text
    pub text: String,
    /// Entity label
    pub label: EntityLabel,
}

/// One resolved pronoun on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackwardCenterRecord {
    /// Pronoun surface text
    pub pronoun: String,
    /// Resolved antecedent, or the unresolved sentinel
    pub antecedent: String,
}

/// One forward-looking center on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardCenterRecord {
    /// Mention surface text
    pub text: String,
    /// Entity label or pos label
    #[serde(rename = "type")]
    pub center_type: String,
}

/// The full analysis of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Sentence text
    pub text: String,
    /// Tokens in order
    pub tokens: Vec<TokenRecord>,
    /// Entity mentions in order
    pub entities: Vec<EntityRecord>,
    /// Backward-looking centers (pronoun resolutions)
    pub c_b: Vec<BackwardCenterRecord>,
    /// Forward-looking centers (salient mentions)
    pub c_f: Vec<ForwardCenterRecord>,
}

/// Flatten an annotated document into per-sentence analysis records.
#[must_use]
pub fn assemble(doc: &Document) -> Vec<SentenceRecord> {
    doc.sentences
        .iter()
        .map(|sentence| {
            let c_b: Vec<BackwardCenterRecord> = centering::backward_centers(doc, sentence.index)
                .iter()
                .map(|(pronoun, antecedent)| BackwardCenterRecord {
                    pronoun: pronoun.to_string(),
                    antecedent: antecedent.to_string(),
                })
                .collect();
            let c_f: Vec<ForwardCenterRecord> = centering::forward_centers(sentence)
                .into_iter()
                .map(|c| ForwardCenterRecord {
                    text: c.text,
                    center_type: c.center_type,
                })
                .collect();

            tracing::info!(
                sentence = sentence.index,
                tokens = sentence.tokens.len(),
                backward = c_b.len(),
                forward = c_f.len(),
                "analyzed sentence"
            );

            SentenceRecord {
                text: sentence.text.clone(),
                tokens: sentence
                    .tokens
                    .iter()
                    .map(|t| TokenRecord {
                        text: t.text.clone(),
                        pos: t.pos,
                        dep: t.dep.clone(),
                    })
                    .collect(),
                entities: sentence
                    .entities
                    .iter()
                    .map(|e| EntityRecord {
                        text: e.text.clone(),
                        label: e.label.clone(),
                    })
                    .collect(),
                c_b,
                c_f,
            }
        })
        .collect()
}

/// Annotate text and produce its per-sentence analysis records.
///
/// This is the whole pipeline behind one request: annotation, centering
/// analysis, and flattening to the wire shape.
pub fn analyze(annotator: &dyn Annotator, text: &str) -> Result<Vec<SentenceRecord>> {
    let doc = annotator.annotate(text)?;
    Ok(assemble(&doc))
}
