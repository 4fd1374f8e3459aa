//! # centering
//!
//! Per-sentence centering analysis for English text.
//!
//! - **Annotation**: Rule-based pipeline (segmentation, tokenization, pos
//!   tagging, dependency labeling, heuristic NER)
//! - **Centering**: Backward-looking centers (pronoun → antecedent) and
//!   forward-looking centers (salient mentions)
//! - **Transport**: A thin axum HTTP shell (`POST /parse`, `GET /health`)
//!
//! ## Quick Start
//!
//! ```rust
//! use centering::annotate::{Annotator, RuleAnnotator};
//! use centering::record;
//!
//! let annotator = RuleAnnotator::new();
//! let records = record::analyze(&annotator, "John said he left.").unwrap();
//! assert_eq!(records[0].c_b[0].pronoun, "he");
//! assert_eq!(records[0].c_b[0].antecedent, "John");
//! ```
//!
//! ## Pipeline
//!
//! One request flows through three layers:
//!
//! 1. An [`annotate::Annotator`] turns raw text into a
//!    [`document::Document`]: sentences of tokens with pos tags, dependency
//!    labels, and entity mentions.
//! 2. [`centering`] computes the per-sentence center sets from that
//!    document, statelessly.
//! 3. [`record`] flattens everything into the JSON wire shape the
//!    [`server`] returns.
//!
//! The built-in [`annotate::RuleAnnotator`] needs no model files and no
//! I/O; backends wrapping a real parser can implement the same trait.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every request is analyzed from scratch; nothing carries
//!   over between calls
//! - **Trait-based**: the analysis core only sees the `Annotator` trait
//! - **Deterministic**: same text, same backend, same output

#![warn(missing_docs)]

pub mod annotate;
pub mod centering;
pub mod document;
mod error;
pub mod record;
pub mod server;
pub mod tag;

pub use annotate::{Annotator, MockAnnotator, RuleAnnotator};
pub use centering::{backward_centers, forward_centers, AntecedentMap, ForwardCenter, UNRESOLVED};
pub use document::{Document, Entity, EntityLabel, Sentence, Token};
pub use error::{Error, Result};
pub use record::{analyze, SentenceRecord};
pub use tag::{DepLabel, PosTag};
