//! Part-of-speech and dependency label vocabularies.
//!
//! Both vocabularies follow Universal Dependencies conventions: pos tags are
//! a closed set (`NOUN`, `PROPN`, `PRON`, ...), dependency labels cover the
//! common relations with an `Other` escape hatch for anything a backend
//! emits beyond them. Labels round-trip through their standard string forms,
//! which is also how they appear on the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Part-of-speech tag (closed UD vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PosTag {
    /// Adjective
    Adj,
    /// Adposition (preposition/postposition)
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Common noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Verb
    Verb,
    /// Anything else
    X,
}

impl PosTag {
    /// Convert to the standard UD label string.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
        }
    }

    /// Parse from a label string. Unknown labels map to [`PosTag::X`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "ADJ" => PosTag::Adj,
            "ADP" => PosTag::Adp,
            "ADV" => PosTag::Adv,
            "AUX" => PosTag::Aux,
            "CCONJ" | "CONJ" => PosTag::Cconj,
            "DET" => PosTag::Det,
            "INTJ" => PosTag::Intj,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Num,
            "PART" => PosTag::Part,
            "PRON" => PosTag::Pron,
            "PROPN" => PosTag::Propn,
            "PUNCT" => PosTag::Punct,
            "SCONJ" => PosTag::Sconj,
            "VERB" => PosTag::Verb,
            _ => PosTag::X,
        }
    }

    /// Is this a nominal tag (common or proper noun)?
    #[must_use]
    pub const fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl Serialize for PosTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for PosTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PosTag::from_label(&s))
    }
}

/// Dependency label: grammatical role of a token relative to its head.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DepLabel {
    /// Nominal subject
    Nsubj,
    /// Direct object
    Dobj,
    /// Object of a preposition
    Pobj,
    /// Possessive modifier
    Poss,
    /// Determiner
    Det,
    /// Prepositional modifier
    Prep,
    /// Adjectival modifier
    Amod,
    /// Adverbial modifier
    Advmod,
    /// Auxiliary
    Aux,
    /// Coordinating conjunction
    Cc,
    /// Sentence root
    Root,
    /// Punctuation
    Punct,
    /// Unspecified dependent
    Dep,
    /// Any other label
    Other(String),
}

impl DepLabel {
    /// Convert to the standard label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            DepLabel::Nsubj => "nsubj",
            DepLabel::Dobj => "dobj",
            DepLabel::Pobj => "pobj",
            DepLabel::Poss => "poss",
            DepLabel::Det => "det",
            DepLabel::Prep => "prep",
            DepLabel::Amod => "amod",
            DepLabel::Advmod => "advmod",
            DepLabel::Aux => "aux",
            DepLabel::Cc => "cc",
            DepLabel::Root => "ROOT",
            DepLabel::Punct => "punct",
            DepLabel::Dep => "dep",
            DepLabel::Other(s) => s.as_str(),
        }
    }

    /// Parse from a label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "nsubj" => DepLabel::Nsubj,
            "dobj" | "obj" => DepLabel::Dobj,
            "pobj" => DepLabel::Pobj,
            "poss" => DepLabel::Poss,
            "det" => DepLabel::Det,
            "prep" => DepLabel::Prep,
            "amod" => DepLabel::Amod,
            "advmod" => DepLabel::Advmod,
            "aux" => DepLabel::Aux,
            "cc" => DepLabel::Cc,
            "ROOT" | "root" => DepLabel::Root,
            "punct" => DepLabel::Punct,
            "dep" => DepLabel::Dep,
            other => DepLabel::Other(other.to_string()),
        }
    }

    /// Is this a subject or object label?
    #[must_use]
    pub const fn is_core_argument(&self) -> bool {
        matches!(self, DepLabel::Nsubj | DepLabel::Dobj)
    }
}

impl std::fmt::Display for DepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl Serialize for DepLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for DepLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DepLabel::from_label(&s))
    }
}
