//! Lexicon and word-shape part-of-speech tagging.
//!
//! Each token is tagged independently: closed-class words come from small
//! const lexicons, open-class words fall back to shape rules
//! (capitalization, digits, suffixes) with NOUN as the default. No context
//! window, no learned model. Accuracy is what you would expect from that:
//! good on function words and names, rough on ambiguous open-class words.

use super::tokenize::RawToken;
use crate::tag::PosTag;

/// Pronouns, personal and possessive.
const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
];

/// Determiners, including demonstratives.
const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "another", "both", "all", "either", "neither",
];

/// Auxiliaries and modals.
const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "may", "might", "must", "can", "could",
];

/// Adpositions.
const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "near", "without", "toward", "towards",
];

/// Coordinating conjunctions.
const COORDINATORS: &[&str] = &["and", "but", "or", "nor", "so", "yet"];

/// Subordinating conjunctions.
const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "if", "unless", "since", "whereas", "when",
    "whether", "until",
];

/// Frequent verbs, mostly irregular forms the suffix rules would miss.
const COMMON_VERBS: &[&str] = &[
    "say", "says", "said", "leave", "leaves", "left", "go", "goes", "went", "gone", "come",
    "came", "comes", "see", "sees", "saw", "seen", "meet", "meets", "met", "tell", "tells",
    "told", "give", "gives", "gave", "given", "take", "takes", "took", "taken", "make", "makes",
    "made", "get", "gets", "got", "know", "knows", "knew", "known", "think", "thinks", "thought",
    "find", "finds", "found", "want", "wants", "run", "runs", "ran", "eat", "eats", "ate",
    "read", "reads", "write", "writes", "wrote", "put", "puts", "keep", "keeps", "kept", "let",
    "lets", "begin", "begins", "began", "seem", "seems", "help", "helps", "show", "shows",
    "hear", "hears", "heard", "play", "plays", "move", "moves", "like", "likes", "live",
    "lives", "believe", "believes", "bring", "brings", "brought", "happen", "happens", "pay",
    "pays", "paid", "buy", "buys", "bought", "sell", "sells", "sold", "win", "wins", "won",
    "lose", "loses", "lost", "speak", "speaks", "spoke", "sit", "sits", "sat", "stand",
    "stands", "stood", "fall", "falls", "fell", "grow", "grows", "grew",
];

/// Frequent adjectives.
const COMMON_ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "new", "old", "young", "long", "short", "high", "low",
    "happy", "sad", "quick", "slow", "lazy", "early", "late", "red", "blue", "green", "brown",
    "black", "white", "great", "little", "large", "hot", "cold", "strong", "weak", "full",
    "empty", "same", "different",
];

/// Frequent adverbs that don't end in "-ly".
const COMMON_ADVERBS: &[&str] = &[
    "not", "never", "always", "often", "very", "too", "quite", "here", "there", "now", "then",
    "soon", "already", "just", "still", "again", "also", "almost", "away", "back",
];

/// Tag every token independently.
pub(crate) fn tag(tokens: &[RawToken<'_>]) -> Vec<PosTag> {
    tokens.iter().map(|t| tag_word(t.text)).collect()
}

fn tag_word(text: &str) -> PosTag {
    if !text.chars().any(|c| c.is_alphanumeric()) {
        return PosTag::Punct;
    }
    if text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
    {
        return PosTag::Num;
    }

    let lower = text.to_lowercase();
    let lower = lower.as_str();
    if PRONOUNS.contains(&lower) {
        return PosTag::Pron;
    }
    if DETERMINERS.contains(&lower) {
        return PosTag::Det;
    }
    if AUXILIARIES.contains(&lower) {
        return PosTag::Aux;
    }
    if ADPOSITIONS.contains(&lower) {
        return PosTag::Adp;
    }
    if COORDINATORS.contains(&lower) {
        return PosTag::Cconj;
    }
    if SUBORDINATORS.contains(&lower) {
        return PosTag::Sconj;
    }
    if COMMON_VERBS.contains(&lower) {
        return PosTag::Verb;
    }
    if COMMON_ADJECTIVES.contains(&lower) {
        return PosTag::Adj;
    }
    if COMMON_ADVERBS.contains(&lower) {
        return PosTag::Adv;
    }

    // Shape rules. Capitalization is checked first: an unknown capitalized
    // word is taken as a name even at sentence start, since the closed-class
    // lexicons above have already consumed ordinary sentence openers.
    if text.chars().next().map(char::is_uppercase).unwrap_or(false) {
        return PosTag::Propn;
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return PosTag::Adv;
    }
    if (lower.len() > 4 && lower.ends_with("ing")) || (lower.len() > 3 && lower.ends_with("ed")) {
        return PosTag::Verb;
    }

    PosTag::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_words() {
        assert_eq!(tag_word("the"), PosTag::Det);
        assert_eq!(tag_word("The"), PosTag::Det);
        assert_eq!(tag_word("she"), PosTag::Pron);
        assert_eq!(tag_word("in"), PosTag::Adp);
        assert_eq!(tag_word("and"), PosTag::Cconj);
        assert_eq!(tag_word("because"), PosTag::Sconj);
        assert_eq!(tag_word("was"), PosTag::Aux);
    }

    #[test]
    fn test_common_verbs() {
        assert_eq!(tag_word("said"), PosTag::Verb);
        assert_eq!(tag_word("left"), PosTag::Verb);
        assert_eq!(tag_word("smiled"), PosTag::Verb); // suffix rule
        assert_eq!(tag_word("chased"), PosTag::Verb); // suffix rule
        assert_eq!(tag_word("running"), PosTag::Verb);
    }

    #[test]
    fn test_capitalized_is_proper_noun() {
        assert_eq!(tag_word("John"), PosTag::Propn);
        assert_eq!(tag_word("Mary"), PosTag::Propn);
    }

    #[test]
    fn test_default_noun() {
        assert_eq!(tag_word("cat"), PosTag::Noun);
        assert_eq!(tag_word("mouse"), PosTag::Noun);
        assert_eq!(tag_word("table"), PosTag::Noun);
    }

    #[test]
    fn test_numbers_and_punct() {
        assert_eq!(tag_word("100"), PosTag::Num);
        assert_eq!(tag_word("3.5"), PosTag::Num);
        assert_eq!(tag_word("."), PosTag::Punct);
        assert_eq!(tag_word("$"), PosTag::Punct);
    }

    #[test]
    fn test_adverb_suffix() {
        assert_eq!(tag_word("quickly"), PosTag::Adv);
        assert_eq!(tag_word("fly"), PosTag::Noun); // too short for the rule
    }
}
