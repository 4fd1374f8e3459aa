//! Heuristic named entity mention extraction.
//!
//! Two layers, mirroring their reliability:
//!
//! 1. Format-based mentions (DATE, MONEY, PERCENT) via regex patterns:
//!    high precision, no context needed.
//! 2. Capitalized-span candidates classified as PERSON/ORG/GPE from small
//!    context lexicons (titles, corporate suffixes, locative prepositions).
//!
//! Spans never overlap; pattern mentions win over capitalized-span ones.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokenize::{self, RawToken};
use crate::document::{Entity, EntityLabel};

/// Titles and roles that precede a person name.
const PERSON_TITLES: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "president",
    "senator", "judge", "captain", "sir", "professor",
];

/// Verbs that typically follow a person mention.
const PERSON_VERBS: &[&str] = &[
    "said", "says", "told", "asked", "announced", "stated", "replied", "smiled", "arrived",
    "left", "met", "saw", "went", "waved", "founded", "explained",
];

/// Common given names (strong person signal for single-word spans).
const COMMON_FIRST_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard", "thomas", "charles",
    "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan", "sarah", "karen",
    "steve", "bill", "mark", "paul", "peter", "george", "henry", "jane", "anna", "anne",
    "emily", "emma", "julia", "kate", "lisa", "maria", "nancy", "alice", "bob", "tom", "jack",
    "laura", "rachel",
];

/// Corporate and institutional suffixes.
const ORG_SUFFIXES: &[&str] = &[
    "inc", "inc.", "corp", "corp.", "corporation", "ltd", "ltd.", "llc", "plc", "company",
    "university", "institute", "foundation", "bank", "group", "labs", "technologies",
    "systems",
];

/// Prepositions that introduce a place.
const GPE_PREPOSITIONS: &[&str] = &["in", "at", "from", "to", "near"];

/// Words never kept as capitalized-span candidates. Includes month and day
/// names so the date patterns own them.
const CANDIDATE_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we",
    "they", "his", "her", "its", "their", "my", "your", "our", "and", "but", "or", "if",
    "when", "then", "there", "here", "what", "who", "how", "why", "yes", "no", "not", "well",
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday", "today", "yesterday", "tomorrow",
];

/// Extract entity mentions from the whole document text, sorted by start
/// offset.
pub(crate) fn extract(text: &str) -> Vec<Entity> {
    let mut entities = pattern_mentions(text);

    let tokens: Vec<RawToken<'_>> = tokenize::tokenize(text)
        .into_iter()
        .filter(|t| t.text.chars().any(|c| c.is_alphanumeric()))
        .collect();

    for span in capitalized_spans(text, &tokens) {
        let (start, end) = (tokens[span[0]].start, tokens[*span.last().unwrap()].end);
        if overlaps(&entities, start, end) {
            continue;
        }
        if let Some(label) = classify(&span, &tokens) {
            entities.push(Entity::new(&text[start..end], label, start, end));
        }
    }

    entities.sort_by_key(|e| e.start);
    entities
}

/// Format-based mentions: dates, money, percentages.
fn pattern_mentions(text: &str) -> Vec<Entity> {
    static DATE_ISO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap());
    static DATE_US: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap());
    static DATE_WRITTEN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?\b",
        )
        .unwrap()
    });
    static MONEY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\$[\d,]+\.?\d*(?:\s*(?:billion|million|thousand))?|\b\d+(?:\.\d+)?\s*(?:dollars?|euros?|pounds?)\b")
            .unwrap()
    });
    static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\.?\d*\s*%").unwrap());

    let mut entities = Vec::new();
    let patterns: [(&Lazy<Regex>, EntityLabel); 5] = [
        (&DATE_ISO, EntityLabel::Date),
        (&DATE_US, EntityLabel::Date),
        (&DATE_WRITTEN, EntityLabel::Date),
        (&MONEY, EntityLabel::Money),
        (&PERCENT, EntityLabel::Percent),
    ];
    for (pattern, label) in patterns {
        for m in pattern.find_iter(text) {
            if !overlaps(&entities, m.start(), m.end()) {
                entities.push(Entity::new(m.as_str(), label.clone(), m.start(), m.end()));
            }
        }
    }
    entities
}

/// Group consecutive capitalized non-stopword tokens into candidate spans
/// of token indices. Tokens count as consecutive only when nothing but
/// whitespace separates them in the text, so spans never cross punctuation.
fn capitalized_spans(text: &str, tokens: &[RawToken<'_>]) -> Vec<Vec<usize>> {
    let mut spans = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let capitalized = token
            .text
            .chars()
            .next()
            .map(char::is_uppercase)
            .unwrap_or(false);
        let stop = CANDIDATE_STOP_WORDS.contains(&token.text.to_lowercase().as_str());
        let adjacent = current
            .last()
            .map(|&prev| {
                text[tokens[prev].end..token.start]
                    .chars()
                    .all(char::is_whitespace)
            })
            .unwrap_or(true);

        if capitalized && !stop && adjacent {
            current.push(i);
        } else {
            if !current.is_empty() {
                spans.push(std::mem::take(&mut current));
            }
            if capitalized && !stop {
                current.push(i);
            }
        }
    }
    if !current.is_empty() {
        spans.push(current);
    }
    spans
}

/// Classify a candidate span, or None when no signal is strong enough.
fn classify(span: &[usize], tokens: &[RawToken<'_>]) -> Option<EntityLabel> {
    let first = tokens[span[0]].text.to_lowercase();
    let last = tokens[*span.last().unwrap()].text.to_lowercase();
    let prev = span[0]
        .checked_sub(1)
        .map(|i| tokens[i].text.to_lowercase());
    let next = tokens.get(span.last().unwrap() + 1).map(|t| t.text.to_lowercase());

    if ORG_SUFFIXES.contains(&last.as_str()) {
        return Some(EntityLabel::Org);
    }
    if prev
        .as_deref()
        .map(|p| PERSON_TITLES.contains(&p))
        .unwrap_or(false)
        || COMMON_FIRST_NAMES.contains(&first.as_str())
        || next
            .as_deref()
            .map(|n| PERSON_VERBS.contains(&n))
            .unwrap_or(false)
    {
        return Some(EntityLabel::Person);
    }
    if prev
        .as_deref()
        .map(|p| GPE_PREPOSITIONS.contains(&p))
        .unwrap_or(false)
    {
        return Some(EntityLabel::Gpe);
    }
    if span.len() == 2 {
        // Two adjacent capitalized words with no other signal: usually a
        // full personal name.
        return Some(EntityLabel::Person);
    }
    let text = tokens[span[0]].text;
    if span.len() == 1
        && text.len() <= 5
        && text.len() >= 2
        && text.chars().all(|c| c.is_ascii_uppercase())
    {
        return Some(EntityLabel::Org);
    }
    None
}

/// Does [start, end) overlap any already-collected mention?
fn overlaps(entities: &[Entity], start: usize, end: usize) -> bool {
    entities.iter().any(|e| !(end <= e.start || start >= e.end))
}
