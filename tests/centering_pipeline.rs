//! End-to-end analysis through the rule-based annotation pipeline.

use centering::annotate::RuleAnnotator;
use centering::record::{analyze, SentenceRecord};
use centering::UNRESOLVED;

fn run(text: &str) -> Vec<SentenceRecord> {
    analyze(&RuleAnnotator::new(), text).expect("analysis should not fail")
}

fn antecedent<'a>(record: &'a SentenceRecord, pronoun: &str) -> Option<&'a str> {
    record
        .c_b
        .iter()
        .find(|b| b.pronoun == pronoun)
        .map(|b| b.antecedent.as_str())
}

#[test]
fn intra_sentential_subject_resolution() {
    let records = run("John said he left.");
    assert_eq!(records.len(), 1);
    assert_eq!(antecedent(&records[0], "he"), Some("John"));
}

#[test]
fn cross_sentence_resolution() {
    let records = run("Mary arrived. She smiled.");
    assert_eq!(records.len(), 2);
    assert!(records[0].c_b.is_empty());
    assert_eq!(antecedent(&records[1], "She"), Some("Mary"));
}

#[test]
fn nearest_prior_sentence_wins() {
    let records = run("Alice waved. The dog barked. It ran.");
    assert_eq!(records.len(), 3);
    assert_eq!(antecedent(&records[2], "It"), Some("dog"));
}

#[test]
fn document_initial_pronoun_is_unresolved() {
    let records = run("She smiled.");
    assert_eq!(antecedent(&records[0], "She"), Some(UNRESOLVED));
}

#[test]
fn possessive_pronoun_resolves_in_sentence() {
    let records = run("John liked his plan.");
    assert_eq!(antecedent(&records[0], "his"), Some("John"));
}

#[test]
fn sentence_without_pronouns_has_empty_backward_set() {
    let records = run("The cat chased the mouse.");
    assert!(records[0].c_b.is_empty());
    let cf: Vec<_> = records[0].c_f.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(cf, vec!["cat", "mouse"]);
}

#[test]
fn forward_centers_carry_entity_types() {
    let records = run("Mary lives in Paris.");
    let mary = records[0].c_f.iter().find(|c| c.text == "Mary").unwrap();
    assert_eq!(mary.center_type, "PERSON");
    let paris = records[0].c_f.iter().find(|c| c.text == "Paris").unwrap();
    assert_eq!(paris.center_type, "GPE");
}

#[test]
fn entities_reported_per_sentence() {
    let records = run("Mary arrived. She paid $100.");
    assert!(records[0].entities.iter().any(|e| e.text == "Mary"));
    assert!(records[1].entities.iter().any(|e| e.text == "$100"));
    assert!(records[1].entities.iter().all(|e| e.text != "Mary"));
}

#[test]
fn tokens_keep_surface_order() {
    let records = run("The cat chased the mouse.");
    let tokens: Vec<_> = records[0].tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(tokens, vec!["The", "cat", "chased", "the", "mouse", "."]);
}

#[test]
fn analysis_is_deterministic() {
    let text = "John told Mary about his plan. She listened. He smiled.";
    assert_eq!(run(text), run(text));
}

#[test]
fn whitespace_only_text_yields_no_records() {
    assert!(run("   \n\t  ").is_empty());
}

#[test]
fn serialized_shape_matches_contract() {
    let records = run("John said he left.");
    let value = serde_json::to_value(&records).unwrap();

    let sentence = &value[0];
    for field in ["text", "tokens", "entities", "c_b", "c_f"] {
        assert!(sentence.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(sentence["c_b"][0]["pronoun"], "he");
    assert_eq!(sentence["c_b"][0]["antecedent"], "John");
    let token = &sentence["tokens"][0];
    assert_eq!(token["text"], "John");
    assert_eq!(token["pos"], "PROPN");
    assert_eq!(token["dep"], "nsubj");
}
