//! Heuristic dependency labeling.
//!
//! Labels come from high-precision positional signals rather than a parse
//! tree: the first finite verb is the sentence ROOT, the nearest unclaimed
//! nominal before a verb is its subject, post-verbal nominals are objects
//! (of a preposition when one intervenes), and possessive pronouns attach
//! to the nominal that follows them. Function words get their fixed labels
//! directly from the pos tag.

use crate::tag::{DepLabel, PosTag};

/// Possessive pronoun forms.
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

/// Assign a dependency label to every token of one sentence.
pub(crate) fn label(tokens: &[(&str, PosTag)]) -> Vec<DepLabel> {
    let n = tokens.len();

    // Fixed labels for function words.
    let mut deps: Vec<DepLabel> = tokens
        .iter()
        .map(|(_, pos)| match pos {
            PosTag::Punct => DepLabel::Punct,
            PosTag::Det => DepLabel::Det,
            PosTag::Adp => DepLabel::Prep,
            PosTag::Cconj => DepLabel::Cc,
            PosTag::Adv => DepLabel::Advmod,
            PosTag::Adj => DepLabel::Amod,
            PosTag::Aux => DepLabel::Aux,
            _ => DepLabel::Dep,
        })
        .collect();

    // Possessive pronouns directly before a nominal (or its adjective).
    for i in 0..n {
        if tokens[i].1 == PosTag::Pron
            && POSSESSIVES.contains(&tokens[i].0.to_lowercase().as_str())
            && tokens
                .get(i + 1)
                .map(|(_, p)| p.is_nominal() || *p == PosTag::Adj)
                .unwrap_or(false)
        {
            deps[i] = DepLabel::Poss;
        }
    }

    // Subjects: nearest unclaimed nominal or pronoun before each verb,
    // without crossing into an earlier clause.
    let verbs: Vec<usize> = (0..n).filter(|&i| tokens[i].1 == PosTag::Verb).collect();
    for &v in &verbs {
        for i in (0..v).rev() {
            match tokens[i].1 {
                PosTag::Verb | PosTag::Aux => break,
                pos if (pos.is_nominal() || pos == PosTag::Pron) && deps[i] == DepLabel::Dep => {
                    deps[i] = DepLabel::Nsubj;
                    break;
                }
                _ => {}
            }
        }
    }

    // Root: first verb, else first auxiliary, else first nominal, else the
    // first visible token.
    let root = verbs
        .first()
        .copied()
        .or_else(|| (0..n).find(|&i| tokens[i].1 == PosTag::Aux))
        .or_else(|| {
            (0..n).find(|&i| tokens[i].1.is_nominal() || tokens[i].1 == PosTag::Pron)
        })
        .or_else(|| (0..n).find(|&i| tokens[i].1 != PosTag::Punct));
    if let Some(r) = root {
        deps[r] = DepLabel::Root;
    }

    // Objects: unclaimed nominals after the clause's verb; a preposition in
    // between turns them into its object instead.
    let mut seen_verb = false;
    let mut pending_prep = false;
    for i in 0..n {
        match tokens[i].1 {
            PosTag::Verb | PosTag::Aux => {
                seen_verb = true;
                pending_prep = false;
            }
            PosTag::Adp => pending_prep = true,
            pos if (pos.is_nominal() || pos == PosTag::Pron || pos == PosTag::Num)
                && deps[i] == DepLabel::Dep
                && seen_verb =>
            {
                deps[i] = if pending_prep {
                    DepLabel::Pobj
                } else {
                    DepLabel::Dobj
                };
                pending_prep = false;
            }
            _ => {}
        }
    }

    deps
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
            Just(PosTag::Aux),
            Just(PosTag::Det),
            Just(PosTag::Adp),
            Just(PosTag::Punct),
        ]
    }

    proptest! {
        #[test]
        fn one_label_per_token(
            tagged in prop::collection::vec(("[a-z]{1,8}", arb_pos()), 0..12)
        ) {
            let refs: Vec<(&str, PosTag)> =
                tagged.iter().map(|(t, p)| (t.as_str(), *p)).collect();
            let deps = label(&refs);
            prop_assert_eq!(deps.len(), refs.len());
        }

        #[test]
        fn at_most_one_root(
            tagged in prop::collection::vec(("[a-z]{1,8}", arb_pos()), 0..12)
        ) {
            let refs: Vec<(&str, PosTag)> =
                tagged.iter().map(|(t, p)| (t.as_str(), *p)).collect();
            let deps = label(&refs);
            let roots = deps.iter().filter(|d| **d == DepLabel::Root).count();
            prop_assert!(roots <= 1);
            // Any sentence with a visible token has a root.
            if refs.iter().any(|(_, p)| *p != PosTag::Punct) {
                prop_assert_eq!(roots, 1);
            }
        }
    }
}
