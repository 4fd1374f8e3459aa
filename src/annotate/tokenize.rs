//! Offset-preserving tokenizer.
//!
//! Words are runs of alphanumerics plus inner apostrophes and hyphens;
//! every other visible character becomes a single-character token of its
//! own, so punctuation survives into the token stream.

/// A raw token: surface slice plus byte offsets into the tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Tokenize text into words and punctuation, preserving offsets.
pub(crate) fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() || c == '\'' || c == '-' {
            if start.is_none() {
                start = Some(i);
            }
        } else {
            if let Some(s) = start.take() {
                tokens.push(RawToken {
                    text: &text[s..i],
                    start: s,
                    end: i,
                });
            }
            if !c.is_whitespace() {
                let end = i + c.len_utf8();
                tokens.push(RawToken {
                    text: &text[i..end],
                    start: i,
                    end,
                });
            }
        }
    }
    if let Some(s) = start {
        tokens.push(RawToken {
            text: &text[s..],
            start: s,
            end: text.len(),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_and_final_punct() {
        assert_eq!(texts("Mary arrived."), vec!["Mary", "arrived", "."]);
    }

    #[test]
    fn test_punctuation_is_separate() {
        assert_eq!(
            texts("Wait, really?"),
            vec!["Wait", ",", "really", "?"]
        );
    }

    #[test]
    fn test_contractions_stay_whole() {
        assert_eq!(texts("She didn't go"), vec!["She", "didn't", "go"]);
    }

    #[test]
    fn test_currency_symbol_splits() {
        assert_eq!(texts("$100 total"), vec!["$", "100", "total"]);
    }

    #[test]
    fn test_offsets() {
        let toks = tokenize("ab cd.");
        assert_eq!(toks[0].start, 0);
        assert_eq!(toks[0].end, 2);
        assert_eq!(toks[1].start, 3);
        assert_eq!(toks[1].end, 5);
        assert_eq!(toks[2].text, ".");
        assert_eq!(toks[2].start, 5);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }
}
