//! Sentence segmentation by punctuation heuristics.
//!
//! A terminator (`.`, `!`, `?`) ends a sentence when it is followed by
//! whitespace or a closing quote and the next visible character is
//! uppercase. Abbreviations followed by lowercase text are left alone; ones
//! followed by a capitalized word (e.g. "Dr. Smith") will still split, a
//! known limitation of the heuristic.

/// Split text into trimmed sentence byte ranges, in document order.
///
/// Whitespace-only segments are dropped; a trailing fragment without a
/// terminator is kept as a final sentence.
pub(crate) fn split_sentences(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut boundaries = Vec::new();

    for (k, &(i, c)) in chars.iter().enumerate() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let next = chars.get(k + 1).map(|&(_, c)| c);
        let after = chars.get(k + 2).map(|&(_, c)| c);

        let ends_token = next.map_or(true, |nc| nc.is_whitespace() || nc == '"' || nc == '\'');
        let new_sentence_follows =
            after.map_or(true, |ac| ac.is_uppercase() || ac == '"' || ac.is_whitespace());

        if ends_token && new_sentence_follows {
            boundaries.push(i + c.len_utf8());
        }
    }
    if boundaries.last() != Some(&text.len()) {
        boundaries.push(text.len());
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    for end in boundaries {
        if let Some(range) = trim_range(text, start, end) {
            ranges.push(range);
        }
        start = end;
    }
    ranges
}

/// Shrink a byte range to exclude surrounding whitespace; None if nothing
/// visible remains.
fn trim_range(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let slice = &text[start..end];
    let trimmed = slice.trim_start();
    let leading = slice.len() - trimmed.len();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        return None;
    }
    let s = start + leading;
    Some((s, s + trimmed.len()))
}
