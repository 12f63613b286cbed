//! Shared builders for unit tests.

use crate::paragraphs::Paragraph;
use crate::words::Word;

/// A paragraph with the given text, one word per whitespace token, timed at
/// half a second per word from `start`.
pub(crate) fn paragraph_with_span(text: &str, start: f64) -> Paragraph {
    let words: Vec<Word> = text
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| Word {
            word: token.to_string(),
            start: start + i as f64 * 0.5,
            end: start + i as f64 * 0.5 + 0.4,
        })
        .collect();
    let end = words.last().map(|w| w.end).unwrap_or(start);

    Paragraph {
        id: format!("para-{start}"),
        text: text.to_string(),
        word_count: words.len(),
        start,
        end,
        duration: end - start,
        words,
        segments: Vec::new(),
        chunk_ids: Vec::new(),
        chunk_index: 0,
        speaker: None,
        edited: false,
        edit_history: Vec::new(),
        highlights: Vec::new(),
    }
}

pub(crate) fn paragraph_with_text(text: &str) -> Paragraph {
    paragraph_with_span(text, 0.0)
}
