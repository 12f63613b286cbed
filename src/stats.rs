//! Transcript statistics: a pure reduction over the final paragraph list.

use serde::{Deserialize, Serialize};

use crate::paragraphs::Paragraph;

/// Derived counters recomputed on every run; no persisted identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub paragraph_count: usize,
    pub total_words: usize,
    pub total_duration: f64,
    pub average_words_per_paragraph: f64,
    pub words_per_minute: f64,
}

/// Compute stats over the assembled paragraphs.
///
/// Averages are rounded to two decimal places; empty input and zero total
/// duration both produce zeros rather than dividing.
pub fn compute(paragraphs: &[Paragraph]) -> Stats {
    let paragraph_count = paragraphs.len();
    let total_words: usize = paragraphs.iter().map(|p| p.word_count).sum();
    let total_duration: f64 = paragraphs.iter().map(|p| p.duration).sum();

    let average_words_per_paragraph = if paragraph_count > 0 {
        round2(total_words as f64 / paragraph_count as f64)
    } else {
        0.0
    };

    let words_per_minute = if total_duration > 0.0 {
        round2(total_words as f64 / total_duration * 60.0)
    } else {
        0.0
    };

    Stats {
        paragraph_count,
        total_words,
        total_duration,
        average_words_per_paragraph,
        words_per_minute,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
