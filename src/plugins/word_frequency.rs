//! Stopword-filtered word frequency histogram.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dedup::normalize_word;
use crate::plugins::{Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "had", "has",
    "have", "he", "her", "his", "i", "in", "is", "it", "its", "just", "me", "my", "no", "not",
    "of", "on", "or", "our", "she", "so", "that", "the", "their", "them", "they", "this", "to",
    "was", "we", "were", "what", "will", "with", "you", "your",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordFrequencyOptions {
    /// Words shorter than this (in chars, after normalization) are dropped.
    pub min_length: usize,
    /// Keep only the most frequent N entries when set.
    pub limit: Option<usize>,
}

impl Default for WordFrequencyOptions {
    fn default() -> Self {
        Self {
            min_length: 3,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

pub struct WordFrequency;

impl Plugin for WordFrequency {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "word-frequency",
            description: "Count word occurrences, filtering stopwords",
            category: PluginCategory::Analysis,
        }
    }

    /// Counts are keyed on the same normalized word form the deduplicator
    /// compares with, so "Hello," and "hello" land in one bucket. Output is
    /// sorted by count descending, then alphabetically for stable ties.
    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let opts: WordFrequencyOptions = ctx.parse_options()?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for paragraph in ctx.paragraphs.iter() {
            for word in &paragraph.words {
                let normalized = normalize_word(&word.word);
                if normalized.chars().count() < opts.min_length {
                    continue;
                }
                if STOPWORDS.contains(&normalized.as_str()) {
                    continue;
                }
                *counts.entry(normalized).or_insert(0) += 1;
            }
        }

        let mut histogram: Vec<WordCount> = counts
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();
        histogram.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        if let Some(limit) = opts.limit {
            histogram.truncate(limit);
        }

        Ok(PluginOutput::WordFrequency(histogram))
    }
}
