//! Word-truncated transcript preview.

use serde::{Deserialize, Serialize};

use crate::plugins::{Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummarizeOptions {
    pub max_words: usize,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self { max_words: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub summary: String,
    pub word_count: usize,
    pub truncated: bool,
}

pub struct Summarize;

impl Plugin for Summarize {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "summarize",
            description: "Produce a word-truncated preview of the transcript",
            category: PluginCategory::Analysis,
        }
    }

    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let opts: SummarizeOptions = ctx.parse_options()?;

        let full_text = ctx
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let words: Vec<&str> = full_text.split_whitespace().collect();

        let truncated = words.len() > opts.max_words;
        let mut summary = words[..opts.max_words.min(words.len())].join(" ");
        if truncated {
            summary.push_str("...");
        }

        Ok(PluginOutput::Summary(Summary {
            summary,
            word_count: words.len(),
            truncated,
        }))
    }
}
