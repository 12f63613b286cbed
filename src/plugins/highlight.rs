//! Keyword highlighting: annotates paragraphs with colored spans in place.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::paragraphs::Highlight as HighlightSpan;
use crate::plugins::{Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightOptions {
    pub keywords: Vec<String>,
    pub color: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            color: "yellow".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSummary {
    pub paragraphs_highlighted: usize,
    pub spans: usize,
}

pub struct Highlight;

impl Plugin for Highlight {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "highlight",
            description: "Annotate keyword occurrences with colored spans",
            category: PluginCategory::Editing,
        }
    }

    /// Matching is case-insensitive and whole-word. Span offsets are char
    /// offsets into the paragraph text; text itself is never modified, so
    /// repeated invocations accumulate spans.
    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let opts: HighlightOptions = ctx.parse_options()?;

        let mut patterns = Vec::with_capacity(opts.keywords.len());
        for keyword in &opts.keywords {
            if keyword.is_empty() {
                continue;
            }
            let re = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
                .case_insensitive(true)
                .build()?;
            patterns.push((keyword.clone(), re));
        }

        let mut summary = HighlightSummary::default();
        for paragraph in ctx.paragraphs.iter_mut() {
            let before = paragraph.highlights.len();
            for (keyword, re) in &patterns {
                for m in re.find_iter(&paragraph.text) {
                    paragraph.highlights.push(HighlightSpan {
                        keyword: keyword.clone(),
                        color: opts.color.clone(),
                        start: paragraph.text[..m.start()].chars().count(),
                        end: paragraph.text[..m.end()].chars().count(),
                    });
                    summary.spans += 1;
                }
            }
            if paragraph.highlights.len() > before {
                summary.paragraphs_highlighted += 1;
            }
        }

        Ok(PluginOutput::Highlight(summary))
    }
}
