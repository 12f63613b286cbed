//! Full-text search over the paragraph list.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::plugins::{Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

/// How many characters of surrounding text each match carries.
const CONTEXT_CHARS: usize = 40;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Substring to find, or a regex when `use_regex` is set.
    pub query: String,
    pub use_regex: bool,
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            use_regex: false,
            case_sensitive: false,
        }
    }
}

/// One hit inside one paragraph. `position` is a char offset into the
/// paragraph's text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub paragraph_index: usize,
    pub paragraph_id: String,
    pub position: usize,
    pub matched: String,
    pub context: String,
}

pub struct Search;

impl Plugin for Search {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "search",
            description: "Find text across paragraphs, by substring or regex",
            category: PluginCategory::Analysis,
        }
    }

    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let opts: SearchOptions = ctx.parse_options()?;
        if opts.query.is_empty() {
            return Ok(PluginOutput::Search(Vec::new()));
        }

        let pattern = if opts.use_regex {
            opts.query.clone()
        } else {
            regex::escape(&opts.query)
        };
        // An invalid user-supplied regex propagates to the caller.
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(!opts.case_sensitive)
            .build()?;

        let mut matches = Vec::new();
        for (index, paragraph) in ctx.paragraphs.iter().enumerate() {
            for m in re.find_iter(&paragraph.text) {
                matches.push(SearchMatch {
                    paragraph_index: index,
                    paragraph_id: paragraph.id.clone(),
                    position: paragraph.text[..m.start()].chars().count(),
                    matched: m.as_str().to_string(),
                    context: context_snippet(&paragraph.text, m.start(), m.end()),
                });
            }
        }

        Ok(PluginOutput::Search(matches))
    }
}

/// A char-boundary-safe window of text around a byte range, with ellipses
/// when truncated.
fn context_snippet(text: &str, match_start: usize, match_end: usize) -> String {
    let mut start = match_start.saturating_sub(CONTEXT_CHARS);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (match_end + CONTEXT_CHARS).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&text[start..end]);
    if end < text.len() {
        snippet.push_str("...");
    }
    snippet
}
