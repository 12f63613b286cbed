//! Action-item extraction: heuristic phrasing patterns over sentences.

use regex::Regex;
use serde::Serialize;

use crate::plugins::{Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

/// Phrasings that mark a sentence as actionable.
const ACTION_PATTERNS: &[&str] = &[
    r"(?i)\bto-?do\b",
    r"(?i)\bneeds? to\b",
    r"(?i)\bfollow[ -]up\b",
    r"(?i)\baction items?\b",
    r"(?i)\bdon't forget\b",
    r"(?i)\bremember to\b",
    r"(?i)\bmake sure\b",
    r"(?i)\bwe should\b",
];

/// An actionable sentence found in a paragraph. `start` is the paragraph's
/// absolute start time, so callers can jump to the audio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub paragraph_index: usize,
    pub paragraph_id: String,
    pub text: String,
    pub trigger: String,
    pub start: f64,
}

pub struct ExtractActions;

impl Plugin for ExtractActions {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "extract-actions",
            description: "Find sentences phrased as tasks or follow-ups",
            category: PluginCategory::Analysis,
        }
    }

    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let patterns = compile_patterns()?;

        let mut items = Vec::new();
        for (index, paragraph) in ctx.paragraphs.iter().enumerate() {
            for sentence in sentences(&paragraph.text) {
                let Some(m) = patterns.iter().find_map(|re| re.find(sentence)) else {
                    continue;
                };
                items.push(ActionItem {
                    paragraph_index: index,
                    paragraph_id: paragraph.id.clone(),
                    text: sentence.to_string(),
                    trigger: m.as_str().to_lowercase(),
                    start: paragraph.start,
                });
            }
        }

        Ok(PluginOutput::Actions(items))
    }
}

fn compile_patterns() -> Result<Vec<Regex>> {
    ACTION_PATTERNS
        .iter()
        .map(|p| Regex::new(p).map_err(crate::Error::from))
        .collect()
}

/// Split text into sentences on `.`, `!`, `?` terminators; a trailing
/// unterminated fragment counts as a sentence.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let end = i + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}
