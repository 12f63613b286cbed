//! Find/replace across paragraph texts, with per-paragraph edit history.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::paragraphs::EditRecord;
use crate::plugins::{now_ms, Plugin, PluginCategory, PluginContext, PluginInfo, PluginOutput};
use crate::Result;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplaceOptions {
    /// Literal text to find; always regex-escaped before matching.
    pub find: String,
    pub replace: String,
    /// Replace every occurrence per paragraph, or only the first.
    pub global: bool,
    pub case_sensitive: bool,
}

impl Default for ReplaceOptions {
    fn default() -> Self {
        Self {
            find: String::new(),
            replace: String::new(),
            global: true,
            case_sensitive: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceSummary {
    pub paragraphs_edited: usize,
    pub replacements: usize,
}

pub struct Replace;

impl Plugin for Replace {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "replace",
            description: "Replace text across paragraphs, recording edit history",
            category: PluginCategory::Editing,
        }
    }

    /// Each paragraph with at least one match gets its text rewritten,
    /// `edited` set, and exactly one [`EditRecord`] appended, even when the
    /// replacement text equals what was already there.
    fn execute(&self, ctx: PluginContext<'_>) -> Result<PluginOutput> {
        let opts: ReplaceOptions = ctx.parse_options()?;
        if opts.find.is_empty() {
            return Ok(PluginOutput::Replace(ReplaceSummary::default()));
        }

        let re = RegexBuilder::new(&regex::escape(&opts.find))
            .case_insensitive(!opts.case_sensitive)
            .build()?;

        let mut summary = ReplaceSummary::default();
        for paragraph in ctx.paragraphs.iter_mut() {
            let hits = re.find_iter(&paragraph.text).count();
            if hits == 0 {
                continue;
            }

            let replaced = if opts.global {
                summary.replacements += hits;
                re.replace_all(&paragraph.text, opts.replace.as_str())
            } else {
                summary.replacements += 1;
                re.replace(&paragraph.text, opts.replace.as_str())
            };
            paragraph.text = replaced.into_owned();

            paragraph.edited = true;
            paragraph.edit_history.push(EditRecord {
                timestamp_ms: now_ms(),
                operation: "replace".to_string(),
                from: opts.find.clone(),
                to: opts.replace.clone(),
            });
            summary.paragraphs_edited += 1;
        }

        Ok(PluginOutput::Replace(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::PluginRegistry;
    use crate::test_support::paragraph_with_text;

    fn run(
        paragraphs: &mut Vec<crate::paragraphs::Paragraph>,
        options: serde_json::Value,
    ) -> ReplaceSummary {
        let registry = PluginRegistry::with_builtins();
        match registry
            .execute("replace", PluginContext::with_options(paragraphs, options))
            .unwrap()
        {
            PluginOutput::Replace(summary) => summary,
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn replaces_globally_by_default() {
        let mut paragraphs = vec![paragraph_with_text("tea for two and tea for me")];
        let summary = run(
            &mut paragraphs,
            serde_json::json!({ "find": "tea", "replace": "coffee" }),
        );
        assert_eq!(paragraphs[0].text, "coffee for two and coffee for me");
        assert_eq!(summary.replacements, 2);
        assert_eq!(summary.paragraphs_edited, 1);
    }

    #[test]
    fn first_only_mode_stops_after_one() {
        let mut paragraphs = vec![paragraph_with_text("a b a")];
        let summary = run(
            &mut paragraphs,
            serde_json::json!({ "find": "a", "replace": "z", "global": false }),
        );
        assert_eq!(paragraphs[0].text, "z b a");
        assert_eq!(summary.replacements, 1);
    }

    #[test]
    fn find_text_is_treated_literally() {
        let mut paragraphs = vec![paragraph_with_text("price (usd) listed")];
        run(
            &mut paragraphs,
            serde_json::json!({ "find": "(usd)", "replace": "(eur)" }),
        );
        assert_eq!(paragraphs[0].text, "price (eur) listed");
    }

    #[test]
    fn records_one_history_entry_per_call_even_when_text_is_unchanged() {
        let mut paragraphs = vec![paragraph_with_text("same old text")];

        for _ in 0..2 {
            run(
                &mut paragraphs,
                serde_json::json!({ "find": "old", "replace": "old" }),
            );
        }

        let p = &paragraphs[0];
        assert_eq!(p.text, "same old text");
        assert!(p.edited);
        assert_eq!(p.edit_history.len(), 2);
        assert_eq!(p.edit_history[0].operation, "replace");
        assert_eq!(p.edit_history[0].from, "old");
        assert_eq!(p.edit_history[0].to, "old");
    }

    #[test]
    fn untouched_paragraphs_record_nothing() {
        let mut paragraphs = vec![
            paragraph_with_text("has the target"),
            paragraph_with_text("does not"),
        ];
        let summary = run(
            &mut paragraphs,
            serde_json::json!({ "find": "target", "replace": "goal" }),
        );
        assert_eq!(summary.paragraphs_edited, 1);
        assert!(!paragraphs[1].edited);
        assert!(paragraphs[1].edit_history.is_empty());
    }
}
