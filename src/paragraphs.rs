//! Paragraph assembly: promoting deduplicated chunk groups onto the
//! absolute recording timeline.
//!
//! Chunk timestamps are local to each chunk's own clock. A running
//! accumulator shifts every word, segment, and paragraph bound by the total
//! span of all prior chunks, so nothing chunk-local survives on the output.
//! Any downstream feature keyed on absolute time (seeking, highlighting,
//! cross-chunk merging) depends on this.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flatten::ChunkGroup;
use crate::words::{Segment, Word};

/// The durable output unit consumed by editors and exporters.
///
/// `start`/`end` are absolute timeline seconds; `duration` is the owning
/// chunk's own post-dedup span. `speaker` is never populated by this crate
/// (external diarization may fill it in). `edited`, `edit_history`, and
/// `highlights` are written only by the editing plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub id: String,
    pub text: String,
    pub words: Vec<Word>,
    pub segments: Vec<Segment>,
    pub chunk_ids: Vec<String>,
    pub chunk_index: u64,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub word_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default)]
    pub edited: bool,
    #[serde(default)]
    pub edit_history: Vec<EditRecord>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// One entry in a paragraph's edit log, appended by the `replace` plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    pub timestamp_ms: u64,
    pub operation: String,
    pub from: String,
    pub to: String,
}

/// A keyword span annotation, appended by the `highlight` plugin.
///
/// `start`/`end` are char offsets into the paragraph's `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub keyword: String,
    pub color: String,
    pub start: usize,
    pub end: usize,
}

/// Assemble one paragraph per chunk group, shifting onto the absolute
/// timeline.
///
/// The accumulator advances by each group's own (possibly dedup-trimmed)
/// span, which keeps absolute `start` values monotonically non-decreasing
/// for chunks that were contiguous in the original recording. Empty groups
/// contribute a zero span and an empty paragraph.
pub fn assemble(groups: Vec<ChunkGroup>) -> Vec<Paragraph> {
    let mut cumulative_time = 0.0;
    let mut paragraphs = Vec::with_capacity(groups.len());

    for group in groups {
        let offset = cumulative_time;
        let span = group.end - group.start;

        let words: Vec<Word> = group.words.iter().map(|w| w.shifted(offset)).collect();
        let segments: Vec<Segment> = group.segments.iter().map(|s| s.shifted(offset)).collect();

        let text = words
            .iter()
            .map(|w| w.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        paragraphs.push(Paragraph {
            id: Uuid::new_v4().to_string(),
            text,
            word_count: words.len(),
            start: group.start + offset,
            end: group.end + offset,
            duration: span,
            words,
            segments,
            chunk_ids: group.chunk_id.into_iter().collect(),
            chunk_index: group.chunk_index,
            speaker: None,
            edited: false,
            edit_history: Vec::new(),
            highlights: Vec::new(),
        });

        cumulative_time += span;
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(index: u64, words: Vec<Word>) -> ChunkGroup {
        let (start, end) = match (words.first(), words.last()) {
            (Some(f), Some(l)) => (f.start, l.end),
            _ => (0.0, 0.0),
        };
        ChunkGroup {
            chunk_index: index,
            chunk_id: Some(format!("chunk-{index:03}")),
            words,
            segments: Vec::new(),
            start,
            end,
        }
    }

    fn word(text: &str, start: f64, end: f64) -> Word {
        Word {
            word: text.into(),
            start,
            end,
        }
    }

    #[test]
    fn offsets_accumulate_across_groups() {
        let groups = vec![
            group(0, vec![word("a", 0.0, 5.0)]),
            group(1, vec![word("b", 0.0, 4.5)]),
            group(2, vec![word("c", 0.0, 6.2)]),
        ];

        let out = assemble(groups);
        let starts: Vec<f64> = out.iter().map(|p| p.start).collect();
        assert_eq!(starts, vec![0.0, 5.0, 9.5]);
        assert!((out[2].end - 15.7).abs() < 1e-9);
    }

    #[test]
    fn words_carry_absolute_time() {
        let groups = vec![
            group(0, vec![word("first", 0.0, 2.0)]),
            group(1, vec![word("second", 0.5, 1.5)]),
        ];

        let out = assemble(groups);
        // Second group's local clock starts at 0.5; its span ends at 1.5,
        // so the accumulator advanced by the first group's 2.0 only.
        assert_eq!(out[1].words[0].start, 2.5);
        assert_eq!(out[1].words[0].end, 3.5);
        assert_eq!(out[1].duration, 1.0);
    }

    #[test]
    fn text_is_space_joined_and_trimmed() {
        let groups = vec![group(0, vec![word(" Hello", 0.0, 0.5), word("world", 0.5, 1.0)])];
        let out = assemble(groups);
        assert_eq!(out[0].text, "Hello world");
        assert_eq!(out[0].word_count, 2);
    }

    #[test]
    fn empty_group_yields_empty_paragraph() {
        let mut consumed = group(1, Vec::new());
        consumed.start = 3.0;
        consumed.end = 3.0;
        let groups = vec![group(0, vec![word("a", 0.0, 3.0)]), consumed];

        let out = assemble(groups);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].text, "");
        assert_eq!(out[1].word_count, 0);
        assert_eq!(out[1].duration, 0.0);
    }

    #[test]
    fn paragraph_ids_are_unique() {
        let groups = vec![
            group(0, vec![word("a", 0.0, 1.0)]),
            group(1, vec![word("b", 0.0, 1.0)]),
        ];
        let out = assemble(groups);
        assert_ne!(out[0].id, out[1].id);
    }
}
