//! Passthrough organizer: raw engine output grouped by chunk, no
//! deduplication and no timestamp adjustment.
//!
//! Used as a debug/reference mode to see what the transcription engine
//! actually emitted. Segment times are used as-is and are assumed globally
//! comparable, unlike the boundary strategy which synthesizes absolute time.

use uuid::Uuid;

use crate::paragraphs::Paragraph;
use crate::words::{Chunk, Segment, Word};
use crate::{Error, Result};

struct TaggedSegment {
    chunk_index: u64,
    chunk_id: Option<String>,
    segment: Segment,
}

/// Group every segment from every chunk into paragraphs by chunk identity.
///
/// Segments are flattened globally, sorted by their `start` time, then
/// consecutive segments from the same chunk become one paragraph; a new
/// paragraph starts whenever the chunk identity changes.
pub fn organize(chunks: &[Chunk]) -> Result<Vec<Paragraph>> {
    let mut tagged: Vec<TaggedSegment> = Vec::new();
    for chunk in chunks {
        for segment in &chunk.segments {
            for word in &segment.words {
                validate_word(chunk.chunk_index, word)?;
            }
            tagged.push(TaggedSegment {
                chunk_index: chunk.chunk_index,
                chunk_id: chunk.chunk_id.clone(),
                segment: segment.clone(),
            });
        }
    }

    tagged.sort_by(|a, b| a.segment.start.total_cmp(&b.segment.start));

    let mut paragraphs = Vec::new();
    let mut run: Vec<TaggedSegment> = Vec::new();
    for seg in tagged {
        if let Some(last) = run.last() {
            if !same_source(last, &seg) {
                paragraphs.push(paragraph_from_run(std::mem::take(&mut run)));
            }
        }
        run.push(seg);
    }
    if !run.is_empty() {
        paragraphs.push(paragraph_from_run(run));
    }

    Ok(paragraphs)
}

/// Segments belong to the same paragraph when their chunk ids match, falling
/// back to the chunk index when ids are absent.
fn same_source(a: &TaggedSegment, b: &TaggedSegment) -> bool {
    match (&a.chunk_id, &b.chunk_id) {
        (Some(x), Some(y)) => x == y,
        _ => a.chunk_index == b.chunk_index,
    }
}

fn paragraph_from_run(run: Vec<TaggedSegment>) -> Paragraph {
    let chunk_index = run[0].chunk_index;
    let chunk_ids: Vec<String> = run[0].chunk_id.iter().cloned().collect();
    let start = run[0].segment.start;
    let end = run[run.len() - 1].segment.end;

    let segments: Vec<Segment> = run.into_iter().map(|t| t.segment).collect();
    let words: Vec<Word> = segments
        .iter()
        .flat_map(|s| s.words.iter().cloned())
        .collect();

    let text = words
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    Paragraph {
        id: Uuid::new_v4().to_string(),
        text,
        word_count: words.len(),
        start,
        end,
        duration: end - start,
        words,
        segments,
        chunk_ids,
        chunk_index,
        speaker: None,
        edited: false,
        edit_history: Vec::new(),
        highlights: Vec::new(),
    }
}

fn validate_word(chunk_index: u64, word: &Word) -> Result<()> {
    if !word.start.is_finite() || !word.end.is_finite() || word.end < word.start {
        return Err(Error::InvalidWord {
            chunk_index,
            reason: format!("word {:?} has invalid timing", word.word),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> Word {
        Word {
            word: text.into(),
            start,
            end,
        }
    }

    fn segment(words: Vec<Word>) -> Segment {
        let (start, end) = match (words.first(), words.last()) {
            (Some(f), Some(l)) => (f.start, l.end),
            _ => (0.0, 0.0),
        };
        Segment {
            words,
            start,
            end,
            text: None,
        }
    }

    #[test]
    fn groups_consecutive_segments_by_chunk_id() -> anyhow::Result<()> {
        let chunks = vec![
            Chunk {
                chunk_index: 0,
                chunk_id: Some("chunk-000".into()),
                segments: vec![
                    segment(vec![word("a", 0.0, 1.0)]),
                    segment(vec![word("b", 1.0, 2.0)]),
                ],
            },
            Chunk {
                chunk_index: 1,
                chunk_id: Some("chunk-001".into()),
                segments: vec![segment(vec![word("c", 3.0, 4.0)])],
            },
        ];

        let out = organize(&chunks)?;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "a b");
        assert_eq!(out[0].segments.len(), 2);
        assert_eq!(out[1].text, "c");
        assert_eq!(out[1].chunk_ids, vec!["chunk-001".to_string()]);
        Ok(())
    }

    #[test]
    fn interleaved_times_split_runs() -> anyhow::Result<()> {
        // Chunk 0's second segment starts after chunk 1's segment, so the
        // sorted order interleaves and produces three paragraphs.
        let chunks = vec![
            Chunk {
                chunk_index: 0,
                chunk_id: Some("x".into()),
                segments: vec![
                    segment(vec![word("a", 0.0, 1.0)]),
                    segment(vec![word("late", 5.0, 6.0)]),
                ],
            },
            Chunk {
                chunk_index: 1,
                chunk_id: Some("y".into()),
                segments: vec![segment(vec![word("b", 2.0, 3.0)])],
            },
        ];

        let out = organize(&chunks)?;
        let texts: Vec<&str> = out.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "late"]);
        Ok(())
    }

    #[test]
    fn times_are_used_as_is() -> anyhow::Result<()> {
        let chunks = vec![Chunk {
            chunk_index: 0,
            chunk_id: None,
            segments: vec![segment(vec![word("w", 7.5, 8.0)])],
        }];

        let out = organize(&chunks)?;
        assert_eq!(out[0].start, 7.5);
        assert_eq!(out[0].words[0].start, 7.5);
        Ok(())
    }
}
