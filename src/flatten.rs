//! Chunk ordering and flattening: the first stage of the boundary pipeline.
//!
//! Chunks arrive in arbitrary array order; only `chunk_index` is
//! authoritative. This stage sorts a copy, flattens each chunk's segments
//! into one ordered word list, and validates word timing at the ingestion
//! boundary so later stages can do arithmetic without re-checking.

use serde::{Deserialize, Serialize};

use crate::words::{Chunk, Segment, Word};
use crate::{Error, Result};

/// A chunk flattened into one ordered word list, with back-references to the
/// originating segments.
///
/// `start`/`end` are chunk-local until paragraph assembly shifts them onto
/// the absolute timeline. Pipeline stages consume and return new values;
/// the caller's input chunks are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkGroup {
    pub chunk_index: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
    pub words: Vec<Word>,
    pub segments: Vec<Segment>,
    pub start: f64,
    pub end: f64,
}

/// Sort chunks by `chunk_index` and flatten each into a [`ChunkGroup`].
///
/// Chunks with no words (missing or empty segments) are skipped entirely.
/// The sort is stable, so duplicate indices keep their input order; duplicate
/// indices are an upstream error state this stage does not detect.
///
/// Word timing is validated here and nowhere else: non-finite timestamps or
/// `end < start` return [`Error::InvalidWord`] instead of letting NaN leak
/// into paragraph arithmetic.
pub fn flatten_chunks(chunks: &[Chunk]) -> Result<Vec<ChunkGroup>> {
    let mut ordered: Vec<&Chunk> = chunks.iter().collect();
    ordered.sort_by_key(|c| c.chunk_index);

    let mut groups = Vec::with_capacity(ordered.len());
    for chunk in ordered {
        let words: Vec<Word> = chunk
            .segments
            .iter()
            .flat_map(|s| s.words.iter().cloned())
            .collect();

        if words.is_empty() {
            tracing::debug!(chunk_index = chunk.chunk_index, "skipping empty chunk");
            continue;
        }

        for word in &words {
            validate_word(chunk.chunk_index, word)?;
        }

        let start = words[0].start;
        let end = words[words.len() - 1].end;

        groups.push(ChunkGroup {
            chunk_index: chunk.chunk_index,
            chunk_id: chunk.chunk_id.clone(),
            words,
            segments: chunk.segments.clone(),
            start,
            end,
        });
    }

    Ok(groups)
}

fn validate_word(chunk_index: u64, word: &Word) -> Result<()> {
    if !word.start.is_finite() || !word.end.is_finite() {
        return Err(Error::InvalidWord {
            chunk_index,
            reason: format!("word {:?} has a non-finite timestamp", word.word),
        });
    }
    if word.end < word.start {
        return Err(Error::InvalidWord {
            chunk_index,
            reason: format!(
                "word {:?} ends before it starts ({} < {})",
                word.word, word.end, word.start
            ),
        });
    }
    Ok(())
}
