//! Boundary deduplication: removing re-transcribed word runs at chunk seams.
//!
//! Chunked transcription engines commonly re-transcribe a short tail of
//! overlap-context audio at the start of the next chunk to preserve
//! word-boundary accuracy. The duplicates appear as near-verbatim word runs
//! exactly at chunk seams, nowhere else, so the search window is restricted
//! to the last/first `max_boundary_words` of neighboring chunks. That bounds
//! cost to O(chunks x max_boundary_words^2) and avoids false positives from
//! unrelated repetition deep inside a chunk.

use crate::flatten::ChunkGroup;
use crate::words::Word;

/// Default width of the overlap search window, in words.
pub const DEFAULT_MAX_BOUNDARY_WORDS: usize = 10;

/// Remove boundary overlaps between neighboring chunks.
///
/// The first chunk is always emitted unmodified. Every later chunk has its
/// head compared against the tail of the *already-processed* predecessor;
/// on a match, the overlapping words are dropped from the front of the later
/// chunk, so only the later occurrence is deleted and the first mention
/// survives. Only immediate neighbors are compared, even when a chunk ends
/// up empty.
///
/// A chunk fully consumed by deduplication stays in the output with zero
/// words and a zero time span: downstream consumers must tolerate empty
/// paragraphs rather than losing chunk-index continuity.
pub fn dedupe_boundaries(groups: Vec<ChunkGroup>, max_boundary_words: usize) -> Vec<ChunkGroup> {
    let mut out: Vec<ChunkGroup> = Vec::with_capacity(groups.len());

    for group in groups {
        let Some(prev) = out.last() else {
            out.push(group);
            continue;
        };

        let prev_tail = tail(&prev.words, max_boundary_words);
        let curr_head = head(&group.words, max_boundary_words);
        let overlap = overlap_len(prev_tail, curr_head);

        if overlap == 0 {
            out.push(group);
            continue;
        }

        tracing::debug!(
            chunk_index = group.chunk_index,
            removed = overlap,
            "trimmed boundary overlap"
        );
        out.push(trim_front(group, overlap));
    }

    out
}

fn tail(words: &[Word], n: usize) -> &[Word] {
    &words[words.len().saturating_sub(n)..]
}

fn head(words: &[Word], n: usize) -> &[Word] {
    &words[..n.min(words.len())]
}

/// Length of the longest matching suffix-of-tail / prefix-of-head.
///
/// Candidate lengths are scanned from the longest down to 1, stopping at the
/// first exact match. This greedy longest-match policy is load-bearing:
/// downstream paragraph boundaries depend on it, so it must not be replaced
/// with a globally optimal alignment.
fn overlap_len(prev_tail: &[Word], curr_head: &[Word]) -> usize {
    let max_len = prev_tail.len().min(curr_head.len());

    for len in (1..=max_len).rev() {
        let tail_slice = &prev_tail[prev_tail.len() - len..];
        let head_slice = &curr_head[..len];

        let matches = tail_slice
            .iter()
            .zip(head_slice)
            .all(|(a, b)| normalize_word(&a.word) == normalize_word(&b.word));

        if matches {
            return len;
        }
    }

    0
}

/// Return `group` with `n` words removed from the front and its local bounds
/// recomputed.
///
/// Segment back-references are provenance and stay untrimmed. When every
/// word is consumed, the span collapses to zero at the original end so the
/// cumulative-time accumulator is unaffected by the vanished chunk.
fn trim_front(group: ChunkGroup, n: usize) -> ChunkGroup {
    let words: Vec<Word> = group.words.into_iter().skip(n).collect();
    let (start, end) = match words.first() {
        Some(first) => (first.start, group.end),
        None => (group.end, group.end),
    };

    ChunkGroup {
        words,
        start,
        end,
        ..group
    }
}

/// Comparison form of a word: lowercased, letters and digits only.
///
/// Case-insensitive, punctuation-stripped comparison absorbs minor
/// re-transcription variance ("Hello," vs "hello") at the seam.
pub(crate) fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
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

    fn group(index: u64, words: Vec<Word>) -> ChunkGroup {
        let (start, end) = match (words.first(), words.last()) {
            (Some(f), Some(l)) => (f.start, l.end),
            _ => (0.0, 0.0),
        };
        ChunkGroup {
            chunk_index: index,
            chunk_id: None,
            words,
            segments: Vec::new(),
            start,
            end,
        }
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| word(t, i as f64 * 0.5, i as f64 * 0.5 + 0.4))
            .collect()
    }

    fn texts(group: &ChunkGroup) -> Vec<&str> {
        group.words.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn normalize_strips_case_and_punctuation() {
        assert_eq!(normalize_word("Hello,"), "hello");
        assert_eq!(normalize_word("don't"), "dont");
        assert_eq!(normalize_word("..."), "");
    }

    #[test]
    fn removes_overlap_from_the_later_chunk_only() {
        let a = group(0, words(&["so", "the", "quick", "brown"]));
        let b = group(1, words(&["the", "quick", "brown", "fox", "jumps"]));

        let out = dedupe_boundaries(vec![a, b], DEFAULT_MAX_BOUNDARY_WORDS);
        assert_eq!(texts(&out[0]), vec!["so", "the", "quick", "brown"]);
        assert_eq!(texts(&out[1]), vec!["fox", "jumps"]);
    }

    #[test]
    fn no_common_run_means_no_change() {
        let a = group(0, words(&["alpha", "beta"]));
        let b = group(1, words(&["gamma", "delta"]));

        let out = dedupe_boundaries(vec![a.clone(), b.clone()], DEFAULT_MAX_BOUNDARY_WORDS);
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn matching_ignores_case_and_punctuation() {
        let a = group(0, words(&["and", "then", "Hello,"]));
        let b = group(1, words(&["hello", "world"]));

        let out = dedupe_boundaries(vec![a, b], DEFAULT_MAX_BOUNDARY_WORDS);
        assert_eq!(texts(&out[1]), vec!["world"]);
    }

    #[test]
    fn prefers_the_longest_match() {
        // len 2 ("hill the") matches before the scan ever reaches len 1,
        // so both words go, not just the trailing "the".
        let a = group(0, words(&["over", "the", "hill", "the"]));
        let b = group(1, words(&["hill", "the", "end"]));

        let out = dedupe_boundaries(vec![a, b], DEFAULT_MAX_BOUNDARY_WORDS);
        assert_eq!(texts(&out[1]), vec!["end"]);
    }

    #[test]
    fn search_window_is_bounded() {
        // The overlap is 3 words but the window only exposes 2 of them.
        let a = group(0, words(&["a", "b", "c"]));
        let b = group(1, words(&["a", "b", "c", "d"]));

        // Window of 2 exposes tail [b c] vs head [a b]: no candidate matches.
        let out = dedupe_boundaries(vec![a, b], 2);
        assert_eq!(texts(&out[1]), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn fully_consumed_chunk_stays_with_zero_span() {
        let a = group(0, words(&["repeat", "after", "me"]));
        let b = group(1, words(&["repeat", "after", "me"]));

        let out = dedupe_boundaries(vec![a, b], DEFAULT_MAX_BOUNDARY_WORDS);
        assert_eq!(out.len(), 2);
        assert!(out[1].words.is_empty());
        assert_eq!(out[1].start, out[1].end);
    }

    #[test]
    fn only_immediate_neighbors_are_compared() {
        // Chunk 1 is fully consumed by chunk 0; chunk 2 repeats chunk 0's
        // tail but must be compared against (empty) chunk 1, not chunk 0.
        let a = group(0, words(&["one", "two"]));
        let b = group(1, words(&["one", "two"]));
        let c = group(2, words(&["one", "two", "three"]));

        let out = dedupe_boundaries(vec![a, b, c], DEFAULT_MAX_BOUNDARY_WORDS);
        assert!(out[1].words.is_empty());
        assert_eq!(texts(&out[2]), vec!["one", "two", "three"]);
    }

    #[test]
    fn trimmed_chunk_start_moves_to_first_surviving_word() {
        let a = group(0, words(&["x", "y"]));
        let mut b_words = words(&["y", "z"]);
        b_words[0].start = 0.0;
        b_words[0].end = 0.4;
        b_words[1].start = 0.5;
        b_words[1].end = 1.0;
        let b = group(1, b_words);

        let out = dedupe_boundaries(vec![a, b], DEFAULT_MAX_BOUNDARY_WORDS);
        assert_eq!(out[1].start, 0.5);
        assert_eq!(out[1].end, 1.0);
    }
}
