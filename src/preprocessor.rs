//! High-level API for preprocessing chunked transcription results.
//!
//! We expose a single, ergonomic entry point (`Preprocessor`) that wires the
//! lower-level flattening, deduplication, assembly, and statistics modules.
//!
//! The intent is:
//! - Callers configure once via `Opts` (strategy + boundary window).
//! - `process` is a pure function of its input: no I/O, no shared state,
//!   deterministic apart from fresh paragraph ids.
//! - Re-running on an updated chunk list is idempotent given identical input.

use serde::{Deserialize, Serialize};

use crate::opts::{Opts, Strategy};
use crate::paragraphs::Paragraph;
use crate::stats::Stats;
use crate::words::Chunk;
use crate::{dedup, flatten, paragraphs, passthrough, stats};
use crate::Result;

/// The output contract consumed by editor and export collaborators.
///
/// The two segment counts let callers report how many raw segments existed
/// versus how many survived into the paragraph structure ("N duplicate
/// segments removed"); the boundary strategy trims at word granularity
/// internally, so these are segment-level approximations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutput {
    pub paragraphs: Vec<Paragraph>,
    pub stats: Stats,
    pub original_segment_count: usize,
    pub processed_segment_count: usize,
}

/// The main preprocessing entry point.
///
/// Construct once with the desired strategy, then call [`process`] for each
/// batch of chunks. The input slice is never mutated; every stage copies
/// before sorting or trimming.
///
/// [`process`]: Preprocessor::process
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    opts: Opts,
}

impl Preprocessor {
    pub fn new(opts: Opts) -> Self {
        Self { opts }
    }

    /// Convenience constructor for a given strategy with default options.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(Opts {
            strategy,
            ..Opts::default()
        })
    }

    /// Access the configured options.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Run the configured strategy over a full batch of chunks.
    ///
    /// The batch must be complete: boundary comparison needs each chunk's
    /// predecessor, so this is strictly batch-oriented rather than
    /// streaming.
    pub fn process(&self, chunks: &[Chunk]) -> Result<ProcessOutput> {
        let original_segment_count = chunks.iter().map(|c| c.segments.len()).sum();

        let paragraphs = match self.opts.strategy {
            Strategy::Boundary => {
                let groups = flatten::flatten_chunks(chunks)?;
                let deduped = dedup::dedupe_boundaries(groups, self.opts.max_boundary_words);
                paragraphs::assemble(deduped)
            }
            Strategy::Passthrough => passthrough::organize(chunks)?,
        };

        let processed_segment_count = paragraphs.iter().map(|p| p.segments.len()).sum();
        let stats = stats::compute(&paragraphs);

        tracing::debug!(
            strategy = ?self.opts.strategy,
            chunks = chunks.len(),
            paragraphs = paragraphs.len(),
            original_segment_count,
            processed_segment_count,
            "preprocessed chunk batch"
        );

        Ok(ProcessOutput {
            paragraphs,
            stats,
            original_segment_count,
            processed_segment_count,
        })
    }
}
