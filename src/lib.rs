//! `seam` is a small, focused library for merging chunked speech
//! transcription output into one coherent transcript.
//!
//! Speech-to-text engines that chunk live audio re-transcribe a short tail
//! of overlap-context audio at the start of the next chunk, producing
//! near-verbatim duplicate word runs at chunk seams. This crate provides:
//! - A word-level data model for chunked transcription results
//! - Boundary overlap detection and removal at chunk seams
//! - Paragraph assembly with absolute-timeline timestamps
//! - Transcript statistics
//! - A plugin registry (search, replace, highlight, summaries, exports)
//!
//! The library is designed to be used by both CLI tools and long-running
//! services, with an emphasis on clarity, pure transformations, and minimal
//! surprises.

// High-level API (most consumers should start here).
pub mod opts;
pub mod preprocessor;

// Input data model shared by both strategies.
pub mod words;

// The boundary pipeline: flatten -> dedup -> assemble.
pub mod dedup;
pub mod flatten;
pub mod paragraphs;

// The passthrough strategy (raw engine output, no dedup).
pub mod passthrough;

// Derived transcript statistics.
pub mod stats;

// Export renderers for the assembled paragraph list.
pub mod export;

// Plugin registry and built-in plugins.
pub mod plugins;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, Result};
