use serde::{Deserialize, Serialize};

use crate::dedup::DEFAULT_MAX_BOUNDARY_WORDS;

/// The preprocessing strategy applied to a chunk list.
///
/// Strategy is an explicit constructor parameter rather than a process-wide
/// default, so both strategies can run side by side in one process (e.g.
/// raw-vs-deduplicated comparison in tests or debug tooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Deduplicate chunk-boundary overlaps and assemble paragraphs on the
    /// absolute timeline.
    #[default]
    Boundary,

    /// Group raw engine output by chunk with no deduplication and no
    /// timestamp adjustment. Debug/reference mode.
    ///
    /// `simple` is accepted as a legacy alias.
    #[serde(alias = "simple")]
    #[cfg_attr(feature = "cli", value(alias = "simple"))]
    Passthrough,
}

/// Options that control how a chunk list is preprocessed.
///
/// This struct represents *library-level configuration*, not CLI flags
/// directly. The CLI is responsible for mapping user input into this type so
/// that other frontends (services, tests, batch jobs) can construct options
/// programmatically.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Which preprocessing strategy to run.
    pub strategy: Strategy,

    /// Width of the boundary overlap search window, in words.
    ///
    /// Only the last `max_boundary_words` of one chunk and the first
    /// `max_boundary_words` of the next are ever compared; unrelated word
    /// repetition deeper inside a chunk can never trigger a trim.
    pub max_boundary_words: usize,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            strategy: Strategy::Boundary,
            max_boundary_words: DEFAULT_MAX_BOUNDARY_WORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_boundary_with_ten_word_window() {
        let opts = Opts::default();
        assert_eq!(opts.strategy, Strategy::Boundary);
        assert_eq!(opts.max_boundary_words, 10);
    }

    #[test]
    fn simple_parses_as_passthrough() -> anyhow::Result<()> {
        let strategy: Strategy = serde_json::from_str(r#""simple""#)?;
        assert_eq!(strategy, Strategy::Passthrough);
        Ok(())
    }
}
