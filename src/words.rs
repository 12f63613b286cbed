use serde::{Deserialize, Serialize};

/// A single recognized word with chunk-local timing, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl Word {
    /// Copy of this word with both timestamps shifted by `offset` seconds.
    pub fn shifted(&self, offset: f64) -> Word {
        Word {
            word: self.word.clone(),
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// A contiguous recognized utterance within one chunk.
///
/// `start`/`end` equal the first/last word's bounds when words are present.
/// `text` is carried opaquely when the upstream engine emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub words: Vec<Word>,
    pub start: f64,
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Segment {
    /// Copy of this segment with all timing (its own and its words') shifted
    /// by `offset` seconds.
    pub fn shifted(&self, offset: f64) -> Segment {
        Segment {
            words: self.words.iter().map(|w| w.shifted(offset)).collect(),
            start: self.start + offset,
            end: self.end + offset,
            text: self.text.clone(),
        }
    }
}

/// One independently transcribed unit of audio, as produced by the upload /
/// transcription pipeline.
///
/// `chunk_index` is authoritative for ordering: chunks may arrive in any
/// array order and are stably sorted by this field before processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub chunk_index: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}
