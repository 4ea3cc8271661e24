//! Transcript and subtitle models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single word with its timing inside a transcription segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordTiming {
    /// The word text
    pub word: String,

    /// Word start time in seconds
    pub start: f64,

    /// Word end time in seconds
    pub end: f64,

    /// Recognizer confidence, 0.0-1.0
    #[serde(default = "default_word_confidence")]
    pub confidence: f64,
}

fn default_word_confidence() -> f64 {
    1.0
}

impl WordTiming {
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
            confidence: 1.0,
        }
    }
}

/// A transcription segment as produced by the external transcription service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptionSegment {
    /// Segment id within the transcript
    pub id: u32,

    /// Full segment text
    pub text: String,

    /// Segment start time in seconds
    pub start: f64,

    /// Segment end time in seconds
    pub end: f64,

    /// Word-level timestamps; absent when the service returned none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<WordTiming>>,
}

impl TranscriptionSegment {
    /// Whether this segment carries word-level timing and can be packed
    /// into caption entries.
    pub fn has_word_timing(&self) -> bool {
        self.words.as_ref().is_some_and(|w| !w.is_empty())
    }
}

/// A timed caption derived from word-level transcript timestamps.
///
/// Entries are derived data: regenerated wholesale by the segmenter,
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubtitleEntry {
    /// Caption start time in seconds
    pub start: f64,

    /// Caption end time in seconds
    pub end: f64,

    /// Caption text
    pub text: String,
}
