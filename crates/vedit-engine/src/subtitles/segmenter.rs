//! Greedy word-to-caption packing.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vedit_models::{SubtitleEntry, TranscriptionSegment, WordTiming};

/// Default maximum caption line length, characters.
pub const DEFAULT_MAX_CHARS_PER_LINE: usize = 42;

/// Default maximum caption duration, seconds.
pub const DEFAULT_MAX_DURATION_SECS: f64 = 5.0;

/// Packing limits for the subtitle segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubtitleOptions {
    /// Maximum characters per caption line
    #[serde(default = "default_max_chars_per_line")]
    pub max_chars_per_line: usize,
    /// Maximum caption duration in seconds
    #[serde(default = "default_max_duration")]
    pub max_duration: f64,
}

fn default_max_chars_per_line() -> usize {
    DEFAULT_MAX_CHARS_PER_LINE
}

fn default_max_duration() -> f64 {
    DEFAULT_MAX_DURATION_SECS
}

impl Default for SubtitleOptions {
    fn default() -> Self {
        Self {
            max_chars_per_line: DEFAULT_MAX_CHARS_PER_LINE,
            max_duration: DEFAULT_MAX_DURATION_SECS,
        }
    }
}

/// Pack word-timestamped transcript segments into caption entries.
///
/// Within each segment, consecutive words accumulate greedily into one
/// entry; the entry closes before a word that would push the text past
/// `max_chars_per_line` or the entry past `max_duration`, and that word
/// starts the next entry. Segments without word-level timestamps cannot be
/// packed and are skipped (a defined no-op, not an error). Output preserves
/// segment order and within-segment word order.
pub fn pack_segments(
    segments: &[TranscriptionSegment],
    options: &SubtitleOptions,
) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for segment in segments {
        match &segment.words {
            Some(words) if !words.is_empty() => pack_words(words, options, &mut entries),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            skipped,
            total = segments.len(),
            "Segments without word timing skipped"
        );
    }

    entries
}

fn pack_words(words: &[WordTiming], options: &SubtitleOptions, entries: &mut Vec<SubtitleEntry>) {
    let mut current: Option<SubtitleEntry> = None;

    for word in words {
        match current.as_mut() {
            None => current = Some(entry_from_word(word)),
            Some(entry) => {
                let candidate_len = entry.text.chars().count() + 1 + word.word.chars().count();
                let over_length = candidate_len > options.max_chars_per_line;
                let over_duration = word.end - entry.start > options.max_duration;

                if over_length || over_duration {
                    entries.push(current.take().unwrap_or_else(|| entry_from_word(word)));
                    current = Some(entry_from_word(word));
                } else {
                    entry.text.push(' ');
                    entry.text.push_str(&word.word);
                    entry.end = word.end;
                }
            }
        }
    }

    if let Some(entry) = current {
        entries.push(entry);
    }
}

fn entry_from_word(word: &WordTiming) -> SubtitleEntry {
    SubtitleEntry {
        start: word.start,
        end: word.end,
        text: word.word.clone(),
    }
}
