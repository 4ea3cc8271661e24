//! Subtitle segmentation engine.
//!
//! Packs word-level transcript timestamps into readable caption entries
//! and serializes them to the common caption formats. Pure and
//! synchronous; segments without word timing are skipped, not rejected.

pub mod export;
pub mod segmenter;

pub use export::{export_subtitles, SubtitleFormat};
pub use segmenter::{
    pack_segments, SubtitleOptions, DEFAULT_MAX_CHARS_PER_LINE, DEFAULT_MAX_DURATION_SECS,
};
