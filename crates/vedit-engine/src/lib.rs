#![deny(unreachable_patterns)]
//! Pure computation engines for video composition.
//!
//! This crate provides:
//! - Timeline editing: clip ops, collision detection, auto-arrange,
//!   validation and deterministic export
//! - Gaze correction: target redirection, recursive smoothing, blink
//!   detection, metrics and heatmaps
//! - Subtitle segmentation: greedy word packing and caption serialization
//!
//! Every operation is synchronous and side-effect free; orchestration,
//! persistence and concurrency live in the service layer.

pub mod error;
pub mod gaze;
pub mod subtitles;
pub mod timeline;

pub use error::{EngineError, EngineResult};
pub use gaze::{analyze, GazeAnalysis};
pub use subtitles::{export_subtitles, pack_segments, SubtitleFormat, SubtitleOptions};
pub use timeline::{
    auto_arrange, detect_collisions, export_timeline, timeline_duration, validate, Collision,
    TimelineExportFormat, ValidationReport,
};
