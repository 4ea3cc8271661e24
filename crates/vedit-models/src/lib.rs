//! Shared data models for the vedit composition backend.
//!
//! This crate provides Serde-serializable types for:
//! - Timeline clips, tracks and effects
//! - Eye-tracking frames and gaze-correction configuration
//! - Transcription segments and subtitle entries
//! - Caption-stamp formatting

pub mod clip;
pub mod timestamp;
pub mod tracking;
pub mod transcript;
pub mod vector;
pub mod video;

// Re-export common types
pub use clip::{Clip, ClipId, ClipTransitions, ClipType, Effect, Transition};
pub use tracking::{BlinkInterval, EyeTrackingFrame, GazeConfig, GazeMetrics, HeadPose};
pub use transcript::{SubtitleEntry, TranscriptionSegment, WordTiming};
pub use vector::Vec3;
pub use video::VideoId;
