//! Eye-tracking frame and gaze-correction models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vector::Vec3;

/// Head orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeadPose {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

/// One sampled frame of eye-tracking output.
///
/// Produced by the external tracking collaborator, one per sampled video
/// frame, ordered by timestamp/frame number. The gaze engine rewrites
/// `gaze_direction` and preserves everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EyeTrackingFrame {
    /// Timestamp in seconds
    pub timestamp: f64,

    /// Frame number in the source video
    pub frame_number: u64,

    /// Left eye position in scene space
    pub left_eye: Vec3,

    /// Right eye position in scene space
    pub right_eye: Vec3,

    /// Unit vector of where the eyes point
    pub gaze_direction: Vec3,

    /// Tracker confidence, 0.0-1.0
    pub confidence: f64,

    /// Head orientation, when the tracker provides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_pose: Option<HeadPose>,
}

impl EyeTrackingFrame {
    /// Midpoint of the two eye positions.
    pub fn eye_midpoint(&self) -> Vec3 {
        self.left_eye.midpoint(&self.right_eye)
    }

    /// Replace the gaze direction, keeping all other fields.
    pub fn with_gaze(&self, gaze_direction: Vec3) -> Self {
        Self {
            gaze_direction,
            ..self.clone()
        }
    }
}

/// Configuration for a gaze-correction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GazeConfig {
    /// Point in scene space the corrected gaze should aim at
    pub target_position: Vec3,

    /// Blend factor between original and desired gaze, 0.0-1.0
    #[serde(default = "default_correction_strength")]
    pub correction_strength: f64,

    /// First-order temporal smoothing factor, 0.0-1.0
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Skip correction inside detected blink intervals
    #[serde(default = "default_preserve_blinking")]
    pub preserve_blinking: bool,

    /// Source video framerate
    #[serde(default = "default_framerate")]
    pub framerate: u32,
}

fn default_correction_strength() -> f64 {
    0.8
}

fn default_smoothing() -> f64 {
    0.5
}

fn default_preserve_blinking() -> bool {
    true
}

fn default_framerate() -> u32 {
    30
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            target_position: Vec3::FORWARD,
            correction_strength: default_correction_strength(),
            smoothing: default_smoothing(),
            preserve_blinking: default_preserve_blinking(),
            framerate: default_framerate(),
        }
    }
}

/// A time range where the eyes are presumed closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BlinkInterval {
    /// Timestamp of the first low-confidence frame, seconds
    pub start: f64,

    /// Timestamp where confidence recovered, seconds
    pub end: f64,
}

impl BlinkInterval {
    /// Whether `timestamp` falls inside the interval (inclusive of both ends).
    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

/// Aggregate metrics over a tracked frame sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GazeMetrics {
    /// Mean tracker confidence, 0.0-1.0
    pub average_confidence: f64,

    /// Share of frames whose gaze stays near straight-ahead, 0-100
    pub eye_contact_percentage: f64,

    /// Number of detected blink intervals
    pub blink_count: usize,

    /// Mean Euclidean deviation of gaze from straight-ahead
    pub average_gaze_deviation: f64,
}
