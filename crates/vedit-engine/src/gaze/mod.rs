//! Gaze correction engine.
//!
//! Consumes tracked eye-position frames plus a target/strength/smoothing
//! config and produces corrected gaze directions, blink intervals,
//! aggregate metrics and a spatial heatmap. Pure and synchronous; the
//! caller owns persistence and per-video serialization.

pub mod blink;
pub mod correction;
pub mod heatmap;
pub mod metrics;

pub use blink::{detect_blinks, detect_blinks_with_threshold, BLINK_CONFIDENCE_THRESHOLD};
pub use correction::{
    blend, calculate_gaze_to_target, correct_sequence, correct_sequence_skipping, smooth,
};
pub use heatmap::{heatmap, heatmap_counts, DEFAULT_HEATMAP_GRID_SIZE};
pub use metrics::{
    compute_metrics, compute_metrics_with_threshold, EYE_CONTACT_DEVIATION_THRESHOLD,
};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vedit_models::{BlinkInterval, EyeTrackingFrame, GazeConfig, GazeMetrics};

/// Full output of one gaze-correction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazeAnalysis {
    /// Frames with `gaze_direction` rewritten, all other fields preserved
    pub corrected_frames: Vec<EyeTrackingFrame>,

    /// Detected blink intervals
    pub blink_intervals: Vec<BlinkInterval>,

    /// Aggregate metrics over the corrected frames
    pub metrics: GazeMetrics,

    /// Normalized gaze heatmap, `[y][x]` in `[0, 1]`
    pub heatmap: Vec<Vec<f64>>,
}

/// Run the full gaze pipeline: blink detection, correction (skipping blink
/// frames when `preserve_blinking` is set), metrics and heatmap.
pub fn analyze(frames: &[EyeTrackingFrame], config: &GazeConfig) -> GazeAnalysis {
    let blink_intervals = detect_blinks(frames);

    let corrected_frames = if config.preserve_blinking {
        correction::correct_sequence_skipping(frames, config, &blink_intervals)
    } else {
        correction::correct_sequence(frames, config)
    };

    debug!(
        frames = frames.len(),
        blinks = blink_intervals.len(),
        strength = config.correction_strength,
        "Gaze analysis complete"
    );

    let metrics = compute_metrics(&corrected_frames);
    let heatmap = heatmap::heatmap(&corrected_frames, DEFAULT_HEATMAP_GRID_SIZE);

    GazeAnalysis {
        corrected_frames,
        blink_intervals,
        metrics,
        heatmap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vedit_models::Vec3;

    fn frame(timestamp: f64, gaze: Vec3, confidence: f64) -> EyeTrackingFrame {
        EyeTrackingFrame {
            timestamp,
            frame_number: (timestamp * 30.0) as u64,
            left_eye: Vec3::new(-0.03, 0.0, 0.0),
            right_eye: Vec3::new(0.03, 0.0, 0.0),
            gaze_direction: gaze,
            confidence,
            head_pose: None,
        }
    }

    #[test]
    fn test_analyze_preserves_non_gaze_fields() {
        let frames = vec![frame(0.0, Vec3::new(0.4, 0.0, 0.8), 0.77)];
        let analysis = analyze(&frames, &GazeConfig::default());

        assert_eq!(analysis.corrected_frames.len(), 1);
        assert_eq!(analysis.corrected_frames[0].timestamp, 0.0);
        assert_eq!(analysis.corrected_frames[0].confidence, 0.77);
        assert_eq!(analysis.corrected_frames[0].left_eye, frames[0].left_eye);
    }

    #[test]
    fn test_analyze_preserve_blinking_skips_blink_frames() {
        let frames = vec![
            frame(0.0, Vec3::new(0.4, 0.0, 0.8), 0.9),
            frame(0.1, Vec3::new(0.4, 0.0, 0.8), 0.1),
            frame(0.2, Vec3::new(0.4, 0.0, 0.8), 0.9),
        ];
        let config = GazeConfig {
            correction_strength: 1.0,
            smoothing: 0.0,
            preserve_blinking: true,
            ..GazeConfig::default()
        };
        let analysis = analyze(&frames, &config);

        assert_eq!(analysis.blink_intervals.len(), 1);
        assert_eq!(analysis.metrics.blink_count, 1);
        // The blink frame keeps its original gaze
        assert_eq!(
            analysis.corrected_frames[1].gaze_direction,
            frames[1].gaze_direction
        );
    }

    #[test]
    fn test_analyze_heatmap_shape() {
        let frames = vec![frame(0.0, Vec3::FORWARD, 0.9)];
        let analysis = analyze(&frames, &GazeConfig::default());
        assert_eq!(analysis.heatmap.len(), DEFAULT_HEATMAP_GRID_SIZE);
        assert_eq!(analysis.heatmap[0].len(), DEFAULT_HEATMAP_GRID_SIZE);
    }
}
