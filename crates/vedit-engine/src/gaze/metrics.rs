//! Aggregate gaze metrics.

use vedit_models::{EyeTrackingFrame, GazeMetrics, Vec3};

use crate::gaze::blink::detect_blinks;

/// Euclidean deviation from straight-ahead below which a frame counts as
/// eye contact. Inherited from the source tracker without a documented
/// derivation; overridable via [`compute_metrics_with_threshold`].
pub const EYE_CONTACT_DEVIATION_THRESHOLD: f64 = 0.26;

/// Compute aggregate metrics using [`EYE_CONTACT_DEVIATION_THRESHOLD`].
pub fn compute_metrics(frames: &[EyeTrackingFrame]) -> GazeMetrics {
    compute_metrics_with_threshold(frames, EYE_CONTACT_DEVIATION_THRESHOLD)
}

/// Compute aggregate metrics with a caller-supplied eye-contact threshold.
pub fn compute_metrics_with_threshold(
    frames: &[EyeTrackingFrame],
    eye_contact_threshold: f64,
) -> GazeMetrics {
    if frames.is_empty() {
        return GazeMetrics {
            average_confidence: 0.0,
            eye_contact_percentage: 0.0,
            blink_count: 0,
            average_gaze_deviation: 0.0,
        };
    }

    let total = frames.len() as f64;
    let mut confidence_sum = 0.0;
    let mut deviation_sum = 0.0;
    let mut eye_contact_frames = 0usize;

    for frame in frames {
        confidence_sum += frame.confidence;

        let deviation = frame.gaze_direction.distance(&Vec3::FORWARD);
        deviation_sum += deviation;
        if deviation < eye_contact_threshold {
            eye_contact_frames += 1;
        }
    }

    GazeMetrics {
        average_confidence: confidence_sum / total,
        eye_contact_percentage: 100.0 * eye_contact_frames as f64 / total,
        blink_count: detect_blinks(frames).len(),
        average_gaze_deviation: deviation_sum / total,
    }
}
