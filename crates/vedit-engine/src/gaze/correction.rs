//! Per-frame gaze blending and temporal smoothing.

use vedit_models::{BlinkInterval, EyeTrackingFrame, GazeConfig, Vec3};

use crate::error::{EngineError, EngineResult};

/// Direction from the midpoint of the two eyes toward `target`, normalized.
///
/// Fails with [`EngineError::GazeDegenerate`] when the target coincides with
/// the eye midpoint (zero-length direction).
pub fn calculate_gaze_to_target(
    left_eye: &Vec3,
    right_eye: &Vec3,
    target: &Vec3,
) -> EngineResult<Vec3> {
    let midpoint = left_eye.midpoint(right_eye);
    target
        .sub(&midpoint)
        .normalized()
        .ok_or(EngineError::GazeDegenerate)
}

/// Blend the original gaze toward the desired gaze:
/// `original * (1 - strength) + desired * strength`.
pub fn blend(original: &Vec3, desired: &Vec3, strength: f64) -> Vec3 {
    original.blend(desired, strength.clamp(0.0, 1.0))
}

/// First-order recursive smoothing:
/// `previous * smoothing + current * (1 - smoothing)`.
///
/// `previous` is the prior frame's already-corrected output, not its raw
/// input; applying this per frame yields a recursive filter, not a
/// windowed average.
pub fn smooth(previous: &Vec3, current: &Vec3, smoothing: f64) -> Vec3 {
    let smoothing = smoothing.clamp(0.0, 1.0);
    previous.blend(current, 1.0 - smoothing)
}

/// Correct a frame sequence toward the configured target.
///
/// Frames are processed in ascending timestamp order. Each frame's desired
/// gaze is blended with `correction_strength`, then smoothed against the
/// previous corrected frame. A zero correction strength is a no-op and
/// returns the input unchanged.
pub fn correct_sequence(frames: &[EyeTrackingFrame], config: &GazeConfig) -> Vec<EyeTrackingFrame> {
    correct_sequence_skipping(frames, config, &[])
}

/// [`correct_sequence`] variant that leaves frames inside the given blink
/// intervals uncorrected. Skipped frames keep their original gaze and still
/// feed the smoothing recursion, so correction ramps back in smoothly after
/// a blink.
pub fn correct_sequence_skipping(
    frames: &[EyeTrackingFrame],
    config: &GazeConfig,
    blinks: &[BlinkInterval],
) -> Vec<EyeTrackingFrame> {
    if config.correction_strength == 0.0 {
        return frames.to_vec();
    }

    let mut order: Vec<usize> = (0..frames.len()).collect();
    order.sort_by(|&a, &b| {
        frames[a]
            .timestamp
            .partial_cmp(&frames[b].timestamp)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut corrected: Vec<Option<EyeTrackingFrame>> = vec![None; frames.len()];
    let mut previous: Option<Vec3> = None;

    for idx in order {
        let frame = &frames[idx];

        let gaze = if blinks.iter().any(|b| b.contains(frame.timestamp)) {
            frame.gaze_direction
        } else {
            let desired = match calculate_gaze_to_target(
                &frame.left_eye,
                &frame.right_eye,
                &config.target_position,
            ) {
                Ok(direction) => direction,
                // Degenerate geometry: hold the previous corrected direction,
                // or straight-ahead when there is none yet
                Err(_) => previous.unwrap_or(Vec3::FORWARD),
            };

            let blended = blend(&frame.gaze_direction, &desired, config.correction_strength);
            match previous {
                Some(prev) => smooth(&prev, &blended, config.smoothing),
                None => blended,
            }
        };

        previous = Some(gaze);
        corrected[idx] = Some(frame.with_gaze(gaze));
    }

    corrected.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn config(strength: f64, smoothing: f64) -> GazeConfig {
        GazeConfig {
            target_position: Vec3::new(0.0, 0.0, 1.0),
            correction_strength: strength,
            smoothing,
            preserve_blinking: false,
            framerate: 30,
        }
    }

    #[test]
    fn test_gaze_to_target_is_unit() {
        let gaze = calculate_gaze_to_target(
            &Vec3::new(-0.03, 0.0, 0.0),
            &Vec3::new(0.03, 0.0, 0.0),
            &Vec3::new(0.0, 1.0, 1.0),
        )
        .unwrap();
        assert!((gaze.magnitude() - 1.0).abs() < 1e-12);
        assert!(gaze.y > 0.0 && gaze.z > 0.0);
    }

    #[test]
    fn test_gaze_to_target_degenerate() {
        let err = calculate_gaze_to_target(
            &Vec3::new(-1.0, 0.0, 0.0),
            &Vec3::new(1.0, 0.0, 0.0),
            &Vec3::new(0.0, 0.0, 0.0),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::GazeDegenerate);
    }

    #[test]
    fn test_blend_endpoints() {
        let original = Vec3::new(1.0, 0.0, 0.0);
        let desired = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(blend(&original, &desired, 0.0), original);
        assert_eq!(blend(&original, &desired, 1.0), desired);
    }

    #[test]
    fn test_zero_strength_is_noop() {
        let frames = vec![
            frame(0.0, Vec3::new(0.3, 0.1, 0.9), 0.9),
            frame(0.1, Vec3::new(0.2, 0.0, 0.95), 0.9),
        ];
        let out = correct_sequence(&frames, &config(0.0, 0.7));
        assert_eq!(out, frames);
    }

    #[test]
    fn test_full_strength_no_smoothing_hits_target() {
        let frames = vec![
            frame(0.0, Vec3::new(0.5, 0.0, 0.5), 0.9),
            frame(0.1, Vec3::new(-0.5, 0.2, 0.5), 0.9),
        ];
        let cfg = config(1.0, 0.0);
        let out = correct_sequence(&frames, &cfg);

        for (input, output) in frames.iter().zip(&out) {
            let desired = calculate_gaze_to_target(
                &input.left_eye,
                &input.right_eye,
                &cfg.target_position,
            )
            .unwrap();
            assert!(output.gaze_direction.distance(&desired) < 1e-12);
        }
    }

    #[test]
    fn test_smoothing_uses_previous_corrected_output() {
        let frames = vec![
            frame(0.0, Vec3::new(1.0, 0.0, 0.0), 0.9),
            frame(0.1, Vec3::new(1.0, 0.0, 0.0), 0.9),
        ];
        let cfg = config(1.0, 0.5);
        let out = correct_sequence(&frames, &cfg);

        let desired = calculate_gaze_to_target(
            &frames[0].left_eye,
            &frames[0].right_eye,
            &cfg.target_position,
        )
        .unwrap();
        // First frame has no predecessor: pure blend
        assert!(out[0].gaze_direction.distance(&desired) < 1e-12);
        // Second frame: prev * 0.5 + blended * 0.5; blended equals desired,
        // and prev equals desired, so the output stays at desired
        assert!(out[1].gaze_direction.distance(&desired) < 1e-12);
    }

    #[test]
    fn test_smoothing_recursion_not_windowed() {
        let frames = vec![
            frame(0.0, Vec3::new(0.0, 0.0, 1.0), 0.9),
            frame(0.1, Vec3::new(1.0, 0.0, 0.0), 0.9),
            frame(0.2, Vec3::new(1.0, 0.0, 0.0), 0.9),
        ];
        // Zero strength would be a no-op; use a tiny strength so blending
        // barely moves the gaze and smoothing dominates
        let cfg = config(1e-9, 0.5);
        let out = correct_sequence(&frames, &cfg);

        // Frame 1: ~0.5*(0,0,1) + 0.5*(1,0,0)
        assert!((out[1].gaze_direction.x - 0.5).abs() < 1e-6);
        // Frame 2 smooths against frame 1's *output* (x=0.5), not its raw
        // input (x=1.0): 0.5*0.5 + 0.5*1.0 = 0.75
        assert!((out[2].gaze_direction.x - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_frames_processed_in_timestamp_order() {
        let a = frame(0.1, Vec3::new(1.0, 0.0, 0.0), 0.9);
        let b = frame(0.0, Vec3::new(0.0, 1.0, 0.0), 0.9);
        let shuffled = vec![a.clone(), b.clone()];
        let sorted = vec![b, a];

        let cfg = config(0.5, 0.5);
        let out_shuffled = correct_sequence(&shuffled, &cfg);
        let out_sorted = correct_sequence(&sorted, &cfg);

        // Same frames, same corrections, independent of input order
        assert!(out_shuffled[0]
            .gaze_direction
            .distance(&out_sorted[1].gaze_direction)
            .abs()
            < 1e-12);
        assert!(out_shuffled[1]
            .gaze_direction
            .distance(&out_sorted[0].gaze_direction)
            .abs()
            < 1e-12);
    }

    #[test]
    fn test_blink_frames_skipped() {
        let frames = vec![
            frame(0.0, Vec3::new(0.4, 0.0, 0.9), 0.9),
            frame(0.1, Vec3::new(0.4, 0.0, 0.9), 0.1),
            frame(0.2, Vec3::new(0.4, 0.0, 0.9), 0.9),
        ];
        let blinks = vec![BlinkInterval {
            start: 0.1,
            end: 0.1,
        }];
        let out = correct_sequence_skipping(&frames, &config(1.0, 0.0), &blinks);

        assert_eq!(out[1].gaze_direction, frames[1].gaze_direction);
        assert_ne!(out[0].gaze_direction, frames[0].gaze_direction);
        assert_ne!(out[2].gaze_direction, frames[2].gaze_direction);
    }

    #[test]
    fn test_degenerate_target_holds_previous() {
        // Target sits exactly at the eye midpoint: direction is undefined
        let mut f0 = frame(0.0, Vec3::new(0.2, 0.0, 0.9), 0.9);
        f0.left_eye = Vec3::new(-1.0, 0.0, 1.0);
        f0.right_eye = Vec3::new(1.0, 0.0, 1.0);

        let cfg = GazeConfig {
            target_position: Vec3::new(0.0, 0.0, 1.0),
            correction_strength: 1.0,
            smoothing: 0.0,
            preserve_blinking: false,
            framerate: 30,
        };
        let out = correct_sequence(&[f0], &cfg);
        // No previous frame: falls back to straight-ahead, never NaN
        assert_eq!(out[0].gaze_direction, Vec3::FORWARD);
        assert!(out[0].gaze_direction.is_finite());
    }
}
