//! Blink detection from tracker confidence.
//!
//! A blink interval opens when confidence drops below the threshold and
//! closes at the first subsequent frame where confidence recovers. The
//! threshold has no documented derivation in the source tracker; it is kept
//! as a named, overridable constant.

use vedit_models::{BlinkInterval, EyeTrackingFrame};

/// Confidence below which the eyes are presumed closed.
pub const BLINK_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Detect blink intervals using [`BLINK_CONFIDENCE_THRESHOLD`].
pub fn detect_blinks(frames: &[EyeTrackingFrame]) -> Vec<BlinkInterval> {
    detect_blinks_with_threshold(frames, BLINK_CONFIDENCE_THRESHOLD)
}

/// Detect blink intervals with a caller-supplied confidence threshold.
///
/// An interval still open at the end of the stream closes at the last
/// frame's timestamp.
pub fn detect_blinks_with_threshold(
    frames: &[EyeTrackingFrame],
    threshold: f64,
) -> Vec<BlinkInterval> {
    let mut blinks = Vec::new();
    let mut open_since: Option<f64> = None;

    for frame in frames {
        match (open_since, frame.confidence < threshold) {
            (None, true) => open_since = Some(frame.timestamp),
            (Some(start), false) => {
                blinks.push(BlinkInterval {
                    start,
                    end: frame.timestamp,
                });
                open_since = None;
            }
            _ => {}
        }
    }

    if let (Some(start), Some(last)) = (open_since, frames.last()) {
        blinks.push(BlinkInterval {
            start,
            end: last.timestamp,
        });
    }

    blinks
}
