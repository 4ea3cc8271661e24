//! Automatic clip arrangement.

use std::collections::HashMap;

use tracing::debug;
use vedit_models::Clip;

/// Shift clips forward so no two clips on the same track overlap.
///
/// Clips are processed in ascending `start_time` order (stable: ties keep
/// their original order). One cursor per track remembers the last occupied
/// end time; a clip starting before its track's cursor is shifted forward
/// by exactly the shortfall, preserving its duration. Clips that already
/// fit are untouched, which makes the operation idempotent.
pub fn auto_arrange(clips: &[Clip]) -> Vec<Clip> {
    let mut order: Vec<usize> = (0..clips.len()).collect();
    order.sort_by(|&a, &b| {
        clips[a]
            .start_time
            .partial_cmp(&clips[b].start_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut cursors: HashMap<u32, f64> = HashMap::new();
    let mut arranged: Vec<Option<Clip>> = vec![None; clips.len()];
    let mut shifted = 0usize;

    for idx in order {
        let mut clip = clips[idx].clone();
        let cursor = cursors.entry(clip.track_index).or_insert(0.0);

        if clip.start_time < *cursor {
            let shift = *cursor - clip.start_time;
            clip.start_time += shift;
            clip.end_time += shift;
            shifted += 1;
        }

        *cursor = clip.end_time;
        arranged[idx] = Some(clip);
    }

    if shifted > 0 {
        debug!(shifted, total = clips.len(), "Auto-arrange moved clips");
    }

    arranged.into_iter().flatten().collect()
}
