//! Same-track collision detection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vedit_models::{Clip, ClipId};

/// A detected overlap between two clips on the same track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    pub clip1: ClipId,
    pub clip2: ClipId,
    pub track_index: u32,
    pub overlap_start: f64,
    pub overlap_end: f64,
}

impl Collision {
    /// Length of the overlapping region in seconds.
    pub fn overlap_duration(&self) -> f64 {
        self.overlap_end - self.overlap_start
    }
}

/// Detect all pairwise overlaps within each track.
///
/// Clips touching at a single instant (`a.end_time == b.start_time`) do not
/// collide. The scan is O(n²) per track, which is fine at timeline scale
/// (at most ~100 clips).
pub fn detect_collisions(clips: &[Clip]) -> Vec<Collision> {
    let mut tracks: BTreeMap<u32, Vec<&Clip>> = BTreeMap::new();
    for clip in clips {
        tracks.entry(clip.track_index).or_default().push(clip);
    }

    let mut collisions = Vec::new();
    for (track_index, track_clips) in &tracks {
        for i in 0..track_clips.len() {
            for j in (i + 1)..track_clips.len() {
                let a = track_clips[i];
                let b = track_clips[j];

                let overlap_start = a.start_time.max(b.start_time);
                let overlap_end = a.end_time.min(b.end_time);
                if overlap_start < overlap_end {
                    collisions.push(Collision {
                        clip1: a.id.clone(),
                        clip2: b.id.clone(),
                        track_index: *track_index,
                        overlap_start,
                        overlap_end,
                    });
                }
            }
        }
    }

    collisions
}
