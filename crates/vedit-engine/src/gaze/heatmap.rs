//! Spatial gaze heatmap.

use vedit_models::EyeTrackingFrame;

/// Default heatmap resolution (cells per axis).
pub const DEFAULT_HEATMAP_GRID_SIZE: usize = 50;

/// Raw per-cell frame counts, indexed `[y][x]`.
///
/// Each frame's `(gaze.x, gaze.y)` in `[-1, 1]` maps to a cell via
/// `floor((v + 1) * grid_size / 2)`; frames landing outside the grid are
/// discarded.
pub fn heatmap_counts(frames: &[EyeTrackingFrame], grid_size: usize) -> Vec<Vec<u32>> {
    let mut counts = vec![vec![0u32; grid_size]; grid_size];
    if grid_size == 0 {
        return counts;
    }

    let scale = grid_size as f64 / 2.0;
    for frame in frames {
        let x = ((frame.gaze_direction.x + 1.0) * scale).floor();
        let y = ((frame.gaze_direction.y + 1.0) * scale).floor();

        if x >= 0.0 && y >= 0.0 && (x as usize) < grid_size && (y as usize) < grid_size {
            counts[y as usize][x as usize] += 1;
        }
    }

    counts
}

/// Heatmap normalized to `[0, 1]` by the maximum cell count.
///
/// A heatmap with no in-range frames (max count 0) stays all zero.
pub fn heatmap(frames: &[EyeTrackingFrame], grid_size: usize) -> Vec<Vec<f64>> {
    let counts = heatmap_counts(frames, grid_size);
    let max = counts
        .iter()
        .flat_map(|row| row.iter())
        .copied()
        .max()
        .unwrap_or(0);

    if max == 0 {
        return vec![vec![0.0; grid_size]; grid_size];
    }

    counts
        .into_iter()
        .map(|row| row.into_iter().map(|c| c as f64 / max as f64).collect())
        .collect()
}
