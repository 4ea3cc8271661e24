//! Deterministic timeline serialization.

use std::fmt;
use std::str::FromStr;

use vedit_models::Clip;

use crate::error::{EngineError, EngineResult};
use crate::timeline::ops::timeline_duration;

/// Supported timeline export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineExportFormat {
    /// FFmpeg filter expressions, one per clip
    Ffmpeg,
    /// Pretty-printed JSON document
    Json,
}

impl FromStr for TimelineExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ffmpeg" => Ok(Self::Ffmpeg),
            "json" => Ok(Self::Json),
            other => Err(EngineError::unsupported_format(other)),
        }
    }
}

impl fmt::Display for TimelineExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ffmpeg => write!(f, "ffmpeg"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Serialize a clip collection deterministically.
///
/// Clips are ordered by track, then start time, then id, so equal inputs
/// always produce byte-identical output.
pub fn export_timeline(clips: &[Clip], format: TimelineExportFormat) -> EngineResult<String> {
    let mut ordered: Vec<&Clip> = clips.iter().collect();
    ordered.sort_by(|a, b| {
        a.track_index
            .cmp(&b.track_index)
            .then(
                a.start_time
                    .partial_cmp(&b.start_time)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then_with(|| a.id.as_str().cmp(b.id.as_str()))
    });

    match format {
        TimelineExportFormat::Ffmpeg => Ok(export_ffmpeg(&ordered)),
        TimelineExportFormat::Json => {
            let doc = serde_json::json!({
                "version": 1,
                "duration": timeline_duration(clips),
                "clips": ordered,
            });
            serde_json::to_string_pretty(&doc)
                .map_err(|e| EngineError::unsupported_format(format!("json: {e}")))
        }
    }
}

/// One trim+reset-timestamp filter expression per clip, grouped by track.
fn export_ffmpeg(ordered: &[&Clip]) -> String {
    let mut lines = Vec::with_capacity(ordered.len());
    let mut current_track = None;
    let mut index_in_track = 0usize;

    for clip in ordered {
        if current_track != Some(clip.track_index) {
            current_track = Some(clip.track_index);
            index_in_track = 0;
            lines.push(format!("# track {}", clip.track_index));
        }

        lines.push(format!(
            "[{input}]trim=start={start}:end={end},setpts=PTS-STARTPTS[t{track}c{index}];",
            input = clip.source.as_deref().unwrap_or("0:v"),
            start = clip.start_time,
            end = clip.end_time,
            track = clip.track_index,
            index = index_in_track,
        ));
        index_in_track += 1;
    }

    lines.join("\n")
}
