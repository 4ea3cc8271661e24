//! Caption serialization.

use std::fmt;
use std::str::FromStr;

use vedit_models::timestamp::{format_srt_timestamp, format_vtt_timestamp};
use vedit_models::SubtitleEntry;

use crate::error::{EngineError, EngineResult};

/// Supported caption output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
    Txt,
    Json,
}

impl FromStr for SubtitleFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            other => Err(EngineError::unsupported_format(other)),
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Txt => "txt",
            Self::Json => "json",
        };
        write!(f, "{name}")
    }
}

/// Serialize caption entries in the requested format.
///
/// Entries are emitted in the order given; empty input produces an empty
/// document (for VTT, just the header).
pub fn export_subtitles(entries: &[SubtitleEntry], format: SubtitleFormat) -> EngineResult<String> {
    match format {
        SubtitleFormat::Srt => Ok(export_srt(entries)),
        SubtitleFormat::Vtt => Ok(export_vtt(entries)),
        SubtitleFormat::Txt => Ok(export_txt(entries)),
        SubtitleFormat::Json => serde_json::to_string_pretty(entries)
            .map_err(|e| EngineError::unsupported_format(format!("json: {e}"))),
    }
}

fn export_srt(entries: &[SubtitleEntry]) -> String {
    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            format_srt_timestamp(entry.start),
            format_srt_timestamp(entry.end),
            entry.text
        ));
    }
    out
}

fn export_vtt(entries: &[SubtitleEntry]) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for entry in entries {
        out.push_str(&format!(
            "{} --> {}\n{}\n\n",
            format_vtt_timestamp(entry.start),
            format_vtt_timestamp(entry.end),
            entry.text
        ));
    }
    out
}

fn export_txt(entries: &[SubtitleEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.text);
        out.push('\n');
    }
    out
}
