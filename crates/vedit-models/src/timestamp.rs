//! Caption timestamp formatting.
//!
//! The exact SRT (`HH:MM:SS,mmm`) and VTT (`HH:MM:SS.mmm`) stamps the
//! subtitle exporters emit.

/// Format seconds as an SRT caption stamp: `HH:MM:SS,mmm`.
///
/// # Examples
/// ```
/// use vedit_models::timestamp::format_srt_timestamp;
/// assert_eq!(format_srt_timestamp(0.0), "00:00:00,000");
/// assert_eq!(format_srt_timestamp(3661.25), "01:01:01,250");
/// ```
pub fn format_srt_timestamp(total_secs: f64) -> String {
    let (hours, mins, secs, millis) = split_millis(total_secs);
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

/// Format seconds as a WebVTT caption stamp: `HH:MM:SS.mmm`.
///
/// # Examples
/// ```
/// use vedit_models::timestamp::format_vtt_timestamp;
/// assert_eq!(format_vtt_timestamp(90.5), "00:01:30.500");
/// ```
pub fn format_vtt_timestamp(total_secs: f64) -> String {
    let (hours, mins, secs, millis) = split_millis(total_secs);
    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
}

/// Split seconds into (hours, minutes, seconds, milliseconds), rounding to
/// the nearest millisecond so 59.9996s becomes 1:00.000 rather than 59.999+1.
fn split_millis(total_secs: f64) -> (u64, u64, u64, u64) {
    let total_millis = (total_secs.max(0.0) * 1000.0).round() as u64;
    let millis = total_millis % 1000;
    let total_whole = total_millis / 1000;
    let secs = total_whole % 60;
    let mins = (total_whole / 60) % 60;
    let hours = total_whole / 3600;
    (hours, mins, secs, millis)
}
