//! Timeline clip models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a clip on a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ClipId(pub String);

impl ClipId {
    /// Generate a new random clip ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClipId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of media a clip references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClipType {
    Video,
    Audio,
    Image,
    Text,
    Avatar,
}

impl ClipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipType::Video => "video",
            ClipType::Audio => "audio",
            ClipType::Image => "image",
            ClipType::Text => "text",
            ClipType::Avatar => "avatar",
        }
    }

    /// Text overlays carry their content in `properties` and need no source asset.
    pub fn requires_source(&self) -> bool {
        !matches!(self, ClipType::Text)
    }
}

impl fmt::Display for ClipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An effect applied to a clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Effect {
    /// Effect kind (e.g. "blur", "color_grade")
    pub kind: String,

    /// Effect parameters, effect-specific
    #[serde(default)]
    pub params: BTreeMap<String, Value>,
}

/// A transition at a clip boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transition {
    /// Transition kind (e.g. "fade", "wipe")
    pub kind: String,

    /// Transition duration in seconds
    pub duration: f64,
}

/// Optional in/out transitions for a clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipTransitions {
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub transition_in: Option<Transition>,

    #[serde(rename = "out", skip_serializing_if = "Option::is_none")]
    pub transition_out: Option<Transition>,
}

/// A time-bounded reference to media or an overlay placed on a timeline track.
///
/// Invariant: `duration == end_time - start_time`. Mutation goes through the
/// timeline engine, which re-establishes the invariant on every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Clip {
    /// Unique clip ID
    pub id: ClipId,

    /// Track (lane) index the clip sits on
    #[serde(default)]
    pub track_index: u32,

    /// Start time on the timeline, seconds
    pub start_time: f64,

    /// End time on the timeline, seconds
    pub end_time: f64,

    /// Length in seconds, always `end_time - start_time`
    pub duration: f64,

    /// Media kind
    pub clip_type: ClipType,

    /// Asset id or URL; required unless `clip_type` is text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Open property map (position, scale, text content, ...)
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,

    /// Ordered effect chain
    #[serde(default)]
    pub effects: Vec<Effect>,

    /// In/out transitions
    #[serde(default)]
    pub transitions: ClipTransitions,

    /// Playback volume, 0.0-2.0
    #[serde(default = "default_volume")]
    pub volume: f64,

    /// Whether audio is muted
    #[serde(default)]
    pub muted: bool,

    /// Stacking order within the track
    #[serde(default)]
    pub z_index: i32,
}

fn default_volume() -> f64 {
    1.0
}

impl Clip {
    /// Half-open interval `[start_time, end_time)` occupied on the timeline.
    pub fn interval(&self) -> (f64, f64) {
        (self.start_time, self.end_time)
    }

    /// Whether two clips overlap in time. Touching at a single instant
    /// (`a.end_time == b.start_time`) does not count as overlap.
    pub fn overlaps(&self, other: &Clip) -> bool {
        self.start_time.max(other.start_time) < self.end_time.min(other.end_time)
    }

    /// Whether `time` falls inside the clip's interval.
    pub fn contains_time(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}
