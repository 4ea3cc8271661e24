//! Clip construction and interval arithmetic.
//!
//! Every operation here re-establishes the clip invariant
//! `duration == end_time - start_time`; callers never maintain it themselves.

use std::collections::BTreeMap;

use serde_json::Value;
use vedit_models::{Clip, ClipId, ClipTransitions, ClipType, Effect};

use crate::error::{EngineError, EngineResult};

/// Builder for a validated [`Clip`].
///
/// Defaults: `track_index = 0`, `volume = 1.0`, `muted = false`, `z_index = 0`.
#[derive(Debug, Clone)]
pub struct ClipBuilder {
    id: Option<ClipId>,
    track_index: u32,
    start_time: f64,
    end_time: f64,
    clip_type: ClipType,
    source: Option<String>,
    properties: BTreeMap<String, Value>,
    effects: Vec<Effect>,
    transitions: ClipTransitions,
    volume: f64,
    muted: bool,
    z_index: i32,
}

impl ClipBuilder {
    /// Start building a clip of the given type over `[start_time, end_time)`.
    pub fn new(clip_type: ClipType, start_time: f64, end_time: f64) -> Self {
        Self {
            id: None,
            track_index: 0,
            start_time,
            end_time,
            clip_type,
            source: None,
            properties: BTreeMap::new(),
            effects: Vec::new(),
            transitions: ClipTransitions::default(),
            volume: 1.0,
            muted: false,
            z_index: 0,
        }
    }

    pub fn id(mut self, id: ClipId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn track_index(mut self, track_index: u32) -> Self {
        self.track_index = track_index;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn transitions(mut self, transitions: ClipTransitions) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Build the clip, enforcing `end_time > start_time`.
    pub fn build(self) -> EngineResult<Clip> {
        if self.end_time <= self.start_time {
            return Err(EngineError::invalid_range(self.start_time, self.end_time));
        }

        Ok(Clip {
            id: self.id.unwrap_or_default(),
            track_index: self.track_index,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.end_time - self.start_time,
            clip_type: self.clip_type,
            source: self.source,
            properties: self.properties,
            effects: self.effects,
            transitions: self.transitions,
            volume: self.volume,
            muted: self.muted,
            z_index: self.z_index,
        })
    }
}

/// Create a clip with defaults. Shorthand for [`ClipBuilder`].
pub fn create_clip(clip_type: ClipType, start_time: f64, end_time: f64) -> EngineResult<Clip> {
    ClipBuilder::new(clip_type, start_time, end_time).build()
}

/// Replace a clip's interval, keeping its identity and all other fields.
pub fn trim(clip: &Clip, new_start: f64, new_end: f64) -> EngineResult<Clip> {
    if new_end <= new_start {
        return Err(EngineError::invalid_range(new_start, new_end));
    }

    let mut trimmed = clip.clone();
    trimmed.start_time = new_start;
    trimmed.end_time = new_end;
    trimmed.duration = new_end - new_start;
    Ok(trimmed)
}

/// Split a clip at `split_time`, which must fall strictly inside the clip.
///
/// The first half keeps the original id and ends at `split_time`; the second
/// half is a new clip covering `[split_time, original_end)`. Together the two
/// halves partition the original interval exactly.
pub fn split(clip: &Clip, split_time: f64) -> EngineResult<(Clip, Clip)> {
    if split_time <= clip.start_time || split_time >= clip.end_time {
        return Err(EngineError::split_out_of_bounds(
            split_time,
            clip.start_time,
            clip.end_time,
        ));
    }

    let mut first = clip.clone();
    first.end_time = split_time;
    first.duration = split_time - first.start_time;

    let mut second = clip.clone();
    second.id = ClipId::new();
    second.start_time = split_time;
    second.duration = second.end_time - split_time;

    Ok((first, second))
}

/// Duplicate a clip, shifting the copy forward in time.
///
/// When `offset` is `None` the copy starts where the original ends
/// (offset by the clip's duration).
pub fn duplicate(clip: &Clip, offset: Option<f64>) -> Clip {
    let offset = offset.unwrap_or(clip.duration);

    let mut copy = clip.clone();
    copy.id = ClipId::new();
    copy.start_time += offset;
    copy.end_time += offset;
    copy
}

/// Total timeline duration: the latest clip end, or 0 for an empty timeline.
pub fn timeline_duration(clips: &[Clip]) -> f64 {
    clips.iter().fold(0.0, |acc, c| acc.max(c.end_time))
}

/// Find a clip by id.
pub fn find_clip<'a>(clips: &'a [Clip], id: &ClipId) -> EngineResult<&'a Clip> {
    clips
        .iter()
        .find(|c| &c.id == id)
        .ok_or_else(|| EngineError::NotFound(id.clone()))
}

/// Split the identified clip inside a collection, returning a new collection
/// where the original is replaced by its two halves (order preserved, second
/// half inserted right after the first).
pub fn split_in_collection(
    clips: &[Clip],
    id: &ClipId,
    split_time: f64,
) -> EngineResult<Vec<Clip>> {
    let target = find_clip(clips, id)?;
    let (first, second) = split(target, split_time)?;

    let mut result = Vec::with_capacity(clips.len() + 1);
    for clip in clips {
        if &clip.id == id {
            result.push(first.clone());
            result.push(second.clone());
        } else {
            result.push(clip.clone());
        }
    }
    Ok(result)
}

/// Duplicate the identified clip, appending the copy to a new collection.
pub fn duplicate_in_collection(
    clips: &[Clip],
    id: &ClipId,
    offset: Option<f64>,
) -> EngineResult<Vec<Clip>> {
    let target = find_clip(clips, id)?;
    let copy = duplicate(target, offset);

    let mut result = clips.to_vec();
    result.push(copy);
    Ok(result)
}

/// Remove the identified clip, returning the remaining collection.
pub fn remove_clip(clips: &[Clip], id: &ClipId) -> EngineResult<Vec<Clip>> {
    find_clip(clips, id)?;
    Ok(clips.iter().filter(|c| &c.id != id).cloned().collect())
}
