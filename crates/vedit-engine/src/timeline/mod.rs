//! Timeline engine: clip interval arithmetic over an immutable collection.
//!
//! All operations take `(collection, params)` and return new values; the
//! caller owns persistence and snapshot consistency.

pub mod arrange;
pub mod collisions;
pub mod export;
pub mod ops;
pub mod validate;

pub use arrange::auto_arrange;
pub use collisions::{detect_collisions, Collision};
pub use export::{export_timeline, TimelineExportFormat};
pub use ops::{
    create_clip, duplicate, duplicate_in_collection, find_clip, remove_clip, split,
    split_in_collection, timeline_duration, trim, ClipBuilder,
};
pub use validate::{validate, ValidationReport};
