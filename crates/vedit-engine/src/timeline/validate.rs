//! Timeline validation.
//!
//! Unlike the other engine operations, validation deliberately aggregates
//! every violation instead of failing fast, so a UI can show all problems
//! at once.

use serde::{Deserialize, Serialize};
use vedit_models::Clip;

/// Result of validating a clip collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }
}

/// Validate every clip in the collection, collecting all violations.
pub fn validate(clips: &[Clip]) -> ValidationReport {
    let mut report = ValidationReport::ok();

    for clip in clips {
        if clip.start_time < 0.0 {
            report.errors.push(format!(
                "Clip {}: start time {} is negative",
                clip.id, clip.start_time
            ));
        }

        if clip.end_time <= clip.start_time {
            report.errors.push(format!(
                "Clip {}: end time {} is not after start time {}",
                clip.id, clip.end_time, clip.start_time
            ));
        }

        if clip.duration != clip.end_time - clip.start_time {
            report.errors.push(format!(
                "Clip {}: duration {} does not equal end - start ({})",
                clip.id,
                clip.duration,
                clip.end_time - clip.start_time
            ));
        }

        if clip.clip_type.requires_source() && clip.source.is_none() {
            report.errors.push(format!(
                "Clip {}: {} clips require a source reference",
                clip.id, clip.clip_type
            ));
        }

        if !(0.0..=2.0).contains(&clip.volume) {
            report.errors.push(format!(
                "Clip {}: volume {} is outside 0.0-2.0",
                clip.id, clip.volume
            ));
        }
    }

    report.valid = report.errors.is_empty();
    report
}
