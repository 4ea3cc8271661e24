//! Engine job records and their state machine.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vedit_engine::{GazeAnalysis, SubtitleOptions};
use vedit_models::{Clip, GazeConfig, SubtitleEntry, VideoId};

/// Unique identifier for a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
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

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Job is waiting to run
    #[default]
    Pending,
    /// Job is being processed
    Processing,
    /// Job completed successfully
    Completed,
    /// Job failed
    Failed,
}

impl JobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Pending => "pending",
            JobState::Processing => "processing",
            JobState::Completed => "completed",
            JobState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

/// The engine operation a job asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineRequest {
    /// Resolve collisions by shifting clips forward per track
    ArrangeTimeline,
    /// Run the full gaze pipeline over the project's tracking frames
    CorrectGaze { config: GazeConfig },
    /// Pack the project's transcript into caption entries
    GenerateSubtitles { options: SubtitleOptions },
}

impl EngineRequest {
    /// Short operation name for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            EngineRequest::ArrangeTimeline => "arrange_timeline",
            EngineRequest::CorrectGaze { .. } => "correct_gaze",
            EngineRequest::GenerateSubtitles { .. } => "generate_subtitles",
        }
    }
}

/// Output of a completed engine job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineOutput {
    Timeline { clips: Vec<Clip> },
    Gaze { analysis: GazeAnalysis },
    Subtitles { entries: Vec<SubtitleEntry> },
}

/// A tracked engine job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineJob {
    /// Unique job ID
    pub id: JobId,

    /// Project the job operates on
    pub video_id: VideoId,

    /// Requested operation
    pub request: EngineRequest,

    /// Lifecycle state
    #[serde(default)]
    pub state: JobState,

    /// Completion percentage, 0..=100
    #[serde(default)]
    pub progress: u8,

    /// Failure message when `state` is `Failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// When the job was created
    pub created_at: DateTime<Utc>,

    /// When processing started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the job reached a terminal state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl EngineJob {
    /// Create a pending job.
    pub fn new(video_id: VideoId, request: EngineRequest) -> Self {
        Self {
            id: JobId::new(),
            video_id,
            request,
            state: JobState::Pending,
            progress: 0,
            error: None,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
        }
    }

    /// Mark the job as processing.
    pub fn start(&mut self) {
        self.state = JobState::Processing;
        self.started_at = Some(Utc::now());
    }

    /// Record a progress update, clamped to 100.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    /// Mark the job as completed.
    pub fn complete(&mut self) {
        self.state = JobState::Completed;
        self.progress = 100;
        self.finished_at = Some(Utc::now());
    }

    /// Mark the job as failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = JobState::Failed;
        self.error = Some(message.into());
        self.finished_at = Some(Utc::now());
    }
}
