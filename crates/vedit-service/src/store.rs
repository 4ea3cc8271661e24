//! Project persistence seam.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use vedit_models::{Clip, EyeTrackingFrame, SubtitleEntry, TranscriptionSegment, VideoId};

use crate::error::{ServiceError, ServiceResult};

/// Everything the engines read from or write back to a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    /// Timeline clip collection
    #[serde(default)]
    pub clips: Vec<Clip>,

    /// Eye tracking frames
    #[serde(default)]
    pub frames: Vec<EyeTrackingFrame>,

    /// Transcript segments with word timing
    #[serde(default)]
    pub segments: Vec<TranscriptionSegment>,

    /// Generated caption entries
    #[serde(default)]
    pub subtitles: Vec<SubtitleEntry>,
}

/// Async persistence seam for project data.
///
/// The engines never touch storage; the executor loads a snapshot, runs
/// the pure computation and saves the result through this trait.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Load a full project snapshot.
    async fn load(&self, video_id: &VideoId) -> ServiceResult<ProjectData>;

    /// Save a full project snapshot.
    async fn save(&self, video_id: &VideoId, data: ProjectData) -> ServiceResult<()>;
}

/// In-memory store backed by a `RwLock`ed map.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    projects: Arc<RwLock<HashMap<VideoId, ProjectData>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a project, replacing any existing snapshot.
    pub async fn insert(&self, video_id: VideoId, data: ProjectData) {
        self.projects.write().await.insert(video_id, data);
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn load(&self, video_id: &VideoId) -> ServiceResult<ProjectData> {
        self.projects
            .read()
            .await
            .get(video_id)
            .cloned()
            .ok_or_else(|| ServiceError::ProjectNotFound(video_id.clone()))
    }

    async fn save(&self, video_id: &VideoId, data: ProjectData) -> ServiceResult<()> {
        self.projects.write().await.insert(video_id.clone(), data);
        Ok(())
    }
}
