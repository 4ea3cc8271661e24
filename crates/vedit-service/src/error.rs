//! Service error types.

use thiserror::Error;
use vedit_engine::EngineError;
use vedit_models::VideoId;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Project not found: {0}")]
    ProjectNotFound(VideoId),

    #[error("Job failed: {0}")]
    JobFailed(String),

    #[error("Executor unavailable: {0}")]
    ExecutorUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub fn job_failed(msg: impl Into<String>) -> Self {
        Self::JobFailed(msg.into())
    }

    pub fn executor_unavailable(msg: impl Into<String>) -> Self {
        Self::ExecutorUnavailable(msg.into())
    }

    /// Check if the failure is an input problem the caller can fix.
    ///
    /// Engine errors are deterministic validation failures; retrying the
    /// same job cannot succeed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Engine(_) | ServiceError::ProjectNotFound(_)
        )
    }
}
