#![deny(unreachable_patterns)]
//! Job orchestration for the composition engines.
//!
//! Wraps the pure engines with everything they deliberately leave out:
//! async job execution with bounded concurrency, per-video serialization,
//! a persistence seam and structured logging.

pub mod config;
pub mod error;
pub mod executor;
pub mod job;
pub mod logging;
pub mod store;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use executor::EngineExecutor;
pub use job::{EngineJob, EngineOutput, EngineRequest, JobId, JobState};
pub use logging::{init_tracing, JobLogger};
pub use store::{InMemoryStore, ProjectData, ProjectStore};
