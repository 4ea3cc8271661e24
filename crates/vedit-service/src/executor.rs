//! Engine job executor.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{oneshot, Mutex, Semaphore};
use tracing::debug;

use vedit_engine::{auto_arrange, gaze, pack_segments};
use vedit_models::VideoId;

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::job::{EngineJob, EngineOutput, EngineRequest};
use crate::logging::JobLogger;
use crate::store::ProjectStore;

/// Runs engine jobs against a project store.
///
/// Concurrency is bounded by a semaphore; per video, jobs are serialized
/// through a lock map so two jobs never race on the same project snapshot.
pub struct EngineExecutor<S: ProjectStore> {
    config: ServiceConfig,
    store: Arc<S>,
    job_semaphore: Arc<Semaphore>,
    video_locks: Mutex<HashMap<VideoId, Arc<Mutex<()>>>>,
}

impl<S: ProjectStore + 'static> EngineExecutor<S> {
    /// Create a new executor.
    pub fn new(config: ServiceConfig, store: Arc<S>) -> Self {
        let job_semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));
        Self {
            config,
            store,
            job_semaphore,
            video_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Execute a job to completion, returning the finished record and its
    /// output.
    ///
    /// The returned job is always terminal: `Completed` on success,
    /// `Failed` (with the error message recorded) when the result is an
    /// error.
    pub async fn execute(&self, mut job: EngineJob) -> (EngineJob, ServiceResult<EngineOutput>) {
        let logger = JobLogger::new(&job.id, job.request.operation());

        let permit = match self.job_semaphore.acquire().await {
            Ok(p) => p,
            Err(_) => {
                let err = ServiceError::executor_unavailable("semaphore closed");
                job.fail(err.to_string());
                return (job, Err(err));
            }
        };

        let video_lock = self.video_lock(&job.video_id).await;
        let result = {
            let _video_guard = video_lock.lock().await;

            logger.log_start(&format!("video {}", job.video_id));
            job.start();

            tokio::time::timeout(self.config.job_timeout, self.run_request(&mut job))
                .await
                .unwrap_or_else(|_| {
                    Err(ServiceError::job_failed(format!(
                        "timed out after {:?}",
                        self.config.job_timeout
                    )))
                })
        };

        drop(permit);
        self.release_video_lock(&job.video_id, video_lock).await;

        match &result {
            Ok(_) => {
                job.complete();
                logger.log_completion("result saved");
            }
            Err(e) => {
                job.fail(e.to_string());
                logger.log_error(&e.to_string());
            }
        }

        (job, result)
    }

    /// Spawn a job on the runtime; the receiver yields the terminal job
    /// record and its output.
    pub fn spawn(
        self: &Arc<Self>,
        job: EngineJob,
    ) -> oneshot::Receiver<(EngineJob, ServiceResult<EngineOutput>)> {
        let (tx, rx) = oneshot::channel();
        let executor = Arc::clone(self);

        tokio::spawn(async move {
            let outcome = executor.execute(job).await;
            let _ = tx.send(outcome);
        });

        rx
    }

    async fn run_request(&self, job: &mut EngineJob) -> ServiceResult<EngineOutput> {
        let mut data = self.store.load(&job.video_id).await?;
        job.set_progress(25);

        let output = match &job.request {
            EngineRequest::ArrangeTimeline => {
                let clips = auto_arrange(&data.clips);
                data.clips = clips.clone();
                EngineOutput::Timeline { clips }
            }
            EngineRequest::CorrectGaze { config } => {
                let analysis = gaze::analyze(&data.frames, config);
                data.frames = analysis.corrected_frames.clone();
                EngineOutput::Gaze { analysis }
            }
            EngineRequest::GenerateSubtitles { options } => {
                let entries = pack_segments(&data.segments, options);
                data.subtitles = entries.clone();
                EngineOutput::Subtitles { entries }
            }
        };
        job.set_progress(75);

        self.store.save(&job.video_id, data).await?;

        debug!(
            job_id = %job.id,
            video_id = %job.video_id,
            "Engine output persisted"
        );
        Ok(output)
    }

    async fn video_lock(&self, video_id: &VideoId) -> Arc<Mutex<()>> {
        let mut locks = self.video_locks.lock().await;
        Arc::clone(
            locks
                .entry(video_id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    /// Drop our handle on a video's lock and evict the map entry once no
    /// other job holds it, so the map does not grow per video processed.
    async fn release_video_lock(&self, video_id: &VideoId, handle: Arc<Mutex<()>>) {
        drop(handle);
        let mut locks = self.video_locks.lock().await;
        if let Some(existing) = locks.get(video_id) {
            if Arc::strong_count(existing) == 1 {
                locks.remove(video_id);
            }
        }
    }
}
