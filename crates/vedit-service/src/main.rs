//! One-shot engine job runner.
//!
//! Reads a job document from the path given as the first argument, runs
//! it against an in-memory project snapshot and prints the output as
//! JSON. The document carries the project data and the request:
//!
//! ```json
//! { "project": { "clips": [...] }, "request": { "type": "arrange_timeline" } }
//! ```

use std::sync::Arc;

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::info;

use vedit_models::VideoId;
use vedit_service::{
    init_tracing, EngineExecutor, EngineJob, EngineRequest, InMemoryStore, ProjectData,
    ServiceConfig,
};

#[derive(Debug, Deserialize)]
struct JobDocument {
    #[serde(default)]
    project: ProjectData,
    request: EngineRequest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => bail!("usage: vedit-service <job.json>"),
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read job document {path}"))?;
    let document: JobDocument =
        serde_json::from_str(&raw).with_context(|| format!("invalid job document {path}"))?;

    let config = ServiceConfig::from_env();
    info!(max_jobs = config.max_concurrent_jobs, "Starting executor");

    let video_id = VideoId::new();
    let store = Arc::new(InMemoryStore::new());
    store.insert(video_id.clone(), document.project).await;

    let executor = Arc::new(EngineExecutor::new(config, store));
    let job = EngineJob::new(video_id, document.request);
    let job_id = job.id.clone();

    let (job, result) = executor
        .spawn(job)
        .await
        .context("executor dropped the result channel")?;
    let output = result.with_context(|| format!("job {job_id} failed"))?;

    info!(job_id = %job.id, state = job.state.as_str(), "Job finished");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
