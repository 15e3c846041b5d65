use crate::core::models::{JobState, JobStatus, UploadResult};
use crate::engine::error::TransportError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::transport::{Transport, UploadProgressFn};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Upload of '{path}' failed: {source}")]
    Upload {
        path: String,
        #[source]
        source: TransportError,
    },

    #[error("Status check for job '{job_id}' failed: {source}")]
    Status {
        job_id: String,
        #[source]
        source: TransportError,
    },

    #[error("Processing of job '{job_id}' failed: {message}")]
    JobFailed { job_id: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollOptions {
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Uploads a structure file, forwarding upload percentages to the reporter.
pub async fn upload<T: Transport + ?Sized>(
    transport: &T,
    path: &Path,
    reporter: &ProgressReporter<'_>,
) -> Result<UploadResult, ProcessingError> {
    let total_bytes = tokio::fs::metadata(path).await.map_or(0, |m| m.len());
    reporter.report(Progress::UploadStarted { total_bytes });
    info!("Uploading {}...", path.display());

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let on_progress: UploadProgressFn = Arc::new(move |percent| {
        // The receiver outlives the upload; a closed channel only drops the update.
        let _ = sender.send(percent);
    });

    let mut request = transport.upload_file(path, on_progress);
    let outcome = loop {
        tokio::select! {
            outcome = &mut request => break outcome,
            Some(percent) = receiver.recv() => {
                reporter.report(Progress::Uploading { percent });
            }
        }
    };
    while let Ok(percent) = receiver.try_recv() {
        reporter.report(Progress::Uploading { percent });
    }

    let result = outcome.map_err(|source| ProcessingError::Upload {
        path: path.display().to_string(),
        source,
    })?;
    reporter.report(Progress::UploadFinished {
        job_id: result.id.clone(),
    });
    if !result.message.is_empty() {
        reporter.report(Progress::Message(result.message.clone()));
    }
    info!("Upload accepted as job '{}': {}", result.id, result.message);
    Ok(result)
}

/// Polls a processing job until it completes or fails.
pub async fn wait_for_job<T: Transport + ?Sized>(
    transport: &T,
    job_id: &str,
    options: &PollOptions,
    reporter: &ProgressReporter<'_>,
) -> Result<JobStatus, ProcessingError> {
    loop {
        let status = transport
            .get_status(job_id)
            .await
            .map_err(|source| ProcessingError::Status {
                job_id: job_id.to_string(),
                source,
            })?;
        debug!(
            "Job '{}' is {} ({}%).",
            job_id, status.status, status.progress
        );
        reporter.report(Progress::Processing {
            state: status.status.clone(),
            percent: status.progress,
        });

        match status.status {
            JobState::Completed => {
                reporter.report(Progress::ProcessingFinished);
                info!("Job '{}' completed with {} frame(s).", job_id, status.frames);
                return Ok(status);
            }
            JobState::Failed => {
                let message = status
                    .error
                    .unwrap_or_else(|| "no error message reported".to_string());
                warn!("Job '{}' failed: {}", job_id, message);
                return Err(ProcessingError::JobFailed {
                    job_id: job_id.to_string(),
                    message,
                });
            }
            _ => tokio::time::sleep(options.interval).await,
        }
    }
}

/// Uploads a structure file and waits for its processing job to settle.
pub async fn upload_and_wait<T: Transport + ?Sized>(
    transport: &T,
    path: &Path,
    options: &PollOptions,
    reporter: &ProgressReporter<'_>,
) -> Result<JobStatus, ProcessingError> {
    let accepted = upload(transport, path, reporter).await?;
    wait_for_job(transport, &accepted.id, options, reporter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::transport::fake::FakeTransport;
    use std::sync::Mutex;

    fn status(state: JobState, progress: u32) -> JobStatus {
        JobStatus {
            status: state,
            progress,
            frames: 0,
            error: None,
        }
    }

    fn accepted() -> UploadResult {
        UploadResult {
            success: true,
            id: "complex".to_string(),
            message: "Upload successful. Processing started.".to_string(),
        }
    }

    fn fast() -> PollOptions {
        PollOptions {
            interval: Duration::ZERO,
        }
    }

    fn recording_reporter(events: Arc<Mutex<Vec<Progress>>>) -> ProgressReporter<'static> {
        ProgressReporter::with_callback(Box::new(move |event| {
            events.lock().unwrap().push(event);
        }))
    }

    #[tokio::test]
    async fn upload_and_wait_follows_job_to_completion() {
        let fake = FakeTransport::new()
            .with_upload(Ok(accepted()))
            .with_statuses(vec![
                Ok(status(JobState::Queued, 0)),
                Ok(status(JobState::Analyzing, 45)),
                Ok(JobStatus {
                    frames: 100,
                    ..status(JobState::Completed, 100)
                }),
            ]);
        let events = Arc::new(Mutex::new(Vec::new()));
        let reporter = recording_reporter(events.clone());

        let done = upload_and_wait(&fake, Path::new("complex.pdb"), &fast(), &reporter)
            .await
            .unwrap();

        assert_eq!(done.status, JobState::Completed);
        assert_eq!(done.frames, 100);
        assert_eq!(
            fake.calls(),
            vec!["upload:complex.pdb", "status:complex", "status:complex", "status:complex"]
        );

        let events = events.lock().unwrap();
        assert!(events.contains(&Progress::Uploading { percent: 100 }));
        let finished = events
            .iter()
            .position(|e| matches!(e, Progress::UploadFinished { .. }))
            .unwrap();
        assert_eq!(
            events[finished],
            Progress::UploadFinished {
                job_id: "complex".to_string()
            }
        );
        assert_eq!(
            events[finished + 1],
            Progress::Message("Upload successful. Processing started.".to_string())
        );
        assert!(events.contains(&Progress::Processing {
            state: JobState::Analyzing,
            percent: 45
        }));
        assert_eq!(events.last(), Some(&Progress::ProcessingFinished));
    }

    #[tokio::test]
    async fn failed_job_reports_service_message() {
        let fake = FakeTransport::new().with_statuses(vec![
            Ok(status(JobState::Splitting, 10)),
            Ok(JobStatus {
                error: Some("Docker is not running".to_string()),
                ..status(JobState::Failed, 30)
            }),
        ]);

        let err = wait_for_job(&fake, "complex", &fast(), &ProgressReporter::new())
            .await
            .unwrap_err();

        match err {
            ProcessingError::JobFailed { job_id, message } => {
                assert_eq!(job_id, "complex");
                assert_eq!(message, "Docker is not running");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn status_error_stops_polling_without_retry() {
        let fake = FakeTransport::new().with_statuses(vec![Err(TransportError::server(
            404,
            "Not found",
        ))]);

        let err = wait_for_job(&fake, "ghost", &fast(), &ProgressReporter::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessingError::Status { .. }));
        assert_eq!(err.to_string(), "Status check for job 'ghost' failed: Not found");
        assert_eq!(fake.calls(), vec!["status:ghost"]);
    }

    #[tokio::test]
    async fn rejected_upload_never_polls() {
        let fake = FakeTransport::new().with_upload(Err(TransportError::server(
            400,
            "Invalid file type. Only PDB files allowed",
        )));

        let err = upload_and_wait(&fake, Path::new("notes.txt"), &fast(), &ProgressReporter::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessingError::Upload { .. }));
        assert!(err.to_string().contains("Only PDB files allowed"));
        assert_eq!(fake.calls(), vec!["upload:notes.txt"]);
    }
}
