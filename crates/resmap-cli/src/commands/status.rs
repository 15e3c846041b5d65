use crate::cli::StatusArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use resmap::client::HttpTransport;
use resmap::core::models::JobStatus;
use resmap::engine::progress::ProgressReporter;
use resmap::engine::transport::Transport;
use resmap::workflows::processing::{self, ProcessingError};

pub async fn run(args: StatusArgs, config: &AppConfig) -> Result<()> {
    let transport = HttpTransport::new(&config.client)?;

    let status = if args.wait {
        let progress = CliProgressHandler::new();
        let reporter = ProgressReporter::with_callback(progress.get_callback());
        processing::wait_for_job(&transport, &args.job_id, &config.poll, &reporter).await?
    } else {
        transport
            .get_status(&args.job_id)
            .await
            .map_err(|source| ProcessingError::Status {
                job_id: args.job_id.clone(),
                source,
            })?
    };

    println!("{}", format_status(&args.job_id, &status));
    Ok(())
}

pub fn format_status(job_id: &str, status: &JobStatus) -> String {
    let mut line = format!(
        "Job {}: {} ({}%), {} frame(s)",
        job_id, status.status, status.progress, status.frames
    );
    if let Some(error) = &status.error {
        line.push_str(&format!(", error: {}", error));
    }
    line
}
