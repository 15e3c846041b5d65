use crate::cli::UploadArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use resmap::client::HttpTransport;
use resmap::engine::progress::ProgressReporter;
use resmap::workflows::processing;
use tracing::info;

pub async fn run(args: UploadArgs, config: &AppConfig) -> Result<()> {
    if !args.file.is_file() {
        return Err(CliError::Argument(format!(
            "'{}' is not a readable file",
            args.file.display()
        )));
    }

    let transport = HttpTransport::new(&config.client)?;
    let progress = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress.get_callback());

    if args.wait {
        let status =
            processing::upload_and_wait(&transport, &args.file, &config.poll, &reporter).await?;
        info!("Processing finished with {} frame(s).", status.frames);
        println!("Processing completed: {} frame(s) analysed.", status.frames);
    } else {
        let accepted = processing::upload(&transport, &args.file, &reporter).await?;
        println!("Job id: {}", accepted.id);
        println!("Run `rmap status {}` to follow processing.", accepted.id);
    }
    Ok(())
}
