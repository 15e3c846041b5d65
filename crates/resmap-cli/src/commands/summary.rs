use super::{load_dataset, open_store};
use crate::cli::SummaryArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::render::Summary;

pub async fn run(args: SummaryArgs, config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    load_dataset(&store, &args.dataset).await?;
    print!("{}", Summary(&store.snapshot()));
    Ok(())
}
