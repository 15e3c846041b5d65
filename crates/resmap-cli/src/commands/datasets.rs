use super::open_store;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::render::write_datasets;
use resmap::engine::slot::ResourceKind;
use std::io;
use tracing::info;

pub async fn run(config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    store.load_dataset_list().await;
    if let Some(message) = store.error(ResourceKind::Datasets) {
        return Err(CliError::Data(format!("Could not load datasets: {}", message)));
    }

    let datasets = store.datasets();
    info!("Service reported {} dataset(s).", datasets.len());
    write_datasets(&datasets, &mut io::stdout().lock())?;
    Ok(())
}
