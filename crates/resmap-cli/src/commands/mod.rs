pub mod categories;
pub mod datasets;
pub mod interactions;
pub mod status;
pub mod summary;
pub mod upload;

use crate::config::{AppConfig, ViewConfig};
use crate::error::{CliError, Result};
use resmap::client::HttpTransport;
use resmap::engine::slot::ResourceKind;
use resmap::engine::store::ResourceStore;
use resmap::engine::transport::Transport;
use tracing::{info, warn};

pub type HttpStore = ResourceStore<HttpTransport>;

pub fn open_store(config: &AppConfig) -> Result<HttpStore> {
    let transport = HttpTransport::new(&config.client)?;
    let store = ResourceStore::new(transport);
    apply_view(&store, &config.view);
    Ok(store)
}

pub fn apply_view<T: Transport + 'static>(store: &ResourceStore<T>, view: &ViewConfig) {
    store.set_threshold(view.threshold);
    store.set_color_scheme(&view.color_scheme);
    store.set_chart_kind(view.chart);
    store.set_log_scale(view.log_scale);
    if let Some(categories) = &view.categories {
        select_only(store, categories);
    }
}

pub fn select_only<T: Transport + 'static>(store: &ResourceStore<T>, categories: &[String]) {
    store.clear_categories();
    for id in categories {
        store.toggle_category(id);
    }
}

/// Loads the dataset list and selects `dataset`, waiting for every dependent
/// fetch to settle.
pub async fn load_dataset<T: Transport + 'static>(
    store: &ResourceStore<T>,
    dataset: &str,
) -> Result<()> {
    store.load_dataset_list().await;
    if let Some(message) = store.error(ResourceKind::Datasets) {
        return Err(CliError::Data(format!("Could not load datasets: {}", message)));
    }
    if !store.datasets().iter().any(|d| d.id == dataset) {
        return Err(CliError::Argument(format!(
            "Unknown dataset '{}'. Run `rmap datasets` to list the available ones.",
            dataset
        )));
    }

    info!("Fetching resources for dataset '{}'...", dataset);
    store.select_dataset(dataset).await;

    for kind in ResourceKind::DEPENDENT {
        if let Some(message) = store.error(kind) {
            warn!("Loading {} for '{}' failed: {}", kind, dataset, message);
        }
    }
    Ok(())
}
