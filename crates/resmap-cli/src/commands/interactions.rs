use super::{load_dataset, open_store, select_only};
use crate::cli::InteractionsArgs;
use crate::config::{AppConfig, validate_threshold};
use crate::error::{CliError, Result};
use crate::render::{interaction_rows, write_interactions};
use resmap::core::classification::palette::scheme;
use resmap::engine::slot::ResourceKind;
use resmap::engine::store::ResourceStore;
use resmap::engine::transport::Transport;
use std::io;
use tracing::{info, warn};

pub async fn run(args: InteractionsArgs, config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    apply_overrides(&store, &args)?;

    load_dataset(&store, &args.dataset).await?;
    if let Some(message) = store.error(ResourceKind::Interactions) {
        return Err(CliError::Data(format!(
            "Could not load interactions for '{}': {}",
            args.dataset, message
        )));
    }

    let state = store.snapshot();
    let rows = interaction_rows(&state);
    info!(
        "{} of {} interaction(s) pass threshold {:.2}.",
        rows.len(),
        state.interactions.payload().len(),
        state.selection.threshold
    );
    write_interactions(&rows, args.format, io::stdout().lock())
}

/// Applies command-line selection flags on top of the configured view.
pub fn apply_overrides<T: Transport + 'static>(
    store: &ResourceStore<T>,
    args: &InteractionsArgs,
) -> Result<()> {
    if let Some(threshold) = args.threshold {
        validate_threshold(threshold)?;
        store.set_threshold(threshold);
    }
    if args.no_categories {
        store.clear_categories();
    } else if !args.categories.is_empty() {
        select_only(store, &args.categories);
    }
    if let Some(id) = &args.scheme {
        if scheme(id).is_none() {
            warn!("Unknown color scheme '{}'; the default palette is used.", id);
        }
        store.set_color_scheme(id);
    }
    Ok(())
}
