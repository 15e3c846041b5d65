use crate::cli::CategoriesArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::render::CategoryListing;
use resmap::core::classification::palette::{scheme, scheme_ids};

pub fn run(args: CategoriesArgs, config: &AppConfig) -> Result<()> {
    let id = args.scheme.as_deref().unwrap_or(&config.view.color_scheme);
    let Some(selected) = scheme(id) else {
        return Err(CliError::Argument(format!(
            "Unknown color scheme '{}'. Available schemes: {}",
            id,
            scheme_ids().collect::<Vec<_>>().join(", ")
        )));
    };
    print!("{}", CategoryListing(selected));
    Ok(())
}
