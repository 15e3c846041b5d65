use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileViewConfig};
use super::models::{AppConfig, ViewConfig};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use directories::ProjectDirs;
use resmap::client::ClientConfig;
use resmap::client::config::API_URL_ENV;
use resmap::core::classification::palette::scheme;
use resmap::core::classification::rules::find_category;
use resmap::engine::selection::ChartKind;
use resmap::workflows::processing::PollOptions;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Merges configuration sources: command line, then environment, then config
/// file, then built-in defaults.
pub fn build_config(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_file_path(cli) {
        Some(path) => FileConfig::from_file(&path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, &cli.set_values)?;

    let api_url = cli
        .api_url
        .clone()
        .or_else(|| env(API_URL_ENV).filter(|url| !url.trim().is_empty()))
        .or(file_config.api_url.take())
        .unwrap_or_else(|| defaults.api_url.clone());
    let timeout_secs = cli
        .timeout
        .or(file_config.timeout_secs)
        .unwrap_or(defaults.timeout_secs);
    if timeout_secs == 0 {
        return Err(CliError::Config(
            "timeout must be at least one second".to_string(),
        ));
    }
    let poll_interval_ms = file_config
        .poll_interval_ms
        .unwrap_or(defaults.poll_interval_ms);

    let view = merge_view(file_config.view.take().unwrap_or_default(), &defaults)?;

    let config = AppConfig {
        client: ClientConfig::default()
            .with_base_url(api_url.trim())
            .with_timeout(Duration::from_secs(timeout_secs)),
        poll: PollOptions {
            interval: Duration::from_millis(poll_interval_ms),
        },
        view,
    };
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn config_file_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }
    let default_path = ProjectDirs::from("org", "resmap", "resmap")
        .map(|dirs| dirs.config_dir().join("config.toml"))?;
    default_path.exists().then_some(default_path)
}

fn merge_view(file_view: FileViewConfig, defaults: &DefaultsConfig) -> Result<ViewConfig> {
    let threshold = file_view.threshold.unwrap_or(defaults.threshold);
    validate_threshold(threshold)?;

    let color_scheme = file_view
        .color_scheme
        .unwrap_or_else(|| defaults.color_scheme.clone());
    if scheme(&color_scheme).is_none() {
        warn!(
            "Unknown color scheme '{}', colors will use the default scheme.",
            color_scheme
        );
    }

    if let Some(categories) = &file_view.categories {
        for id in categories.iter().filter(|id| find_category(id).is_none()) {
            warn!("Ignoring unknown interaction category '{}'.", id);
        }
    }

    let chart = match file_view.chart {
        Some(chart) => chart
            .parse::<ChartKind>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => defaults.chart,
    };

    Ok(ViewConfig {
        threshold,
        color_scheme,
        categories: file_view.categories,
        chart,
        log_scale: file_view.log_scale.unwrap_or(defaults.log_scale),
    })
}

pub fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "threshold must be between 0 and 1, got {}",
            threshold
        )))
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let invalid = |kind: &str| {
            CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
        };

        match key {
            "api-url" => config.api_url = Some(value_str.to_string()),
            "timeout-secs" => {
                config.timeout_secs = Some(value_str.parse().map_err(|_| invalid("integer"))?);
            }
            "poll-interval-ms" => {
                config.poll_interval_ms =
                    Some(value_str.parse().map_err(|_| invalid("integer"))?);
            }
            "view.threshold" => {
                config.view.get_or_insert_with(Default::default).threshold =
                    Some(value_str.parse().map_err(|_| invalid("float"))?);
            }
            "view.color-scheme" => {
                config.view.get_or_insert_with(Default::default).color_scheme =
                    Some(value_str.to_string());
            }
            "view.chart" => {
                config.view.get_or_insert_with(Default::default).chart =
                    Some(value_str.to_string());
            }
            "view.log-scale" => {
                config.view.get_or_insert_with(Default::default).log_scale =
                    Some(value_str.parse().map_err(|_| invalid("boolean"))?);
            }
            "view.categories" => {
                config.view.get_or_insert_with(Default::default).categories = Some(
                    value_str
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(str::to_string)
                        .collect(),
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
