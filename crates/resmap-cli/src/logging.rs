use crate::error::Result;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    prelude::*,
};

/// Targets emitted by this workspace: the library and the `rmap` binary.
const OWN_TARGETS: [&str; 2] = ["resmap", "rmap"];
/// The log file records at least this much detail for our own targets.
const FILE_MIN_LEVEL: LevelFilter = LevelFilter::DEBUG;

fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Our own targets log at `level`; HTTP stack crates never go below WARN.
fn own_targets(level: LevelFilter) -> Targets {
    OWN_TARGETS.iter().fold(
        Targets::new().with_default(level.min(LevelFilter::WARN)),
        |targets, name| targets.with_target(*name, level),
    )
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = console_level(verbosity, quiet);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_filter(own_targets(level));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path)?;
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_target(true)
                    .with_filter(own_targets(level.max(FILE_MIN_LEVEL))),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serial_test::serial;
    use tracing::{Level, debug, info, warn};

    #[test]
    fn quiet_still_lets_errors_through() {
        assert_eq!(console_level(0, false), LevelFilter::WARN);
        assert_eq!(console_level(1, false), LevelFilter::INFO);
        assert_eq!(console_level(2, false), LevelFilter::DEBUG);
        assert_eq!(console_level(9, false), LevelFilter::TRACE);
        assert_eq!(console_level(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn dependency_targets_are_capped_at_warn() {
        let targets = own_targets(LevelFilter::TRACE);
        assert!(targets.would_enable("resmap::engine::store", &Level::TRACE));
        assert!(targets.would_enable("rmap::commands", &Level::DEBUG));
        assert!(targets.would_enable("hyper_util::client", &Level::WARN));
        assert!(!targets.would_enable("hyper_util::client", &Level::INFO));

        let quiet = own_targets(LevelFilter::ERROR);
        assert!(!quiet.would_enable("resmap::engine::store", &Level::WARN));
        assert!(!quiet.would_enable("reqwest::connect", &Level::WARN));
    }

    #[test]
    #[serial]
    fn file_layer_keeps_own_debug_events_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("rmap.log");

        let file_layer = fmt::layer()
            .with_writer(File::create(&log_path).unwrap())
            .with_ansi(false)
            .with_target(true)
            .with_filter(own_targets(LevelFilter::WARN.max(FILE_MIN_LEVEL)));
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            debug!(target: "resmap::engine::store", "Loading data for dataset '1abc'...");
            debug!(target: "reqwest::connect", "starting new connection");
            warn!(target: "reqwest::connect", "connection reset");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Loading data for dataset '1abc'..."));
        assert!(content.contains("resmap::engine::store"));
        assert!(content.contains("connection reset"));
        assert!(!content.contains("starting new connection"));
    }

    #[test]
    #[serial]
    fn log_file_in_missing_directory_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("rmap.log");

        let result = setup_logging(0, false, Some(path));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    #[serial]
    fn global_setup_writes_to_the_log_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("session.log");

        setup_logging(0, false, Some(path.clone())).unwrap();
        info!(target: "rmap::commands", "Dispatching to 'datasets' command.");

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Dispatching to 'datasets' command."));
    }
}
