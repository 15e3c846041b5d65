use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "rmap - browse per-residue interaction maps computed by a remote analysis service.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service API (overrides RESMAP_API_URL and the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S view.threshold=0.8
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the datasets available on the analysis service.
    Datasets,
    /// Print the filtered interactions of a dataset with their display colors.
    Interactions(InteractionsArgs),
    /// Load every resource of a dataset and report what arrived.
    Summary(SummaryArgs),
    /// Show the interaction categories and the colors of a scheme.
    Categories(CategoriesArgs),
    /// Upload a structure file for processing.
    Upload(UploadArgs),
    /// Show the processing status of an uploaded file.
    Status(StatusArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Arguments for the `interactions` subcommand.
#[derive(Args, Debug, Clone)]
pub struct InteractionsArgs {
    /// Identifier of the dataset.
    #[arg(required = true)]
    pub dataset: String,

    /// Minimum consistency (0-1) an interaction must reach.
    #[arg(short, long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// Only keep interactions of this category. Can be used multiple times.
    /// Run `rmap categories` for the list of identifiers.
    #[arg(short = 'k', long = "category", value_name = "ID", conflicts_with = "no_categories")]
    pub categories: Vec<String>,

    /// Deselect every category (the result is always empty).
    #[arg(long = "none")]
    pub no_categories: bool,

    /// Color scheme used for the color column.
    #[arg(short, long, value_name = "NAME")]
    pub scheme: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `summary` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Identifier of the dataset.
    #[arg(required = true)]
    pub dataset: String,
}

/// Arguments for the `categories` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CategoriesArgs {
    /// Color scheme to display (defaults to the configured one).
    #[arg(short, long, value_name = "NAME")]
    pub scheme: Option<String>,
}

/// Arguments for the `upload` subcommand.
#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// Path to the structure file (e.g., complex.pdb).
    #[arg(required = true, value_name = "PATH")]
    pub file: PathBuf,

    /// Wait until processing completes or fails.
    #[arg(short, long)]
    pub wait: bool,
}

/// Arguments for the `status` subcommand.
#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Job identifier returned by `rmap upload`.
    #[arg(required = true)]
    pub job_id: String,

    /// Keep polling until the job completes or fails.
    #[arg(short, long)]
    pub wait: bool,
}
