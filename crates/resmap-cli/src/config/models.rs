use resmap::client::ClientConfig;
use resmap::engine::selection::ChartKind;
use resmap::workflows::processing::PollOptions;

/// Initial selection applied to a freshly created store.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub threshold: f64,
    pub color_scheme: String,
    /// `None` keeps every category selected.
    pub categories: Option<Vec<String>>,
    pub chart: ChartKind,
    pub log_scale: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub poll: PollOptions,
    pub view: ViewConfig,
}
