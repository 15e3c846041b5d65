use resmap::client::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use resmap::core::classification::palette::DEFAULT_SCHEME;
use resmap::engine::selection::{ChartKind, DEFAULT_THRESHOLD};
use resmap::workflows::processing::DEFAULT_POLL_INTERVAL;

pub struct DefaultsConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub threshold: f64,
    pub color_scheme: String,
    pub chart: ChartKind,
    pub log_scale: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            threshold: DEFAULT_THRESHOLD,
            color_scheme: DEFAULT_SCHEME.to_string(),
            chart: ChartKind::default(),
            log_scale: false,
        }
    }
}
