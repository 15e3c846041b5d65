use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Buried surface area of the interface in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaFrame {
    pub frame: u32,
    #[serde(rename = "totalBSA", default)]
    pub total_bsa: f64,
    #[serde(rename = "polarBSA", default)]
    pub polar_bsa: f64,
    #[serde(rename = "nonPolarBSA", default)]
    pub non_polar_bsa: f64,
}

/// Per-frame interaction counts keyed by the service's category label
/// (e.g. `"H-bonds"`, `"Clashes"`).
pub type TrendSeries = BTreeMap<String, Vec<u32>>;

/// Sum of every series in a trend table, per category label.
pub fn trend_totals(trends: &TrendSeries) -> BTreeMap<&str, u64> {
    trends
        .iter()
        .map(|(label, counts)| {
            (
                label.as_str(),
                counts.iter().map(|&c| u64::from(c)).sum::<u64>(),
            )
        })
        .collect()
}
