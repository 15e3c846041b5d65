use crate::core::classification::palette::DEFAULT_SCHEME;
use crate::core::classification::rules::{all_category_ids, find_category};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    #[default]
    Arc,
    Sankey,
    DependencyWheel,
    Heatmap,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Arc,
        ChartKind::Sankey,
        ChartKind::DependencyWheel,
        ChartKind::Heatmap,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ChartKind::Arc => "arc",
            ChartKind::Sankey => "sankey",
            ChartKind::DependencyWheel => "dependency-wheel",
            ChartKind::Heatmap => "heatmap",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown chart kind '{0}'. Expected one of: arc, sankey, dependency-wheel, heatmap.")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

/// Immutable set of selected category ids; replaced wholesale on every change.
pub type CategorySet = Arc<BTreeSet<String>>;

/// What the user has chosen to look at. Data loads never touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub threshold: f64,
    pub categories: CategorySet,
    pub chart: ChartKind,
    pub color_scheme: String,
    pub log_scale: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            categories: all_categories(),
            chart: ChartKind::default(),
            color_scheme: DEFAULT_SCHEME.to_string(),
            log_scale: false,
        }
    }
}

impl SelectionState {
    pub fn is_selected(&self, id: &str) -> bool {
        self.categories.contains(id)
    }

    /// Flips one category. Ids without a filter rule are ignored; returns whether
    /// the selection changed.
    pub fn toggle_category(&mut self, id: &str) -> bool {
        if find_category(id).is_none() {
            return false;
        }
        let mut next = BTreeSet::clone(&self.categories);
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        self.categories = Arc::new(next);
        true
    }

    pub fn select_all_categories(&mut self) {
        self.categories = all_categories();
    }

    pub fn clear_categories(&mut self) {
        self.categories = Arc::new(BTreeSet::new());
    }
}

fn all_categories() -> CategorySet {
    Arc::new(all_category_ids().map(str::to_string).collect())
}
