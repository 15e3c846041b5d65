use serde::{Deserialize, Serialize};

/// Separator the service uses when several interaction types share one contact.
pub const TYPE_SEPARATOR: &str = "; ";

/// A residue-residue contact aggregated over all frames of a dataset.
///
/// Records are produced by the analysis service and are read-only to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub res_name1: String,
    pub res_num1: i32,
    pub chain1: String,
    pub res_name2: String,
    pub res_num2: i32,
    pub chain2: String,
    #[serde(default)]
    pub frame_count: u32,
    /// Fraction of frames in which the contact is observed, in `[0, 1]`.
    pub consistency: f64,
    #[serde(default)]
    pub id1: String,
    #[serde(default)]
    pub id2: String,
    #[serde(rename = "typesArray", default)]
    pub types: Vec<String>,
}

impl InteractionRecord {
    /// The raw type label: every type tag joined with `"; "`.
    pub fn type_label(&self) -> String {
        self.types.join(TYPE_SEPARATOR)
    }

    pub fn source_id(&self) -> &str {
        &self.id1
    }

    pub fn target_id(&self) -> &str {
        &self.id2
    }
}

/// Splits a raw concatenated label into its individual type tags.
pub fn split_type_label(label: &str) -> Vec<String> {
    label
        .split(';')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn record(label: &str, consistency: f64) -> InteractionRecord {
    InteractionRecord {
        res_name1: "ARG".to_string(),
        res_num1: 12,
        chain1: "A".to_string(),
        res_name2: "ASP".to_string(),
        res_num2: 40,
        chain2: "B".to_string(),
        frame_count: 0,
        consistency,
        id1: "A-ARG12".to_string(),
        id2: "B-ASP40".to_string(),
        types: split_type_label(label),
    }
}
