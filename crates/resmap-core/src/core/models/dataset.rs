use serde::{Deserialize, Serialize};

/// A processed simulation system available on the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// Total number of analysed frames.
    #[serde(default)]
    pub frames: u32,
}

impl Dataset {
    pub fn new(id: impl Into<String>, frames: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            path: id.clone(),
            id,
            frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_listing_entry() {
        let json = r#"{"id": "1abc", "name": "1abc", "path": "1abc", "frames": 250}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset, Dataset::new("1abc", 250));
    }

    #[test]
    fn missing_optional_fields_default() {
        let dataset: Dataset = serde_json::from_str(r#"{"id": "x", "name": "X"}"#).unwrap();
        assert_eq!(dataset.frames, 0);
        assert!(dataset.path.is_empty());
    }
}
