use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub success: bool,
    /// Job identifier to poll with `get_status`; also the future dataset id.
    pub id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Queued,
    Splitting,
    Analyzing,
    Completed,
    Failed,
    #[serde(untagged)]
    Unknown(String),
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Queued => f.write_str("queued"),
            JobState::Splitting => f.write_str("splitting"),
            JobState::Analyzing => f.write_str("analyzing"),
            JobState::Completed => f.write_str("completed"),
            JobState::Failed => f.write_str("failed"),
            JobState::Unknown(other) => f.write_str(other),
        }
    }
}

/// Processing status of an uploaded structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub status: JobState,
    /// Percent complete, 0-100.
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub frames: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
