use super::error::TransportError;
use crate::core::models::{
    AreaFrame, Dataset, InteractionRecord, JobStatus, TrendSeries, UploadResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Receives upload progress as an integer percentage.
pub type UploadProgressFn = Arc<dyn Fn(u32) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionsPayload {
    #[serde(default)]
    pub system: String,
    #[serde(rename = "totalFrames", default)]
    pub total_frames: u32,
    #[serde(default)]
    pub interactions: Vec<InteractionRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaPayload {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub frames: Vec<AreaFrame>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendsPayload {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub trends: TrendSeries,
}

/// Calls the resource store and workflows make against the analysis service.
///
/// Each call resolves to its payload or to a single [`TransportError`]; implementations
/// collapse every failure shape into one of its three variants.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn list_datasets(&self) -> Result<Vec<Dataset>, TransportError>;

    async fn get_dataset(&self, id: &str) -> Result<Dataset, TransportError>;

    async fn get_interactions(&self, id: &str) -> Result<InteractionsPayload, TransportError>;

    async fn get_area_data(&self, id: &str) -> Result<AreaPayload, TransportError>;

    async fn get_trends(&self, id: &str) -> Result<TrendsPayload, TransportError>;

    async fn upload_file(
        &self,
        path: &Path,
        on_progress: UploadProgressFn,
    ) -> Result<UploadResult, TransportError>;

    async fn get_status(&self, job_id: &str) -> Result<JobStatus, TransportError>;
}
