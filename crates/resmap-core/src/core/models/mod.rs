pub mod dataset;
pub mod interaction;
pub mod job;
pub mod series;

pub use dataset::Dataset;
pub use interaction::InteractionRecord;
pub use job::{JobState, JobStatus, UploadResult};
pub use series::{AreaFrame, TrendSeries};
