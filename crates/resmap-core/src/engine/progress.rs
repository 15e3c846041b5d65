use crate::core::models::JobState;

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    UploadStarted { total_bytes: u64 },
    Uploading { percent: u32 },
    UploadFinished { job_id: String },

    Processing { state: JobState, percent: u32 },
    ProcessingFinished,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn reporter_without_callback_is_silent() {
        ProgressReporter::new().report(Progress::Message("nobody listens".to_string()));
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        reporter.report(Progress::Uploading { percent: 10 });
        reporter.report(Progress::ProcessingFinished);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Progress::Uploading { percent: 10 },
                Progress::ProcessingFinished
            ]
        );
    }
}
