use std::fmt;

/// The four collections the store fetches independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Datasets,
    Interactions,
    Area,
    Trends,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Datasets,
        ResourceKind::Interactions,
        ResourceKind::Area,
        ResourceKind::Trends,
    ];

    /// Resources fetched per selected dataset, in issue order.
    pub const DEPENDENT: [ResourceKind; 3] = [
        ResourceKind::Interactions,
        ResourceKind::Area,
        ResourceKind::Trends,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Datasets => "datasets",
            ResourceKind::Interactions => "interactions",
            ResourceKind::Area => "area",
            ResourceKind::Trends => "trends",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Loading state, last error and payload of one fetched collection.
///
/// A failed load keeps whatever payload the previous successful load stored;
/// only the error message tells the two apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceSlot<T> {
    status: LoadStatus,
    error: Option<String>,
    payload: T,
}

impl<T> ResourceSlot<T> {
    pub fn new(payload: T) -> Self {
        Self {
            status: LoadStatus::Idle,
            error: None,
            payload,
        }
    }

    /// Marks a fetch as outstanding and clears the previous error.
    pub fn begin(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    /// Records the outcome of the outstanding fetch.
    pub fn settle(&mut self, outcome: Result<T, String>) {
        match outcome {
            Ok(payload) => {
                self.payload = payload;
                self.status = LoadStatus::Loaded;
            }
            Err(message) => {
                self.error = Some(message);
                self.status = LoadStatus::Failed;
            }
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_idle_without_error() {
        let slot = ResourceSlot::new(Vec::<u32>::new());
        assert_eq!(slot.status(), LoadStatus::Idle);
        assert!(!slot.is_loading());
        assert!(slot.error().is_none());
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut slot = ResourceSlot::new(0u32);
        slot.begin();
        slot.settle(Err("offline".to_string()));
        assert_eq!(slot.error(), Some("offline"));

        slot.begin();
        assert!(slot.is_loading());
        assert!(slot.error().is_none());
    }

    #[test]
    fn failure_keeps_stale_payload() {
        let mut slot = ResourceSlot::new(Vec::new());
        slot.begin();
        slot.settle(Ok(vec![1, 2, 3]));
        assert_eq!(slot.status(), LoadStatus::Loaded);

        slot.begin();
        slot.settle(Err("timeout".to_string()));
        assert_eq!(slot.status(), LoadStatus::Failed);
        assert!(!slot.is_loading());
        assert_eq!(slot.payload(), &vec![1, 2, 3]);
        assert_eq!(slot.error(), Some("timeout"));
    }
}
