use super::error::TransportError;
use super::selection::{ChartKind, SelectionState};
use super::slot::{LoadStatus, ResourceKind, ResourceSlot};
use super::transport::Transport;
use crate::core::classification::color::{Rgba, resolve_color};
use crate::core::classification::matcher::matches_selected;
use crate::core::classification::rules::FILTER_CATEGORIES;
use crate::core::models::{AreaFrame, Dataset, InteractionRecord, TrendSeries};
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use futures_util::future::join_all;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Everything a rendering surface can observe, as one consistent value.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub datasets: ResourceSlot<Vec<Dataset>>,
    pub current_dataset: Option<Dataset>,
    pub interactions: ResourceSlot<Vec<InteractionRecord>>,
    pub area: ResourceSlot<Vec<AreaFrame>>,
    pub trends: ResourceSlot<TrendSeries>,
    pub selection: SelectionState,
    generation: u64,
}

impl StoreState {
    pub fn total_frames(&self) -> u32 {
        self.current_dataset.as_ref().map_or(0, |d| d.frames)
    }

    pub fn status(&self, kind: ResourceKind) -> LoadStatus {
        match kind {
            ResourceKind::Datasets => self.datasets.status(),
            ResourceKind::Interactions => self.interactions.status(),
            ResourceKind::Area => self.area.status(),
            ResourceKind::Trends => self.trends.status(),
        }
    }

    pub fn is_loading(&self, kind: ResourceKind) -> bool {
        self.status(kind) == LoadStatus::Loading
    }

    pub fn error(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Datasets => self.datasets.error(),
            ResourceKind::Interactions => self.interactions.error(),
            ResourceKind::Area => self.area.error(),
            ResourceKind::Trends => self.trends.error(),
        }
    }

    /// Records with `consistency >= threshold` whose label matches a selected category.
    pub fn filtered_interactions(&self) -> Vec<&InteractionRecord> {
        filter_interactions(self.interactions.payload(), &self.selection).collect()
    }

    pub fn color_for(&self, record: &InteractionRecord) -> Rgba {
        resolve_color(
            &record.type_label(),
            record.consistency,
            &self.selection.color_scheme,
        )
    }

    fn interactions_slot(&mut self) -> &mut ResourceSlot<Vec<InteractionRecord>> {
        &mut self.interactions
    }

    fn area_slot(&mut self) -> &mut ResourceSlot<Vec<AreaFrame>> {
        &mut self.area
    }

    fn trends_slot(&mut self) -> &mut ResourceSlot<TrendSeries> {
        &mut self.trends
    }
}

pub fn filter_interactions<'a>(
    records: &'a [InteractionRecord],
    selection: &'a SelectionState,
) -> impl Iterator<Item = &'a InteractionRecord> + 'a {
    records.iter().filter(move |record| {
        record.consistency >= selection.threshold
            && matches_selected(
                &record.type_label(),
                selection.categories.iter(),
                FILTER_CATEGORIES,
            )
    })
}

/// Shared state container for one viewer session.
///
/// Cloning the store yields another handle onto the same state. Operations never
/// fail: fetch errors land in the error slot of the resource they belong to.
pub struct ResourceStore<T> {
    transport: Arc<T>,
    state: Arc<RwLock<StoreState>>,
}

impl<T> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: Transport + 'static> ResourceStore<T> {
    pub fn new(transport: T) -> Self {
        Self::with_shared_transport(Arc::new(transport))
    }

    pub fn with_shared_transport(transport: Arc<T>) -> Self {
        Self {
            transport,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the dataset list. A failure is only visible through the error slot.
    pub async fn load_dataset_list(&self) {
        self.write().datasets.begin();
        info!("Loading dataset list...");

        let outcome = self.transport.list_datasets().await;

        let mut state = self.write();
        match outcome {
            Ok(datasets) => {
                debug!("Received {} dataset(s).", datasets.len());
                state.datasets.settle(Ok(datasets));
            }
            Err(e) => {
                warn!("Error loading datasets: {}", e);
                state.datasets.settle(Err(e.to_string()));
            }
        }
    }

    /// Makes `id` the current dataset and fetches its interactions, area data and
    /// trends concurrently. Unknown ids are ignored.
    ///
    /// Each fetch settles its own slot as soon as it completes. A response that
    /// arrives after a newer selection has been made is discarded. Fetches run on
    /// spawned tasks: dropping the returned future stops waiting but does not
    /// cancel them.
    pub async fn select_dataset(&self, id: &str) {
        let generation = {
            let mut state = self.write();
            let Some(dataset) = state
                .datasets
                .payload()
                .iter()
                .find(|d| d.id == id)
                .cloned()
            else {
                debug!("Ignoring selection of unknown dataset '{}'.", id);
                return;
            };
            state.current_dataset = Some(dataset);
            state.generation += 1;
            state.interactions.begin();
            state.area.begin();
            state.trends.begin();
            state.generation
        };
        info!("Loading data for dataset '{}'...", id);

        let transport = &self.transport;
        let handles = [
            self.spawn_dependent(
                ResourceKind::Interactions,
                generation,
                StoreState::interactions_slot,
                {
                    let (transport, id) = (transport.clone(), id.to_string());
                    async move { transport.get_interactions(&id).await.map(|p| p.interactions) }
                },
            ),
            self.spawn_dependent(
                ResourceKind::Area,
                generation,
                StoreState::area_slot,
                {
                    let (transport, id) = (transport.clone(), id.to_string());
                    async move { transport.get_area_data(&id).await.map(|p| p.frames) }
                },
            ),
            self.spawn_dependent(
                ResourceKind::Trends,
                generation,
                StoreState::trends_slot,
                {
                    let (transport, id) = (transport.clone(), id.to_string());
                    async move { transport.get_trends(&id).await.map(|p| p.trends) }
                },
            ),
        ];

        let joined = join_all(handles).await;
        for (kind, joined) in ResourceKind::DEPENDENT.into_iter().zip(joined) {
            if let Err(e) = joined {
                warn!("Fetch task for {} did not finish: {}", kind, e);
            }
        }
    }

    /// Runs a dependent fetch on its own task so it settles its slot even if the
    /// caller stops waiting.
    fn spawn_dependent<P, F>(
        &self,
        kind: ResourceKind,
        generation: u64,
        slot: fn(&mut StoreState) -> &mut ResourceSlot<P>,
        fetch: F,
    ) -> JoinHandle<()>
    where
        P: Send + 'static,
        F: Future<Output = Result<P, TransportError>> + Send + 'static,
    {
        let store = self.clone();
        tokio::spawn(async move {
            let outcome = fetch.await;
            store.settle_dependent(kind, generation, slot, outcome);
        })
    }

    fn settle_dependent<P>(
        &self,
        kind: ResourceKind,
        generation: u64,
        slot: fn(&mut StoreState) -> &mut ResourceSlot<P>,
        outcome: Result<P, TransportError>,
    ) {
        let mut state = self.write();
        if state.generation != generation {
            debug!(
                "Discarding {} response for superseded selection (generation {} < {}).",
                kind, generation, state.generation
            );
            return;
        }
        if let Err(e) = &outcome {
            warn!("Error loading {}: {}", kind, e);
        }
        slot(&mut *state).settle(outcome.map_err(|e| e.to_string()));
    }

    pub fn set_threshold(&self, threshold: f64) {
        self.write().selection.threshold = threshold;
    }

    pub fn toggle_category(&self, id: &str) {
        if !self.write().selection.toggle_category(id) {
            debug!("Ignoring toggle of unknown category '{}'.", id);
        }
    }

    pub fn select_all_categories(&self) {
        self.write().selection.select_all_categories();
    }

    pub fn clear_categories(&self) {
        self.write().selection.clear_categories();
    }

    pub fn set_chart_kind(&self, chart: ChartKind) {
        self.write().selection.chart = chart;
    }

    pub fn set_color_scheme(&self, scheme: &str) {
        self.write().selection.color_scheme = scheme.to_string();
    }

    pub fn set_log_scale(&self, log_scale: bool) {
        self.write().selection.log_scale = log_scale;
    }

    /// Recomputed from the current records and selection on every call.
    pub fn filtered_interactions(&self) -> Vec<InteractionRecord> {
        self.read()
            .filtered_interactions()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> StoreState {
        self.read().clone()
    }

    pub fn datasets(&self) -> Vec<Dataset> {
        self.read().datasets.payload().clone()
    }

    pub fn current_dataset(&self) -> Option<Dataset> {
        self.read().current_dataset.clone()
    }

    pub fn total_frames(&self) -> u32 {
        self.read().total_frames()
    }

    pub fn interactions(&self) -> Vec<InteractionRecord> {
        self.read().interactions.payload().clone()
    }

    pub fn area_frames(&self) -> Vec<AreaFrame> {
        self.read().area.payload().clone()
    }

    pub fn trends(&self) -> TrendSeries {
        self.read().trends.payload().clone()
    }

    pub fn selection(&self) -> SelectionState {
        self.read().selection.clone()
    }

    pub fn is_loading(&self, kind: ResourceKind) -> bool {
        self.read().is_loading(kind)
    }

    pub fn error(&self, kind: ResourceKind) -> Option<String> {
        self.read().error(kind).map(str::to_string)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
