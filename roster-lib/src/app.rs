//! The roster app: the grid's host.
//!
//! Owns the row source snapshot and the search query, applies the search
//! filter to produce the working set, and forwards grid interactions to the
//! [`GridController`] together with that working set.

use crate::error::FetchError;
use crate::grid::{GridController, GridMsg, GridView, SelectionObserver};
use crate::model::{Entity, SelectedEntity};
use crate::pipeline::search;

/// Whether the row source has answered yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<Entity>),
}

impl LoadState {
    /// The snapshot, or nothing while loading.
    pub fn rows(&self) -> &[Entity] {
        match self {
            LoadState::Loading => &[],
            LoadState::Ready(rows) => rows,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

#[derive(Debug, Default)]
pub struct RosterApp {
    load: LoadState,
    query: String,
    grid: GridController,
}

impl RosterApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(mut self, grid: GridController) -> Self {
        self.grid = grid;
        self
    }

    /// Shortcut for a default grid with `observer` attached.
    pub fn with_observer(self, observer: impl SelectionObserver + 'static) -> Self {
        self.with_grid(GridController::new().with_observer(observer))
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn rows(&self) -> &[Entity] {
        self.load.rows()
    }

    pub fn grid(&self) -> &GridController {
        &self.grid
    }

    /// Accept the row source's answer. Failures are logged and leave the
    /// roster empty; there is no retry.
    pub fn finish_load(&mut self, result: Result<Vec<Entity>, FetchError>) {
        let rows = match result {
            Ok(rows) => {
                log::info!("loaded {} characters", rows.len());
                rows
            }
            Err(err) => {
                log::error!("failed to load characters: {err}");
                Vec::new()
            }
        };
        self.load = LoadState::Ready(rows);
        let working = search(self.load.rows(), &self.query);
        self.grid.reconcile(self.load.rows(), &working);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.notify_if_changed();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.notify_if_changed();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.notify_if_changed();
    }

    /// The query narrows the working set, and with it the resolved
    /// selection, without any checkbox changing.
    fn notify_if_changed(&mut self) {
        let working = search(self.load.rows(), &self.query);
        self.grid.refresh_selection(&working);
    }

    /// Snapshot rows matching the search query.
    pub fn working_set(&self) -> Vec<&Entity> {
        search(self.load.rows(), &self.query)
    }

    pub fn dispatch(&mut self, msg: GridMsg) {
        let working = search(self.load.rows(), &self.query);
        self.grid.dispatch(msg, &working);
    }

    pub fn view(&self) -> GridView<'_> {
        self.grid.view(&self.working_set())
    }

    pub fn selection(&self) -> Vec<SelectedEntity> {
        self.grid.current_selection(&self.working_set())
    }

    /// The batch action: report the selection. Nothing is sent anywhere.
    pub fn mark_viewed(&self) -> Vec<SelectedEntity> {
        let selected = self.selection();
        match serde_json::to_string(&selected) {
            Ok(json) => log::info!("Selected Characters: {json}"),
            Err(err) => log::warn!("could not encode selection {selected:?}: {err}"),
        }
        selected
    }

    /// Label of the batch action button.
    pub fn mark_viewed_label(&self) -> String {
        format!("Mark Viewed ({})", self.selection().len())
    }
}
