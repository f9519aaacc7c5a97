use super::{Column, GridMsg, GridRow, GridState, GridView};
use crate::model::{Entity, SelectedEntity};

/// Receives the resolved selection after every selection change.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selected: &[SelectedEntity]);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&[SelectedEntity]),
{
    fn selection_changed(&mut self, selected: &[SelectedEntity]) {
        self(selected)
    }
}

/// Owns the grid state and applies interactions to it.
///
/// The controller never holds rows. Callers pass the current working set
/// (the search-filtered snapshot) into every call that needs it, so nothing
/// derived can go stale.
pub struct GridController {
    columns: Vec<Column>,
    state: GridState,
    observer: Option<Box<dyn SelectionObserver>>,
    /// The list last handed to the observer.
    reported: Vec<SelectedEntity>,
}

impl Default for GridController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GridController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridController")
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .field("reported", &self.reported)
            .finish()
    }
}

impl GridController {
    pub fn new() -> Self {
        Self {
            columns: Column::defaults(),
            state: GridState::new(),
            observer: None,
            reported: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_observer(mut self, observer: impl SelectionObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Apply one interaction.
    ///
    /// Checkbox toggles always notify the observer; other messages notify
    /// only if they changed the resolved selection.
    pub fn dispatch(&mut self, msg: GridMsg, working: &[&Entity]) {
        log::debug!("grid: {msg:?}");
        let next = self.state.update(&msg, working);
        self.state = next;

        let selected = self.current_selection(working);
        if msg.touches_selection() || selected != self.reported {
            self.notify(selected);
        }
    }

    /// Prune selection against a fresh source snapshot.
    ///
    /// `working` is the search-filtered view of that snapshot.
    pub fn reconcile(&mut self, snapshot: &[Entity], working: &[&Entity]) {
        self.state = GridState {
            selection: self.state.selection.retain_known(snapshot),
            ..self.state.clone()
        };
        self.refresh_selection(working);
    }

    /// Notify the observer if the resolved selection over `working` differs
    /// from what it was last told.
    pub fn refresh_selection(&mut self, working: &[&Entity]) {
        let selected = self.current_selection(working);
        if selected != self.reported {
            self.notify(selected);
        }
    }

    fn notify(&mut self, selected: Vec<SelectedEntity>) {
        if let Some(observer) = self.observer.as_mut() {
            observer.selection_changed(&selected);
        }
        self.reported = selected;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection.is_selected(id)
    }

    /// Selected rows of the sorted working set, in that order.
    ///
    /// Rows hidden only by the category filter are included.
    pub fn current_selection(&self, working: &[&Entity]) -> Vec<SelectedEntity> {
        self.state
            .selection
            .current_selection(&self.state.sorted(working))
    }

    pub fn view<'a>(&'a self, working: &[&'a Entity]) -> GridView<'a> {
        let visible = self.state.visible(working);
        let select_all = self.state.selection.indicator(&visible);
        let rows = visible
            .into_iter()
            .map(|entity| GridRow {
                entity,
                selected: self.is_selected(&entity.id),
            })
            .collect();

        GridView {
            columns: &self.columns,
            rows,
            select_all,
            sort: self.state.sort,
            filter: &self.state.filter,
            filter_menu_open: self.state.filter_menu_open,
        }
    }
}
