use crate::model::{Entity, HealthCategory};
use crate::pipeline::{CategoryFilter, SortState, filter_by_category, sort_by_power};
use crate::selection::SelectionTracker;

/// A user interaction with the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg {
    ToggleRow { id: String, checked: bool },
    ToggleAll(bool),
    ToggleCategory(HealthCategory),
    ClearCategories,
    CycleSort,
    ToggleFilterMenu,
    CloseFilterMenu,
}

impl GridMsg {
    /// Whether this message can change the selection.
    pub fn touches_selection(&self) -> bool {
        matches!(self, GridMsg::ToggleRow { .. } | GridMsg::ToggleAll(_))
    }
}

/// Everything the grid remembers between interactions.
///
/// Never mutated in place: [`GridState::update`] returns the next value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    pub filter: CategoryFilter,
    pub sort: SortState,
    pub selection: SelectionTracker,
    pub filter_menu_open: bool,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Working set after sorting, before the category filter.
    pub fn sorted<'a>(&self, working: &[&'a Entity]) -> Vec<&'a Entity> {
        sort_by_power(working, self.sort)
    }

    /// Rows actually shown: sort first, then category filter.
    pub fn visible<'a>(&self, working: &[&'a Entity]) -> Vec<&'a Entity> {
        filter_by_category(&self.sorted(working), &self.filter)
    }

    pub fn update(&self, msg: &GridMsg, working: &[&Entity]) -> GridState {
        match msg {
            GridMsg::ToggleRow { id, checked } => GridState {
                selection: self
                    .selection
                    .toggle_row(id, *checked, &self.visible(working)),
                ..self.clone()
            },
            GridMsg::ToggleAll(checked) => GridState {
                selection: self.selection.toggle_all(*checked, &self.visible(working)),
                ..self.clone()
            },
            GridMsg::ToggleCategory(category) => GridState {
                filter: self.filter.toggled(*category),
                ..self.clone()
            },
            GridMsg::ClearCategories => GridState {
                filter: CategoryFilter::new(),
                ..self.clone()
            },
            GridMsg::CycleSort => GridState {
                sort: self.sort.next(),
                ..self.clone()
            },
            GridMsg::ToggleFilterMenu => GridState {
                filter_menu_open: !self.filter_menu_open,
                ..self.clone()
            },
            GridMsg::CloseFilterMenu => GridState {
                filter_menu_open: false,
                ..self.clone()
            },
        }
    }
}
