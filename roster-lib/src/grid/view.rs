use super::Column;
use crate::model::Entity;
use crate::pipeline::{CategoryFilter, SortState};
use crate::selection::SelectAll;

/// One visible row and whether its checkbox is ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRow<'a> {
    pub entity: &'a Entity,
    pub selected: bool,
}

/// Everything a renderer needs for one frame, derived fresh from state.
#[derive(Debug, Clone)]
pub struct GridView<'a> {
    pub columns: &'a [Column],
    pub rows: Vec<GridRow<'a>>,
    pub select_all: SelectAll,
    pub sort: SortState,
    pub filter: &'a CategoryFilter,
    pub filter_menu_open: bool,
}

impl<'a> GridView<'a> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Names of the visible rows, in display order.
    pub fn names(&self) -> Vec<&'a str> {
        self.rows
            .iter()
            .map(|row| row.entity.name.as_str())
            .collect()
    }
}
