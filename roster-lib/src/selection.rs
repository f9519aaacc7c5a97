//! Row selection.
//!
//! Two separate pieces of state live here:
//!
//! - [`SelectionSet`]: which ids are selected. It persists across search,
//!   sort and category changes; rows hidden by a filter stay selected.
//! - the select-all flag: scoped to whatever rows were visible when a
//!   checkbox was last toggled. It is recomputed on every row toggle as
//!   "selected count equals visible count", so rows selected but currently
//!   hidden still count towards the total.
//!
//! The tri-state header checkbox is derived from both at render time by
//! [`SelectionTracker::indicator`].

use std::collections::HashSet;

use crate::model::{Entity, SelectedEntity};

/// Selected row ids. Unordered, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// State of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAll {
    Checked,
    Unchecked,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: SelectionSet,
    all_flag: bool,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The raw select-all flag as last computed by a toggle.
    pub fn all_flag(&self) -> bool {
        self.all_flag
    }

    /// Select or deselect one row; `visible` is the view the click came from.
    pub fn toggle_row(&self, id: &str, checked: bool, visible: &[&Entity]) -> Self {
        let mut ids = self.selected.ids.clone();
        if checked {
            ids.insert(id.to_string());
        } else {
            ids.remove(id);
        }
        let all_flag = ids.len() == visible.len();
        Self {
            selected: SelectionSet { ids },
            all_flag,
        }
    }

    /// Select exactly the visible rows, or clear everything.
    pub fn toggle_all(&self, checked: bool, visible: &[&Entity]) -> Self {
        let selected = if checked {
            visible.iter().map(|row| row.id.as_str()).collect()
        } else {
            SelectionSet::new()
        };
        Self {
            selected,
            all_flag: checked,
        }
    }

    /// Drop ids that are not in the latest source snapshot.
    pub fn retain_known(&self, snapshot: &[Entity]) -> Self {
        let known: HashSet<&str> = snapshot.iter().map(|row| row.id.as_str()).collect();
        let ids: HashSet<String> = self
            .selected
            .ids
            .iter()
            .filter(|id| known.contains(id.as_str()))
            .cloned()
            .collect();
        let pruned = self.selected.len() - ids.len();
        if pruned > 0 {
            log::debug!("pruned {pruned} stale selected ids");
        }
        Self {
            selected: SelectionSet { ids },
            all_flag: self.all_flag,
        }
    }

    pub fn indicator(&self, visible: &[&Entity]) -> SelectAll {
        if visible.is_empty() {
            return SelectAll::Unchecked;
        }
        if self.all_flag {
            return SelectAll::Checked;
        }
        if visible.iter().any(|row| self.is_selected(&row.id)) {
            SelectAll::Indeterminate
        } else {
            SelectAll::Unchecked
        }
    }

    /// `{id, name}` of the selected rows among `rows`, in `rows` order.
    pub fn current_selection(&self, rows: &[&Entity]) -> Vec<SelectedEntity> {
        rows.iter()
            .filter(|row| self.is_selected(&row.id))
            .map(|row| SelectedEntity::from(*row))
            .collect()
    }
}
