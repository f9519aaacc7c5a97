//! Interactive element ids and the actions they trigger.
//!
//! The view gives every control a stable id; clicks and key activations are
//! routed back through [`Action::from_element_id`].

use roster_lib::HealthCategory;

pub const SEARCH: &str = "search";
pub const SELECT_ALL: &str = "select-all";
pub const FILTER_TOGGLE: &str = "filter-toggle";
pub const SORT_POWER: &str = "sort-power";
pub const MARK_VIEWED: &str = "mark-viewed";

const ROW_SELECT: &str = "row-select:";
const FILTER_OPTION: &str = "filter-option:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FocusSearch,
    ToggleAll,
    ToggleRow(String),
    ToggleFilterMenu,
    ToggleCategory(HealthCategory),
    CycleSort,
    MarkViewed,
}

impl Action {
    pub fn from_element_id(id: &str) -> Option<Action> {
        if let Some(row) = id.strip_prefix(ROW_SELECT) {
            return Some(Action::ToggleRow(row.to_string()));
        }
        if let Some(category) = id.strip_prefix(FILTER_OPTION) {
            return HealthCategory::parse(category).map(Action::ToggleCategory);
        }
        match id {
            SEARCH => Some(Action::FocusSearch),
            SELECT_ALL => Some(Action::ToggleAll),
            FILTER_TOGGLE => Some(Action::ToggleFilterMenu),
            SORT_POWER => Some(Action::CycleSort),
            MARK_VIEWED => Some(Action::MarkViewed),
            _ => None,
        }
    }

    /// The id of the control that triggers this action.
    pub fn element_id(&self) -> String {
        match self {
            Action::FocusSearch => SEARCH.to_string(),
            Action::ToggleAll => SELECT_ALL.to_string(),
            Action::ToggleRow(id) => format!("{ROW_SELECT}{id}"),
            Action::ToggleFilterMenu => FILTER_TOGGLE.to_string(),
            Action::ToggleCategory(category) => {
                format!("{FILTER_OPTION}{}", category.as_str().to_ascii_lowercase())
            }
            Action::CycleSort => SORT_POWER.to_string(),
            Action::MarkViewed => MARK_VIEWED.to_string(),
        }
    }
}
