use std::cell::RefCell;
use std::rc::Rc;

use roster_lib::grid::{CellValue, Column, GridController, GridMsg, TextField};
use roster_lib::model::{Entity, HealthCategory, HealthColor, SelectedEntity};
use roster_lib::pipeline::SortState;
use roster_lib::selection::SelectAll;

fn roster() -> Vec<Entity> {
    vec![
        Entity::new("1", "Naruto", "Konoha", HealthCategory::Healthy, 1000),
        Entity::new("2", "Sasuke", "Konoha", HealthCategory::Injured, 900),
        Entity::new("3", "Gaara", "Sunagakure", HealthCategory::Critical, 950),
        Entity::new("4", "Hinata", "Konoha", HealthCategory::Injured, 800),
    ]
}

fn picked(id: &str, name: &str) -> SelectedEntity {
    SelectedEntity {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn recording() -> (GridController, Rc<RefCell<Vec<Vec<SelectedEntity>>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let grid = GridController::new().with_observer(move |selected: &[SelectedEntity]| {
        sink.borrow_mut().push(selected.to_vec())
    });
    (grid, log)
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_sort_then_category_filter() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let mut grid = GridController::new();

    grid.dispatch(GridMsg::CycleSort, &working);
    grid.dispatch(GridMsg::ToggleCategory(HealthCategory::Injured), &working);

    let view = grid.view(&working);
    assert_eq!(view.sort, SortState::Ascending);
    assert_eq!(view.names(), ["Hinata", "Sasuke"]);
}

#[test]
fn test_sort_cycle_restores_working_order() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let mut grid = GridController::new();

    grid.dispatch(GridMsg::CycleSort, &working);
    assert_eq!(
        grid.view(&working).names(),
        ["Hinata", "Sasuke", "Gaara", "Naruto"]
    );
    grid.dispatch(GridMsg::CycleSort, &working);
    assert_eq!(
        grid.view(&working).names(),
        ["Naruto", "Gaara", "Sasuke", "Hinata"]
    );
    grid.dispatch(GridMsg::CycleSort, &working);
    assert_eq!(
        grid.view(&working).names(),
        ["Naruto", "Sasuke", "Gaara", "Hinata"]
    );
}

#[test]
fn test_clear_categories_shows_everything() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let mut grid = GridController::new();

    grid.dispatch(GridMsg::ToggleCategory(HealthCategory::Critical), &working);
    assert_eq!(grid.view(&working).names(), ["Gaara"]);
    grid.dispatch(GridMsg::ClearCategories, &working);
    assert_eq!(grid.view(&working).rows.len(), 4);
}

#[test]
fn test_filter_menu_open_close() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let mut grid = GridController::new();

    grid.dispatch(GridMsg::ToggleFilterMenu, &working);
    assert!(grid.view(&working).filter_menu_open);
    grid.dispatch(GridMsg::ToggleFilterMenu, &working);
    assert!(!grid.view(&working).filter_menu_open);
    grid.dispatch(GridMsg::ToggleFilterMenu, &working);
    grid.dispatch(GridMsg::CloseFilterMenu, &working);
    assert!(!grid.state().filter_menu_open);
}

// =============================================================================
// Selection through the controller
// =============================================================================

#[test]
fn test_select_all_uses_visible_rows() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let mut grid = GridController::new();

    grid.dispatch(GridMsg::ToggleCategory(HealthCategory::Injured), &working);
    grid.dispatch(GridMsg::CycleSort, &working);
    grid.dispatch(GridMsg::ToggleAll(true), &working);

    let view = grid.view(&working);
    assert_eq!(view.select_all, SelectAll::Checked);
    assert!(view.rows.iter().all(|row| row.selected));
    assert_eq!(
        grid.current_selection(&working),
        [picked("4", "Hinata"), picked("2", "Sasuke")]
    );
    assert!(!grid.is_selected("1"));
}

#[test]
fn test_selection_survives_category_filter() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let mut grid = GridController::new();

    grid.dispatch(
        GridMsg::ToggleRow {
            id: "1".into(),
            checked: true,
        },
        &working,
    );
    grid.dispatch(GridMsg::ToggleCategory(HealthCategory::Critical), &working);
    assert_eq!(grid.view(&working).names(), ["Gaara"]);
    assert!(grid.is_selected("1"));
    // Hidden by the category filter but still reported.
    assert_eq!(grid.current_selection(&working), [picked("1", "Naruto")]);

    grid.dispatch(GridMsg::ToggleCategory(HealthCategory::Critical), &working);
    let view = grid.view(&working);
    assert!(view.rows[0].selected);
    assert_eq!(view.select_all, SelectAll::Indeterminate);
}

#[test]
fn test_observer_notified_on_selection_changes_only() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let (mut grid, log) = recording();

    grid.dispatch(GridMsg::CycleSort, &working);
    assert!(log.borrow().is_empty());

    grid.dispatch(
        GridMsg::ToggleRow {
            id: "2".into(),
            checked: true,
        },
        &working,
    );
    grid.dispatch(GridMsg::ToggleAll(false), &working);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], [picked("2", "Sasuke")]);
    assert!(log[1].is_empty());
}

#[test]
fn test_reconcile_prunes_removed_rows() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let (mut grid, log) = recording();
    grid.dispatch(GridMsg::ToggleAll(true), &working);

    let refreshed = &rows[..2];
    let working: Vec<&Entity> = refreshed.iter().collect();
    grid.reconcile(refreshed, &working);
    assert!(grid.is_selected("1"));
    assert!(grid.is_selected("2"));
    assert!(!grid.is_selected("3"));
    assert_eq!(grid.state().selection.selected().len(), 2);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1], [picked("1", "Naruto"), picked("2", "Sasuke")]);
}

#[test]
fn test_reconcile_without_change_stays_quiet() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let (mut grid, log) = recording();
    grid.dispatch(
        GridMsg::ToggleRow {
            id: "1".into(),
            checked: true,
        },
        &working,
    );

    grid.reconcile(&rows, &working);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_refresh_reports_narrowed_working_set() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let (mut grid, log) = recording();
    grid.dispatch(GridMsg::ToggleAll(true), &working);

    grid.refresh_selection(&[&rows[1]]);
    grid.refresh_selection(&[&rows[1]]);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1], [picked("2", "Sasuke")]);
}

// =============================================================================
// Columns
// =============================================================================

#[test]
fn test_default_columns_and_cells() {
    let rows = roster();
    let columns = Column::defaults();
    let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
    assert_eq!(headers, ["", "Name", "Location", "Health", "Power"]);

    let cells: Vec<CellValue<'_>> = columns.iter().map(|c| c.cell(&rows[1], true)).collect();
    assert_eq!(
        cells,
        [
            CellValue::Checkbox(true),
            CellValue::Text("Sasuke"),
            CellValue::Text("Konoha"),
            CellValue::Health {
                label: "Injured",
                color: HealthColor::Amber
            },
            CellValue::Number(Some(900)),
        ]
    );
}

#[test]
fn test_custom_columns() {
    let rows = roster();
    let working: Vec<&Entity> = rows.iter().collect();
    let grid = GridController::new().with_columns(vec![Column::Text(TextField::Name)]);
    assert_eq!(grid.view(&working).columns, [Column::Text(TextField::Name)]);
}
