use roster_lib::model::{Entity, HealthCategory, SelectedEntity};
use roster_lib::selection::{SelectAll, SelectionTracker};

fn roster() -> Vec<Entity> {
    vec![
        Entity::new("1", "Naruto", "Konoha", HealthCategory::Healthy, 1000),
        Entity::new("2", "Sasuke", "Konoha", HealthCategory::Injured, 900),
        Entity::new("3", "Gaara", "Sunagakure", HealthCategory::Critical, 950),
    ]
}

fn picked(id: &str, name: &str) -> SelectedEntity {
    SelectedEntity {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_toggle_row_adds_and_removes() {
    let rows = roster();
    let visible: Vec<&Entity> = rows.iter().collect();

    let tracker = SelectionTracker::new().toggle_row("2", true, &visible);
    assert!(tracker.is_selected("2"));
    assert_eq!(tracker.current_selection(&visible), [picked("2", "Sasuke")]);

    let tracker = tracker.toggle_row("2", false, &visible);
    assert!(tracker.selected().is_empty());
}

#[test]
fn test_toggle_returns_new_value() {
    let rows = roster();
    let visible: Vec<&Entity> = rows.iter().collect();

    let before = SelectionTracker::new();
    let after = before.toggle_row("1", true, &visible);
    assert!(!before.is_selected("1"));
    assert!(after.is_selected("1"));
}

#[test]
fn test_selecting_every_visible_row_sets_flag() {
    let rows = roster();
    let visible: Vec<&Entity> = rows.iter().collect();

    let tracker = visible.iter().fold(SelectionTracker::new(), |t, row| {
        t.toggle_row(&row.id, true, &visible)
    });
    assert!(tracker.all_flag());
    assert_eq!(tracker.indicator(&visible), SelectAll::Checked);

    let tracker = tracker.toggle_row("3", false, &visible);
    assert!(!tracker.all_flag());
    assert_eq!(tracker.indicator(&visible), SelectAll::Indeterminate);
}

#[test]
fn test_toggle_all_selects_visible_in_visible_order() {
    let rows = roster();
    // A visible view in a different order than the snapshot.
    let visible = [&rows[2], &rows[0]];

    let tracker = SelectionTracker::new().toggle_all(true, &visible);
    assert_eq!(
        tracker.current_selection(&visible),
        [picked("3", "Gaara"), picked("1", "Naruto")]
    );
    assert_eq!(tracker.indicator(&visible), SelectAll::Checked);
    assert!(!tracker.is_selected("2"));

    let tracker = tracker.toggle_all(false, &visible);
    assert!(tracker.current_selection(&visible).is_empty());
    assert_eq!(tracker.indicator(&visible), SelectAll::Unchecked);
}

#[test]
fn test_toggle_all_off_clears_hidden_rows_too() {
    let rows = roster();
    let all: Vec<&Entity> = rows.iter().collect();
    let narrowed = [&rows[0]];

    let tracker = SelectionTracker::new().toggle_row("2", true, &all);
    let tracker = tracker.toggle_all(false, &narrowed);
    assert!(!tracker.is_selected("2"));
}

/// The flag compares the total selected count with the visible count, so a
/// hidden selected row can make a partially selected view read as "all".
#[test]
fn test_flag_counts_hidden_selected_rows() {
    let rows = roster();
    let all: Vec<&Entity> = rows.iter().collect();
    let narrowed = [&rows[0], &rows[1]];

    // Gaara selected while everything was visible.
    let tracker = SelectionTracker::new().toggle_row("3", true, &all);
    // Now only Naruto and Sasuke are visible; selecting Naruto makes two
    // selected ids against two visible rows.
    let tracker = tracker.toggle_row("1", true, &narrowed);
    assert!(tracker.all_flag());
    assert_eq!(tracker.indicator(&narrowed), SelectAll::Checked);
}

#[test]
fn test_indicator_on_empty_view_is_unchecked() {
    let tracker = SelectionTracker::new().toggle_all(true, &[]);
    assert!(tracker.all_flag());
    assert_eq!(tracker.indicator(&[]), SelectAll::Unchecked);
}

#[test]
fn test_retain_known_prunes_stale_ids() {
    let rows = roster();
    let all: Vec<&Entity> = rows.iter().collect();
    let tracker = SelectionTracker::new()
        .toggle_row("1", true, &all)
        .toggle_row("3", true, &all);

    let tracker = tracker.retain_known(&rows[..2]);

    assert!(tracker.is_selected("1"));
    assert!(!tracker.is_selected("3"));
    assert_eq!(tracker.selected().len(), 1);
}
