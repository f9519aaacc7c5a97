use roster_dom::a11y::{
    accessible_name, query_all_by_role, query_by_label, query_by_placeholder, query_by_role,
    query_by_role_and_name, query_by_text,
};
use roster_dom::{hit_test, layout, Checked, Element, FocusState, Rect, Role, Size};

fn form() -> Element {
    Element::col()
        .id("root")
        .child(
            Element::text_input("")
                .id("search")
                .label("Search")
                .placeholder("Search by name..."),
        )
        .child(
            Element::row()
                .id("toolbar")
                .gap(1)
                .child(
                    Element::text("[x]")
                        .id("check")
                        .role(Role::Checkbox)
                        .label("Select all")
                        .checked(Checked::True)
                        .focusable(true)
                        .clickable(true),
                )
                .child(Element::button("Apply").id("apply"))
                .child(Element::button("Off").id("off").disabled(true)),
        )
        .child(Element::text("status line").id("status"))
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_by_role_and_label() {
    let root = form();

    let checkbox = query_by_role(&root, Role::Checkbox).expect("checkbox");
    assert_eq!(checkbox.id, "check");
    assert_eq!(checkbox.checked, Some(Checked::True));

    assert_eq!(
        query_by_label(&root, "Search").map(|e| e.id.as_str()),
        Some("search")
    );
    assert_eq!(
        query_by_placeholder(&root, "Search by name...").map(|e| e.id.as_str()),
        Some("search")
    );
    assert_eq!(query_all_by_role(&root, Role::Button).len(), 2);
    assert!(query_by_role(&root, Role::ProgressBar).is_none());
}

#[test]
fn test_accessible_name_prefers_label() {
    let root = form();
    let apply = query_by_role_and_name(&root, Role::Button, "Apply").expect("apply");
    assert_eq!(accessible_name(apply), Some("Apply"));

    let check = query_by_role_and_name(&root, Role::Checkbox, "Select all").expect("check");
    assert_eq!(check.text_content(), Some("[x]"));
}

#[test]
fn test_query_by_text_is_exact() {
    let root = form();
    assert!(query_by_text(&root, "status line").is_some());
    assert!(query_by_text(&root, "status").is_none());
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_tab_cycles_enabled_focusables() {
    let root = form();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root).as_deref(), Some("search"));
    assert_eq!(focus.focus_next(&root).as_deref(), Some("check"));
    assert_eq!(focus.focus_next(&root).as_deref(), Some("apply"));
    // Disabled button is skipped and focus wraps.
    assert_eq!(focus.focus_next(&root).as_deref(), Some("search"));
    assert_eq!(focus.focus_prev(&root).as_deref(), Some("apply"));
}

#[test]
fn test_enrich_marks_focused_element() {
    let mut root = form();
    let mut focus = FocusState::new();
    focus.focus("apply");
    focus.enrich(&mut root);

    let apply = query_by_role_and_name(&root, Role::Button, "Apply").unwrap();
    assert!(apply.focused);
    assert!(!query_by_label(&root, "Search").unwrap().focused);
}

#[test]
fn test_retain_drops_vanished_focus() {
    let root = form();
    let mut focus = FocusState::new();
    focus.focus("gone");
    focus.retain(&root);
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_finds_deepest_clickable() {
    let root = form().width(Size::Fixed(30));
    let layout = layout::layout(&root, Rect::from_size(30, 5));

    // Row 1: "[x]" at 0..3, gap, "Apply" at 4..9.
    assert_eq!(hit_test(&layout, &root, 1, 1).as_deref(), Some("check"));
    assert_eq!(hit_test(&layout, &root, 5, 1).as_deref(), Some("apply"));
    // Disabled and plain text are not clickable.
    assert_eq!(hit_test(&layout, &root, 11, 1), None);
    assert_eq!(hit_test(&layout, &root, 0, 2), None);
}
