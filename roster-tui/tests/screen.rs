use roster_dom::layout::{LayoutResult, layout};
use roster_dom::render::render_to_buffer;
use roster_dom::{Buffer, Element, Rect, hit_test};
use roster_lib::source::decode_rows;
use roster_tui::Ui;
use roster_tui::view::theme;

const ROSTER: &str = r#"[
    {"id":"1","name":"Naruto","location":"Konoha","health":"Healthy","power":1000},
    {"id":"2","name":"Sasuke","location":"Konoha","health":"Injured","power":900}
]"#;

fn draw(root: &Element) -> (LayoutResult, Vec<String>) {
    let (width, height) = (80, 12);
    let layout = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf, &theme());
    let lines = (0..height).map(|y| buf.line(y)).collect();
    (layout, lines)
}

fn line_of(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("'{needle}' not on screen:\n{}", lines.join("\n")))
}

#[test]
fn test_rows_drawn_in_order() {
    let mut ui = Ui::new();
    ui.finish_load(decode_rows(ROSTER));

    let (_, lines) = draw(&ui.root());
    assert!(line_of(&lines, "Search by name or location...") < line_of(&lines, "Name"));
    assert!(line_of(&lines, "Naruto") < line_of(&lines, "Sasuke"));
    assert!(lines[line_of(&lines, "Sasuke")].contains("Injured"));
    assert!(lines[line_of(&lines, "Sasuke")].contains("900"));
}

#[test]
fn test_click_on_sort_control_reorders() {
    let mut ui = Ui::new();
    ui.finish_load(decode_rows(ROSTER));

    let root = ui.root();
    let (layout, _) = draw(&root);
    let rect = layout["sort-power"];
    let hit = hit_test(&layout, &root, rect.x, rect.y).unwrap();
    assert_eq!(hit, "sort-power");

    ui.handle_click(&hit);
    let (_, lines) = draw(&ui.root());
    assert!(line_of(&lines, "Sasuke") < line_of(&lines, "Naruto"));
    assert!(line_of(&lines, "Power ↑") < line_of(&lines, "Sasuke"));
}

#[test]
fn test_loading_screen() {
    let mut ui = Ui::new();
    let (_, lines) = draw(&ui.root());
    line_of(&lines, "Loading characters...");
}
