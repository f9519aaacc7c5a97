//! Builds the element tree for one frame.
//!
//! Everything here is a pure function of the app state: the tree is thrown
//! away and rebuilt on every frame. Interactive controls get stable ids from
//! [`action`](crate::action) so focus and clicks survive the rebuild.

use roster_dom::{Border, Checked, Color, Edges, Element, Role, Size, Style, Theme};
use roster_lib::grid::{CellValue, Column, GridRow, GridView, NumericField};
use roster_lib::model::HealthColor;
use roster_lib::pipeline::SortState;
use roster_lib::selection::SelectAll;
use roster_lib::{HealthCategory, RosterApp};

use crate::action::{Action, FILTER_TOGGLE, MARK_VIEWED, SEARCH, SELECT_ALL, SORT_POWER};
use crate::widgets::{Spinner, checkbox};

pub const SEARCH_PLACEHOLDER: &str = "Search by name or location...";

pub fn theme() -> Theme {
    Theme::default()
}

/// The whole screen.
pub fn roster(app: &RosterApp, tick: usize, status: &str) -> Element {
    let body = if app.is_loading() {
        loading(tick)
    } else {
        table(&app.view())
    };

    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::symmetric(0, 1))
        .gap(1)
        .style(
            Style::new()
                .background(Color::var("background"))
                .foreground(Color::var("foreground")),
        )
        .child(toolbar(app))
        .child(body)
        .child(
            Element::text(status)
                .role(Role::Status)
                .label("Status")
                .width(Size::Fill)
                .style(Style::new().foreground(Color::var("muted"))),
        )
}

fn toolbar(app: &RosterApp) -> Element {
    Element::row()
        .width(Size::Fill)
        .gap(2)
        .child(
            Element::text_input(app.query())
                .id(SEARCH)
                .label("Search characters")
                .placeholder(SEARCH_PLACEHOLDER)
                .width(Size::Fill)
                .style(Style::new().background(Color::var("background").lighten(0.08)))
                .style_focused(Style::new().background(Color::var("primary").darken(0.5))),
        )
        .child(
            Element::button(app.mark_viewed_label())
                .id(MARK_VIEWED)
                .style(Style::new().foreground(Color::var("primary")).bold()),
        )
}

fn loading(tick: usize) -> Element {
    Element::row()
        .gap(1)
        .child(Spinner::new().label("Loading characters").build(tick))
        .child(
            Element::text("Loading characters...")
                .style(Style::new().foreground(Color::var("muted"))),
        )
}

fn table(view: &GridView<'_>) -> Element {
    let mut table = Element::col()
        .role(Role::Table)
        .label("Characters")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(header(view));

    if view.filter_menu_open {
        table = table.child(filter_menu(view));
    }

    if view.is_empty() {
        return table.child(
            Element::text("No characters")
                .style(Style::new().foreground(Color::var("muted")).italic()),
        );
    }

    table.children(view.rows.iter().map(|row| table_row(view.columns, row)))
}

fn column_width(column: &Column) -> Size {
    match column {
        Column::Select => Size::Fixed(3),
        Column::Text(_) => Size::Fill,
        Column::Health => Size::Fixed(14),
        Column::Numeric(_) => Size::Fixed(10),
    }
}

fn header(view: &GridView<'_>) -> Element {
    let cells = view.columns.iter().map(|column| {
        let cell = match column {
            Column::Select => {
                let checked = match view.select_all {
                    SelectAll::Checked => Checked::True,
                    SelectAll::Unchecked => Checked::False,
                    SelectAll::Indeterminate => Checked::Mixed,
                };
                return checkbox(SELECT_ALL, "Select all", checked);
            }
            Column::Text(_) => Element::text(column.header()).role(Role::ColumnHeader),
            Column::Health => {
                let text = match view.filter.len() {
                    0 => format!("{} ▾", column.header()),
                    n => format!("{} ({n}) ▾", column.header()),
                };
                Element::button(text)
                    .id(FILTER_TOGGLE)
                    .label("Filter by health")
                    .expanded(view.filter_menu_open)
            }
            Column::Numeric(NumericField::Power) => {
                let arrow = match view.sort {
                    SortState::Unordered => "↕",
                    SortState::Ascending => "↑",
                    SortState::Descending => "↓",
                };
                Element::button(format!("{} {arrow}", column.header()))
                    .id(SORT_POWER)
                    .label(format!("Sort by power ({})", view.sort))
            }
        };
        cell.width(column_width(column))
    });

    Element::row()
        .role(Role::Row)
        .width(Size::Fill)
        .gap(1)
        .style(Style::new().bold().border(Border::None))
        .children(cells)
}

fn filter_menu(view: &GridView<'_>) -> Element {
    let items = HealthCategory::ALL.into_iter().map(|category| {
        let selected = view.filter.contains(category);
        let mark = if selected { "[x]" } else { "[ ]" };
        Element::text(format!("{mark} {category}"))
            .id(Action::ToggleCategory(category).element_id())
            .role(Role::MenuItemCheckbox)
            .label(category.as_str())
            .checked(Checked::from(selected))
            .focusable(true)
            .clickable(true)
            .style(Style::new().foreground(health_color(category.color())))
    });

    Element::col()
        .role(Role::Menu)
        .label("Health filter")
        .padding(Edges::symmetric(0, 1))
        .style(
            Style::new()
                .border(Border::Rounded)
                .foreground(Color::var("border")),
        )
        .children(items)
}

fn table_row(columns: &[Column], row: &GridRow<'_>) -> Element {
    let entity = row.entity;
    let cells = columns.iter().map(|column| {
        let cell = match column.cell(entity, row.selected) {
            CellValue::Checkbox(selected) => checkbox(
                Action::ToggleRow(entity.id.clone()).element_id(),
                format!("Select {}", entity.name),
                Checked::from(selected),
            ),
            CellValue::Text(text) => Element::text(text).role(Role::Cell),
            CellValue::Health { label, color } => Element::text(label)
                .role(Role::Cell)
                .style(Style::new().foreground(health_color(color))),
            CellValue::Number(value) => {
                Element::text(value.map(|n| n.to_string()).unwrap_or_default()).role(Role::Cell)
            }
        };
        cell.width(column_width(column))
    });

    Element::row()
        .role(Role::Row)
        .label(entity.name.clone())
        .width(Size::Fill)
        .gap(1)
        .children(cells)
}

fn health_color(color: HealthColor) -> Color {
    match color {
        HealthColor::Green => Color::var("success"),
        HealthColor::Amber => Color::var("warning"),
        HealthColor::Red => Color::var("danger"),
    }
}
