//! Accessibility metadata and tree queries.
//!
//! Every interactive element carries a [`Role`] and an accessible name so it
//! can be located the way a screen reader (or a test) would find it: by role,
//! label, placeholder, or visible text.

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
    Cell,
    Checkbox,
    ColumnHeader,
    Menu,
    MenuItemCheckbox,
    ProgressBar,
    Row,
    SearchBox,
    Status,
    Table,
}

/// Checkbox state, including the mixed (indeterminate) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checked {
    True,
    False,
    Mixed,
}

impl From<bool> for Checked {
    fn from(value: bool) -> Self {
        if value {
            Checked::True
        } else {
            Checked::False
        }
    }
}

/// The name announced for an element: its label, else its text.
pub fn accessible_name(element: &Element) -> Option<&str> {
    element.label.as_deref().or_else(|| element.text_content())
}

/// All elements in document (pre-)order.
pub fn descendants(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(element);
    for child in element.child_nodes() {
        collect(child, out);
    }
}

pub fn query_all_by_role(root: &Element, role: Role) -> Vec<&Element> {
    descendants(root)
        .into_iter()
        .filter(|el| el.role == Some(role))
        .collect()
}

pub fn query_by_role(root: &Element, role: Role) -> Option<&Element> {
    query_all_by_role(root, role).into_iter().next()
}

pub fn query_by_role_and_name<'a>(
    root: &'a Element,
    role: Role,
    name: &str,
) -> Option<&'a Element> {
    query_all_by_role(root, role)
        .into_iter()
        .find(|el| accessible_name(el) == Some(name))
}

pub fn query_by_label<'a>(root: &'a Element, label: &str) -> Option<&'a Element> {
    descendants(root)
        .into_iter()
        .find(|el| el.label.as_deref() == Some(label))
}

pub fn query_by_placeholder<'a>(root: &'a Element, placeholder: &str) -> Option<&'a Element> {
    descendants(root)
        .into_iter()
        .find(|el| el.placeholder.as_deref() == Some(placeholder))
}

/// Elements whose text content equals `text` exactly.
pub fn query_all_by_text<'a>(root: &'a Element, text: &str) -> Vec<&'a Element> {
    descendants(root)
        .into_iter()
        .filter(|el| el.text_content() == Some(text))
        .collect()
}

pub fn query_by_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    query_all_by_text(root, text).into_iter().next()
}
