use roster_dom::{Checked, Element, Role, Size};

/// A focusable tri-state checkbox rendered as `[x]`, `[ ]`, or `[-]`.
pub fn checkbox(id: impl Into<String>, label: impl Into<String>, checked: Checked) -> Element {
    let glyph = match checked {
        Checked::True => "[x]",
        Checked::False => "[ ]",
        Checked::Mixed => "[-]",
    };
    Element::text(glyph)
        .id(id)
        .role(Role::Checkbox)
        .label(label)
        .checked(checked)
        .focusable(true)
        .clickable(true)
        .width(Size::Fixed(3))
}
