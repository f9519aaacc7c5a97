//! Single-pass flex layout.
//!
//! Children are stacked along the container's direction. On the main axis a
//! child takes its fixed size, its intrinsic size (`Auto`), or an equal share
//! of the leftover space (`Fill`). On the cross axis `Auto` and `Fill` both
//! stretch to the container.

use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = match root.width {
        Size::Fixed(n) => n.min(available.width),
        _ => available.width,
    };
    let height = match root.height {
        Size::Fixed(n) => n.min(available.height),
        _ => available.height,
    };
    place(
        root,
        Rect::new(available.x, available.y, width, height),
        &mut result,
    );
    result
}

/// Area inside border and padding.
pub(crate) fn content_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.size();
    let padding = element.padding;
    rect.shrink(
        padding.top + border,
        padding.right + border,
        padding.bottom + border,
        padding.left + border,
    )
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let inner = content_rect(element, rect);
    let horizontal = element.direction == Direction::Row;
    let (main_available, cross_available) = if horizontal {
        (inner.width, inner.height)
    } else {
        (inner.height, inner.width)
    };

    // Fixed and auto children first; `None` marks a fill child.
    let sizes: Vec<Option<u16>> = children
        .iter()
        .map(|child| {
            let main = if horizontal {
                child.width
            } else {
                child.height
            };
            match main {
                Size::Fixed(n) => Some(n),
                Size::Auto => {
                    let (w, h) = measure(child);
                    Some(if horizontal { w } else { h })
                }
                Size::Fill => None,
            }
        })
        .collect();

    let gaps = element
        .gap
        .saturating_mul(children.len().saturating_sub(1) as u16);
    let used = sizes
        .iter()
        .flatten()
        .fold(gaps, |acc, size| acc.saturating_add(*size));
    let remaining = main_available.saturating_sub(used);
    let fill_count = sizes.iter().filter(|s| s.is_none()).count() as u16;
    let (share, mut extra) = remaining
        .checked_div(fill_count)
        .map_or((0, 0), |share| (share, remaining % fill_count));

    let mut offset: u16 = 0;
    for (child, size) in children.iter().zip(sizes) {
        let wanted = size.unwrap_or_else(|| {
            if extra > 0 {
                extra -= 1;
                share + 1
            } else {
                share
            }
        });
        let main = wanted.min(main_available.saturating_sub(offset));

        let cross_size = if horizontal {
            child.height
        } else {
            child.width
        };
        let cross = match cross_size {
            Size::Fixed(n) => n.min(cross_available),
            Size::Auto | Size::Fill => cross_available,
        };

        let child_rect = if horizontal {
            Rect::new(inner.x.saturating_add(offset), inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y.saturating_add(offset), cross, main)
        };
        place(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }
}

/// Intrinsic (width, height) of an element, including padding and border.
pub fn measure(element: &Element) -> (u16, u16) {
    let (width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => {
            let shown = if text.is_empty() {
                element.placeholder.as_deref().unwrap_or("")
            } else {
                text
            };
            (clamp(display_width(shown)), 1)
        }
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children.iter().map(outer_size).collect();
            let gaps = element
                .gap
                .saturating_mul(children.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Row => (
                    sizes
                        .iter()
                        .fold(gaps, |acc, (w, _)| acc.saturating_add(*w)),
                    sizes.iter().map(|(_, h)| *h).max().unwrap_or(0),
                ),
                Direction::Column => (
                    sizes.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    sizes
                        .iter()
                        .fold(gaps, |acc, (_, h)| acc.saturating_add(*h)),
                ),
            }
        }
    };

    let border = element.style.border.size() * 2;
    (
        width
            .saturating_add(element.padding.horizontal())
            .saturating_add(border),
        height
            .saturating_add(element.padding.vertical())
            .saturating_add(border),
    )
}

fn outer_size(element: &Element) -> (u16, u16) {
    let (width, height) = measure(element);
    let width = match element.width {
        Size::Fixed(n) => n,
        _ => width,
    };
    let height = match element.height {
        Size::Fixed(n) => n,
        _ => height,
    };
    (width, height)
}

fn clamp(width: usize) -> u16 {
    width.min(u16::MAX as usize) as u16
}
