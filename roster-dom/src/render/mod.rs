use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{content_rect, LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, TextStyle, Theme};

pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer, theme: &Theme) {
    let fg = theme.get("foreground");
    render_element(root, layout, buf, theme, fg);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    theme: &Theme,
    inherited_fg: Rgb,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = element.effective_style();

    if let Some(bg) = &style.background {
        fill_rect(buf, rect, bg.resolve(theme));
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.resolve(theme))
        .unwrap_or(inherited_fg);

    render_border(style.border, rect, fg, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let inner = content_rect(element, rect);
            if text.is_empty() {
                if let Some(placeholder) = &element.placeholder {
                    let muted = theme.get("muted");
                    let mut text_style = style.text_style;
                    text_style.dim = true;
                    write_line(buf, inner, placeholder, muted, text_style);
                }
            } else {
                write_line(buf, inner, text, fg, style.text_style);
            }
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, theme, fg);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

/// Write one line of text at the top-left of `rect`, truncated to fit.
fn write_line(
    buf: &mut Buffer,
    rect: Rect,
    text: &str,
    fg: Rgb,
    text_style: TextStyle,
) {
    if rect.is_empty() {
        return;
    }

    let shown = truncate_to_width(text, rect.width as usize);
    let y = rect.y;
    let mut x = rect.x;

    for ch in shown.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > rect.right() {
            break;
        }

        // Keep whatever background an ancestor painted.
        let bg = buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::BLACK);
        buf.set(
            x,
            y,
            Cell::new(ch).with_fg(fg).with_bg(bg).with_style(text_style),
        );
        if width == 2 {
            buf.set(x + 1, y, Cell::continuation(bg));
        }
        x += width;
    }
}

fn render_border(border: Border, rect: Rect, fg: Rgb, buf: &mut Buffer) {
    let Some([tl, tr, bl, br, h, v]) = border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut put = |x: u16, y: u16, ch: char| {
        let bg = buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::BLACK);
        buf.set(x, y, Cell::new(ch).with_fg(fg).with_bg(bg));
    };

    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);

    for x in (rect.x + 1)..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in (rect.y + 1)..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}
