use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Position, Rgb, Style};
use crate::viewport::Viewport;

/// Paint the tree into the cell buffer, offset by the viewport scroll.
/// Flow content paints first; floating subtrees paint after it, so they
/// end up on top. `hit_path` resolves "topmost" in the same order.
pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    viewport: &Viewport,
    buf: &mut Buffer,
) {
    let scroll = viewport.scroll_y();
    let mut floating: Vec<&Element> = Vec::new();
    render_element(root, layout, scroll, buf, &mut floating);

    let mut i = 0;
    while i < floating.len() {
        let el = floating[i];
        i += 1;
        render_element(el, layout, scroll, buf, &mut floating);
    }
}

fn render_element<'a>(
    element: &'a Element,
    layout: &LayoutResult,
    scroll: u16,
    buf: &mut Buffer,
    floating: &mut Vec<&'a Element>,
) {
    if element.hidden {
        return;
    }
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let style = element.effective_style();

    if let Some(bg) = &style.background {
        fill_rect(buf, *rect, scroll, bg.to_rgb());
    }

    render_border(style, *rect, scroll, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, style, *rect, scroll, buf);
        }
        Content::Children(children) => {
            for child in children {
                if child.position == Position::Floating {
                    floating.push(child);
                } else {
                    render_element(child, layout, scroll, buf, floating);
                }
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, scroll: u16, bg: Rgb) {
    for y in rect.y..rect.bottom() {
        let Some(sy) = screen_y(y, scroll, buf.height()) else {
            continue;
        };
        for x in rect.x..rect.right().min(buf.width()) {
            // reset the whole cell so content underneath a float stays covered
            buf.set(x, sy, Cell::new(' ').with_bg(bg));
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    style: &Style,
    rect: Rect,
    scroll: u16,
    buf: &mut Buffer,
) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    let border = if style.border == Border::None { 0 } else { 1 };
    let inner = rect.inset(element.padding, border);
    if inner.is_empty() {
        return;
    }
    let Some(sy) = screen_y(inner.y, scroll, buf.height()) else {
        return;
    };

    let visible = truncate_to_width(text, inner.width as usize);
    let mut x = inner.x;
    for ch in visible.chars() {
        let w = char_width(ch).max(1) as u16;
        if x + w > inner.right() {
            break;
        }

        let bg = explicit_bg
            .unwrap_or_else(|| buf.get(x, sy).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));
        buf.set(
            x,
            sy,
            Cell::new(ch)
                .with_fg(fg)
                .with_bg(bg)
                .with_style(style.text_style),
        );
        for cont in (x + 1)..(x + w) {
            if let Some(cell) = buf.get_mut(cont, sy) {
                *cell = Cell::new(' ').with_bg(bg);
                cell.wide_continuation = true;
            }
        }
        x += w;
    }
}

fn render_border(style: &Style, rect: Rect, scroll: u16, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Dashed => ('╭', '╮', '╰', '╯', '╌', '┆'),
    };

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, rect.x, rect.y, scroll, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, scroll, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, scroll, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, scroll, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, scroll, h, fg);
        set_char(buf, x, rect.bottom() - 1, scroll, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, scroll, v, fg);
        set_char(buf, rect.right() - 1, y, scroll, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, scroll: u16, ch: char, fg: Rgb) {
    let Some(sy) = screen_y(y, scroll, buf.height()) else {
        return;
    };
    if let Some(cell) = buf.get_mut(x, sy) {
        cell.char = ch;
        cell.fg = fg;
        // preserve the background already painted
    }
}

fn screen_y(y: u16, scroll: u16, screen_height: u16) -> Option<u16> {
    let sy = y.checked_sub(scroll)?;
    (sy < screen_height).then_some(sy)
}
