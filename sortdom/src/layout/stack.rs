use super::{LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Position, Size};

/// Compute content-space rects for the whole tree. `area` is the region
/// offered to the root; flow content may extend past its bottom edge, and
/// floating elements sit at their translate coordinates with their own size.
pub fn layout(root: &Element, area: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if root.hidden {
        return result;
    }

    let width = resolve_width(root, area.width);
    let height = resolve_height(root, area.height, width);
    let rect = Rect::new(area.x, area.y, width, height);
    place(root, rect, &mut result);
    result.set_content_height(rect.bottom());
    result
}

fn place(el: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(el.id.clone(), rect);

    let Content::Children(children) = &el.content else {
        return;
    };

    let inner = rect.inset(el.padding, border_size(el));

    match el.direction {
        Direction::Column => place_column(el, children, inner, result),
        Direction::Row => place_row(el, children, inner, result),
    }
}

fn place_column(el: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let mut y = inner.y;
    let mut first = true;
    for child in children {
        if child.hidden {
            continue;
        }
        if child.position == Position::Floating {
            place_floating(child, result);
            continue;
        }
        if !first {
            y = y.saturating_add(el.gap);
        }
        first = false;

        let width = resolve_width(child, inner.width);
        let height = resolve_height(child, inner.height, width);
        place(child, Rect::new(inner.x, y, width, height), result);
        y = y.saturating_add(height);
    }
}

fn place_row(el: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let flow: Vec<&Element> = children
        .iter()
        .filter(|c| !c.hidden && c.position == Position::Flow)
        .collect();

    // Fixed and intrinsic widths claim space first, Fill shares the rest.
    let gaps = el.gap.saturating_mul(flow.len().saturating_sub(1) as u16);
    let mut claimed = gaps;
    let mut fills = 0u16;
    for child in &flow {
        match child.width {
            Size::Fixed(w) => claimed = claimed.saturating_add(w),
            Size::Auto => claimed = claimed.saturating_add(intrinsic_width(child)),
            Size::Fill => fills += 1,
        }
    }
    let remaining = inner.width.saturating_sub(claimed);
    let share = if fills > 0 { remaining / fills } else { 0 };
    let mut leftover = if fills > 0 { remaining % fills } else { 0 };

    let mut x = inner.x;
    let mut first = true;
    for child in children {
        if child.hidden {
            continue;
        }
        if child.position == Position::Floating {
            place_floating(child, result);
            continue;
        }
        if !first {
            x = x.saturating_add(el.gap);
        }
        first = false;

        let width = match child.width {
            Size::Fixed(w) => w,
            Size::Auto => intrinsic_width(child),
            Size::Fill => {
                let extra = if leftover > 0 { 1 } else { 0 };
                leftover = leftover.saturating_sub(1);
                share + extra
            }
        };
        let height = resolve_height(child, inner.height, width);
        place(child, Rect::new(x, inner.y, width, height), result);
        x = x.saturating_add(width);
    }
}

fn place_floating(el: &Element, result: &mut LayoutResult) {
    let (x, y) = el.translate.unwrap_or((0, 0));
    let width = resolve_width(el, 0);
    let height = resolve_height(el, 0, width);
    place(el, Rect::new(x, y, width, height), result);
}

fn resolve_width(el: &Element, available: u16) -> u16 {
    match el.width {
        Size::Fixed(w) => w,
        Size::Fill => available,
        Size::Auto => intrinsic_width(el),
    }
}

fn resolve_height(el: &Element, available: u16, width: u16) -> u16 {
    match el.height {
        Size::Fixed(h) => h,
        Size::Fill => available,
        Size::Auto => intrinsic_height(el, width),
    }
}

fn intrinsic_width(el: &Element) -> u16 {
    let chrome = el.padding.horizontal_total() + border_size(el) * 2;
    let content = match &el.content {
        Content::None => 0,
        Content::Text(text) => display_width(text) as u16,
        Content::Children(children) => {
            let flow: Vec<&Element> = children
                .iter()
                .filter(|c| !c.hidden && c.position == Position::Flow)
                .collect();
            match el.direction {
                Direction::Row => {
                    let gaps = el.gap.saturating_mul(flow.len().saturating_sub(1) as u16);
                    flow.iter()
                        .map(|c| child_intrinsic_width(c))
                        .fold(gaps, u16::saturating_add)
                }
                Direction::Column => flow
                    .iter()
                    .map(|c| child_intrinsic_width(c))
                    .max()
                    .unwrap_or(0),
            }
        }
    };
    content.saturating_add(chrome)
}

fn child_intrinsic_width(el: &Element) -> u16 {
    match el.width {
        Size::Fixed(w) => w,
        // Fill has no intrinsic contribution inside an auto-sized parent
        Size::Fill => 0,
        Size::Auto => intrinsic_width(el),
    }
}

fn intrinsic_height(el: &Element, width: u16) -> u16 {
    let chrome = el.padding.vertical_total() + border_size(el) * 2;
    let content = match &el.content {
        Content::None => 0,
        // single-row text, no wrapping
        Content::Text(_) => 1,
        Content::Children(children) => {
            let flow: Vec<&Element> = children
                .iter()
                .filter(|c| !c.hidden && c.position == Position::Flow)
                .collect();
            let inner_width = width.saturating_sub(chrome);
            match el.direction {
                Direction::Column => {
                    let gaps = el.gap.saturating_mul(flow.len().saturating_sub(1) as u16);
                    flow.iter()
                        .map(|c| child_intrinsic_height(c, inner_width))
                        .fold(gaps, u16::saturating_add)
                }
                Direction::Row => flow
                    .iter()
                    .map(|c| child_intrinsic_height(c, inner_width))
                    .max()
                    .unwrap_or(0),
            }
        }
    };
    content.saturating_add(chrome)
}

fn child_intrinsic_height(el: &Element, width: u16) -> u16 {
    match el.height {
        Size::Fixed(h) => h,
        Size::Fill => 0,
        Size::Auto => intrinsic_height(el, width),
    }
}

fn border_size(el: &Element) -> u16 {
    if el.effective_style().border == Border::None {
        0
    } else {
        1
    }
}
