use crate::element::{find_element, Content, Element};
use crate::layout::LayoutResult;
use crate::types::Position;

/// Id chain from the root down to the topmost element containing the point.
/// Later siblings paint on top, so children are probed in reverse order.
/// Hidden subtrees never hit. Empty when the point misses the tree.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Vec<String> {
    let mut path = Vec::new();
    hit_element(layout, root, x, y, &mut path);
    path
}

fn hit_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    path: &mut Vec<String>,
) -> bool {
    if element.hidden {
        return false;
    }
    let Some(rect) = layout.get(&element.id) else {
        return false;
    };
    if !rect.contains(x, y) {
        return false;
    }

    path.push(element.id.clone());

    if let Content::Children(children) = &element.content {
        // floating children paint after the flow pass, so they hit first
        let floating = children
            .iter()
            .rev()
            .filter(|c| c.position == Position::Floating);
        let flow = children
            .iter()
            .rev()
            .filter(|c| c.position != Position::Floating);
        for child in floating.chain(flow) {
            if hit_element(layout, child, x, y, path) {
                return true;
            }
        }
    }

    true
}

/// Walk the hit path from the deepest element upward and return the first
/// element matching the predicate, like a `closest()` ancestor lookup.
pub fn closest(root: &Element, path: &[String], pred: impl Fn(&Element) -> bool) -> Option<String> {
    path.iter()
        .rev()
        .find(|id| find_element(root, id).is_some_and(&pred))
        .cloned()
}
