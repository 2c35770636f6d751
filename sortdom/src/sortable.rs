use std::mem;

use crate::element::{find_element_mut, Content, Element};
use crate::event::PointerEvent;
use crate::hit::{closest, hit_path};
use crate::layout::LayoutResult;
use crate::types::{Border, Color, Position, Size, Style};
use crate::viewport::Viewport;

/// Distance from the viewport's top or bottom edge at which pointer
/// movement during a drag starts scrolling the viewport.
pub const EDGE_SCROLL_MARGIN: u16 = 20;
/// Scroll applied per pointer-move event while inside the margin.
pub const EDGE_SCROLL_STEP: i16 = 10;

/// A reorderable list of elements. The container's child order is the only
/// source of truth for sequence order; dragging mutates it live.
///
/// Feed it the pointer events the host delivers, together with the layout
/// of the frame they arrived after:
///
/// - a press on a descendant marked `delete_handle` removes the item,
/// - a press on a descendant marked `grab_handle` starts a drag session,
/// - while a session is active, moves float the item, auto-scroll near the
///   viewport edges and swap the vacated slot with the item under the
///   pointer; release (or the pointer leaving the surface) drops the item
///   into the slot.
#[derive(Debug)]
pub struct SortableList {
    root: Element,
    session: Option<DragSession>,
}

/// State of one drag gesture. Fully constructed when the gesture starts,
/// fully cleared when it ends.
#[derive(Debug)]
struct DragSession {
    /// Id of the item being dragged.
    item: String,
    /// Id of the stand-in holding the vacated slot.
    placeholder: String,
    /// Pointer offset from the item's origin at grab time, in content
    /// space. Keeping it fixed is what stops the item from snapping its
    /// corner to the pointer.
    shift: (u16, u16),
    /// Most recent drop target.
    droppable: Option<String>,
    /// Sizes to restore when the float ends.
    prev_width: Size,
    prev_height: Size,
}

impl SortableList {
    /// Build the list container around the given items, in order. Every
    /// item is tagged draggable; its grab and delete regions are whatever
    /// descendants the caller marked.
    pub fn new(items: impl IntoIterator<Item = Element>) -> Self {
        let root = Element::col().children(items.into_iter().map(|item| item.draggable(true)));
        Self {
            root,
            session: None,
        }
    }

    /// The container element, for rendering or mounting elsewhere.
    pub fn element(&self) -> &Element {
        &self.root
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Id of the most recent drop target, while a drag is active.
    pub fn drop_target(&self) -> Option<&str> {
        self.session.as_ref()?.droppable.as_deref()
    }

    /// Item ids in sibling order.
    pub fn order(&self) -> Vec<&str> {
        self.children()
            .map(|children| {
                children
                    .iter()
                    .filter(|el| el.draggable)
                    .map(|el| el.id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.order().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle one pointer event. `layout` must come from the render pass
    /// the event arrived after.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        layout: &LayoutResult,
        viewport: &mut Viewport,
    ) {
        match *event {
            PointerEvent::Down { x, y, .. } => self.on_pointer_down(x, y, layout, viewport),
            // move and release tracking only lives as long as a session does
            PointerEvent::Move { x, y } if self.session.is_some() => {
                self.on_pointer_move(x, y, layout, viewport)
            }
            PointerEvent::Up { .. } | PointerEvent::Leave if self.session.is_some() => {
                self.end_session()
            }
            _ => {}
        }
    }

    fn on_pointer_down(&mut self, x: u16, y: u16, layout: &LayoutResult, viewport: &Viewport) {
        let (cx, cy) = viewport.to_content(x, y);
        let path = hit_path(layout, &self.root, cx, cy);
        let Some(item) = closest(&self.root, &path, |el| el.draggable) else {
            return;
        };

        // delete wins when a press lands in both handle regions
        if closest(&self.root, &path, |el| el.delete_handle).is_some() {
            self.delete_item(&item);
            return;
        }
        if closest(&self.root, &path, |el| el.grab_handle).is_some() && self.session.is_none() {
            self.start_session(item, cx, cy, layout);
        }
    }

    fn delete_item(&mut self, id: &str) {
        if self.session.as_ref().is_some_and(|s| s.item == id) {
            log::debug!("[list] ignoring delete of the actively dragged item {id}");
            return;
        }
        if let Some(children) = self.children_mut() {
            let before = children.len();
            children.retain(|el| el.id != id);
            if children.len() != before {
                log::debug!("[list] removed item {id}");
            }
        }
    }

    fn start_session(&mut self, item: String, cx: u16, cy: u16, layout: &LayoutResult) {
        let Some(rect) = layout.get(&item).copied() else {
            return;
        };
        let shift = (cx.saturating_sub(rect.x), cy.saturating_sub(rect.y));

        // a stand-in with the item's rendered footprint holds the vacated slot
        let placeholder = Element::box_()
            .width(Size::Fixed(rect.width))
            .height(Size::Fixed(rect.height))
            .style(placeholder_style());
        let placeholder_id = placeholder.id.clone();

        let (prev_width, prev_height) = {
            let Some(children) = self.children_mut() else {
                return;
            };
            let Some(pos) = children.iter().position(|el| el.id == item) else {
                return;
            };
            children.insert(pos + 1, placeholder);

            // freeze the rendered size, then take the item out of flow
            let el = &mut children[pos];
            el.position = Position::Floating;
            el.dragging = true;
            (
                mem::replace(&mut el.width, Size::Fixed(rect.width)),
                mem::replace(&mut el.height, Size::Fixed(rect.height)),
            )
        };

        log::debug!("[drag] session started on {item}");
        self.session = Some(DragSession {
            item,
            placeholder: placeholder_id,
            shift,
            droppable: None,
            prev_width,
            prev_height,
        });
        self.float_to(cx, cy);
    }

    fn on_pointer_move(&mut self, x: u16, y: u16, layout: &LayoutResult, viewport: &mut Viewport) {
        let (cx, cy) = viewport.to_content(x, y);
        self.float_to(cx, cy);
        self.scroll_near_edges(y, viewport);

        let Some(droppable) = self.droppable_under(cx, cy, layout) else {
            return;
        };
        if let Some(session) = &mut self.session {
            session.droppable = Some(droppable.clone());
        }
        self.swap_with_placeholder(&droppable);
    }

    /// Track the pointer, keeping the grab-time shift.
    fn float_to(&mut self, cx: u16, cy: u16) {
        let Some((item, (sx, sy))) = self.session.as_ref().map(|s| (s.item.clone(), s.shift))
        else {
            return;
        };
        if let Some(el) = find_element_mut(&mut self.root, &item) {
            el.translate = Some((cx.saturating_sub(sx), cy.saturating_sub(sy)));
        }
    }

    /// The edge check runs in viewport space, like the pointer itself.
    fn scroll_near_edges(&self, y: u16, viewport: &mut Viewport) {
        if y < EDGE_SCROLL_MARGIN {
            viewport.scroll_by(-EDGE_SCROLL_STEP);
        }
        if y > viewport.height().saturating_sub(EDGE_SCROLL_MARGIN) {
            viewport.scroll_by(EDGE_SCROLL_STEP);
        }
    }

    /// Topmost droppable item under the pointer, with the floating item
    /// hidden so it cannot hit-test itself.
    fn droppable_under(&mut self, cx: u16, cy: u16, layout: &LayoutResult) -> Option<String> {
        let item = self.session.as_ref()?.item.clone();
        if let Some(el) = find_element_mut(&mut self.root, &item) {
            el.hidden = true;
        }
        let path = hit_path(layout, &self.root, cx, cy);
        if let Some(el) = find_element_mut(&mut self.root, &item) {
            el.hidden = false;
        }
        closest(&self.root, &path, |el| el.draggable)
    }

    /// Exact position swap of the placeholder and the drop target.
    fn swap_with_placeholder(&mut self, droppable: &str) {
        let Some(placeholder) = self.session.as_ref().map(|s| s.placeholder.clone()) else {
            return;
        };
        let Some(children) = self.children_mut() else {
            return;
        };
        let Some(a) = children.iter().position(|el| el.id == placeholder) else {
            return;
        };
        let Some(b) = children.iter().position(|el| el.id == droppable) else {
            return;
        };
        if a != b {
            children.swap(a, b);
            log::debug!("[drag] placeholder swapped with {droppable}");
        }
    }

    fn end_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        if let Some(el) = find_element_mut(&mut self.root, &session.item) {
            el.dragging = false;
            el.hidden = false;
            el.position = Position::Flow;
            el.translate = None;
            el.width = session.prev_width;
            el.height = session.prev_height;
        }

        if let Some(children) = self.children_mut() {
            let item_at = children.iter().position(|el| el.id == session.item);
            let slot_at = children.iter().position(|el| el.id == session.placeholder);
            match (item_at, slot_at) {
                (Some(from), Some(_)) => {
                    let item = children.remove(from);
                    // removal shifted the indices, look the slot up again
                    if let Some(slot) =
                        children.iter().position(|el| el.id == session.placeholder)
                    {
                        children[slot] = item;
                    }
                }
                // placeholder already gone: the item keeps its current slot
                (Some(_), None) => {}
                // item vanished mid-drag: just drop the placeholder
                (None, Some(slot)) => {
                    children.remove(slot);
                }
                (None, None) => {}
            }
        }

        log::debug!("[drag] session ended");
    }

    fn children(&self) -> Option<&Vec<Element>> {
        match &self.root.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.root.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }
}

fn placeholder_style() -> Style {
    Style::new()
        .background(Color::oklch(0.3, 0.02, 250.0))
        .border(Border::Dashed)
}
