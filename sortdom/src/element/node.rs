use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Edges, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub direction: Direction,
    pub gap: u16,

    // Positioning
    pub position: Position,
    /// Content-space coordinates of a floating element. Ignored in flow.
    pub translate: Option<(u16, u16)>,

    // Visibility
    /// Hidden elements get no rect, no cells, and never hit-test.
    pub hidden: bool,

    // Visual
    pub style: Style,
    /// Style applied instead of `style` while `dragging` is set.
    pub style_dragging: Option<Style>,

    // State (set by the widget, not by the user)
    /// Whether this element is the item of an active drag session.
    pub dragging: bool,

    // Interaction marks
    pub draggable: bool,
    pub grab_handle: bool,
    pub delete_handle: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Fill,
            height: Size::Auto,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            position: Position::Flow,
            translate: None,
            hidden: false,
            style: Style::default(),
            style_dragging: None,
            dragging: false,
            draggable: false,
            grab_handle: false,
            delete_handle: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            width: Size::Auto,
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn translate(mut self, x: u16, y: u16) -> Self {
        self.translate = Some((x, y));
        self
    }

    // Visibility
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_dragging(mut self, style: Style) -> Self {
        self.style_dragging = Some(style);
        self
    }

    /// The style to paint with right now, honoring the dragging state.
    pub fn effective_style(&self) -> &Style {
        if self.dragging {
            self.style_dragging.as_ref().unwrap_or(&self.style)
        } else {
            &self.style
        }
    }

    // Interaction marks
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn grab_handle(mut self, grab_handle: bool) -> Self {
        self.grab_handle = grab_handle;
        self
    }

    pub fn delete_handle(mut self, delete_handle: bool) -> Self {
        self.delete_handle = delete_handle;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
