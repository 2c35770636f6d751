mod rect;
mod stack;

pub use rect::Rect;
pub use stack::layout;

use std::collections::HashMap;

/// Per-element rectangles from a layout pass, in content space.
#[derive(Debug, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    content_height: u16,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    /// Height of the flow content, for viewport scroll clamping.
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn set_content_height(&mut self, height: u16) {
        self.content_height = height;
    }
}
