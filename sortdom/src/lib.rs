pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod sortable;
pub mod terminal;
pub mod text;
pub mod types;
pub mod viewport;

pub use buffer::Buffer;
pub use element::{find_element, Element};
pub use event::{from_crossterm, PointerButton, PointerEvent};
pub use hit::{closest, hit_path};
pub use layout::{LayoutResult, Rect};
pub use sortable::{SortableList, EDGE_SCROLL_MARGIN, EDGE_SCROLL_STEP};
pub use terminal::Terminal;
pub use types::*;
pub use viewport::Viewport;
