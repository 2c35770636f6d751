/// Pointer events in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed.
    Down { x: u16, y: u16, button: PointerButton },
    /// Pointer moved, with or without a button held.
    Move { x: u16, y: u16 },
    /// Button released.
    Up { x: u16, y: u16, button: PointerButton },
    /// Pointer left the tracked surface.
    Leave,
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl From<crossterm::event::MouseButton> for PointerButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => PointerButton::Primary,
            CtBtn::Right => PointerButton::Secondary,
            CtBtn::Middle => PointerButton::Middle,
        }
    }
}

/// Translate a raw crossterm event into a pointer event, if it is one.
/// The terminal losing focus is the closest thing to the pointer leaving
/// the surface, so it maps to [`PointerEvent::Leave`].
pub fn from_crossterm(event: &crossterm::event::Event) -> Option<PointerEvent> {
    use crossterm::event::{Event as CtEvent, MouseEventKind};

    match event {
        CtEvent::Mouse(mouse) => {
            let x = mouse.column;
            let y = mouse.row;
            match mouse.kind {
                MouseEventKind::Down(btn) => Some(PointerEvent::Down {
                    x,
                    y,
                    button: btn.into(),
                }),
                MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    Some(PointerEvent::Move { x, y })
                }
                MouseEventKind::Up(btn) => Some(PointerEvent::Up {
                    x,
                    y,
                    button: btn.into(),
                }),
                _ => None,
            }
        }
        CtEvent::FocusLost => Some(PointerEvent::Leave),
        _ => None,
    }
}
