use sortdom::{
    closest, from_crossterm, hit_path, Element, LayoutResult, PointerButton, PointerEvent,
    Position, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_path_is_root_to_deepest() {
    let root = Element::box_().id("root").child(
        Element::box_()
            .id("panel")
            .child(Element::text("Click me").id("btn")),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("panel", Rect::new(5, 5, 50, 20)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_path(&layout, &root, 15, 11), vec!["root", "panel", "btn"]);

    // inside panel but outside btn
    assert_eq!(hit_path(&layout, &root, 6, 6), vec!["root", "panel"]);

    // inside root only
    assert_eq!(hit_path(&layout, &root, 99, 49), vec!["root"]);

    // outside everything
    assert!(hit_path(&layout, &root, 150, 150).is_empty());
}

#[test]
fn test_hit_later_sibling_wins_overlap() {
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom"))
        .child(Element::box_().id("top"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)),
    ]);

    assert_eq!(hit_path(&layout, &root, 40, 40), vec!["root", "top"]);
    assert_eq!(hit_path(&layout, &root, 15, 15), vec!["root", "bottom"]);
}

#[test]
fn test_hit_skips_hidden_subtree() {
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom"))
        .child(Element::box_().id("top").hidden(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(10, 10, 50, 50)),
    ]);

    assert_eq!(hit_path(&layout, &root, 20, 20), vec!["root", "bottom"]);
}

#[test]
fn test_hit_floating_child_is_on_top() {
    // the float comes first in document order but paints last
    let root = Element::box_()
        .id("root")
        .child(
            Element::box_()
                .id("float")
                .position(Position::Floating)
                .translate(10, 10),
        )
        .child(Element::box_().id("flow"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("float", Rect::new(10, 10, 20, 20)),
        ("flow", Rect::new(0, 0, 100, 100)),
    ]);

    assert_eq!(hit_path(&layout, &root, 15, 15), vec!["root", "float"]);
    assert_eq!(hit_path(&layout, &root, 50, 50), vec!["root", "flow"]);
}

#[test]
fn test_closest_resolves_marked_ancestor() {
    let root = Element::box_().id("root").child(
        Element::row().id("item").draggable(true).child(
            Element::box_()
                .id("grab")
                .grab_handle(true)
                .child(Element::text("≡").id("glyph")),
        ),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("item", Rect::new(0, 0, 100, 3)),
        ("grab", Rect::new(0, 0, 4, 3)),
        ("glyph", Rect::new(1, 1, 1, 1)),
    ]);

    let path = hit_path(&layout, &root, 1, 1);
    assert_eq!(path, vec!["root", "item", "grab", "glyph"]);

    assert_eq!(
        closest(&root, &path, |el| el.draggable),
        Some("item".to_string())
    );
    assert_eq!(
        closest(&root, &path, |el| el.grab_handle),
        Some("grab".to_string())
    );
    assert_eq!(closest(&root, &path, |el| el.delete_handle), None);
}

// ============================================================================
// Crossterm conversion
// ============================================================================

fn mouse(kind: crossterm::event::MouseEventKind) -> crossterm::event::Event {
    crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
        kind,
        column: 7,
        row: 9,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}

#[test]
fn test_mouse_events_become_pointer_events() {
    use crossterm::event::{MouseButton, MouseEventKind};

    assert_eq!(
        from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Left))),
        Some(PointerEvent::Down {
            x: 7,
            y: 9,
            button: PointerButton::Primary,
        })
    );
    assert_eq!(
        from_crossterm(&mouse(MouseEventKind::Moved)),
        Some(PointerEvent::Move { x: 7, y: 9 })
    );
    assert_eq!(
        from_crossterm(&mouse(MouseEventKind::Drag(MouseButton::Left))),
        Some(PointerEvent::Move { x: 7, y: 9 })
    );
    assert_eq!(
        from_crossterm(&mouse(MouseEventKind::Up(MouseButton::Right))),
        Some(PointerEvent::Up {
            x: 7,
            y: 9,
            button: PointerButton::Secondary,
        })
    );
    // wheel events are not pointer events
    assert_eq!(from_crossterm(&mouse(MouseEventKind::ScrollDown)), None);
}

#[test]
fn test_focus_lost_is_pointer_leave() {
    assert_eq!(
        from_crossterm(&crossterm::event::Event::FocusLost),
        Some(PointerEvent::Leave)
    );
}
