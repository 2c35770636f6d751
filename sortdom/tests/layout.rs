use sortdom::layout::layout;
use sortdom::{Border, Element, Position, Rect, Size, Style};

fn layout_root(root: &Element, width: u16, height: u16) -> sortdom::LayoutResult {
    layout(root, Rect::from_size(width, height))
}

// ============================================================================
// Column stacking
// ============================================================================

#[test]
fn test_column_stacking_with_gap() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .gap(1)
        .child(Element::box_().id("one").height(Size::Fixed(2)))
        .child(Element::box_().id("two").height(Size::Fixed(3)));

    let result = layout_root(&root, 50, 50);

    assert_eq!(result.get("one"), Some(&Rect::new(0, 0, 20, 2)));
    assert_eq!(result.get("two"), Some(&Rect::new(0, 3, 20, 3)));
    // auto root height is the stacked extent
    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 20, 6)));
    assert_eq!(result.content_height(), 6);
}

#[test]
fn test_hidden_child_takes_no_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .child(Element::box_().id("a").height(Size::Fixed(2)))
        .child(Element::box_().id("b").height(Size::Fixed(2)).hidden(true))
        .child(Element::box_().id("c").height(Size::Fixed(2)));

    let result = layout_root(&root, 50, 50);

    assert_eq!(result.get("b"), None);
    assert_eq!(result.get("c"), Some(&Rect::new(0, 2, 10, 2)));
}

// ============================================================================
// Row width distribution
// ============================================================================

#[test]
fn test_row_fill_shares_remainder() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .child(Element::box_().id("fixed").width(Size::Fixed(2)))
        .child(Element::box_().id("fill1").width(Size::Fill))
        .child(Element::box_().id("fill2").width(Size::Fill));

    let result = layout_root(&root, 50, 50);

    assert_eq!(result.get("fixed"), Some(&Rect::new(0, 0, 2, 1)));
    assert_eq!(result.get("fill1"), Some(&Rect::new(2, 0, 4, 1)));
    assert_eq!(result.get("fill2"), Some(&Rect::new(6, 0, 4, 1)));
}

#[test]
fn test_row_fill_remainder_goes_left_first() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(11))
        .height(Size::Fixed(1))
        .child(Element::box_().id("fixed").width(Size::Fixed(2)))
        .child(Element::box_().id("fill1").width(Size::Fill))
        .child(Element::box_().id("fill2").width(Size::Fill));

    let result = layout_root(&root, 50, 50);

    assert_eq!(result.get("fill1"), Some(&Rect::new(2, 0, 5, 1)));
    assert_eq!(result.get("fill2"), Some(&Rect::new(7, 0, 4, 1)));
}

#[test]
fn test_text_auto_width_is_display_width() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(1))
        .child(Element::text("hello").id("label"))
        .child(Element::box_().id("rest").width(Size::Fill));

    let result = layout_root(&root, 50, 50);

    assert_eq!(result.get("label"), Some(&Rect::new(0, 0, 5, 1)));
    assert_eq!(result.get("rest"), Some(&Rect::new(5, 0, 15, 1)));
}

// ============================================================================
// Borders and padding
// ============================================================================

#[test]
fn test_border_shrinks_inner_area() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .style(Style::new().border(Border::Single))
        .child(Element::text("hi").id("label"));

    let result = layout_root(&root, 50, 50);

    assert_eq!(result.get("label"), Some(&Rect::new(1, 1, 2, 1)));
}

// ============================================================================
// Floating elements
// ============================================================================

#[test]
fn test_floating_is_out_of_flow() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .child(Element::box_().id("a").height(Size::Fixed(2)))
        .child(
            Element::box_()
                .id("float")
                .position(Position::Floating)
                .translate(7, 9)
                .width(Size::Fixed(5))
                .height(Size::Fixed(2)),
        )
        .child(Element::box_().id("b").height(Size::Fixed(2)));

    let result = layout_root(&root, 50, 50);

    // the sibling below the float keeps the slot the float vacated
    assert_eq!(result.get("b"), Some(&Rect::new(0, 2, 10, 2)));
    // the float sits at its translate coordinates with its own size
    assert_eq!(result.get("float"), Some(&Rect::new(7, 9, 5, 2)));
    // and it does not stretch the flow content
    assert_eq!(result.content_height(), 4);
}
