use verne_dom::{layout, Edges, Element, Rect, Size, Viewport};

#[test]
fn test_fixed_row_children_placed_sequentially() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::box_().id("a").width(Size::Fixed(10)))
        .child(Element::box_().id("b").width(Size::Fixed(5)));

    let result = layout(&root, Rect::from_size(40, 10), Viewport::Desktop);

    let a = result.rect("a").unwrap();
    let b = result.rect("b").unwrap();
    assert_eq!(a.x, 0);
    assert_eq!(a.width, 10);
    assert_eq!(b.x, 10);
    assert_eq!(b.width, 5);
}

#[test]
fn test_flex_children_share_remainder_by_weight() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::box_().id("fixed").width(Size::Fixed(10)))
        .child(Element::box_().id("one").width(Size::Flex(1)))
        .child(Element::box_().id("two").width(Size::Flex(2)));

    let result = layout(&root, Rect::from_size(40, 10), Viewport::Desktop);

    let one = result.rect("one").unwrap();
    let two = result.rect("two").unwrap();
    assert_eq!(one.width, 10);
    assert_eq!(two.width, 20);
}

#[test]
fn test_gap_separates_children() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .gap(2)
        .child(Element::box_().id("a").width(Size::Fixed(4)))
        .child(Element::box_().id("b").width(Size::Fixed(4)));

    let result = layout(&root, Rect::from_size(20, 5), Viewport::Desktop);

    assert_eq!(result.rect("b").unwrap().x, 6);
}

#[test]
fn test_padding_shrinks_inner_area() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .child(Element::box_().id("inner").width(Size::Fill).height(Size::Fill));

    let result = layout(&root, Rect::from_size(20, 10), Viewport::Desktop);

    let inner = result.rect("inner").unwrap();
    assert_eq!(inner.x, 2);
    assert_eq!(inner.y, 2);
    assert_eq!(inner.width, 16);
    assert_eq!(inner.height, 6);
}

#[test]
fn test_auto_text_width_matches_content() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("hello").id("label"));

    let result = layout(&root, Rect::from_size(40, 5), Viewport::Desktop);

    assert_eq!(result.rect("label").unwrap().width, 5);
}

#[test]
fn test_viewport_mismatch_subtree_gets_no_rect() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::box_()
                .id("wide")
                .data("viewport", "desktop")
                .child(Element::text("wide-only").id("wide-text")),
        )
        .child(
            Element::box_()
                .id("narrow")
                .data("viewport", "mobile")
                .child(Element::text("narrow-only").id("narrow-text")),
        );

    let desktop = layout(&root, Rect::from_size(80, 20), Viewport::Desktop);
    assert!(desktop.rect("wide").is_some());
    assert!(desktop.rect("wide-text").is_some());
    assert!(desktop.rect("narrow").is_none());
    assert!(desktop.rect("narrow-text").is_none());

    let mobile = layout(&root, Rect::from_size(40, 20), Viewport::Mobile);
    assert!(mobile.rect("wide").is_none());
    assert!(mobile.rect("narrow").is_some());
}

#[test]
fn test_hit_prefers_topmost_clickable() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .clickable(true)
        .child(
            Element::box_()
                .id("button")
                .width(Size::Fixed(10))
                .height(Size::Fixed(1))
                .clickable(true),
        );

    let result = layout(&root, Rect::from_size(20, 5), Viewport::Desktop);

    assert_eq!(result.hit(3, 0), Some("button"));
    assert_eq!(result.hit(15, 3), Some("root"));
}

#[test]
fn test_disabled_elements_do_not_hit() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::box_()
                .id("button")
                .width(Size::Fixed(10))
                .height(Size::Fixed(1))
                .clickable(true)
                .disabled(true),
        );

    let result = layout(&root, Rect::from_size(20, 5), Viewport::Desktop);

    assert_eq!(result.hit(3, 0), None);
}
