use verne_dom::{
    layout, render_to_buffer, Buffer, Element, Rect, Size, TextAlign, Viewport,
};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height), Viewport::Desktop);
    let mut buffer = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buffer);
    buffer
}

#[test]
fn test_text_drawn_at_rect_origin() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("hello").id("label"));

    let buffer = render(&root, 20, 3);

    assert_eq!(buffer.row_text(0), "hello");
}

#[test]
fn test_long_text_truncated_with_ellipsis() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("a very long line of text").id("label").width(Size::Fixed(10)));

    let buffer = render(&root, 10, 1);

    let row = buffer.row_text(0);
    assert!(row.ends_with('…'), "expected ellipsis, got {row:?}");
    assert!(row.chars().count() <= 10);
}

#[test]
fn test_right_aligned_text() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::text("end")
                .id("label")
                .width(Size::Fixed(10))
                .text_align(TextAlign::Right),
        );

    let buffer = render(&root, 10, 1);

    assert_eq!(buffer.get(7, 0).unwrap().char, 'e');
    assert_eq!(buffer.get(9, 0).unwrap().char, 'd');
}

#[test]
fn test_column_children_stack_vertically() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("first").id("a"))
        .child(Element::text("second").id("b"));

    let buffer = render(&root, 20, 4);

    assert_eq!(buffer.row_text(0), "first");
    assert_eq!(buffer.row_text(1), "second");
}

#[test]
fn test_query_text_content_concatenates_in_order() {
    let root = Element::col()
        .id("root")
        .child(Element::text("alpha"))
        .child(Element::row().child(Element::text("beta")).child(Element::text("gamma")));

    assert_eq!(root.text_content(), "alpha beta gamma");
}

#[test]
fn test_query_find_and_collect() {
    let root = Element::col()
        .id("root")
        .child(Element::text("x").id("leaf").data("kind", "cell"))
        .child(Element::text("y").data("kind", "cell"));

    assert!(root.find("leaf").is_some());
    assert!(root.find("missing").is_none());

    let cells = root.collect(&|el| el.attr("kind") == Some("cell"));
    assert_eq!(cells.len(), 2);
}
