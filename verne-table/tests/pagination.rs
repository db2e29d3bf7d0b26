use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use verne_table::{EventData, HandlerRegistry, Pagination};

fn pagination(current: usize, total_items: usize, page_size: usize) -> (Pagination, Arc<AtomicUsize>) {
    let requested = Arc::new(AtomicUsize::new(0));
    let capture = requested.clone();
    let total_pages = total_items.div_ceil(page_size);
    (
        Pagination {
            current_page: current,
            total_pages,
            page_size,
            total_items,
            on_page_change: Arc::new(move |page: usize| capture.store(page, Ordering::SeqCst)),
        },
        requested,
    )
}

#[test]
fn test_single_page_renders_nothing() {
    let registry = HandlerRegistry::new();
    let (strip, _) = pagination(1, 4, 5);
    assert!(strip.build("books", &registry).is_none());

    let (strip, _) = pagination(1, 0, 5);
    assert!(strip.build("books", &registry).is_none());
}

#[test]
fn test_range_text_on_last_page() {
    let registry = HandlerRegistry::new();
    let (strip, _) = pagination(5, 50, 10);
    let el = strip.build("books", &registry).unwrap();

    let info = el.find("books-pagination-info").unwrap();
    assert_eq!(info.text_content(), "41-50 of 50");
}

#[test]
fn test_range_text_on_partial_last_page() {
    let registry = HandlerRegistry::new();
    let (strip, _) = pagination(3, 12, 5);
    let el = strip.build("books", &registry).unwrap();

    let info = el.find("books-pagination-info").unwrap();
    assert_eq!(info.text_content(), "11-12 of 12");
}

#[test]
fn test_nav_disabled_at_boundaries() {
    let registry = HandlerRegistry::new();

    let (strip, _) = pagination(1, 50, 10);
    let el = strip.build("books", &registry).unwrap();
    assert!(el.find("books-pagination-first").unwrap().disabled);
    assert!(el.find("books-pagination-prev").unwrap().disabled);
    assert!(!el.find("books-pagination-next").unwrap().disabled);
    assert!(!el.find("books-pagination-last").unwrap().disabled);

    let (strip, _) = pagination(5, 50, 10);
    let el = strip.build("books", &registry).unwrap();
    assert!(!el.find("books-pagination-first").unwrap().disabled);
    assert!(el.find("books-pagination-next").unwrap().disabled);
    assert!(el.find("books-pagination-last").unwrap().disabled);
}

#[test]
fn test_page_button_dispatches_target_page() {
    let registry = HandlerRegistry::new();
    let (strip, requested) = pagination(1, 50, 10);
    let el = strip.build("books", &registry).unwrap();
    assert!(el.find("books-pagination-page-3").is_some());

    assert!(registry.dispatch("books-pagination-page-3", "activate", &EventData::None));
    assert_eq!(requested.load(Ordering::SeqCst), 3);
}

#[test]
fn test_next_dispatches_following_page() {
    let registry = HandlerRegistry::new();
    let (strip, requested) = pagination(2, 50, 10);
    let el = strip.build("books", &registry).unwrap();
    assert!(el.find("books-pagination-next").is_some());

    registry.dispatch("books-pagination-next", "activate", &EventData::None);
    assert_eq!(requested.load(Ordering::SeqCst), 3);

    registry.dispatch("books-pagination-last", "activate", &EventData::None);
    assert_eq!(requested.load(Ordering::SeqCst), 5);
}

#[test]
fn test_far_pages_collapse_to_ellipsis() {
    let registry = HandlerRegistry::new();
    let (strip, _) = pagination(5, 90, 10);
    let el = strip.build("books", &registry).unwrap();

    let ellipses = el.collect(&|e| e.id.starts_with("books-pagination-ellipsis"));
    assert_eq!(ellipses.len(), 2);
    assert!(el.find("books-pagination-page-2").is_none());
    assert!(el.find("books-pagination-page-4").is_some());
}
