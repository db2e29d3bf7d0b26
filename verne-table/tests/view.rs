use chrono::NaiveDate;
use uuid::Uuid;
use verne_table::{
    clamp_page, filter_records, page_slice, sort_records, visible_pages, FieldValue, LookupRef,
    PageItem, SortConfig, TableRecord,
};

#[derive(Clone)]
struct Item {
    id: Uuid,
    title: String,
    author: Option<LookupRef>,
    rating: Option<i64>,
    added: NaiveDate,
}

impl TableRecord for Item {
    fn id(&self) -> Uuid {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "title" => self.title.clone().into(),
            "author" => self.author.clone().into(),
            "rating" => self.rating.into(),
            "added" => self.added.into(),
            _ => FieldValue::Null,
        }
    }

    fn search_text(&self) -> Vec<String> {
        let mut text = vec![self.title.clone()];
        if let Some(author) = &self.author {
            text.push(author.name.clone());
        }
        text
    }
}

fn item(title: &str, author: Option<&str>, rating: Option<i64>, day: u32) -> Item {
    Item {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author: author.map(|name| LookupRef::new(Uuid::new_v4(), name)),
        rating,
        added: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
    }
}

fn library() -> Vec<Item> {
    vec![
        item("Neuromancer", Some("William Gibson"), Some(5), 1),
        item("Dune", Some("Frank Herbert"), Some(4), 2),
        item("Solaris", Some("Stanisław Lem"), None, 3),
        item("dhalgren", Some("Samuel Delany"), Some(3), 4),
    ]
}

#[test]
fn test_blank_search_keeps_everything() {
    let items = library();
    assert_eq!(filter_records(&items, "").len(), 4);
    assert_eq!(filter_records(&items, "   ").len(), 4);
}

#[test]
fn test_filter_is_case_insensitive_over_search_text() {
    let items = library();

    let by_title = filter_records(&items, "DUNE");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Dune");

    let by_author = filter_records(&items, "gibson");
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].title, "Neuromancer");
}

#[test]
fn test_filter_is_idempotent() {
    let items = library();
    let once = filter_records(&items, "an");
    let twice = filter_records(&once, "an");
    assert_eq!(once.len(), twice.len());
    let ids: Vec<_> = once.iter().map(|i| i.id).collect();
    let ids_again: Vec<_> = twice.iter().map(|i| i.id).collect();
    assert_eq!(ids, ids_again);
}

#[test]
fn test_sort_text_is_case_insensitive() {
    let items = library();
    let sorted = sort_records(&items, &SortConfig::ascending("title"));
    let titles: Vec<_> = sorted.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["dhalgren", "Dune", "Neuromancer", "Solaris"]);
}

#[test]
fn test_sort_descending_reverses_non_null_order() {
    let items = library();
    let sorted = sort_records(&items, &SortConfig::descending("title"));
    let titles: Vec<_> = sorted.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Solaris", "Neuromancer", "Dune", "dhalgren"]);
}

#[test]
fn test_nulls_sink_to_the_end_in_both_directions() {
    let items = library();

    let asc = sort_records(&items, &SortConfig::ascending("rating"));
    assert_eq!(asc.last().unwrap().title, "Solaris");

    let desc = sort_records(&items, &SortConfig::descending("rating"));
    assert_eq!(desc.last().unwrap().title, "Solaris");
    assert_eq!(desc[0].title, "Neuromancer");
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut items = library();
    items.push(item("Ubik", Some("Philip K. Dick"), Some(4), 9));
    // Dune and Ubik share a rating; Dune comes first in the input.
    let sorted = sort_records(&items, &SortConfig::descending("rating"));
    let dune = sorted.iter().position(|i| i.title == "Dune").unwrap();
    let ubik = sorted.iter().position(|i| i.title == "Ubik").unwrap();
    assert!(dune < ubik);
}

#[test]
fn test_sort_by_date() {
    let items = library();
    let sorted = sort_records(&items, &SortConfig::descending("added"));
    assert_eq!(sorted[0].title, "dhalgren");
    assert_eq!(sorted.last().unwrap().title, "Neuromancer");
}

#[test]
fn test_clamp_page_bounds() {
    assert_eq!(clamp_page(3, 50, 10), 3);
    assert_eq!(clamp_page(9, 50, 10), 5);
    assert_eq!(clamp_page(0, 50, 10), 1);
    assert_eq!(clamp_page(4, 0, 10), 1);
}

#[test]
fn test_page_slice_partial_last_page() {
    let items: Vec<usize> = (0..12).collect();
    assert_eq!(page_slice(&items, 1, 5), &[0, 1, 2, 3, 4]);
    assert_eq!(page_slice(&items, 3, 5), &[10, 11]);
    assert_eq!(page_slice(&items, 4, 5), &[] as &[usize]);
}

#[test]
fn test_visible_pages_single_page() {
    assert_eq!(visible_pages(1, 1), vec![PageItem::Page(1)]);
    assert_eq!(visible_pages(1, 0), vec![PageItem::Page(1)]);
}

#[test]
fn test_visible_pages_trailing_ellipsis() {
    assert_eq!(
        visible_pages(1, 5),
        vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Ellipsis,
            PageItem::Page(5),
        ]
    );
}

#[test]
fn test_visible_pages_ellipsis_on_both_sides() {
    assert_eq!(
        visible_pages(5, 9),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(3),
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Page(7),
            PageItem::Ellipsis,
            PageItem::Page(9),
        ]
    );
}

#[test]
fn test_visible_pages_no_gap_means_no_ellipsis() {
    assert_eq!(
        visible_pages(2, 4),
        vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Page(4),
        ]
    );
}
