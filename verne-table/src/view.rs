//! Pure view derivation: filter, sort, clamp, slice, and the page window.
//!
//! These functions compose in a fixed order each frame:
//! filter -> sort -> clamp page -> slice. They never mutate state, so the
//! same inputs always produce the same visible rows.

use std::cmp::Ordering;

use crate::record::TableRecord;
use crate::state::{SortConfig, SortDirection};

/// How far the page window extends either side of the current page.
const PAGE_WINDOW: usize = 2;

/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Case-insensitive substring filter over each record's search text.
///
/// A blank (or whitespace-only) term keeps every record.
pub fn filter_records<T: TableRecord>(records: &[T], term: &str) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            r.search_text()
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort by the configured column.
///
/// Null values sink to the end regardless of direction; equal keys keep
/// their incoming relative order.
pub fn sort_records<T: TableRecord>(records: &[T], sort: &SortConfig) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let va = a.field(&sort.key);
        let vb = b.field(&sort.key);
        match (va.is_null(), vb.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = va.compare(&vb);
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
        }
    });
    sorted
}

/// Bring a requested page back into `1..=total_pages`.
///
/// An empty collection clamps to page 1 so the view always has a valid
/// page to stand on.
pub fn clamp_page(page: usize, total_items: usize, page_size: usize) -> usize {
    let total_pages = total_items.div_ceil(page_size.max(1));
    page.clamp(1, total_pages.max(1))
}

/// The records on the given 1-based page.
pub fn page_slice<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1) * page_size;
    if start >= records.len() {
        return &[];
    }
    let end = (start + page_size).min(records.len());
    &records[start..end]
}

/// The page numbers worth showing around the current page.
///
/// The first and last pages are always present; a window of
/// [`PAGE_WINDOW`] pages surrounds the current one, with ellipsis slots
/// standing in for any gap.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return vec![PageItem::Page(1)];
    }

    let low = current.saturating_sub(PAGE_WINDOW).max(2);
    let high = (current + PAGE_WINDOW).min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];
    if low > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in low..=high {
        items.push(PageItem::Page(page));
    }
    if high + 1 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}
