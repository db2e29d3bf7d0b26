//! Table view state: search term, sort, page, and the editing lock.

use log::debug;
use uuid::Uuid;

/// Rows shown per page unless the caller overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            SortDirection::Ascending => '▲',
            SortDirection::Descending => '▼',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

/// The view-side state of one table.
///
/// Holds what the user has asked for, not the data itself. The current
/// page is stored as requested; callers clamp against the filtered item
/// count when deriving the visible slice, so a page left out of range by
/// a shrinking filter corrects itself at derivation time.
#[derive(Debug, Clone)]
pub struct TableViewState {
    search_term: String,
    current_page: usize,
    page_size: usize,
    total_items: usize,
    sort: SortConfig,
    default_sort: SortConfig,
    editing: Option<Uuid>,
}

impl TableViewState {
    pub fn new(sort: SortConfig) -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            default_sort: sort.clone(),
            sort,
            editing: None,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// Changing the search always jumps back to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
        self.current_page = 1;
    }

    /// A repeated click on the active column flips direction; a click on
    /// any other column sorts it ascending. Either way the view returns
    /// to the first page.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortConfig::ascending(key);
        }
        self.current_page = 1;
        debug!("sort changed to {:?}", self.sort);
    }

    /// Back to defaults: empty search, first page, the initial sort.
    /// The editing lock is left alone.
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.current_page = 1;
        self.sort = self.default_sort.clone();
    }

    pub fn total_pages(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            self.total_items.div_ceil(self.page_size.max(1))
        }
    }

    pub fn begin_edit(&mut self, id: Uuid) {
        debug!("editing {id}");
        self.editing = Some(id);
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }
}
