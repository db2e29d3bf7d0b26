//! Generic data-table engine.
//!
//! A type-agnostic tabular UI component: inline row editing behind a single
//! editing lock, per-row action affordances (view/edit/save/cancel/delete),
//! client-side search/filter/sort/paginate composition, and parallel
//! wide/narrow (table/card) rendering from one row view model.
//!
//! The engine owns no business data and performs no I/O. The caller owns the
//! record collection and the [`TableViewState`], derives the visible slice
//! with the [`view`] utilities, and hands the slice plus callbacks to
//! [`DataTable`], which builds a `verne-dom` element tree. All record ids,
//! column keys, and actions appear as stable element ids and data
//! attributes, so the output is directly inspectable by tests and
//! hit-testable by the application shell.

pub mod callbacks;
pub mod column;
pub mod header;
pub mod pagination;
pub mod record;
pub mod row;
pub mod state;
pub mod table;
pub mod view;

pub use callbacks::{
    EventData, Handler, HandlerRegistry, PageCallback, RecordCallback, SortCallback,
    TableCallbacks,
};
pub use column::{BadgeStyle, BadgeTone, ColumnSpec, ColumnWidth, DisplayKind, InputKind};
pub use pagination::Pagination;
pub use record::{FieldValue, LookupRef, TableRecord};
pub use row::{card, row_view_model, table_row, CellView, RowViewModel};
pub use state::{SortConfig, SortDirection, TableViewState, DEFAULT_PAGE_SIZE};
pub use table::DataTable;
pub use view::{clamp_page, filter_records, page_slice, sort_records, visible_pages, PageItem};
