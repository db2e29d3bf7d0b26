//! The table orchestrator: state precedence and viewport duality.

use std::collections::HashMap;

use uuid::Uuid;
use verne_dom::{Color, Element, Size, Style};

use crate::callbacks::{HandlerRegistry, SortCallback, TableCallbacks};
use crate::column::ColumnSpec;
use crate::header::header_row;
use crate::pagination::Pagination;
use crate::record::TableRecord;
use crate::row::{card, row_view_model, table_row};
use crate::state::SortConfig;

const ERROR_COLOR: Color = Color::rgb(230, 90, 90);

/// Builder for one frame of a data table.
///
/// Resolution order is error, then loading, then content: a failed load
/// shows the error even if a retry is already in flight. Content renders
/// both the wide table and the narrow card list, tagged per viewport so
/// layout keeps exactly one of them.
pub struct DataTable<'a, T: TableRecord> {
    id: String,
    columns: &'a [ColumnSpec],
    callbacks: TableCallbacks,
    records: &'a [T],
    loading: bool,
    error: Option<String>,
    empty_text: String,
    editing: Option<Uuid>,
    errors: HashMap<String, String>,
    sort: Option<SortConfig>,
    on_sort: Option<SortCallback>,
    pagination: Option<Pagination>,
}

impl<'a, T: TableRecord> DataTable<'a, T> {
    pub fn new(id: impl Into<String>, columns: &'a [ColumnSpec], callbacks: TableCallbacks) -> Self {
        Self {
            id: id.into(),
            columns,
            callbacks,
            records: &[],
            loading: false,
            error: None,
            empty_text: "No records found.".to_string(),
            editing: None,
            errors: HashMap::new(),
            sort: None,
            on_sort: None,
            pagination: None,
        }
    }

    /// The records for the current page, already filtered and sorted.
    pub fn records(mut self, records: &'a [T]) -> Self {
        self.records = records;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// The record currently holding the editing lock, if any.
    pub fn editing(mut self, editing: Option<Uuid>) -> Self {
        self.editing = editing;
        self
    }

    /// Validation errors for the editing row, keyed by column.
    pub fn field_errors(mut self, errors: HashMap<String, String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn sort(mut self, sort: SortConfig) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn on_sort(mut self, on_sort: SortCallback) -> Self {
        self.on_sort = Some(on_sort);
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let root = Element::col().id(self.id.clone()).width(Size::Fill).gap(1);

        if let Some(message) = &self.error {
            return root.child(
                Element::text(message.clone())
                    .id(format!("{}-error", self.id))
                    .style(Style::new().foreground(ERROR_COLOR)),
            );
        }

        if self.loading {
            return root.child(
                Element::text("Loading…")
                    .id(format!("{}-loading", self.id))
                    .style(Style::new().dim()),
            );
        }

        let header = header_row(
            self.columns,
            self.sort.as_ref(),
            self.on_sort.as_ref(),
            &self.id,
            registry,
        )
        .data("viewport", "desktop");

        if self.records.is_empty() {
            // One empty-state element, shared by both viewports.
            return root.child(header).child(
                Element::text(self.empty_text.clone())
                    .id(format!("{}-empty", self.id))
                    .style(Style::new().dim()),
            );
        }

        let vms: Vec<_> = self
            .records
            .iter()
            .map(|r| row_view_model(r, self.columns, self.editing, &self.errors))
            .collect();

        let mut desktop = Element::col()
            .id(format!("{}-desktop", self.id))
            .data("viewport", "desktop")
            .width(Size::Fill)
            .child(header);
        for vm in &vms {
            desktop = desktop.child(table_row(vm, &self.id, registry, &self.callbacks));
        }

        let mut mobile = Element::col()
            .id(format!("{}-mobile", self.id))
            .data("viewport", "mobile")
            .width(Size::Fill)
            .gap(1);
        for vm in &vms {
            mobile = mobile.child(card(vm, &self.id, registry, &self.callbacks));
        }

        let mut root = root.child(desktop).child(mobile);
        if let Some(pagination) = &self.pagination {
            if let Some(strip) = pagination.build(&self.id, registry) {
                root = root.child(strip);
            }
        }
        root
    }
}
