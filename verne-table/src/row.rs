//! Row rendering: one view model, two representations.
//!
//! A [`RowViewModel`] is computed once per record and then projected into
//! a wide table row and a narrow card. Both carry the same cell content
//! and the same actions; only arrangement differs. Action buttons on
//! non-editing rows are disabled (not hidden) while another row holds the
//! editing lock, so the layout never jumps when editing starts.

use std::collections::HashMap;

use uuid::Uuid;
use verne_dom::{Color, Element, Size, Style, TextAlign};

use crate::callbacks::{EventData, HandlerRegistry, RecordCallback, TableCallbacks};
use crate::column::ColumnSpec;
use crate::record::TableRecord;

/// Width reserved for the trailing actions column.
pub(crate) const ACTIONS_WIDTH: u16 = 20;

const ACTION_PRIMARY: Color = Color::rgb(100, 160, 250);
const ACTION_SUCCESS: Color = Color::rgb(80, 200, 120);
const ACTION_DANGER: Color = Color::rgb(230, 90, 90);

/// One rendered cell, ready to be placed in either representation.
#[derive(Debug, Clone)]
pub struct CellView {
    pub key: String,
    pub header: String,
    pub width: Size,
    pub align: TextAlign,
    pub content: Element,
}

/// Everything needed to render one record, independent of viewport.
#[derive(Debug, Clone)]
pub struct RowViewModel {
    pub id: Uuid,
    pub cells: Vec<CellView>,
    /// This row holds the editing lock.
    pub editing_self: bool,
    /// Some other row holds the editing lock.
    pub editing_other: bool,
}

/// Project a record through the column specs.
///
/// When the record itself is being edited, columns with an input variant
/// render that variant, fed with any validation error for the column key.
pub fn row_view_model<T: TableRecord>(
    record: &T,
    columns: &[ColumnSpec],
    editing: Option<Uuid>,
    errors: &HashMap<String, String>,
) -> RowViewModel {
    let id = record.id();
    let editing_self = editing == Some(id);
    let editing_other = editing.is_some() && !editing_self;

    let cells = columns
        .iter()
        .map(|col| {
            let value = record.field(&col.key);
            let content = match (&col.input, editing_self) {
                (Some(input), true) => input.render(&value, errors.get(&col.key).map(String::as_str)),
                _ => col.display.render(&value),
            };
            CellView {
                key: col.key.clone(),
                header: col.header.clone(),
                width: col.width.to_size(),
                align: col.align,
                content,
            }
        })
        .collect();

    RowViewModel {
        id,
        cells,
        editing_self,
        editing_other,
    }
}

/// The wide representation: one line of cells plus trailing actions.
pub fn table_row(
    vm: &RowViewModel,
    table_id: &str,
    registry: &HandlerRegistry,
    callbacks: &TableCallbacks,
) -> Element {
    let base = format!("{table_id}-row-{}", vm.id);
    let mut row = Element::row().id(base.clone()).width(Size::Fill).gap(1);

    for cell in &vm.cells {
        row = row.child(
            Element::box_()
                .id(format!("{base}-cell-{}", cell.key))
                .width(cell.width)
                .text_align(cell.align)
                .child(cell.content.clone()),
        );
    }

    row.child(actions(vm, &base, registry, callbacks).width(Size::Fixed(ACTIONS_WIDTH)))
}

/// The narrow representation: stacked label/value pairs plus actions.
pub fn card(
    vm: &RowViewModel,
    table_id: &str,
    registry: &HandlerRegistry,
    callbacks: &TableCallbacks,
) -> Element {
    let base = format!("{table_id}-card-{}", vm.id);
    let mut body = Element::col().id(base.clone()).width(Size::Fill);

    for cell in &vm.cells {
        body = body.child(
            Element::row()
                .width(Size::Fill)
                .gap(1)
                .child(
                    Element::text(format!("{}:", cell.header))
                        .width(Size::Fixed(10))
                        .style(Style::new().dim()),
                )
                .child(
                    Element::box_()
                        .id(format!("{base}-cell-{}", cell.key))
                        .width(Size::Flex(1))
                        .child(cell.content.clone()),
                ),
        );
    }

    body.child(actions(vm, &base, registry, callbacks).width(Size::Fill))
}

/// The action strip for a row in either representation.
///
/// Editing rows get save/cancel; everything else gets view/edit/delete,
/// disabled while another row is editing.
fn actions(
    vm: &RowViewModel,
    base: &str,
    registry: &HandlerRegistry,
    callbacks: &TableCallbacks,
) -> Element {
    let mut strip = Element::row().id(format!("{base}-actions")).gap(1);

    if vm.editing_self {
        strip = strip
            .child(action_button(
                format!("{base}-save"),
                "Save",
                ACTION_SUCCESS,
                false,
                vm.id,
                &callbacks.on_save,
                registry,
            ))
            .child(action_button(
                format!("{base}-cancel"),
                "Cancel",
                ACTION_PRIMARY,
                false,
                vm.id,
                &callbacks.on_cancel,
                registry,
            ));
        return strip;
    }

    let locked = vm.editing_other;
    if let Some(on_view) = &callbacks.on_view {
        strip = strip.child(action_button(
            format!("{base}-view"),
            "View",
            ACTION_PRIMARY,
            locked,
            vm.id,
            on_view,
            registry,
        ));
    }
    strip
        .child(action_button(
            format!("{base}-edit"),
            "Edit",
            ACTION_PRIMARY,
            locked,
            vm.id,
            &callbacks.on_edit,
            registry,
        ))
        .child(action_button(
            format!("{base}-delete"),
            "Delete",
            ACTION_DANGER,
            locked,
            vm.id,
            &callbacks.on_delete,
            registry,
        ))
}

fn action_button(
    id: String,
    label: &str,
    color: Color,
    disabled: bool,
    record_id: Uuid,
    callback: &RecordCallback,
    registry: &HandlerRegistry,
) -> Element {
    if !disabled {
        let callback = callback.clone();
        registry.register(
            &id,
            "activate",
            std::sync::Arc::new(move |_: &EventData| callback(record_id)),
        );
    }

    Element::text(label)
        .id(id)
        .style(Style::new().foreground(color))
        .clickable(true)
        .disabled(disabled)
}
