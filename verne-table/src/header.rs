//! The table header row with sort affordances.

use std::sync::Arc;

use verne_dom::{Element, Size, Style};

use crate::callbacks::{EventData, HandlerRegistry, SortCallback};
use crate::column::ColumnSpec;
use crate::row::ACTIONS_WIDTH;
use crate::state::SortConfig;

/// Build the header row.
///
/// With a sort callback, every column cell is clickable and carries a
/// glyph: a dim ascending arrow on inactive columns (the affordance that
/// sorting is available) and a bright direction arrow on the active one.
/// Without a callback the header is inert text. A non-sortable actions
/// cell pads the right edge so header and rows line up.
pub fn header_row(
    columns: &[ColumnSpec],
    sort: Option<&SortConfig>,
    on_sort: Option<&SortCallback>,
    table_id: &str,
    registry: &HandlerRegistry,
) -> Element {
    let mut row = Element::row()
        .id(format!("{table_id}-header"))
        .width(Size::Fill)
        .gap(1);

    for col in columns {
        let id = format!("{table_id}-header-{}", col.key);
        let mut cell = Element::row()
            .id(id.clone())
            .width(col.width.to_size())
            .gap(1)
            .child(Element::text(col.header.clone()).style(Style::new().bold()));

        if let Some(on_sort) = on_sort {
            let glyph = match sort {
                Some(active) if active.key == col.key => {
                    Element::text(active.direction.glyph().to_string())
                        .style(Style::new().bold())
                }
                _ => Element::text("▲").style(Style::new().dim()),
            };
            cell = cell.child(glyph).clickable(true);

            let on_sort = on_sort.clone();
            let key = col.key.clone();
            registry.register(
                &id,
                "activate",
                Arc::new(move |_: &EventData| on_sort(&key)),
            );
        }

        row = row.child(cell);
    }

    row.child(
        Element::text("Actions")
            .id(format!("{table_id}-header-actions"))
            .width(Size::Fixed(ACTIONS_WIDTH))
            .style(Style::new().bold()),
    )
}
