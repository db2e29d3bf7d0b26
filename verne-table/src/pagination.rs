//! The pagination strip: range summary, page buttons, and nav arrows.

use std::sync::Arc;

use verne_dom::{Color, Element, Size, Style};

use crate::callbacks::{EventData, HandlerRegistry, PageCallback};
use crate::view::{visible_pages, PageItem};

const CURRENT_PAGE: Color = Color::rgb(100, 160, 250);

/// Pagination inputs plus the page-change callback.
#[derive(Clone)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub on_page_change: PageCallback,
}

impl Pagination {
    /// Build the strip, or nothing when a single page holds everything.
    pub fn build(&self, table_id: &str, registry: &HandlerRegistry) -> Option<Element> {
        if self.total_pages <= 1 {
            return None;
        }

        let start = (self.current_page - 1) * self.page_size + 1;
        let end = (self.current_page * self.page_size).min(self.total_items);
        let info = Element::text(format!("{start}-{end} of {}", self.total_items))
            .id(format!("{table_id}-pagination-info"))
            .style(Style::new().dim());

        let at_first = self.current_page <= 1;
        let at_last = self.current_page >= self.total_pages;

        let mut strip = Element::row()
            .id(format!("{table_id}-pagination"))
            .width(Size::Fill)
            .gap(2)
            .child(info)
            .child(self.nav_button(table_id, "first", "|<", at_first, 1, registry))
            .child(self.nav_button(
                table_id,
                "prev",
                "<",
                at_first,
                self.current_page.saturating_sub(1).max(1),
                registry,
            ));

        for (i, item) in visible_pages(self.current_page, self.total_pages)
            .into_iter()
            .enumerate()
        {
            strip = strip.child(match item {
                PageItem::Page(page) => {
                    let id = format!("{table_id}-pagination-page-{page}");
                    let mut style = Style::new();
                    if page == self.current_page {
                        style = style.foreground(CURRENT_PAGE).bold();
                    }
                    self.register(&id, page, registry);
                    Element::text(page.to_string())
                        .id(id)
                        .style(style)
                        .clickable(true)
                }
                PageItem::Ellipsis => Element::text("…")
                    .id(format!("{table_id}-pagination-ellipsis-{i}"))
                    .style(Style::new().dim()),
            });
        }

        Some(
            strip
                .child(self.nav_button(
                    table_id,
                    "next",
                    ">",
                    at_last,
                    (self.current_page + 1).min(self.total_pages),
                    registry,
                ))
                .child(self.nav_button(
                    table_id,
                    "last",
                    ">|",
                    at_last,
                    self.total_pages,
                    registry,
                )),
        )
    }

    fn nav_button(
        &self,
        table_id: &str,
        name: &str,
        label: &str,
        disabled: bool,
        target: usize,
        registry: &HandlerRegistry,
    ) -> Element {
        let id = format!("{table_id}-pagination-{name}");
        if !disabled {
            self.register(&id, target, registry);
        }
        Element::text(label).id(id).clickable(true).disabled(disabled)
    }

    fn register(&self, id: &str, target: usize, registry: &HandlerRegistry) {
        let on_page_change = self.on_page_change.clone();
        registry.register(
            id,
            "activate",
            Arc::new(move |_: &EventData| on_page_change(target)),
        );
    }
}
