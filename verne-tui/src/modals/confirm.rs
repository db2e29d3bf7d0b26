//! Standardized confirmation modal.

use verne_dom::{Color, Edges, Element, Size, Style};

const SURFACE: Color = Color::rgb(35, 35, 45);
const ACCENT: Color = Color::rgb(100, 160, 250);
const DANGER: Color = Color::rgb(230, 90, 90);

/// A yes/no prompt. The answer comes back through the registered
/// `confirm-ok` / `confirm-cancel` handlers or the `y`/`n`/Enter/Esc
/// keys, which the app routes itself.
#[derive(Debug, Clone)]
pub struct ConfirmModal {
    title: String,
    message: String,
}

impl ConfirmModal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: "Confirm".into(),
            message: message.into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn element(&self) -> Element {
        Element::col()
            .id("confirm-modal")
            .width(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .style(Style::new().background(SURFACE))
            .child(
                Element::text(self.title.clone())
                    .style(Style::new().bold().foreground(ACCENT)),
            )
            .child(Element::text(self.message.clone()))
            .child(
                Element::row()
                    .width(Size::Fill)
                    .gap(4)
                    .child(
                        Element::text("[n] Cancel")
                            .id("confirm-cancel")
                            .clickable(true),
                    )
                    .child(
                        Element::text("[y] Ok")
                            .id("confirm-ok")
                            .style(Style::new().foreground(DANGER).bold())
                            .clickable(true),
                    ),
            )
    }
}
