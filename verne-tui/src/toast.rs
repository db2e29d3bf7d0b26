//! Transient notifications shown at the bottom of the screen.

use std::time::{Duration, Instant};

use verne_dom::{Color, Edges, Element, Size, Style};

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

const INFO: Color = Color::rgb(200, 200, 210);
const SUCCESS: Color = Color::rgb(80, 200, 120);
const ERROR: Color = Color::rgb(230, 90, 90);
const SURFACE: Color = Color::rgb(35, 35, 45);

#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    color: Color,
    expires: Instant,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_color(message, INFO)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_color(message, SUCCESS)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_color(message, ERROR)
    }

    fn with_color(message: impl Into<String>, color: Color) -> Self {
        Self {
            message: message.into(),
            color,
            expires: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires
    }

    pub fn element(&self) -> Element {
        Element::box_()
            .width(Size::Fill)
            .padding(Edges::symmetric(0, 1))
            .style(Style::new().background(SURFACE))
            .child(
                Element::text(self.message.clone())
                    .style(Style::new().foreground(self.color)),
            )
    }
}
