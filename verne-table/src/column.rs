//! Column configuration: how a cell is shown and how it is edited.
//!
//! Each column carries a display variant and an optional input variant.
//! Rendering is a closed match over those variants, so adding a new cell
//! style means adding a variant here rather than threading closures
//! through the table.

use verne_dom::{Color, Element, Size, Style, TextAlign};

use crate::record::FieldValue;

const STAR_MAX: i64 = 5;

const BADGE_SUCCESS: Color = Color::rgb(80, 200, 120);
const BADGE_PRIMARY: Color = Color::rgb(100, 160, 250);
const BADGE_SECONDARY: Color = Color::rgb(170, 170, 180);
const BADGE_DANGER: Color = Color::rgb(230, 90, 90);
const BADGE_OUTLINE: Color = Color::rgb(210, 180, 100);
const STAR_COLOR: Color = Color::rgb(240, 200, 80);
const ERROR_COLOR: Color = Color::rgb(230, 90, 90);
const PLACEHOLDER_COLOR: Color = Color::rgb(130, 130, 140);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Fixed(u16),
    Flex(u16),
}

impl ColumnWidth {
    pub fn to_size(self) -> Size {
        match self {
            ColumnWidth::Fixed(w) => Size::Fixed(w),
            ColumnWidth::Flex(weight) => Size::Flex(weight),
        }
    }
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl BadgeTone {
    fn color(self) -> Color {
        match self {
            BadgeTone::Success => BADGE_SUCCESS,
            BadgeTone::Primary => BADGE_PRIMARY,
            BadgeTone::Secondary => BADGE_SECONDARY,
            BadgeTone::Danger => BADGE_DANGER,
            BadgeTone::Outline => BADGE_OUTLINE,
        }
    }
}

/// Maps one raw field value to a badge label and tone.
#[derive(Debug, Clone)]
pub struct BadgeStyle {
    pub value: String,
    pub label: String,
    pub tone: BadgeTone,
}

impl BadgeStyle {
    pub fn new(value: impl Into<String>, label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            tone,
        }
    }
}

/// How a cell renders in display mode.
#[derive(Debug, Clone)]
pub enum DisplayKind {
    Text,
    Badge(Vec<BadgeStyle>),
    Stars,
    Date,
    Lookup,
}

impl DisplayKind {
    /// Build the read-only cell content for a value. Total over every
    /// value/variant combination; unexpected values degrade to plain
    /// text rather than failing.
    pub fn render(&self, value: &FieldValue) -> Element {
        match self {
            DisplayKind::Text => Element::text(value.to_string()),
            DisplayKind::Badge(styles) => {
                let raw = value.to_string();
                match styles.iter().find(|s| s.value == raw) {
                    Some(style) => Element::text(style.label.clone())
                        .style(Style::new().foreground(style.tone.color()).bold()),
                    None => Element::text(raw),
                }
            }
            DisplayKind::Stars => match star_count(value) {
                Some(n) => {
                    Element::text(star_string(n)).style(Style::new().foreground(STAR_COLOR))
                }
                None => Element::text("").style(Style::new().dim()),
            },
            DisplayKind::Date => Element::text(value.to_string()),
            DisplayKind::Lookup => match value {
                FieldValue::Lookup(l) => Element::text(l.name.clone()),
                FieldValue::Null => Element::text("Unknown").style(Style::new().dim()),
                other => Element::text(other.to_string()),
            },
        }
    }
}

/// How a cell renders while its row is being edited.
#[derive(Debug, Clone)]
pub enum InputKind {
    Text { placeholder: String },
    Select { placeholder: String },
    Stars,
    ReadOnly,
}

impl InputKind {
    /// Build the editable cell content for a value. A validation error
    /// tints the field and is echoed underneath it.
    pub fn render(&self, value: &FieldValue, error: Option<&str>) -> Element {
        let field = match self {
            InputKind::Text { placeholder } => {
                input_text(&value.to_string(), placeholder, error)
            }
            InputKind::Select { placeholder } => {
                let label = match value {
                    FieldValue::Lookup(l) => l.name.clone(),
                    FieldValue::Null => String::new(),
                    other => other.to_string(),
                };
                let shown = if label.is_empty() {
                    placeholder.clone()
                } else {
                    format!("{label} ▾")
                };
                let mut style = Style::new().underline();
                if label.is_empty() {
                    style = style.foreground(PLACEHOLDER_COLOR);
                }
                if error.is_some() {
                    style = style.foreground(ERROR_COLOR);
                }
                Element::text(shown).style(style)
            }
            InputKind::Stars => {
                let n = star_count(value).unwrap_or(0);
                let mut style = Style::new().foreground(STAR_COLOR).underline();
                if error.is_some() {
                    style = Style::new().foreground(ERROR_COLOR).underline();
                }
                Element::text(star_string(n)).style(style)
            }
            InputKind::ReadOnly => {
                Element::text(value.to_string()).style(Style::new().dim())
            }
        };

        match error {
            Some(message) => Element::col()
                .child(field)
                .child(
                    Element::text(message.to_string())
                        .style(Style::new().foreground(ERROR_COLOR)),
                ),
            None => field,
        }
    }
}

fn input_text(current: &str, placeholder: &str, error: Option<&str>) -> Element {
    let mut style = Style::new().underline();
    let shown = if current.is_empty() {
        style = style.foreground(PLACEHOLDER_COLOR);
        placeholder.to_string()
    } else {
        current.to_string()
    };
    if error.is_some() {
        style = style.foreground(ERROR_COLOR);
    }
    Element::text(shown).style(style)
}

fn star_count(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Int(n) => Some((*n).clamp(0, STAR_MAX)),
        FieldValue::Float(n) => Some((*n as i64).clamp(0, STAR_MAX)),
        _ => None,
    }
}

fn star_string(n: i64) -> String {
    let filled = "★".repeat(n as usize);
    let empty = "☆".repeat((STAR_MAX - n) as usize);
    format!("{filled}{empty}")
}

/// One column of the table.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub key: String,
    pub header: String,
    pub width: ColumnWidth,
    pub display: DisplayKind,
    pub input: Option<InputKind>,
    pub align: TextAlign,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: ColumnWidth::default(),
            display: DisplayKind::Text,
            input: None,
            align: TextAlign::Left,
        }
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    pub fn display(mut self, display: DisplayKind) -> Self {
        self.display = display;
        self
    }

    pub fn input(mut self, input: InputKind) -> Self {
        self.input = Some(input);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_falls_back_to_raw_value() {
        let display = DisplayKind::Badge(vec![BadgeStyle::new(
            "completed",
            "Completed",
            BadgeTone::Success,
        )]);

        let known = display.render(&FieldValue::Text("completed".into()));
        assert_eq!(known.text_content(), "Completed");

        let unknown = display.render(&FieldValue::Text("archived".into()));
        assert_eq!(unknown.text_content(), "archived");
    }

    #[test]
    fn test_stars_render_out_of_five() {
        let el = DisplayKind::Stars.render(&FieldValue::Int(3));
        assert_eq!(el.text_content(), "★★★☆☆");
    }

    #[test]
    fn test_lookup_null_shows_unknown() {
        let el = DisplayKind::Lookup.render(&FieldValue::Null);
        assert_eq!(el.text_content(), "Unknown");
    }

    #[test]
    fn test_input_error_is_echoed() {
        let input = InputKind::Text {
            placeholder: "Title".into(),
        };
        let el = input.render(&FieldValue::Text("".into()), Some("Title is required"));
        assert!(el.text_content().contains("Title is required"));
    }
}
