//! Element tree nodes and builders.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Direction, Edges, Size, Style, TextAlign};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What an element contains.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the UI tree.
///
/// Elements are plain data: building a tree has no side effects, and the
/// same tree always lays out and renders the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub content: Content,

    // Layout
    pub direction: Direction,
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub gap: u16,

    // Visual
    pub style: Style,
    pub text_align: TextAlign,

    // Interaction
    pub clickable: bool,
    /// Disabled elements stay visible but do not receive input and render dim.
    pub disabled: bool,

    /// Free-form attributes (viewport tags, record/column keys for tests).
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            direction: Direction::Column,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            gap: 0,
            style: Style::default(),
            text_align: TextAlign::default(),
            clickable: false,
            disabled: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    /// A horizontal flex container.
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// A vertical flex container.
    pub fn col() -> Self {
        Self {
            direction: Direction::Column,
            ..Default::default()
        }
    }

    /// A generic box (vertical by default).
    pub fn box_() -> Self {
        Self::col()
    }

    /// A text leaf. Height defaults to one terminal row.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            height: Size::Fixed(1),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach a data attribute.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Append a child, converting the content to `Children` if needed.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Append several children.
    pub fn children(mut self, new: impl IntoIterator<Item = Element>) -> Self {
        for child in new {
            self = self.child(child);
        }
        self
    }

    /// The direct children, or an empty slice for leaves.
    pub fn child_slice(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// The attribute value for `key`, if set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}
