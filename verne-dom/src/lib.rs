//! Minimal element-tree UI substrate for terminal rendering.
//!
//! An [`Element`] tree describes the UI declaratively: rows, columns, boxes
//! and text, each with an id, sizing, styling, and optional data attributes.
//! The [`layout`] module resolves the tree into screen rectangles, the
//! [`render`] module paints it into a cell [`Buffer`], and [`Terminal`]
//! flushes buffers to the real terminal via crossterm.
//!
//! Element ids are stable and deterministic when set explicitly, which lets
//! callers hit-test clicks against the layout result and lets tests inspect
//! rendered trees without a terminal.

mod buffer;
mod element;
mod layout;
mod query;
mod render;
mod terminal;
mod text;
mod types;

pub use buffer::{Buffer, Cell};
pub use element::{Content, Element};
pub use layout::{layout, LayoutResult, Rect, Viewport};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use text::{display_width, truncate_to_width};
pub use types::{Color, Direction, Edges, Size, Style, TextAlign, TextStyle};
