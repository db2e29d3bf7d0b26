//! Paints a laid-out element tree into a [`Buffer`].

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Color, Style, TextAlign, TextStyle};

/// Render `root` into `buffer` using rectangles from a prior layout pass.
///
/// Elements without a rectangle (viewport-filtered subtrees) are skipped
/// entirely. Parents paint before children, so children overdraw.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buffer: &mut Buffer) {
    render_element(root, layout, buffer, None, None);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buffer: &mut Buffer,
    inherited_fg: Option<Color>,
    inherited_bg: Option<Color>,
) {
    let Some(rect) = layout.rect(&element.id) else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let fg = element.style.foreground.or(inherited_fg);
    let bg = element.style.background.or(inherited_bg);

    if element.style.background.is_some() {
        fill_background(buffer, rect, element.style.background, fg);
    }

    if let Content::Text(text) = &element.content {
        draw_text(buffer, rect, text, element, fg, bg);
    }

    for child in element.child_slice() {
        render_element(child, layout, buffer, fg, bg);
    }
}

fn fill_background(buffer: &mut Buffer, rect: Rect, bg: Option<Color>, fg: Option<Color>) {
    let mut cell = Cell::default();
    if let Some(bg) = bg {
        cell.bg = bg;
    }
    if let Some(fg) = fg {
        cell.fg = fg;
    }
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            buffer.set(x, y, cell);
        }
    }
}

fn draw_text(
    buffer: &mut Buffer,
    rect: Rect,
    text: &str,
    element: &Element,
    fg: Option<Color>,
    bg: Option<Color>,
) {
    let max_width = rect.width as usize;
    let visible = truncate_to_width(text, max_width);
    let visible_width: usize = visible.chars().map(char_width).sum();

    let mut x = match element.text_align {
        TextAlign::Left => rect.x,
        TextAlign::Right => rect
            .right()
            .saturating_sub(visible_width.min(max_width) as u16),
    };
    let y = rect.y;

    let style = effective_style(&element.style, element.disabled);

    for ch in visible.chars() {
        let width = char_width(ch);
        if width == 0 {
            continue;
        }
        let mut cell = Cell {
            char: ch,
            ..Cell::default()
        };
        if let Some(fg) = fg {
            cell.fg = fg;
        }
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.style = style;
        buffer.set(x, y, cell);
        x = x.saturating_add(width as u16);
        if x >= rect.right() {
            break;
        }
    }
}

fn effective_style(style: &Style, disabled: bool) -> TextStyle {
    let mut text_style = style.text_style;
    if disabled {
        text_style.dim = true;
        text_style.bold = false;
    }
    text_style
}
