//! Flex-style layout: resolves an element tree into screen rectangles.
//!
//! Containers divide their main axis between children: `Fixed` and `Auto`
//! children take their size first, then `Fill`/`Flex` children share the
//! remainder by weight. Cross-axis sizes stretch to the container unless
//! fixed.
//!
//! Subtrees tagged with a `viewport` data attribute are laid out only when
//! the tag matches the active [`Viewport`]; mismatching subtrees get no
//! rectangles, so they neither render nor hit-test. This is how a tree can
//! carry parallel wide/narrow representations of the same content while
//! exactly one is visible.

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

/// Which of the two parallel representations is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    /// The `viewport` attribute value this mode matches.
    pub fn tag(self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Mobile => "mobile",
        }
    }
}

/// A screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }
}

/// The outcome of a layout pass.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    /// Clickable, enabled elements in draw order (for topmost-wins hit tests).
    clickable: Vec<(String, Rect)>,
}

impl LayoutResult {
    /// The rectangle assigned to an element id, if it was laid out.
    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// The id of the topmost clickable element at the given point.
    pub fn hit(&self, x: u16, y: u16) -> Option<&str> {
        self.clickable
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lay out a tree within `available` for the given viewport.
pub fn layout(root: &Element, available: Rect, viewport: Viewport) -> LayoutResult {
    let mut result = LayoutResult::default();
    layout_element(root, available, viewport, &mut result);
    result
}

fn visible_in(element: &Element, viewport: Viewport) -> bool {
    match element.attr("viewport") {
        Some(tag) => tag == viewport.tag(),
        None => true,
    }
}

fn layout_element(
    element: &Element,
    available: Rect,
    viewport: Viewport,
    result: &mut LayoutResult,
) {
    if !visible_in(element, viewport) {
        return;
    }

    let width = resolve_size(element.width, available.width, element, true, viewport);
    let height = resolve_size(element.height, available.height, element, false, viewport);
    let rect = Rect::new(available.x, available.y, width, height);
    result.rects.insert(element.id.clone(), rect);
    if element.clickable && !element.disabled {
        result.clickable.push((element.id.clone(), rect));
    }

    layout_children(element, rect, viewport, result);
}

fn layout_children(
    element: &Element,
    rect: Rect,
    viewport: Viewport,
    result: &mut LayoutResult,
) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let visible: Vec<&Element> = children
        .iter()
        .filter(|child| visible_in(child, viewport))
        .collect();
    if visible.is_empty() {
        return;
    }

    let padding = &element.padding;
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };

    // First pass: fixed and auto children take their size, flex shares the rest.
    let gap_total = element.gap * visible.len().saturating_sub(1) as u16;
    let mut fixed_total = 0u16;
    let mut flex_total = 0u16;

    for child in &visible {
        let main = if is_row { child.width } else { child.height };
        match main {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => {
                fixed_total = fixed_total.saturating_add(estimate_size(child, is_row, viewport))
            }
            Size::Fill => flex_total += 1,
            Size::Flex(weight) => flex_total += weight.max(1),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let flex_unit = if flex_total > 0 {
        remaining / flex_total
    } else {
        0
    };
    let mut flex_leftover = if flex_total > 0 {
        remaining % flex_total
    } else {
        0
    };

    // Second pass: place children sequentially along the main axis.
    let mut cursor = if is_row { inner.x } else { inner.y };
    for child in &visible {
        let main = if is_row { child.width } else { child.height };
        let mut size = match main {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row, viewport),
            Size::Fill => flex_unit,
            Size::Flex(weight) => flex_unit * weight.max(1),
        };
        if matches!(main, Size::Fill | Size::Flex(_)) && flex_leftover > 0 {
            size += 1;
            flex_leftover -= 1;
        }

        let child_rect = if is_row {
            let width = size.min(inner.right().saturating_sub(cursor));
            Rect::new(cursor, inner.y, width, inner.height)
        } else {
            let height = size.min(inner.bottom().saturating_sub(cursor));
            Rect::new(inner.x, cursor, inner.width, height)
        };

        layout_element(child, child_rect, viewport, result);
        cursor = cursor.saturating_add(size + element.gap);
    }
}

fn resolve_size(
    size: Size,
    available: u16,
    element: &Element,
    is_width: bool,
    viewport: Viewport,
) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        // At the point an element is placed its parent has already carved out
        // the space it may use, so fill and flex both take what is available.
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width, viewport).min(available),
    }
}

/// Content-based size estimate for `Auto` sizing.
fn estimate_size(element: &Element, is_width: bool, viewport: Viewport) -> u16 {
    match &element.content {
        Content::Text(text) => {
            if is_width {
                (display_width(text) as u16)
                    .saturating_add(element.padding.horizontal())
            } else {
                1u16.saturating_add(element.padding.vertical())
            }
        }
        Content::Children(children) => {
            let visible: Vec<&Element> = children
                .iter()
                .filter(|child| visible_in(child, viewport))
                .collect();
            let is_row = element.direction == Direction::Row;
            let along_main = is_row == is_width;

            let child_size = |child: &Element| -> u16 {
                let spec = if is_width { child.width } else { child.height };
                match spec {
                    Size::Fixed(n) => n,
                    _ => estimate_size(child, is_width, viewport),
                }
            };

            let content = if along_main {
                let gap_total = element.gap * visible.len().saturating_sub(1) as u16;
                visible
                    .iter()
                    .map(|child| child_size(child))
                    .fold(0u16, u16::saturating_add)
                    .saturating_add(gap_total)
            } else {
                visible.iter().map(|child| child_size(child)).max().unwrap_or(0)
            };

            let padding = if is_width {
                element.padding.horizontal()
            } else {
                element.padding.vertical()
            };
            content.saturating_add(padding)
        }
        Content::None => {
            if is_width {
                element.padding.horizontal()
            } else {
                element.padding.vertical().max(1)
            }
        }
    }
}
