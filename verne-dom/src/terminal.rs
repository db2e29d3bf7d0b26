//! Terminal backend: raw mode, buffer diffing, and event polling.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::debug;

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect, Viewport};
use crate::render::render_to_buffer;
use crate::types::Color;

/// Below this width the mobile (card) representation is active.
pub const MOBILE_BREAKPOINT: u16 = 72;

/// Owns the terminal for the lifetime of the application.
///
/// Enters raw mode and the alternate screen on creation and restores the
/// terminal on drop. Rendering is double-buffered: only changed cells are
/// written each frame.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: LayoutResult,
    viewport: Viewport,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        debug!("terminal initialized at {width}x{height}");

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: LayoutResult::default(),
            viewport: viewport_for_width(width),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// The viewport mode chosen from the current terminal width.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The layout of the most recently rendered frame, for hit-testing.
    pub fn last_layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    /// Lay out and draw a frame, flushing only changed cells.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            // Force a full repaint by making the previous frame all-different.
            self.previous = Buffer::new(width, height);
            self.previous.fill(Cell {
                char: '\u{0}',
                ..Cell::default()
            });
            self.viewport = viewport_for_width(width);
        }

        self.current.clear();
        let available = Rect::from_size(width, height);
        self.last_layout = layout(root, available, self.viewport);
        render_to_buffer(root, &self.last_layout, &mut self.current);

        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(&self.last_layout)
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg: Option<Color> = None;
        let mut last_bg: Option<Color> = None;

        for (x, y, cell) in self.current.diff(&self.previous) {
            queue!(self.stdout, cursor::MoveTo(x, y))?;
            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_ct_color(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_ct_color(cell.bg)))?;
                last_bg = Some(cell.bg);
            }
            queue!(self.stdout, SetAttribute(Attribute::Reset))?;
            if last_fg.is_some() {
                queue!(self.stdout, SetForegroundColor(to_ct_color(cell.fg)))?;
            }
            if last_bg.is_some() {
                queue!(self.stdout, SetBackgroundColor(to_ct_color(cell.bg)))?;
            }
            if cell.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            }
            if cell.style.underline {
                queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
            }
            queue!(self.stdout, crossterm::style::Print(cell.char))?;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn viewport_for_width(width: u16) -> Viewport {
    if width < MOBILE_BREAKPOINT {
        Viewport::Mobile
    } else {
        Viewport::Desktop
    }
}

fn to_ct_color(color: Color) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
