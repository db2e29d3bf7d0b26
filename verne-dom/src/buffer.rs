//! Cell grid the renderer paints into.

use crate::types::{Color, TextStyle};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Color,
    pub bg: Color,
    pub style: TextStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Color::rgb(220, 220, 220),
            bg: Color::rgb(0, 0, 0),
            style: TextStyle::new(),
        }
    }
}

/// A fixed-size grid of cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.fill(Cell::default());
    }

    pub fn fill(&mut self, cell: Cell) {
        for slot in &mut self.cells {
            *slot = cell;
        }
    }

    /// Cells that differ from `other`, for minimal terminal writes.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// The visible characters of one row, trailing spaces trimmed.
    ///
    /// Test helper for asserting on rendered output.
    pub fn row_text(&self, y: u16) -> String {
        let mut line = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                line.push(cell.char);
            }
        }
        line.trim_end().to_string()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
