//! Character canvas
//!
//! A fixed-size grid of display characters, row 0 at the top, with helpers
//! to place justified text into a segment of a row or a column.

use crate::error::{PlotError, PlotResult};
use std::fmt;
use std::ops::Range;

/// Character every cell starts as
pub const BLANK: char = ' ';

/// A run of cells within one row or one column, half-open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Columns `cols` of row `row`
    Row { row: usize, cols: Range<usize> },
    /// Rows `rows` of column `col`
    Column { col: usize, rows: Range<usize> },
}

impl Span {
    /// Columns `cols` of `row`
    pub fn row(row: usize, cols: Range<usize>) -> Self {
        Span::Row { row, cols }
    }

    /// Rows `rows` of `col`
    pub fn column(col: usize, rows: Range<usize>) -> Self {
        Span::Column { col, rows }
    }

    /// Number of cells in the span
    pub fn len(&self) -> usize {
        match self {
            Span::Row { cols, .. } => cols.len(),
            Span::Column { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(row, col)` of the i-th cell
    fn cell(&self, i: usize) -> (usize, usize) {
        match self {
            Span::Row { row, cols } => (*row, cols.start + i),
            Span::Column { col, rows } => (rows.start + i, *col),
        }
    }
}

/// Text placement within a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
    Right,
}

/// A mutable grid of single display characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a blank canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> PlotResult<usize> {
        if row >= self.height || col >= self.width {
            return Err(PlotError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Read one cell
    pub fn get(&self, row: usize, col: usize) -> PlotResult<char> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Write one cell
    pub fn set(&mut self, row: usize, col: usize, ch: char) -> PlotResult<()> {
        let index = self.index(row, col)?;
        self.cells[index] = ch;
        Ok(())
    }

    fn check_span(&self, span: &Span) -> PlotResult<()> {
        if let Some(last) = span.len().checked_sub(1) {
            let (row, col) = span.cell(last);
            self.index(row, col)?;
        }
        Ok(())
    }

    /// Fill every cell of `span` with `ch`
    pub fn fill(&mut self, span: &Span, ch: char) -> PlotResult<()> {
        self.check_span(span)?;
        for i in 0..span.len() {
            let (row, col) = span.cell(i);
            let index = row * self.width + col;
            self.cells[index] = ch;
        }
        Ok(())
    }

    /// Write `text` into `span`, justified and padded with `fill`.
    ///
    /// Text longer than the span keeps its left-most characters.
    pub fn place(&mut self, span: &Span, text: &str, justify: Justify, fill: char) -> PlotResult<()> {
        self.check_span(span)?;

        let len = span.len();
        let chars: Vec<char> = text.chars().take(len).collect();
        let margin = len - chars.len();
        let left = match justify {
            Justify::Left => 0,
            Justify::Center => margin / 2,
            Justify::Right => margin,
        };

        for i in 0..len {
            let ch = if i >= left && i < left + chars.len() {
                chars[i - left]
            } else {
                fill
            };
            let (row, col) = span.cell(i);
            let index = row * self.width + col;
            self.cells[index] = ch;
        }
        Ok(())
    }

    /// Center `text` in `span`, padded with spaces
    pub fn center(&mut self, span: &Span, text: &str) -> PlotResult<()> {
        self.place(span, text, Justify::Center, BLANK)
    }

    /// Left-justify `text` in `span`, padded with spaces
    pub fn ljust(&mut self, span: &Span, text: &str) -> PlotResult<()> {
        self.place(span, text, Justify::Left, BLANK)
    }

    /// Right-justify `text` in `span`, padded with spaces
    pub fn rjust(&mut self, span: &Span, text: &str) -> PlotResult<()> {
        self.place(span, text, Justify::Right, BLANK)
    }

    /// Columns `start..end` of `row` clipped to the canvas width, or `None`
    /// when nothing remains.
    pub fn clip_row(&self, row: usize, start: i64, end: i64) -> Option<Span> {
        let start = start.max(0) as usize;
        let end = end.clamp(0, self.width as i64) as usize;
        (row < self.height && start < end).then(|| Span::row(row, start..end))
    }

    /// Each row as a string, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect())
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}
