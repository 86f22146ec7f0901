//! Edge-clipped square windows for neighborhood operations

use super::{Grid, GridElement};

/// A square window of half-width `h` centred on a cell.
///
/// The full window spans `2h + 1` rows and columns. Near the grid edges it
/// is truncated to `[0, rows) x [0, cols)`: boundary windows are smaller,
/// never padded and never wrapped. Bounds are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
}

impl Window {
    /// Window of half-width `half_width` around `(row, col)`, clipped to `shape`
    pub fn clipped(shape: (usize, usize), row: usize, col: usize, half_width: usize) -> Self {
        let (rows, cols) = shape;
        Self {
            row_start: row.saturating_sub(half_width),
            row_end: row.saturating_add(half_width).saturating_add(1).min(rows),
            col_start: col.saturating_sub(half_width),
            col_end: col.saturating_add(half_width).saturating_add(1).min(cols),
        }
    }

    /// Covered rows, half-open
    pub fn row_range(&self) -> std::ops::Range<usize> {
        self.row_start..self.row_end
    }

    /// Covered columns, half-open
    pub fn col_range(&self) -> std::ops::Range<usize> {
        self.col_start..self.col_end
    }

    /// Number of rows covered
    pub fn height(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    /// Number of cells covered
    pub fn len(&self) -> usize {
        self.height() * self.width()
    }

    /// Whether the window covers no cell
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether no clipping happened for a window of this half-width
    pub fn is_full(&self, half_width: usize) -> bool {
        let side = 2 * half_width + 1;
        self.height() == side && self.width() == side
    }

    /// Check if a cell lies inside the window
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row_start..self.row_end).contains(&row) && (self.col_start..self.col_end).contains(&col)
    }

    /// Iterate over `(row, col, value)` of the window cells in row-major order.
    ///
    /// The window is clipped again to the shape of `grid`, so a window built
    /// for another shape only yields the cells both have in common.
    pub fn values<'a, T: GridElement>(&self, grid: &'a Grid<T>) -> WindowValues<'a, T> {
        let window = Self {
            row_start: self.row_start,
            row_end: self.row_end.min(grid.rows()),
            col_start: self.col_start,
            col_end: self.col_end.min(grid.cols()),
        };
        WindowValues {
            grid,
            window,
            row: window.row_start,
            col: window.col_start,
        }
    }
}

/// Iterator over the cells of a [`Window`]
pub struct WindowValues<'a, T: GridElement> {
    grid: &'a Grid<T>,
    window: Window,
    row: usize,
    col: usize,
}

impl<'a, T: GridElement> Iterator for WindowValues<'a, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.window.width() == 0 || self.row >= self.window.row_end {
            return None;
        }

        let (r, c) = (self.row, self.col);
        self.col += 1;
        if self.col >= self.window.col_end {
            self.col = self.window.col_start;
            self.row += 1;
        }

        // row < row_end <= rows and col < col_end <= cols, see `Window::values`
        let value = unsafe { self.grid.get_unchecked(r, c) };
        Some((r, c, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.window.width() == 0 || self.row >= self.window.row_end {
            0
        } else {
            (self.window.row_end - self.row) * self.window.width() - (self.col - self.window.col_start)
        };
        (remaining, Some(remaining))
    }
}

impl<'a, T: GridElement> ExactSizeIterator for WindowValues<'a, T> {}
