use std::fmt;

use crate::Grid;

/// Column width used by `impl Display for Grid`.
pub const DEFAULT_CELL_WIDTH: usize = 4;

/// Renders a grid as right-aligned, fixed-width fields, one row per line.
#[derive(Debug, Clone, Copy)]
pub struct GridDisplay<'a, T> {
    grid: &'a Grid<T>,
    cell_width: usize,
}

impl<T> Grid<T> {
    pub fn display(&self, cell_width: usize) -> GridDisplay<'_, T> {
        GridDisplay {
            grid: self,
            cell_width,
        }
    }
}

impl<T: fmt::Display> fmt::Display for GridDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for value in row {
                write!(f, "{:>width$}", value, width = self.cell_width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display(DEFAULT_CELL_WIDTH).fmt(f)
    }
}
