use std::ops::{Index, IndexMut};

use crate::{DataType, GridError, Result, Scalar, Shape};

/// A dense, row-major 2D grid of scalars.
///
/// `data.len() == height * width` always holds, including grids with zero rows or columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) data: Vec<T>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// An empty 0x0 grid
    pub fn new() -> Self {
        Self {
            height: 0,
            width: 0,
            data: vec![],
        }
    }

    pub fn filled(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            height,
            width,
            data: vec![value; height * width],
        }
    }

    /// Builds a grid from `height * width` values in row-major order.
    pub fn from_row_major(height: usize, width: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != height * width {
            return Err(GridError::Arity {
                expected: height * width,
                actual: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Builds a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(GridError::ShapeMismatch {
                op: "from_rows",
                left: (1, width),
                right: (1, ragged.len()),
            });
        }
        Ok(Self {
            height,
            width,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> Shape {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.height).map(move |row| &self.data[row * self.width..(row + 1) * self.width])
    }

    pub(crate) fn calc_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    #[track_caller]
    fn calc_index_or_panic(&self, row: usize, col: usize) -> usize {
        if let Some(idx) = self.calc_index(row, col) {
            idx
        } else {
            panic!(
                "Index ({}, {}) out of bounds for grid size ({}, {})",
                row, col, self.height, self.width,
            );
        }
    }

    fn index_error(&self, row: isize, col: isize) -> GridError {
        GridError::Index {
            row,
            col,
            height: self.height,
            width: self.width,
        }
    }

    /// Resolves python-style negative coordinates: `-1` is the last row or column.
    fn wrapped_index(&self, row: isize, col: isize) -> Result<usize> {
        let wrap = |i: isize, n: usize| if i < 0 { i + signed(n) } else { i };
        let wrapped_row = usize::try_from(wrap(row, self.height));
        let wrapped_col = usize::try_from(wrap(col, self.width));
        let idx = match (wrapped_row, wrapped_col) {
            (Ok(r), Ok(c)) => self.calc_index(r, c),
            _ => None,
        };
        idx.ok_or_else(|| self.index_error(row, col))
    }

    pub fn pixel(&self, row: isize, col: isize) -> Result<&T> {
        let idx = self.wrapped_index(row, col)?;
        Ok(&self.data[idx])
    }

    pub fn pixel_mut(&mut self, row: isize, col: isize) -> Result<&mut T> {
        let idx = self.wrapped_index(row, col)?;
        Ok(&mut self.data[idx])
    }

    pub(crate) fn map_cells<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        tracing::trace!(shape = ?self.shape(), "mapped cells");
        Grid {
            height: self.height,
            width: self.width,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Scalar> Grid<T> {
    /// A `height x width` grid of zeros
    pub fn sized(height: usize, width: usize) -> Self {
        Self::filled(height, width, T::default())
    }

    pub fn dtype(&self) -> DataType {
        T::DTYPE
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.calc_index(row, col)
            .map(|idx| self.data[idx])
            .ok_or_else(|| self.index_error(signed(row), signed(col)))
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self
            .calc_index(row, col)
            .ok_or_else(|| self.index_error(signed(row), signed(col)))?;
        self.data[idx] = value;
        Ok(())
    }

    /// Element-wise `as` conversion into another scalar type. Values that do not fit
    /// are truncated or saturated, never rejected.
    pub fn convert<U: Scalar>(&self) -> Grid<U> {
        self.map_cells(|&value| value.cast())
    }

    pub fn converted_from<U: Scalar>(other: &Grid<U>) -> Self {
        other.convert()
    }
}

impl<T: Scalar, U: Scalar> From<&Grid<U>> for Grid<T> {
    fn from(other: &Grid<U>) -> Self {
        other.convert()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.calc_index_or_panic(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let idx = self.calc_index_or_panic(row, col);
        &mut self.data[idx]
    }
}

/// Grid dimensions never exceed `isize::MAX` since the backing `Vec` cannot.
pub(crate) fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
