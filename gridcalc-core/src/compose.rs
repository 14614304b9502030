use crate::grid::signed;
use crate::{CommonType, Grid, GridError, Promote, Result, Scalar};

impl<T: Scalar> Grid<T> {
    /// Places `other` to the right of `self`. Both must have the same height.
    pub fn concat_horizontal<U>(&self, other: &Grid<U>) -> Result<Grid<CommonType<T, U>>>
    where
        U: Scalar,
        T: Promote<U>,
    {
        if self.height != other.height {
            return Err(self.concat_mismatch("horizontal concatenation", other));
        }

        let width = self.width + other.width;
        let mut data = Vec::with_capacity(self.height * width);
        for (left, right) in self.rows().zip(other.rows()) {
            data.extend(left.iter().map(|&v| v.cast::<CommonType<T, U>>()));
            data.extend(right.iter().map(|&v| v.cast::<CommonType<T, U>>()));
        }

        tracing::trace!(height = self.height, width, "horizontal concatenation");
        Ok(Grid {
            height: self.height,
            width,
            data,
        })
    }

    /// Places `other` below `self`. Both must have the same width.
    pub fn concat_vertical<U>(&self, other: &Grid<U>) -> Result<Grid<CommonType<T, U>>>
    where
        U: Scalar,
        T: Promote<U>,
    {
        if self.width != other.width {
            return Err(self.concat_mismatch("vertical concatenation", other));
        }

        let data = self
            .data
            .iter()
            .map(|&v| v.cast::<CommonType<T, U>>())
            .chain(other.data.iter().map(|&v| v.cast::<CommonType<T, U>>()))
            .collect();

        let height = self.height + other.height;
        tracing::trace!(height, width = self.width, "vertical concatenation");
        Ok(Grid {
            height,
            width: self.width,
            data,
        })
    }

    fn concat_mismatch<U>(&self, op: &'static str, other: &Grid<U>) -> GridError {
        tracing::debug!(op, left = ?self.shape(), right = ?other.shape(), "rejected concatenation");
        GridError::ShapeMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
    }

    /// Copies the block spanning rows `row_start..=row_end` and columns
    /// `col_start..=col_end`.
    pub fn crop(
        &self,
        row_start: isize,
        row_end: isize,
        col_start: isize,
        col_end: isize,
    ) -> Result<Grid<T>> {
        let in_bounds = row_start >= 0
            && col_start >= 0
            && row_start <= row_end
            && col_start <= col_end
            && row_end < signed(self.height)
            && col_end < signed(self.width);
        if !in_bounds {
            tracing::debug!(
                row_start,
                row_end,
                col_start,
                col_end,
                shape = ?self.shape(),
                "rejected crop"
            );
            return Err(GridError::Range {
                row_start,
                row_end,
                col_start,
                col_end,
                height: self.height,
                width: self.width,
            });
        }

        // All four coordinates are non-negative at this point
        Ok(self.copy_block(
            row_start.unsigned_abs(),
            row_end.unsigned_abs(),
            col_start.unsigned_abs(),
            col_end.unsigned_abs(),
        ))
    }

    /// [`Grid::crop`] with bounds fixed at compile time. Unordered bounds fail to
    /// compile; bounds that do not fit this grid fail with [`GridError::Range`].
    pub fn subgrid<
        const ROW_START: usize,
        const ROW_END: usize,
        const COL_START: usize,
        const COL_END: usize,
    >(
        &self,
    ) -> Result<Grid<T>> {
        const {
            assert!(ROW_START <= ROW_END, "sub-grid rows must be ordered");
            assert!(COL_START <= COL_END, "sub-grid columns must be ordered");
        }

        if ROW_END >= self.height || COL_END >= self.width {
            return Err(GridError::Range {
                row_start: signed(ROW_START),
                row_end: signed(ROW_END),
                col_start: signed(COL_START),
                col_end: signed(COL_END),
                height: self.height,
                width: self.width,
            });
        }

        Ok(self.copy_block(ROW_START, ROW_END, COL_START, COL_END))
    }

    fn copy_block(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Grid<T> {
        let data = self
            .rows()
            .skip(row_start)
            .take(row_end - row_start + 1)
            .flat_map(|row| &row[col_start..=col_end])
            .copied()
            .collect();

        tracing::trace!(row_start, row_end, col_start, col_end, "copied block");
        Grid {
            height: row_end - row_start + 1,
            width: col_end - col_start + 1,
            data,
        }
    }

    /// Nearest-neighbor upscale: every cell becomes an `H x W` block.
    pub fn upscale<const H: usize, const W: usize>(&self) -> Grid<T> {
        const {
            assert!(H > 0 && W > 0, "upscale factors must be non-zero");
        }

        let width = self.width * W;
        let mut data = Vec::with_capacity(self.data.len() * H * W);
        for row in self.rows() {
            let start = data.len();
            data.extend(row.iter().flat_map(|&v| std::iter::repeat(v).take(W)));
            for _ in 1..H {
                data.extend_from_within(start..start + width);
            }
        }

        tracing::trace!(height = self.height * H, width, "upscaled");
        Grid {
            height: self.height * H,
            width,
            data,
        }
    }
}

/// Concatenates any number of grids left to right, folding from the right:
/// `unite_horizontal!(a, b, c)` is `a.concat_horizontal(&b.concat_horizontal(&c)?)`.
///
/// The element type is promoted pairwise along that fold, so the innermost (rightmost)
/// pair is converted first. A single grid is returned as a copy.
#[macro_export]
macro_rules! unite_horizontal {
    ($only:expr $(,)?) => {
        ::core::result::Result::<_, $crate::GridError>::Ok($crate::Grid::clone(&$only))
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::unite_horizontal!($($rest),+).and_then(|rest| $first.concat_horizontal(&rest))
    };
}
