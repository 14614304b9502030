/// `(height, width)` of a grid.
pub type Shape = (usize, usize);

/// Failures raised by grid operations. None of them are fatal; an operation that fails
/// returns no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error(
        "grids must have compatible shapes for {op} (left is {}, right is {})",
        dims(.left),
        dims(.right)
    )]
    ShapeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("index ({row}, {col}) out of bounds for a {height}x{width} grid")]
    Index {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },

    #[error(
        "invalid crop coordinates: rows {}, cols {} for a {height}x{width} grid",
        span(.row_start, .row_end),
        span(.col_start, .col_end)
    )]
    Range {
        row_start: isize,
        row_end: isize,
        col_start: isize,
        col_end: isize,
        height: usize,
        width: usize,
    },

    #[error("expected {expected} values, got {actual}")]
    Arity { expected: usize, actual: usize },
}

fn dims((height, width): &Shape) -> String {
    format!("{height}x{width}")
}

fn span(start: &isize, end: &isize) -> String {
    format!("{start}..={end}")
}

pub type Result<T, E = GridError> = std::result::Result<T, E>;
