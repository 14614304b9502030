use crate::{Grid, GridError, Result, Scalar};

/// Builds an `H x W` grid from exactly `H * W` values in row-major order, casting each
/// value to `T`.
pub fn make_grid<const H: usize, const W: usize, T, S>(
    values: impl IntoIterator<Item = S>,
) -> Result<Grid<T>>
where
    T: Scalar,
    S: Scalar,
{
    let data: Vec<T> = values.into_iter().map(|v| v.cast()).collect();
    if data.len() != H * W {
        tracing::debug!(rows = H, cols = W, supplied = data.len(), "rejected grid literal");
        return Err(GridError::Arity {
            expected: H * W,
            actual: data.len(),
        });
    }

    Ok(Grid {
        height: H,
        width: W,
        data,
    })
}

/// Grid literal: `make_grid![2, 2; i32; 1, 2, 3, 4]`.
///
/// Every value is cast to the element type, so mixed literals such as `1, 2.5` are
/// accepted. Evaluates to a `Result`, failing with [`GridError::Arity`] when the number
/// of values is not `H * W`.
#[macro_export]
macro_rules! make_grid {
    ($h:expr, $w:expr; $t:ty; $($value:expr),* $(,)?) => {
        $crate::make_grid::<{ $h }, { $w }, $t, $t>([
            $(<$t as $crate::Scalar>::from_scalar($value)),*
        ])
    };
}
