//! Generic 2D grids of numbers with element-wise arithmetic, concatenation, cropping,
//! upscaling and type conversion.
//!
//! Every binary operation between a `Grid<T>` and a `Grid<U>` (or a scalar `U`) produces
//! a `Grid<CommonType<T, U>>`, where the common type comes from the [`Promote`] table.
//! Operations never modify their operands.
//!
//! ```
//! use gridcalc_core::{make_grid, DataType, Grid};
//!
//! let a = make_grid![2, 2; i32; 1, 2, 3, 4]?;
//! let b = Grid::<f64>::filled(2, 2, 0.5);
//! let sum = a.try_add(&b)?;
//! assert_eq!(sum.dtype(), DataType::F64);
//! assert_eq!(sum.data(), &[1.5, 2.5, 3.5, 4.5]);
//! # Ok::<(), gridcalc_core::GridError>(())
//! ```

mod compose;
mod display;
mod error;
mod grid;
mod literal;
mod ops;
mod scalar;

pub use display::{GridDisplay, DEFAULT_CELL_WIDTH};
pub use error::{GridError, Result, Shape};
pub use grid::Grid;
pub use literal::make_grid;
pub use ops::InfixOp;
pub use scalar::{CommonType, DataType, Promote, Scalar};
