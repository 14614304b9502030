use crate::{CommonType, Grid, GridError, Promote, Result, Scalar};

/// The four element-wise arithmetic operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InfixOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl InfixOp {
    pub const ALL: [InfixOp; 4] = [
        InfixOp::Add,
        InfixOp::Subtract,
        InfixOp::Multiply,
        InfixOp::Divide,
    ];

    /// Name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            InfixOp::Add => "addition",
            InfixOp::Subtract => "subtraction",
            InfixOp::Multiply => "multiplication",
            InfixOp::Divide => "division",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            InfixOp::Add => '+',
            InfixOp::Subtract => '-',
            InfixOp::Multiply => '*',
            InfixOp::Divide => '/',
        }
    }

    /// Evaluates `a op b`. Only division can fail.
    pub fn native<T: Scalar>(self, a: T, b: T) -> Result<T> {
        Ok(match self {
            InfixOp::Add => a.scalar_add(b),
            InfixOp::Subtract => a.scalar_sub(b),
            InfixOp::Multiply => a.scalar_mul(b),
            InfixOp::Divide => {
                if b.is_zero() {
                    return Err(GridError::DivisionByZero);
                }
                a.scalar_div(b)
            }
        })
    }
}

impl std::fmt::Display for InfixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<T: Scalar> Grid<T> {
    /// Applies `op` to every pair of corresponding cells, after casting both to the
    /// common type. Division checks each divisor as it goes.
    pub fn zip_with<U>(&self, op: InfixOp, other: &Grid<U>) -> Result<Grid<CommonType<T, U>>>
    where
        U: Scalar,
        T: Promote<U>,
    {
        if self.shape() != other.shape() {
            tracing::debug!(
                op = op.name(),
                left = ?self.shape(),
                right = ?other.shape(),
                "rejected element-wise operation"
            );
            return Err(GridError::ShapeMismatch {
                op: op.name(),
                left: self.shape(),
                right: other.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op.native::<CommonType<T, U>>(a.cast(), b.cast()))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(op = op.name(), shape = ?self.shape(), "element-wise result");
        Ok(Grid {
            height: self.height,
            width: self.width,
            data,
        })
    }

    /// Applies `op` between every cell and `scalar`. A zero divisor is rejected before
    /// anything is allocated.
    pub fn map_scalar<S>(&self, op: InfixOp, scalar: S) -> Result<Grid<CommonType<T, S>>>
    where
        S: Scalar,
        T: Promote<S>,
    {
        if op == InfixOp::Divide && scalar.is_zero() {
            tracing::debug!(shape = ?self.shape(), "rejected division by a zero scalar");
            return Err(GridError::DivisionByZero);
        }

        let rhs: CommonType<T, S> = scalar.cast();
        let data = self
            .data
            .iter()
            .map(|&a| op.native(a.cast(), rhs))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(op = op.name(), shape = ?self.shape(), "scalar result");
        Ok(Grid {
            height: self.height,
            width: self.width,
            data,
        })
    }

    pub fn try_add<U>(&self, other: &Grid<U>) -> Result<Grid<CommonType<T, U>>>
    where
        U: Scalar,
        T: Promote<U>,
    {
        self.zip_with(InfixOp::Add, other)
    }

    pub fn try_sub<U>(&self, other: &Grid<U>) -> Result<Grid<CommonType<T, U>>>
    where
        U: Scalar,
        T: Promote<U>,
    {
        self.zip_with(InfixOp::Subtract, other)
    }

    pub fn try_mul<U>(&self, other: &Grid<U>) -> Result<Grid<CommonType<T, U>>>
    where
        U: Scalar,
        T: Promote<U>,
    {
        self.zip_with(InfixOp::Multiply, other)
    }

    pub fn try_div<U>(&self, other: &Grid<U>) -> Result<Grid<CommonType<T, U>>>
    where
        U: Scalar,
        T: Promote<U>,
    {
        self.zip_with(InfixOp::Divide, other)
    }

    pub fn add_scalar<S>(&self, scalar: S) -> Grid<CommonType<T, S>>
    where
        S: Scalar,
        T: Promote<S>,
    {
        let rhs: CommonType<T, S> = scalar.cast();
        self.map_cells(|&a| a.cast::<CommonType<T, S>>().scalar_add(rhs))
    }

    pub fn sub_scalar<S>(&self, scalar: S) -> Grid<CommonType<T, S>>
    where
        S: Scalar,
        T: Promote<S>,
    {
        let rhs: CommonType<T, S> = scalar.cast();
        self.map_cells(|&a| a.cast::<CommonType<T, S>>().scalar_sub(rhs))
    }

    pub fn mul_scalar<S>(&self, scalar: S) -> Grid<CommonType<T, S>>
    where
        S: Scalar,
        T: Promote<S>,
    {
        let rhs: CommonType<T, S> = scalar.cast();
        self.map_cells(|&a| a.cast::<CommonType<T, S>>().scalar_mul(rhs))
    }

    pub fn div_scalar<S>(&self, scalar: S) -> Result<Grid<CommonType<T, S>>>
    where
        S: Scalar,
        T: Promote<S>,
    {
        self.map_scalar(InfixOp::Divide, scalar)
    }
}

macro_rules! impl_grid_infix {
    ($($trait:ident :: $method:ident => $op:ident),* $(,)?) => {$(
        impl<'a, 'b, T, U> std::ops::$trait<&'b Grid<U>> for &'a Grid<T>
        where
            T: Promote<U>,
            U: Scalar,
        {
            type Output = Result<Grid<CommonType<T, U>>>;

            fn $method(self, rhs: &'b Grid<U>) -> Self::Output {
                self.zip_with(InfixOp::$op, rhs)
            }
        }
    )*};
}

impl_grid_infix! {
    Add::add => Add,
    Sub::sub => Subtract,
    Mul::mul => Multiply,
    Div::div => Divide,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataType;
    use pretty_assertions::assert_eq;

    fn ints() -> Grid<i32> {
        Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()
    }

    #[test]
    fn mixed_types_promote_to_double() {
        let halves = Grid::<f64>::filled(2, 2, 0.5);
        let sum = ints().try_add(&halves).unwrap();
        assert_eq!(sum.dtype(), DataType::F64);
        assert_eq!(sum.data(), &[1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn operators_match_methods() {
        let a = ints();
        let b = Grid::<u8>::filled(2, 2, 2);
        assert_eq!((&a + &b).unwrap(), a.try_add(&b).unwrap());
        assert_eq!((&a - &b).unwrap().data(), &[-1, 0, 1, 2]);
        assert_eq!((&a * &b).unwrap().data(), &[2, 4, 6, 8]);
        assert_eq!((&a / &b).unwrap().data(), &[0, 1, 1, 2]);
    }

    #[test]
    fn shape_mismatch_names_the_operation() {
        let a = ints();
        let b = Grid::<i32>::sized(2, 3);
        for op in InfixOp::ALL {
            assert_eq!(
                a.zip_with(op, &b),
                Err(GridError::ShapeMismatch {
                    op: op.name(),
                    left: (2, 2),
                    right: (2, 3),
                })
            );
        }
    }

    #[test]
    fn division_by_zero_cell() {
        let mut divisor = Grid::<i32>::filled(2, 2, 1);
        divisor.set(1, 1, 0).unwrap();
        assert_eq!(ints().try_div(&divisor), Err(GridError::DivisionByZero));

        let rows = vec![vec![1.0, 2.0], vec![-0.0, 4.0]];
        let float_divisor = Grid::<f32>::from_rows(rows).unwrap();
        assert_eq!(
            ints().try_div(&float_divisor),
            Err(GridError::DivisionByZero)
        );
    }

    #[test]
    fn scalar_division() {
        assert_eq!(ints().div_scalar(0), Err(GridError::DivisionByZero));
        assert_eq!(ints().div_scalar(0.0), Err(GridError::DivisionByZero));
        assert_eq!(ints().div_scalar(2).unwrap().data(), &[0, 1, 1, 2]);
        assert_eq!(
            ints().div_scalar(2.0).unwrap().data(),
            &[0.5, 1.0, 1.5, 2.0]
        );
    }

    #[test]
    fn scalar_ops_promote() {
        let scaled = ints().mul_scalar(1.5_f32);
        assert_eq!(scaled.dtype(), DataType::F32);
        assert_eq!(scaled.data(), &[1.5, 3.0, 4.5, 6.0]);

        let shifted = Grid::<u8>::filled(1, 2, 10).sub_scalar(20_u8);
        assert_eq!(shifted.data(), &[246, 246]);

        let widened = Grid::<u8>::filled(1, 2, 10).sub_scalar(20_i32);
        assert_eq!(widened.data(), &[-10, -10]);
    }

    #[test]
    fn add_then_sub_scalar_roundtrips() {
        let a = ints();
        for k in [-7, -1, 1, 3, 1000] {
            assert_eq!(a.add_scalar(k).sub_scalar(k), a);
        }
    }

    #[test]
    fn addition_commutes_and_subtraction_anticommutes() {
        let a = ints();
        let b = Grid::<i64>::from_rows(vec![vec![10, -20], vec![30, 0]]).unwrap();
        assert_eq!(a.try_add(&b).unwrap(), b.try_add(&a).unwrap());
        assert_eq!(
            a.try_sub(&b).unwrap(),
            b.try_sub(&a).unwrap().mul_scalar(-1_i64)
        );
    }

    #[test]
    fn operands_are_untouched() {
        let a = ints();
        let b = a.clone();
        let _ = a.try_mul(&b).unwrap();
        let _ = a.add_scalar(3);
        assert_eq!(a, b);
    }

    #[test]
    fn native_wraps_integers() {
        assert_eq!(InfixOp::Add.native(i8::MAX, 1), Ok(i8::MIN));
        assert_eq!(
            InfixOp::Divide.native(1_u64, 0),
            Err(GridError::DivisionByZero)
        );
        assert_eq!(InfixOp::Multiply.symbol(), '*');
    }
}
