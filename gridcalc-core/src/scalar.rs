use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, Zero};

/// Runtime tag for each supported element type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl DataType {
    pub const ALL: [DataType; 10] = [
        DataType::I8,
        DataType::I16,
        DataType::I32,
        DataType::I64,
        DataType::U8,
        DataType::U16,
        DataType::U32,
        DataType::U64,
        DataType::F32,
        DataType::F64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DataType::I8 => "i8",
            DataType::I16 => "i16",
            DataType::I32 => "i32",
            DataType::I64 => "i64",
            DataType::U8 => "u8",
            DataType::U16 => "u16",
            DataType::U32 => "u32",
            DataType::U64 => "u64",
            DataType::F32 => "f32",
            DataType::F64 => "f64",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, DataType::F32 | DataType::F64)
    }

    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            DataType::U8 | DataType::U16 | DataType::U32 | DataType::U64
        )
    }

    /// Size of one element in bytes
    pub fn size_of(self) -> usize {
        match self {
            DataType::I8 | DataType::U8 => 1,
            DataType::I16 | DataType::U16 => 2,
            DataType::I32 | DataType::U32 | DataType::F32 => 4,
            DataType::I64 | DataType::U64 | DataType::F64 => 8,
        }
    }

    /// Integers narrower than 32 bits are widened to `i32` before mixing with another type.
    fn integral_promotion(self) -> DataType {
        if !self.is_float() && self.size_of() < 4 {
            DataType::I32
        } else {
            self
        }
    }

    /// The common type of a binary operation between `self` and `other`.
    ///
    /// Follows the usual arithmetic conversions: identical types stay as they are, any
    /// float wins over any integer, and two different integers are first widened to
    /// `i32` and then resolved by rank and signedness. The type-level counterpart is
    /// [`Promote`]; both always agree.
    pub fn promote(self, other: DataType) -> DataType {
        if self == other {
            return self;
        }

        match (self.is_float(), other.is_float()) {
            (true, true) => {
                if self.size_of() >= other.size_of() {
                    self
                } else {
                    other
                }
            }
            (true, false) => self,
            (false, true) => other,
            (false, false) => {
                let a = self.integral_promotion();
                let b = other.integral_promotion();
                if a == b {
                    return a;
                }

                if a.is_signed() == b.is_signed() {
                    return if a.size_of() >= b.size_of() { a } else { b };
                }

                let (signed, unsigned) = if a.is_signed() { (a, b) } else { (b, a) };
                if unsigned.size_of() >= signed.size_of() {
                    unsigned
                } else {
                    signed
                }
            }
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric element that can live in a [`Grid`](crate::Grid).
///
/// Conversions between scalars use primitive `as` semantics: integers truncate,
/// floats truncate toward zero and saturate, nothing ever fails. Integer arithmetic
/// wraps on overflow.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Zero
    + Send
    + Sync
    + 'static
    + AsPrimitive<i8>
    + AsPrimitive<i16>
    + AsPrimitive<i32>
    + AsPrimitive<i64>
    + AsPrimitive<u8>
    + AsPrimitive<u16>
    + AsPrimitive<u32>
    + AsPrimitive<u64>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
{
    const DTYPE: DataType;

    fn from_scalar<S: Scalar>(value: S) -> Self;

    fn cast<U: Scalar>(self) -> U {
        U::from_scalar(self)
    }

    fn scalar_add(self, rhs: Self) -> Self;
    fn scalar_sub(self, rhs: Self) -> Self;
    fn scalar_mul(self, rhs: Self) -> Self;

    /// Callers must rule out a zero divisor first; integer division by zero panics.
    fn scalar_div(self, rhs: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty => $dtype:ident),* $(,)?) => {$(
        impl Scalar for $t {
            const DTYPE: DataType = DataType::$dtype;

            #[inline]
            fn from_scalar<S: Scalar>(value: S) -> Self {
                <S as AsPrimitive<$t>>::as_(value)
            }

            #[inline]
            fn scalar_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn scalar_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn scalar_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn scalar_div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty => $dtype:ident),* $(,)?) => {$(
        impl Scalar for $t {
            const DTYPE: DataType = DataType::$dtype;

            #[inline]
            fn from_scalar<S: Scalar>(value: S) -> Self {
                <S as AsPrimitive<$t>>::as_(value)
            }

            #[inline]
            fn scalar_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn scalar_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn scalar_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn scalar_div(self, rhs: Self) -> Self {
                self / rhs
            }
        }
    )*};
}

impl_scalar_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl_scalar_float! {
    f32 => F32,
    f64 => F64,
}

/// Type-level promotion table: `<T as Promote<U>>::Output` is the common type of `T` and `U`.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar;
}

/// Shorthand for the common type of `T` and `U`.
pub type CommonType<T, U> = <T as Promote<U>>::Output;

macro_rules! promotion_table {
    ($($lhs:ty => [$($rhs:ty => $out:ty),* $(,)?]);* $(;)?) => {
        $($(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*)*
    };
}

promotion_table! {
    i8 => [
        i8 => i8, i16 => i32, i32 => i32, i64 => i64,
        u8 => i32, u16 => i32, u32 => u32, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    i16 => [
        i8 => i32, i16 => i16, i32 => i32, i64 => i64,
        u8 => i32, u16 => i32, u32 => u32, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    i32 => [
        i8 => i32, i16 => i32, i32 => i32, i64 => i64,
        u8 => i32, u16 => i32, u32 => u32, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    i64 => [
        i8 => i64, i16 => i64, i32 => i64, i64 => i64,
        u8 => i64, u16 => i64, u32 => i64, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    u8 => [
        i8 => i32, i16 => i32, i32 => i32, i64 => i64,
        u8 => u8, u16 => i32, u32 => u32, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    u16 => [
        i8 => i32, i16 => i32, i32 => i32, i64 => i64,
        u8 => i32, u16 => u16, u32 => u32, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    u32 => [
        i8 => u32, i16 => u32, i32 => u32, i64 => i64,
        u8 => u32, u16 => u32, u32 => u32, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    u64 => [
        i8 => u64, i16 => u64, i32 => u64, i64 => u64,
        u8 => u64, u16 => u64, u32 => u64, u64 => u64,
        f32 => f32, f64 => f64,
    ];
    f32 => [
        i8 => f32, i16 => f32, i32 => f32, i64 => f32,
        u8 => f32, u16 => f32, u32 => f32, u64 => f32,
        f32 => f32, f64 => f64,
    ];
    f64 => [
        i8 => f64, i16 => f64, i32 => f64, i64 => f64,
        u8 => f64, u16 => f64, u32 => f64, u64 => f64,
        f32 => f64, f64 => f64,
    ];
}
