use std::ops;

/// Types that have an additive identity.
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a multiplicative identity.
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
///
/// Integer types compute the square root in floating point and truncate the result toward zero,
/// so `5.sqrt() == 2`. Negative integers yield 0.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Marker for floating-point component types.
///
/// Operations that only make sense with a fractional result (like [`Vector::normalize`]) are
/// bounded on this trait, so they simply don't exist for integer vectors.
///
/// [`Vector::normalize`]: crate::Vector::normalize
pub trait Float: Number + Sqrt + PartialOrd {}

impl Float for f32 {}
impl Float for f64 {}

/// Numbers that support the basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}

impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! identities {
    ($zero:literal, $one:literal: $($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }
            impl One for $ty {
                const ONE: Self = $one;
            }
        )+
    };
}

identities!(0, 1: u8, u16, u32, u64, i8, i16, i32, i64);
identities!(0.0, 1.0: f32, f64);

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

macro_rules! int_sqrt {
    ($($ty:ty),+) => {
        $(
            impl Sqrt for $ty {
                #[allow(unused_comparisons)]
                fn sqrt(self) -> Self {
                    if self <= 0 {
                        return 0;
                    }
                    // f64 represents every value of these types exactly.
                    (self as f64).sqrt() as $ty
                }
            }
        )+
    };
}

int_sqrt!(u8, u16, u32, i8, i16, i32);
