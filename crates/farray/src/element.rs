//! Traits describing what array elements can do.
//!
//! The set of element types is closed: the scalar primitives `u8`, `i16`, `i32`, `u32`, `f32`,
//! `f64` (plus `bool` for masks) and vectors of 2 to 4 [`Component`]s. Every array operation is
//! implemented once, generically, and bounded on the trait that provides the per-element math.

use std::fmt;

use farray_linalg::{vec3, Number, Sqrt, Vector};

use crate::{
    config::{ByZero, IntDivision, Rounding},
    error::ElementError,
};

/// Types that can be stored in an array.
pub trait Element: Copy + PartialEq + fmt::Debug + Default + 'static {}

/// Element types that can select positions in a mask. Non-zero (or `true`) entries are selected.
pub trait MaskValue: Element {
    fn is_selected(self) -> bool;
}

/// Element-wise `+ - * /` and negation.
///
/// Integer arithmetic wraps on overflow. Integer division follows the given [`IntDivision`]
/// policy, floating-point division follows IEEE 754.
pub trait Arithmetic: Element {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
    fn div(self, rhs: Self, division: &IntDivision) -> Result<Self, ElementError>;
}

/// Scalar element types.
pub trait Scalar: Arithmetic + MaskValue + PartialOrd {
    /// Remainder of division. Only integers support it.
    fn rem(self, rhs: Self, division: &IntDivision) -> Result<Self, ElementError>;

    /// Raises `self` to the power `exp`.
    fn pow(self, exp: Self) -> Result<Self, ElementError>;

    /// Converts to `f64`, which is exact for every scalar element type.
    fn to_f64(self) -> f64;

    /// Converts from `f64` with `as` semantics: truncating and saturating for integers, `NaN`
    /// becoming 0.
    fn from_f64_lossy(value: f64) -> Self;

    /// Converts from `f64`, returning `None` if the value is not representable.
    ///
    /// Fractional parts are truncated toward zero; only values outside of the type's range (and
    /// non-finite values for integer types) are rejected.
    fn from_f64_checked(value: f64) -> Option<Self>;
}

/// Scalar types usable as vector components.
pub trait Component: Scalar + Number + Sqrt {}

impl Component for i16 {}
impl Component for i32 {}
impl Component for f32 {}
impl Component for f64 {}

/// Element types with a cross product.
///
/// For 2D vectors this is the scalar `a.x * b.y - a.y * b.x`, for 3D vectors it's the usual vector
/// cross product.
pub trait CrossProduct: Element {
    type Output: Element;

    fn cross(self, rhs: Self) -> Self::Output;
}

/// Conversion between element types, used by `cast` and `try_cast`.
pub trait Convert<U: Element>: Element {
    /// Converts with `as` semantics.
    fn convert_lossy(self) -> U;

    /// Converts, returning `None` if the value doesn't fit into `U`.
    fn convert_checked(self) -> Option<U>;
}

impl Element for bool {}

impl MaskValue for bool {
    fn is_selected(self) -> bool {
        self
    }
}

macro_rules! int_scalar {
    ($($ty:ty),+) => {
        $(
            impl Element for $ty {}

            impl MaskValue for $ty {
                fn is_selected(self) -> bool {
                    self != 0
                }
            }

            impl Arithmetic for $ty {
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                fn neg(self) -> Self {
                    self.wrapping_neg()
                }

                #[allow(unused_comparisons)]
                fn div(self, rhs: Self, division: &IntDivision) -> Result<Self, ElementError> {
                    if rhs == 0 {
                        return by_zero(division);
                    }
                    let quot = self.wrapping_div(rhs);
                    let inexact = self.wrapping_rem(rhs) != 0;
                    Ok(match division.rounding {
                        Rounding::Floor if inexact && ((self < 0) != (rhs < 0)) => {
                            quot.wrapping_sub(1)
                        }
                        _ => quot,
                    })
                }
            }

            impl Scalar for $ty {
                #[allow(unused_comparisons)]
                fn rem(self, rhs: Self, division: &IntDivision) -> Result<Self, ElementError> {
                    if rhs == 0 {
                        return by_zero(division);
                    }
                    let rem = self.wrapping_rem(rhs);
                    Ok(match division.rounding {
                        Rounding::Floor if rem != 0 && ((rem < 0) != (rhs < 0)) => {
                            rem.wrapping_add(rhs)
                        }
                        _ => rem,
                    })
                }

                fn pow(self, exp: Self) -> Result<Self, ElementError> {
                    u32::try_from(exp)
                        .map(|exp| self.wrapping_pow(exp))
                        .map_err(|_| ElementError::Unsupported {
                            op: "negative integer exponent",
                        })
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64_lossy(value: f64) -> Self {
                    value as $ty
                }

                fn from_f64_checked(value: f64) -> Option<Self> {
                    if !value.is_finite() {
                        return None;
                    }
                    let value = value.trunc();
                    // `MIN` and `MAX` of all integer element types are exact in f64.
                    if value < <$ty>::MIN as f64 || value > <$ty>::MAX as f64 {
                        return None;
                    }
                    Some(value as $ty)
                }
            }
        )+
    };
}

macro_rules! float_scalar {
    ($($ty:ty),+) => {
        $(
            impl Element for $ty {}

            impl MaskValue for $ty {
                fn is_selected(self) -> bool {
                    self != 0.0
                }
            }

            impl Arithmetic for $ty {
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                fn neg(self) -> Self {
                    -self
                }

                fn div(self, rhs: Self, _: &IntDivision) -> Result<Self, ElementError> {
                    Ok(self / rhs)
                }
            }

            impl Scalar for $ty {
                fn rem(self, _: Self, _: &IntDivision) -> Result<Self, ElementError> {
                    Err(ElementError::Unsupported { op: "modulo" })
                }

                fn pow(self, exp: Self) -> Result<Self, ElementError> {
                    Ok(self.powf(exp))
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64_lossy(value: f64) -> Self {
                    value as $ty
                }

                fn from_f64_checked(value: f64) -> Option<Self> {
                    let converted = value as $ty;
                    if value.is_finite() && !converted.is_finite() {
                        return None;
                    }
                    Some(converted)
                }
            }
        )+
    };
}

int_scalar!(u8, i16, i32, u32);
float_scalar!(f32, f64);

fn by_zero<T: Default>(division: &IntDivision) -> Result<T, ElementError> {
    match division.by_zero {
        ByZero::Error => Err(ElementError::DivisionByZero),
        ByZero::Zero => Ok(T::default()),
    }
}

macro_rules! convert_scalars {
    ($($from:ty),+) => {
        $(
            convert_scalars!(@to $from => u8, i16, i32, u32, f32, f64);
        )+
    };
    (@to $from:ty => $($to:ty),+) => {
        $(
            impl Convert<$to> for $from {
                fn convert_lossy(self) -> $to {
                    self as $to
                }

                fn convert_checked(self) -> Option<$to> {
                    <$to as Scalar>::from_f64_checked(Scalar::to_f64(self))
                }
            }
        )+
    };
}

convert_scalars!(u8, i16, i32, u32, f32, f64);

impl<S: Component, const N: usize> Element for Vector<S, N> {}

impl<S: Component, const N: usize> Arithmetic for Vector<S, N> {
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, <S as Arithmetic>::add)
    }

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, <S as Arithmetic>::sub)
    }

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, <S as Arithmetic>::mul)
    }

    fn neg(self) -> Self {
        self.map(<S as Arithmetic>::neg)
    }

    fn div(self, rhs: Self, division: &IntDivision) -> Result<Self, ElementError> {
        let mut quot = self;
        for i in 0..N {
            quot[i] = <S as Arithmetic>::div(self[i], rhs[i], division)?;
        }
        Ok(quot)
    }
}

/// Dot product computed with the components' [`Arithmetic`], so integer vectors wrap on overflow.
pub(crate) fn dot<S: Component, const N: usize>(a: Vector<S, N>, b: Vector<S, N>) -> S {
    a.zip_with(b, <S as Arithmetic>::mul)
        .into_array()
        .into_iter()
        .fold(S::ZERO, <S as Arithmetic>::add)
}

pub(crate) fn length2<S: Component, const N: usize>(v: Vector<S, N>) -> S {
    dot(v, v)
}

/// Integer lengths are truncated. A squared length that wrapped to a negative value yields 0.
pub(crate) fn length<S: Component, const N: usize>(v: Vector<S, N>) -> S {
    Sqrt::sqrt(length2(v))
}

impl<S: Component> CrossProduct for Vector<S, 2> {
    type Output = S;

    fn cross(self, rhs: Self) -> S {
        let [ax, ay] = self.into_array();
        let [bx, by] = rhs.into_array();
        Arithmetic::sub(Arithmetic::mul(ax, by), Arithmetic::mul(ay, bx))
    }
}

impl<S: Component> CrossProduct for Vector<S, 3> {
    type Output = Self;

    fn cross(self, rhs: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = rhs.into_array();
        let det = |a: S, b: S, c: S, d: S| {
            Arithmetic::sub(Arithmetic::mul(a, b), Arithmetic::mul(c, d))
        };
        vec3(det(a2, b3, a3, b2), det(a3, b1, a1, b3), det(a1, b2, a2, b1))
    }
}

impl<S, U, const N: usize> Convert<Vector<U, N>> for Vector<S, N>
where
    S: Component + Convert<U>,
    U: Component,
{
    fn convert_lossy(self) -> Vector<U, N> {
        self.map(<S as Convert<U>>::convert_lossy)
    }

    fn convert_checked(self) -> Option<Vector<U, N>> {
        let mut converted = Vector::<U, N>::ZERO;
        for i in 0..N {
            converted[i] = <S as Convert<U>>::convert_checked(self[i])?;
        }
        Some(converted)
    }
}
