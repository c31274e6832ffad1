//! Element-wise arithmetic on arrays.
//!
//! Operations are provided by extension traits that are implemented for every [`ArrayView`], so
//! owned arrays and masked views can be mixed freely as operands. Each operator comes in several
//! forms:
//!
//! - `op(&rhs)`: combines two arrays of equal length into a new array.
//! - `op_scalar(rhs)`: combines each element with a single value (which is a vector for vector
//!   arrays).
//! - `rop_scalar(lhs)`: the same with the single value on the left-hand side.
//! - `op_assign(&rhs)` and `op_scalar_assign(rhs)`: store the result in `self`. For a masked view,
//!   only the selected elements of the underlying array are written.
//!
//! Every operation checks all of its inputs before writing anything. In-place operations compute
//! their entire result before storing it, so a right-hand side that aliases `self` is read as it
//! was before the operation.

mod compare;
mod vector;

use itertools::Itertools;

use crate::{
    array::FixedArray,
    config::Config,
    element::{Arithmetic, Element, Scalar},
    error::{check_len, ElementError, Result},
    view::{overwrite, ArrayView},
};

pub use compare::CompareOps;
pub use vector::VectorOps;

/// Combines the elements of two equal-length arrays.
fn zip_map<T, U, R, A, B>(lhs: &A, rhs: &B, mut f: impl FnMut(T, U) -> R) -> Result<Vec<R>>
where
    T: Element,
    U: Element,
    A: ArrayView<T> + ?Sized,
    B: ArrayView<U> + ?Sized,
{
    check_len(lhs.len(), rhs.len())?;
    Ok(lhs
        .iter()
        .zip_eq(rhs.iter())
        .map(|(l, r)| f(l, r))
        .collect())
}

/// Like [`zip_map`], but fails on the first element `f` can't handle.
fn try_zip_map<T, U, R, A, B>(
    lhs: &A,
    rhs: &B,
    mut f: impl FnMut(T, U) -> Result<R, ElementError>,
) -> Result<Vec<R>>
where
    T: Element,
    U: Element,
    A: ArrayView<T> + ?Sized,
    B: ArrayView<U> + ?Sized,
{
    check_len(lhs.len(), rhs.len())?;
    lhs.iter()
        .zip_eq(rhs.iter())
        .enumerate()
        .map(|(i, (l, r))| f(l, r).map_err(|e| e.at::<T>(i)))
        .collect()
}

fn try_map<T, R, A>(array: &A, mut f: impl FnMut(T) -> Result<R, ElementError>) -> Result<Vec<R>>
where
    T: Element,
    A: ArrayView<T> + ?Sized,
{
    array
        .iter()
        .enumerate()
        .map(|(i, v)| f(v).map_err(|e| e.at::<T>(i)))
        .collect()
}

// Generates the five forms of an operator that can't fail on any element.
macro_rules! total_ops {
    ($(
        $desc:literal: $op:ident, $op_scalar:ident, $rop_scalar:ident, $op_assign:ident,
        $op_scalar_assign:ident => $f:path;
    )+) => {
        $(
            #[doc = concat!("Returns `self ", $desc, " rhs` for each pair of elements.")]
            fn $op<B>(&self, rhs: &B) -> Result<FixedArray<T>>
            where
                B: ArrayView<T> + ?Sized,
            {
                zip_map(self, rhs, $f).map(FixedArray::from)
            }

            #[doc = concat!("Returns `element ", $desc, " rhs` for each element.")]
            fn $op_scalar(&self, rhs: T) -> FixedArray<T> {
                self.map(|l| $f(l, rhs))
            }

            #[doc = concat!("Returns `lhs ", $desc, " element` for each element.")]
            fn $rop_scalar(&self, lhs: T) -> FixedArray<T> {
                self.map(|r| $f(lhs, r))
            }

            #[doc = concat!("Replaces each element with `element ", $desc, " rhs`.")]
            fn $op_assign<B>(&self, rhs: &B) -> Result<()>
            where
                B: ArrayView<T> + ?Sized,
            {
                let values = zip_map(self, rhs, $f)?;
                overwrite(self, values);
                Ok(())
            }

            #[doc = concat!("Replaces each element with `element ", $desc, " rhs`.")]
            fn $op_scalar_assign(&self, rhs: T) {
                overwrite(self, self.iter().map(|l| $f(l, rhs)).collect());
            }
        )+
    };
}

// Generates the forms of an operator whose outcome depends on `Config`.
macro_rules! configured_ops {
    ($(
        $desc:literal: $op:ident / $op_with:ident, $op_scalar:ident / $op_scalar_with:ident,
        $rop_scalar:ident / $rop_scalar_with:ident, $op_assign:ident / $op_assign_with:ident,
        $op_scalar_assign:ident / $op_scalar_assign_with:ident => $f:path;
    )+) => {
        $(
            #[doc = concat!("Returns `self ", $desc, " rhs` for each pair of elements.")]
            ///
            /// Uses the global [`Config`].
            fn $op<B>(&self, rhs: &B) -> Result<FixedArray<T>>
            where
                B: ArrayView<T> + ?Sized,
            {
                self.$op_with(rhs, Config::global())
            }

            #[doc = concat!("Returns `self ", $desc, " rhs` for each pair of elements.")]
            fn $op_with<B>(&self, rhs: &B, config: &Config) -> Result<FixedArray<T>>
            where
                B: ArrayView<T> + ?Sized,
            {
                try_zip_map(self, rhs, |l, r| $f(l, r, &config.division))
                    .map(FixedArray::from)
            }

            #[doc = concat!("Returns `element ", $desc, " rhs` for each element.")]
            ///
            /// Uses the global [`Config`].
            fn $op_scalar(&self, rhs: T) -> Result<FixedArray<T>> {
                self.$op_scalar_with(rhs, Config::global())
            }

            #[doc = concat!("Returns `element ", $desc, " rhs` for each element.")]
            fn $op_scalar_with(&self, rhs: T, config: &Config) -> Result<FixedArray<T>> {
                try_map(self, |l| $f(l, rhs, &config.division))
                    .map(FixedArray::from)
            }

            #[doc = concat!("Returns `lhs ", $desc, " element` for each element.")]
            ///
            /// Uses the global [`Config`].
            fn $rop_scalar(&self, lhs: T) -> Result<FixedArray<T>> {
                self.$rop_scalar_with(lhs, Config::global())
            }

            #[doc = concat!("Returns `lhs ", $desc, " element` for each element.")]
            fn $rop_scalar_with(&self, lhs: T, config: &Config) -> Result<FixedArray<T>> {
                try_map(self, |r| $f(lhs, r, &config.division))
                    .map(FixedArray::from)
            }

            #[doc = concat!("Replaces each element with `element ", $desc, " rhs`.")]
            ///
            /// Uses the global [`Config`].
            fn $op_assign<B>(&self, rhs: &B) -> Result<()>
            where
                B: ArrayView<T> + ?Sized,
            {
                self.$op_assign_with(rhs, Config::global())
            }

            #[doc = concat!("Replaces each element with `element ", $desc, " rhs`.")]
            fn $op_assign_with<B>(&self, rhs: &B, config: &Config) -> Result<()>
            where
                B: ArrayView<T> + ?Sized,
            {
                let values = try_zip_map(self, rhs, |l, r| $f(l, r, &config.division))?;
                overwrite(self, values);
                Ok(())
            }

            #[doc = concat!("Replaces each element with `element ", $desc, " rhs`.")]
            ///
            /// Uses the global [`Config`].
            fn $op_scalar_assign(&self, rhs: T) -> Result<()> {
                self.$op_scalar_assign_with(rhs, Config::global())
            }

            #[doc = concat!("Replaces each element with `element ", $desc, " rhs`.")]
            fn $op_scalar_assign_with(&self, rhs: T, config: &Config) -> Result<()> {
                let values = try_map(self, |l| $f(l, rhs, &config.division))?;
                overwrite(self, values);
                Ok(())
            }
        )+
    };
}

/// Addition, subtraction, multiplication, division and negation.
///
/// Implemented for arrays of every numeric element type, including vectors.
pub trait ArithmeticOps<T: Arithmetic>: ArrayView<T> {
    total_ops! {
        "+": add, add_scalar, radd_scalar, add_assign, add_scalar_assign => Arithmetic::add;
        "-": sub, sub_scalar, rsub_scalar, sub_assign, sub_scalar_assign => Arithmetic::sub;
        "*": mul, mul_scalar, rmul_scalar, mul_assign, mul_scalar_assign => Arithmetic::mul;
    }

    configured_ops! {
        "/": div / div_with, div_scalar / div_scalar_with, rdiv_scalar / rdiv_scalar_with,
            div_assign / div_assign_with, div_scalar_assign / div_scalar_assign_with
            => Arithmetic::div;
    }

    /// Returns the negation of each element.
    fn neg(&self) -> FixedArray<T> {
        self.map(Arithmetic::neg)
    }

    /// Negates each element in place.
    fn neg_assign(&self) {
        overwrite(self, self.iter().map(Arithmetic::neg).collect());
    }
}

impl<T: Arithmetic, A: ArrayView<T> + ?Sized> ArithmeticOps<T> for A {}

/// Modulo and exponentiation, available for scalar element types.
///
/// Modulo is only defined for integers; on floating-point arrays it fails with
/// [`ArrayError::UnsupportedOperation`].
///
/// [`ArrayError::UnsupportedOperation`]: crate::ArrayError::UnsupportedOperation
pub trait ScalarOps<T: Scalar>: ArrayView<T> {
    configured_ops! {
        "%": rem / rem_with, rem_scalar / rem_scalar_with, rrem_scalar / rrem_scalar_with,
            rem_assign / rem_assign_with, rem_scalar_assign / rem_scalar_assign_with
            => Scalar::rem;
    }

    /// Raises each element to the power of the corresponding element of `rhs`.
    ///
    /// Floats use [`f32::powf`]/[`f64::powf`]. Integers use wrapping exponentiation and fail with
    /// [`ArrayError::UnsupportedOperation`] on negative exponents.
    ///
    /// [`ArrayError::UnsupportedOperation`]: crate::ArrayError::UnsupportedOperation
    fn pow<B>(&self, rhs: &B) -> Result<FixedArray<T>>
    where
        B: ArrayView<T> + ?Sized,
    {
        try_zip_map(self, rhs, Scalar::pow).map(FixedArray::from)
    }

    /// Raises each element to the power `exp`.
    fn pow_scalar(&self, exp: T) -> Result<FixedArray<T>> {
        try_map(self, |base| Scalar::pow(base, exp))
            .map(FixedArray::from)
    }

    /// Raises `base` to the power of each element.
    fn rpow_scalar(&self, base: T) -> Result<FixedArray<T>> {
        try_map(self, |exp| Scalar::pow(base, exp))
            .map(FixedArray::from)
    }

    fn pow_assign<B>(&self, rhs: &B) -> Result<()>
    where
        B: ArrayView<T> + ?Sized,
    {
        let values = try_zip_map(self, rhs, Scalar::pow)?;
        overwrite(self, values);
        Ok(())
    }

    fn pow_scalar_assign(&self, exp: T) -> Result<()> {
        let values = try_map(self, |base| Scalar::pow(base, exp))?;
        overwrite(self, values);
        Ok(())
    }
}

impl<T: Scalar, A: ArrayView<T> + ?Sized> ScalarOps<T> for A {}
