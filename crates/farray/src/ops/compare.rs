use crate::{array::FixedArray, element::Element, error::Result, view::ArrayView, IntArray};

use super::zip_map;

macro_rules! comparisons {
    ($(
        $desc:literal: $name:ident, $scalar_name:ident => $op:tt $(where T: $bound:path)?;
    )+) => {
        $(
            #[doc = concat!("Returns 1 where `self ", $desc, " rhs` holds and 0 elsewhere.")]
            fn $name<B>(&self, rhs: &B) -> Result<IntArray>
            where
                B: ArrayView<T> + ?Sized,
                $(T: $bound,)?
            {
                zip_map(self, rhs, |l, r| i32::from(l $op r))
                    .map(FixedArray::from)
            }

            #[doc = concat!("Returns 1 where `element ", $desc, " rhs` holds and 0 elsewhere.")]
            fn $scalar_name(&self, rhs: T) -> IntArray
            $(where T: $bound)?
            {
                self.map(|l| i32::from(l $op rhs))
            }
        )+
    };
}

/// Element-wise comparisons, yielding an [`IntArray`] of 1s and 0s.
///
/// The result can be used as a mask:
///
/// ```
/// # use farray::prelude::*;
/// let a = FloatArray::from([0.5, 2.0, -1.0]);
/// let big = a.mask(&a.greater_scalar(1.0))?;
/// assert_eq!(big, [2.0]);
/// # Ok::<_, farray::ArrayError>(())
/// ```
///
/// Equality is defined for all element types. Ordering comparisons are only available for scalar
/// elements, since vectors have no ordering.
pub trait CompareOps<T: Element>: ArrayView<T> {
    comparisons! {
        "==": equal, equal_scalar => ==;
        "!=": not_equal, not_equal_scalar => !=;
        "<": less, less_scalar => < where T: PartialOrd;
        ">": greater, greater_scalar => > where T: PartialOrd;
        "<=": less_equal, less_equal_scalar => <= where T: PartialOrd;
        ">=": greater_equal, greater_equal_scalar => >= where T: PartialOrd;
    }
}

impl<T: Element, A: ArrayView<T> + ?Sized> CompareOps<T> for A {}
