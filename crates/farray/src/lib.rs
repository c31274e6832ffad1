//! Fixed-length numeric arrays with aliasing mask views.
//!
//! The central type is [`FixedArray`], a fixed-length array of scalars or small vectors. Arrays
//! support element-wise arithmetic with other arrays and with single values, comparisons, and the
//! per-element vector math of [`farray_linalg`].
//!
//! # Views and copies
//!
//! [`ArrayView::mask`] creates a [`MaskedArray`], which refers to the elements of its base array
//! where a mask is non-zero. Views *alias* their base: writing through a view writes the base
//! array, and the view sees writes to the base. Operations that store their result in place
//! (`*_assign`) only touch the elements a view selects, which makes masked in-place updates easy:
//!
//! ```
//! use farray::prelude::*;
//!
//! let a = IntArray::from([1, 2, 3, 4, 5, 6]);
//! let odd = a.rem_scalar(2)?;
//! a.mask(&odd)?.mul_scalar_assign(100);
//! assert_eq!(a, [100, 2, 300, 4, 500, 6]);
//! # Ok::<_, farray::ArrayError>(())
//! ```
//!
//! Everything else copies: [`ArrayView::copy_slice`], [`ArrayView::to_array`], [`Clone`] and the
//! results of arithmetic are independent arrays.
//!
//! # Errors
//!
//! All operations validate their operands before producing output or writing anything. Combining
//! arrays of different lengths fails with [`ArrayError::LengthMismatch`], and there is no
//! broadcasting between arrays of different lengths.
//!
//! # Environment Variables
//!
//! Integer division semantics can be overridden by setting environment variables:
//!
//! * `FARRAY_INT_ROUNDING`: `truncate` (the default) or `floor`.
//! * `FARRAY_INT_DIV_ZERO`: `error` (the default) or `zero`.
//!
//! See [`Config`] for details.

use log::LevelFilter;

mod array;
mod config;
mod element;
mod error;
mod index;
mod ops;
mod view;

use farray_linalg::{V2d, V2f, V2i, V2s, V3d, V3f, V3i, V3s, V4d, V4f, V4i, V4s};

pub use array::FixedArray;
pub use config::{ByZero, Config, IntDivision, InvalidSetting, Rounding};
pub use element::{Arithmetic, Component, Convert, CrossProduct, Element, MaskValue, Scalar};
pub use error::{ArrayError, ElementError, Result};
pub use ops::{ArithmeticOps, CompareOps, ScalarOps, VectorOps};
pub use view::{ArrayView, MaskedArray};

/// Everything needed to work with arrays: the array types and the operation traits.
pub mod prelude {
    pub use crate::{
        ArithmeticOps, ArrayView, CompareOps, DoubleArray, FixedArray, FloatArray, IntArray,
        MaskedArray, ScalarOps, ShortArray, UnsignedCharArray, UnsignedIntArray, V2dArray,
        V2fArray, V2iArray, V2sArray, V3dArray, V3fArray, V3iArray, V3sArray, V4dArray, V4fArray,
        V4iArray, V4sArray, VectorOps,
    };
}

pub type UnsignedCharArray = FixedArray<u8>;
pub type ShortArray = FixedArray<i16>;
pub type IntArray = FixedArray<i32>;
pub type UnsignedIntArray = FixedArray<u32>;
pub type FloatArray = FixedArray<f32>;
pub type DoubleArray = FixedArray<f64>;

pub type V2sArray = FixedArray<V2s>;
pub type V2iArray = FixedArray<V2i>;
pub type V2fArray = FixedArray<V2f>;
pub type V2dArray = FixedArray<V2d>;
pub type V3sArray = FixedArray<V3s>;
pub type V3iArray = FixedArray<V3i>;
pub type V3fArray = FixedArray<V3f>;
pub type V3dArray = FixedArray<V3d>;
pub type V4sArray = FixedArray<V4s>;
pub type V4iArray = FixedArray<V4i>;
pub type V4fArray = FixedArray<V4f>;
pub type V4dArray = FixedArray<V4d>;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `farray` will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` overrides both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
