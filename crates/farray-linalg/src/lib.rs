//! Small fixed-dimension vectors for use as array elements.
//!
//! This crate supplies the per-element math that `farray`'s vector-valued arrays delegate to:
//! component-wise arithmetic, dot and cross products, lengths and normalization. It does not try to
//! be a general linear algebra library; matrices, quaternions and the rest of the geometry zoo are
//! out of scope.
//!
//! # Design
//!
//! - Dimensions are const generics. Only 2, 3 and 4-dimensional vectors get type aliases, since
//!   those are the only ones arrays are instantiated with.
//! - The element type is generic, but restricted to [`Copy`] numbers.
//! - Vectors have no ordering. Component-wise comparison is `==`/`!=` only.
//! - Vectors implement the [`approx`] comparison traits, so tests can compare them with a
//!   tolerance.

mod traits;
mod vector;

pub use traits::*;
pub use vector::*;
