use std::{cell::Cell, fmt};

use crate::{element::Element, view::ArrayView};

/// A fixed-length array of numeric elements.
///
/// The length is set on construction and never changes. Elements can be read and written through a
/// shared reference (see [`ArrayView`]), which is what allows [masked views] to alias the array.
///
/// Cloning an array copies its elements; the clone is fully independent of the original.
///
/// ```
/// # use farray::prelude::*;
/// let a = FloatArray::filled(1.5, 3);
/// let b = a.add_scalar(1.0);
/// assert_eq!(b, [2.5, 2.5, 2.5]);
/// assert_eq!(a.mul(&b)?, [3.75, 3.75, 3.75]);
/// # Ok::<_, farray::ArrayError>(())
/// ```
///
/// [masked views]: crate::MaskedArray
pub struct FixedArray<T> {
    cells: Box<[Cell<T>]>,
}

impl<T: Element> FixedArray<T> {
    /// Creates an array of `len` default (zero) elements.
    pub fn new(len: usize) -> Self {
        Self::filled(T::default(), len)
    }

    /// Creates an array of `len` copies of `value`.
    pub fn filled(value: T, len: usize) -> Self {
        Self::from_fn(len, |_| value)
    }

    /// Creates an array of `len` elements by calling `f` with each index.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        (0..len).map(f).collect()
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }

    /// Creates an independent copy of the elements of `source`.
    ///
    /// A masked view is collapsed into a dense array of its selected elements.
    pub fn copy_of<A: ArrayView<T> + ?Sized>(source: &A) -> Self {
        source.to_array()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
            .into_vec()
            .into_iter()
            .map(Cell::into_inner)
            .collect()
    }
}

impl FixedArray<i32> {
    /// Creates an array of the consecutive integers from `start` up to (or down to) `end`,
    /// excluding `end`.
    ///
    /// ```
    /// # use farray::prelude::*;
    /// assert_eq!(IntArray::range(2, 5), [2, 3, 4]);
    /// assert_eq!(IntArray::range(2, -1), [2, 1, 0]);
    /// ```
    pub fn range(start: i32, end: i32) -> Self {
        if start <= end {
            (start..end).collect()
        } else {
            (end + 1..=start).rev().collect()
        }
    }
}

impl<T: Element> ArrayView<T> for FixedArray<T> {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn storage(&self) -> &[Cell<T>] {
        &self.cells
    }

    fn position(&self, index: usize) -> usize {
        index
    }
}

impl<T: Element> Clone for FixedArray<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
        }
    }
}

impl<T: Element> Default for FixedArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Element> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Cell::new).collect(),
        }
    }
}

impl<T: Element> From<Vec<T>> for FixedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for FixedArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Element> From<FixedArray<T>> for Vec<T> {
    fn from(array: FixedArray<T>) -> Self {
        array.into_vec()
    }
}

impl<T: Element> IntoIterator for FixedArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
