//! Element access shared by owned arrays and masked views.

use std::{any::type_name, cell::Cell, fmt, ops::RangeBounds};

use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;

use crate::{
    array::FixedArray,
    element::{Convert, Element, MaskValue},
    error::{check_len, ArrayError, Result},
    index,
};

/// Read and write access to a sequence of array elements.
///
/// This is implemented by [`FixedArray`], which owns its elements, and by [`MaskedArray`], which
/// refers to a subset of another array's elements. Every operation of this crate accepts either.
///
/// Elements live in [`Cell`]s, so writes only need a shared reference. This is what lets a masked
/// view and its base array be used side by side while both observe each other's writes.
pub trait ArrayView<T: Element> {
    /// Returns the logical number of elements.
    fn len(&self) -> usize;

    /// Returns the buffer holding the elements, which may contain elements not part of `self`.
    fn storage(&self) -> &[Cell<T>];

    /// Maps a logical index in `[0, len)` to its position in [`ArrayView::storage`].
    fn position(&self, index: usize) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the element at `index`. Negative indices count from the end.
    fn get(&self, index: isize) -> Result<T> {
        let i = index::resolve(index, self.len())?;
        Ok(load(self, i))
    }

    /// Writes the element at `index`. Negative indices count from the end.
    fn set(&self, index: isize, value: T) -> Result<()> {
        let i = index::resolve(index, self.len())?;
        store(self, i, value);
        Ok(())
    }

    /// Returns an iterator over copies of the elements.
    fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |i| load(self, i))
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Copies the elements into a new, independent array.
    fn to_array(&self) -> FixedArray<T> {
        self.iter().collect()
    }

    /// Copies the elements in `range` into a new, independent array.
    ///
    /// Negative bounds count from the end. Bounds beyond either end are clamped, so this never
    /// fails; a range that ends before it starts yields an empty array.
    ///
    /// ```
    /// # use farray::prelude::*;
    /// let a = IntArray::from([1, 2, 3, 4, 5]);
    /// assert_eq!(a.copy_slice(1..-1), [2, 3, 4]);
    /// assert_eq!(a.copy_slice(-2..), [4, 5]);
    /// assert_eq!(a.copy_slice(3..100), [4, 5]);
    /// ```
    fn copy_slice(&self, range: impl RangeBounds<isize>) -> FixedArray<T> {
        index::clamp_range(range, self.len())
            .map(|i| load(self, i))
            .collect()
    }

    /// Creates a view of the elements whose corresponding `mask` entry is non-zero.
    ///
    /// The view aliases the storage of `self`: writes through either are visible through the
    /// other. The `k`-th element of the view is the `k`-th selected element of `self`.
    ///
    /// Fails with [`ArrayError::LengthMismatch`] if `mask` and `self` differ in length.
    fn mask<M, A>(&self, mask: &A) -> Result<MaskedArray<'_, T>>
    where
        M: MaskValue,
        A: ArrayView<M> + ?Sized,
    {
        let selected = selection(self, mask)?;
        log::trace!(
            "masked view selects {} of {} elements",
            selected.len(),
            self.len()
        );
        let positions = selected.into_iter().map(|i| self.position(i)).collect();
        Ok(MaskedArray {
            storage: self.storage(),
            positions,
        })
    }

    /// Writes `values` to the elements selected by `mask`.
    ///
    /// `values` either holds one element per selected position, written in order, or has the
    /// length of `self`, in which case each selected element takes the value at its own index.
    /// Unselected elements are never written. `values` is read completely before the first write,
    /// so it may alias `self`.
    fn set_masked<M, A, V>(&self, mask: &A, values: &V) -> Result<()>
    where
        M: MaskValue,
        A: ArrayView<M> + ?Sized,
        V: ArrayView<T> + ?Sized,
    {
        let selected = selection(self, mask)?;
        let updates: Vec<(usize, T)> = if values.len() == selected.len() {
            selected.into_iter().zip(values.iter()).collect()
        } else if values.len() == self.len() {
            selected.into_iter().map(|i| (i, load(values, i))).collect()
        } else {
            return Err(ArrayError::LengthMismatch {
                expected: selected.len(),
                actual: values.len(),
            });
        };
        log::trace!("scattering {} values through mask", updates.len());
        for (i, value) in updates {
            store(self, i, value);
        }
        Ok(())
    }

    /// Writes `value` to every element selected by `mask`.
    fn set_masked_scalar<M, A>(&self, mask: &A, value: T) -> Result<()>
    where
        M: MaskValue,
        A: ArrayView<M> + ?Sized,
    {
        for i in selection(self, mask)? {
            store(self, i, value);
        }
        Ok(())
    }

    /// Writes `value` to every element.
    fn fill(&self, value: T) {
        for i in 0..self.len() {
            store(self, i, value);
        }
    }

    /// Applies `f` to every element, collecting the results into a new array.
    fn map<U, F>(&self, f: F) -> FixedArray<U>
    where
        U: Element,
        F: FnMut(T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Converts every element to `U` with `as` semantics.
    ///
    /// Conversions between integer types wrap. Float to integer conversions truncate toward zero
    /// and saturate at the integer's bounds.
    fn cast<U>(&self) -> FixedArray<U>
    where
        U: Element,
        T: Convert<U>,
    {
        self.map(<T as Convert<U>>::convert_lossy)
    }

    /// Converts every element to `U`, failing with [`ArrayError::TypeMismatch`] if any element is
    /// out of range for `U`.
    fn try_cast<U>(&self) -> Result<FixedArray<U>>
    where
        U: Element,
        T: Convert<U>,
    {
        self.iter()
            .enumerate()
            .map(|(index, value)| {
                <T as Convert<U>>::convert_checked(value).ok_or(ArrayError::TypeMismatch {
                    index,
                    from: type_name::<T>(),
                    to: type_name::<U>(),
                })
            })
            .collect()
    }
}

fn cell<T: Element, A: ArrayView<T> + ?Sized>(view: &A, index: usize) -> &Cell<T> {
    &view.storage()[view.position(index)]
}

pub(crate) fn load<T: Element, A: ArrayView<T> + ?Sized>(view: &A, index: usize) -> T {
    cell(view, index).get()
}

pub(crate) fn store<T: Element, A: ArrayView<T> + ?Sized>(view: &A, index: usize, value: T) {
    cell(view, index).set(value)
}

/// Overwrites every element of `view` with the corresponding entry of `values`.
pub(crate) fn overwrite<T: Element, A: ArrayView<T> + ?Sized>(view: &A, values: Vec<T>) {
    debug_assert_eq!(view.len(), values.len());
    log::trace!("writing {} elements", values.len());
    for (i, value) in values.into_iter().enumerate() {
        store(view, i, value);
    }
}

/// Returns the logical indices of `view` selected by `mask`, in ascending order.
fn selection<T, M, V, A>(view: &V, mask: &A) -> Result<Vec<usize>>
where
    T: Element,
    M: MaskValue,
    V: ArrayView<T> + ?Sized,
    A: ArrayView<M> + ?Sized,
{
    check_len(view.len(), mask.len())?;
    Ok(mask.iter().positions(M::is_selected).collect())
}

/// A view of the elements of an array selected by a mask.
///
/// Created by [`ArrayView::mask`]. The view borrows the storage of the array it was created from
/// and reads and writes it directly, so it can't outlive that array. Masking a view again
/// produces another view of the same storage.
///
/// ```
/// # use farray::prelude::*;
/// let a = IntArray::from([10, 20, 30, 40]);
/// let view = a.mask(&IntArray::from([0, 1, 0, 1]))?;
/// assert_eq!(view, [20, 40]);
///
/// view.set(0, 21)?;
/// assert_eq!(a, [10, 21, 30, 40]);
/// a.set(-1, 41)?;
/// assert_eq!(view, [21, 41]);
/// # Ok::<_, farray::ArrayError>(())
/// ```
pub struct MaskedArray<'a, T> {
    storage: &'a [Cell<T>],
    positions: Box<[usize]>,
}

impl<'a, T: Element> MaskedArray<'a, T> {
    /// Returns the positions in the underlying storage that this view refers to.
    ///
    /// They are strictly ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

impl<'a, T: Element> ArrayView<T> for MaskedArray<'a, T> {
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn storage(&self) -> &[Cell<T>] {
        self.storage
    }

    fn position(&self, index: usize) -> usize {
        self.positions[index]
    }
}

/// Creates another view of the same elements.
impl<'a, T: Element> Clone for MaskedArray<'a, T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            positions: self.positions.clone(),
        }
    }
}

impl<'a, T: Element> fmt::Debug for MaskedArray<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Compares two arrays of equal length element by element.
fn elements_match<T, A, B>(lhs: &A, rhs: &B, mut matches: impl FnMut(&T, &T) -> bool) -> bool
where
    T: Element,
    A: ArrayView<T> + ?Sized,
    B: ArrayView<T> + ?Sized,
{
    lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(l, r)| matches(&l, &r))
}

fn slice_eq<T, A>(lhs: &A, rhs: &[T]) -> bool
where
    T: Element,
    A: ArrayView<T> + ?Sized,
{
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| l == *r)
}

// Element-wise equality between arrays, views and plain Rust sequences.
macro_rules! array_eq {
    ($($ty:ty),+) => {
        $(
            impl<'a, T: Element> PartialEq<FixedArray<T>> for $ty {
                fn eq(&self, other: &FixedArray<T>) -> bool {
                    elements_match(self, other, T::eq)
                }
            }

            impl<'a, 'b, T: Element> PartialEq<MaskedArray<'b, T>> for $ty {
                fn eq(&self, other: &MaskedArray<'b, T>) -> bool {
                    elements_match(self, other, T::eq)
                }
            }

            impl<'a, T: Element> PartialEq<[T]> for $ty {
                fn eq(&self, other: &[T]) -> bool {
                    slice_eq(self, other)
                }
            }

            impl<'a, T: Element> PartialEq<Vec<T>> for $ty {
                fn eq(&self, other: &Vec<T>) -> bool {
                    slice_eq(self, other)
                }
            }

            impl<'a, T: Element, const N: usize> PartialEq<[T; N]> for $ty {
                fn eq(&self, other: &[T; N]) -> bool {
                    slice_eq(self, other)
                }
            }
        )+
    };
}

array_eq!(FixedArray<T>, MaskedArray<'a, T>);

// Tolerance-based comparisons, so tests can use `approx`'s assertions on whole arrays.
macro_rules! array_approx_eq {
    ($($ty:ty),+) => {
        $(
            impl<'a, T> AbsDiffEq for $ty
            where
                T: Element + AbsDiffEq,
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> T::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                    elements_match(self, other, |l, r| l.abs_diff_eq(r, epsilon))
                }
            }

            impl<'a, T> RelativeEq for $ty
            where
                T: Element + RelativeEq,
                T::Epsilon: Copy,
            {
                fn default_max_relative() -> T::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: T::Epsilon,
                    max_relative: T::Epsilon,
                ) -> bool {
                    elements_match(self, other, |l, r| l.relative_eq(r, epsilon, max_relative))
                }
            }
        )+
    };
}

array_approx_eq!(FixedArray<T>, MaskedArray<'a, T>);
