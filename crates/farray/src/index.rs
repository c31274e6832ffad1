//! Index and range normalization.

use std::ops::{Bound, Range, RangeBounds};

use crate::error::{ArrayError, Result};

/// Resolves a possibly negative index into `[0, len)`.
pub(crate) fn resolve(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };
    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(ArrayError::IndexOutOfRange { index, len }),
    }
}

/// Normalizes a range of possibly negative bounds, clamping it to `[0, len]`.
///
/// Bounds below zero count from the end. Bounds outside of the array are clamped instead of
/// rejected, and a range whose end lies before its start is empty.
pub(crate) fn clamp_range(range: impl RangeBounds<isize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => clamp(s, len),
        Bound::Excluded(&s) => after(s, len),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => after(e, len),
        Bound::Excluded(&e) => clamp(e, len),
        Bound::Unbounded => len,
    };
    start..end.max(start)
}

fn clamp(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        (bound as usize).min(len)
    }
}

/// Clamped position just past `bound`.
fn after(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.checked_sub(bound.unsigned_abs()).map_or(0, |i| i + 1)
    } else {
        (bound as usize).saturating_add(1).min(len)
    }
}
