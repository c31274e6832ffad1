use farray_linalg::{Float, Vector};

use crate::{
    array::FixedArray,
    config::Config,
    element::{self, Arithmetic, Component, CrossProduct},
    error::Result,
    view::{overwrite, ArrayView},
};

use super::{try_map, try_zip_map, zip_map};

/// Per-element vector math for arrays of [`Vector`]s.
///
/// Component-wise arithmetic between vectors is provided by [`ArithmeticOps`]; this trait adds the
/// products, norms and scaling by a single component value.
///
/// [`ArithmeticOps`]: crate::ArithmeticOps
pub trait VectorOps<S: Component, const N: usize>: ArrayView<Vector<S, N>> {
    /// Returns the squared length of each vector. Integer components wrap on overflow.
    fn length2(&self) -> FixedArray<S> {
        self.map(element::length2)
    }

    /// Returns the length of each vector. For integer vectors, the length is truncated.
    fn length(&self) -> FixedArray<S> {
        self.map(element::length)
    }

    /// Normalizes each vector in place. Zero vectors are left unchanged.
    fn normalize(&self)
    where
        S: Float,
    {
        overwrite(self, self.iter().map(Vector::normalize).collect());
    }

    /// Returns a normalized copy of each vector. Zero vectors stay zero.
    fn normalized(&self) -> FixedArray<Vector<S, N>>
    where
        S: Float,
    {
        self.map(Vector::normalize)
    }

    /// Returns the dot product of each pair of vectors.
    fn dot<B>(&self, rhs: &B) -> Result<FixedArray<S>>
    where
        B: ArrayView<Vector<S, N>> + ?Sized,
    {
        zip_map(self, rhs, element::dot).map(FixedArray::from)
    }

    /// Returns the dot product of each vector with `rhs`.
    fn dot_vector(&self, rhs: Vector<S, N>) -> FixedArray<S> {
        self.map(|v| element::dot(v, rhs))
    }

    /// Returns the cross product of each pair of vectors.
    ///
    /// For 2D vectors the result is the scalar `a.x * b.y - a.y * b.x`, for 3D vectors it's a
    /// vector.
    fn cross<B>(&self, rhs: &B) -> Result<FixedArray<<Vector<S, N> as CrossProduct>::Output>>
    where
        B: ArrayView<Vector<S, N>> + ?Sized,
        Vector<S, N>: CrossProduct,
    {
        zip_map(self, rhs, CrossProduct::cross)
            .map(FixedArray::from)
    }

    /// Returns the cross product of each vector with `rhs`.
    fn cross_vector(&self, rhs: Vector<S, N>) -> FixedArray<<Vector<S, N> as CrossProduct>::Output>
    where
        Vector<S, N>: CrossProduct,
    {
        self.map(|v| CrossProduct::cross(v, rhs))
    }

    /// Multiplies each vector by the corresponding element of `rhs`.
    fn scale<B>(&self, rhs: &B) -> Result<FixedArray<Vector<S, N>>>
    where
        B: ArrayView<S> + ?Sized,
    {
        zip_map(self, rhs, |v, s| Arithmetic::mul(v, Vector::splat(s)))
            .map(FixedArray::from)
    }

    /// Multiplies each vector by `s`.
    fn scale_scalar(&self, s: S) -> FixedArray<Vector<S, N>> {
        self.map(|v| Arithmetic::mul(v, Vector::splat(s)))
    }

    /// Divides each vector by the corresponding element of `rhs`.
    ///
    /// Integer division follows the global [`Config`].
    fn unscale<B>(&self, rhs: &B) -> Result<FixedArray<Vector<S, N>>>
    where
        B: ArrayView<S> + ?Sized,
    {
        self.unscale_with(rhs, Config::global())
    }

    fn unscale_with<B>(&self, rhs: &B, config: &Config) -> Result<FixedArray<Vector<S, N>>>
    where
        B: ArrayView<S> + ?Sized,
    {
        try_zip_map(self, rhs, |v, s| {
            Arithmetic::div(v, Vector::splat(s), &config.division)
        })
        .map(FixedArray::from)
    }

    /// Divides each vector by `s`.
    fn unscale_scalar(&self, s: S) -> Result<FixedArray<Vector<S, N>>> {
        self.unscale_scalar_with(s, Config::global())
    }

    fn unscale_scalar_with(&self, s: S, config: &Config) -> Result<FixedArray<Vector<S, N>>> {
        try_map(self, |v| {
            Arithmetic::div(v, Vector::splat(s), &config.division)
        })
        .map(FixedArray::from)
    }

    fn scale_assign<B>(&self, rhs: &B) -> Result<()>
    where
        B: ArrayView<S> + ?Sized,
    {
        let values = zip_map(self, rhs, |v, s| Arithmetic::mul(v, Vector::splat(s)))?;
        overwrite(self, values);
        Ok(())
    }

    fn scale_scalar_assign(&self, s: S) {
        overwrite(
            self,
            self.iter()
                .map(|v| Arithmetic::mul(v, Vector::splat(s)))
                .collect(),
        );
    }

    fn unscale_assign<B>(&self, rhs: &B) -> Result<()>
    where
        B: ArrayView<S> + ?Sized,
    {
        self.unscale_assign_with(rhs, Config::global())
    }

    fn unscale_assign_with<B>(&self, rhs: &B, config: &Config) -> Result<()>
    where
        B: ArrayView<S> + ?Sized,
    {
        let values = self.unscale_with(rhs, config)?;
        overwrite(self, values.into_vec());
        Ok(())
    }

    fn unscale_scalar_assign(&self, s: S) -> Result<()> {
        self.unscale_scalar_assign_with(s, Config::global())
    }

    fn unscale_scalar_assign_with(&self, s: S, config: &Config) -> Result<()> {
        let values = self.unscale_scalar_with(s, config)?;
        overwrite(self, values.into_vec());
        Ok(())
    }
}

impl<S, const N: usize, A> VectorOps<S, N> for A
where
    S: Component,
    A: ArrayView<Vector<S, N>> + ?Sized,
{
}
