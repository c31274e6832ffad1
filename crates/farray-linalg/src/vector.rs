use std::{array, fmt};

use crate::traits::{Float, Number, Sqrt, Zero};

mod ops;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// A 2-dimensional vector with [`i16`] components.
pub type V2s = Vec2<i16>;
/// A 2-dimensional vector with [`i32`] components.
pub type V2i = Vec2<i32>;
/// A 2-dimensional vector with [`f32`] components.
pub type V2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] components.
pub type V2d = Vec2<f64>;
/// A 3-dimensional vector with [`i16`] components.
pub type V3s = Vec3<i16>;
/// A 3-dimensional vector with [`i32`] components.
pub type V3i = Vec3<i32>;
/// A 3-dimensional vector with [`f32`] components.
pub type V3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] components.
pub type V3d = Vec3<f64>;
/// A 4-dimensional vector with [`i16`] components.
pub type V4s = Vec4<i16>;
/// A 4-dimensional vector with [`i32`] components.
pub type V4i = Vec4<i32>;
/// A 4-dimensional vector with [`f32`] components.
pub type V4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] components.
pub type V4d = Vec4<f64>;

/// An `N`-component vector with components of type `T`.
///
/// Vectors are plain [`Copy`] values. They are created with [`vec2`], [`vec3`], [`vec4`],
/// [`Vector::splat`], [`Vector::from_fn`], or from an array via [`From`]. Components are accessed
/// by index (`v[0]`) or through [`Vector::as_array`].
///
/// Arithmetic operators work component-wise, both between two vectors and between a vector and a
/// single component value:
///
/// ```
/// # use farray_linalg::*;
/// let v = vec2(1, 2) + vec2(10, 20);
/// assert_eq!(v, vec2(11, 22));
/// assert_eq!(v * 2, vec2(22, 44));
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The vector with every component set to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of components.
    pub const DIMENSIONS: usize = N;

    /// Creates a vector with every component set to `elem`.
    ///
    /// ```
    /// # use farray_linalg::*;
    /// assert_eq!(V3i::splat(7), vec3(7, 7, 7));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector by invoking `cb` with the index of each component.
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies `f` to each component, returning a new vector.
    ///
    /// ```
    /// # use farray_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).map(|c| c as f32 * 0.5), vec3(0.5, 1.0, 1.5));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Combines the components of `self` and `other` pairwise with `f`.
    pub fn zip_with<U, R, F>(self, other: Vector<U, N>, mut f: F) -> Vector<R, N>
    where
        F: FnMut(T, U) -> R,
    {
        let mut rhs = other.0.into_iter();
        let mut lhs = self.0.into_iter();
        // Both iterators have exactly `N` elements.
        Vector::from_fn(|_| match (lhs.next(), rhs.next()) {
            (Some(l), Some(r)) => f(l, r),
            _ => unreachable!(),
        })
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// ```
    /// # use farray_linalg::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this vector.
    ///
    /// This is exact for integer components (barring overflow).
    pub fn length2(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Returns the Euclidean length of this vector.
    ///
    /// For integer components the result is truncated toward zero.
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, yielding a unit vector.
    ///
    /// The zero vector has no direction and normalizes to itself.
    ///
    /// ```
    /// # use farray_linalg::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(V2f::ZERO.normalize(), V2f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        let len = self.length();
        if len == T::ZERO {
            return self;
        }
        self.map(|c| c / len)
    }
}

impl<T> Vector<T, 2> {
    /// The 2D cross product: the Z component of the 3D cross product of both vectors extended
    /// with `z = 0`.
    ///
    /// ```
    /// # use farray_linalg::*;
    /// assert_eq!(vec2(1, 2).cross(vec2(5, 6)), 1 * 6 - 2 * 5);
    /// ```
    pub fn cross(self, other: Self) -> T
    where
        T: Number,
    {
        let [ax, ay] = self.0;
        let [bx, by] = other.0;
        ax * by - ay * bx
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// Swapping the operands negates the result.
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

/// Constructs a [`Vec2`] from its components.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its components.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its components.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec4(0.0, 0.0, 0.0, 1.0)), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", vec2(1.5f32, -2.0)), "(1.5, -2.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).length2(), 35);
        assert_eq!(vec2(1, 2).dot(vec2(5, 6)), 1 * 5 + 2 * 6);
    }

    #[test]
    fn cross() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(x), -z);

        assert_eq!(vec2(3, 4).cross(vec2(7, 8)), 3 * 8 - 4 * 7);
        assert_eq!(vec2(7, 8).cross(vec2(3, 4)), -(3 * 8 - 4 * 7));
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0f32, 4.0).length(), 5.0);
        assert_eq!(vec2(3, 4).length(), 5);
        assert_eq!(vec2(1, 2).length(), 2);
        assert_relative_eq!(vec2(1.0f64, 2.0).length(), 5.0f64.sqrt());
    }

    #[test]
    fn normalize() {
        let n = vec3(1.0f32, 2.0, 3.0).normalize();
        assert_relative_eq!(n.length(), 1.0);
        assert_relative_eq!(n, vec3(1.0, 2.0, 3.0) / 14.0f32.sqrt());
        assert_eq!(V3d::ZERO.normalize(), V3d::ZERO);
    }
}
