//! Operator impls for [`Vector`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

/// Vectors are approximately equal when all of their components are.
impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Component-wise negation.
impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Every arithmetic operator comes in four flavors: vector-vector and vector-component, each both
// by value and in place.
macro_rules! component_wise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {
        $(
            impl<T: $op<Output = T>, const N: usize> $op for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    self.zip_with(rhs, T::$method)
                }
            }

            impl<T: $op<Output = T> + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    self.map(|c| c.$method(rhs))
                }
            }

            impl<T: $assign, const N: usize> $assign for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            impl<T: $assign + Copy, const N: usize> $assign<T> for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

component_wise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}
