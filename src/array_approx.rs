// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::indexes::indices;
use crate::{Tensor, TensorLike, TensorView, TensorViewMut};

/// Return `true` if the shapes match and `f` holds for every pair of
/// elements at the same index.
fn all_pairs<S, T, F, const N: usize>(a: &S, b: &T, mut f: F) -> bool
where
    S: TensorLike<N> + ?Sized,
    T: TensorLike<N> + ?Sized,
    F: FnMut(&S::Elem, &T::Elem) -> bool,
{
    a.shape() == b.shape() && indices(*a.shape()).all(|index| f(a.at(index), b.at(index)))
}

macro_rules! impl_approx_traits {
    ([$($generics:tt)*] $tensor:ty) => {
        /// **Requires crate feature `"approx"`.**
        impl<$($generics)* A, S, const N: usize> AbsDiffEq<S> for $tensor
        where
            S: TensorLike<N>,
            A: AbsDiffEq<S::Elem>,
            A::Epsilon: Clone,
        {
            type Epsilon = A::Epsilon;

            fn default_epsilon() -> A::Epsilon {
                A::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &S, epsilon: A::Epsilon) -> bool {
                all_pairs(self, other, |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
            }
        }

        /// **Requires crate feature `"approx"`.**
        impl<$($generics)* A, S, const N: usize> RelativeEq<S> for $tensor
        where
            S: TensorLike<N>,
            A: RelativeEq<S::Elem>,
            A::Epsilon: Clone,
        {
            fn default_max_relative() -> A::Epsilon {
                A::default_max_relative()
            }

            fn relative_eq(&self, other: &S, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
                all_pairs(self, other, |a, b| {
                    A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
                })
            }
        }

        /// **Requires crate feature `"approx"`.**
        impl<$($generics)* A, S, const N: usize> UlpsEq<S> for $tensor
        where
            S: TensorLike<N>,
            A: UlpsEq<S::Elem>,
            A::Epsilon: Clone,
        {
            fn default_max_ulps() -> u32 {
                A::default_max_ulps()
            }

            fn ulps_eq(&self, other: &S, epsilon: A::Epsilon, max_ulps: u32) -> bool {
                all_pairs(self, other, |a, b| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
            }
        }
    };
}

impl_approx_traits!([] Tensor<A, N>);
impl_approx_traits!(['a,] TensorView<'a, A, N>);
impl_approx_traits!(['a,] TensorViewMut<'a, A, N>);
