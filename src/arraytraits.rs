// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::hash;
use core::ops::{Index, IndexMut};

use crate::indexes::indices;
use crate::{Ix, Tensor, TensorLike, TensorLikeMut, TensorView, TensorViewMut};

/// Return `true` if `a` and `b` have the same shape and equal elements.
fn tensor_eq<S, T, const N: usize>(a: &S, b: &T) -> bool
where
    S: TensorLike<N> + ?Sized,
    T: TensorLike<N> + ?Sized,
    S::Elem: PartialEq<T::Elem>,
{
    a.shape() == b.shape() && indices(*a.shape()).all(|index| a.at(index) == b.at(index))
}

macro_rules! impl_tensor_traits {
    ([$($generics:tt)*] $tensor:ty) => {
        /// Access the element at **index**.
        ///
        /// **Panics** if index is out of bounds.
        impl<$($generics)* A, const N: usize> Index<[Ix; N]> for $tensor {
            type Output = A;

            #[inline]
            fn index(&self, index: [Ix; N]) -> &A {
                match self.get(index) {
                    Some(elt) => elt,
                    None => panic!("ndtensor: index {:?} is out of bounds for shape {:?}",
                                   index, self.shape()),
                }
            }
        }

        /// Return `true` if the tensors have the same shape and elements,
        /// whatever their layouts.
        impl<$($generics)* A, S, const N: usize> PartialEq<S> for $tensor
        where
            S: TensorLike<N>,
            A: PartialEq<S::Elem>,
        {
            fn eq(&self, rhs: &S) -> bool {
                tensor_eq(self, rhs)
            }
        }

        impl<$($generics)* A: Eq, const N: usize> Eq for $tensor {}

        impl<$($generics)* A: hash::Hash, const N: usize> hash::Hash for $tensor {
            fn hash<H: hash::Hasher>(&self, state: &mut H) {
                self.shape().hash(state);
                for elt in self.iter() {
                    elt.hash(state);
                }
            }
        }
    };
}

impl_tensor_traits!([] Tensor<A, N>);
impl_tensor_traits!(['a,] TensorView<'a, A, N>);
impl_tensor_traits!(['a,] TensorViewMut<'a, A, N>);

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<A, const N: usize> IndexMut<[Ix; N]> for Tensor<A, N> {
    #[inline]
    fn index_mut(&mut self, index: [Ix; N]) -> &mut A {
        let shape = *self.shape();
        match self.get_mut(index) {
            Some(elt) => elt,
            None => panic!("ndtensor: index {:?} is out of bounds for shape {:?}", index, shape),
        }
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<'a, A, const N: usize> IndexMut<[Ix; N]> for TensorViewMut<'a, A, N> {
    #[inline]
    fn index_mut(&mut self, index: [Ix; N]) -> &mut A {
        let shape = *self.shape();
        match self.get_mut(index) {
            Some(elt) => elt,
            None => panic!("ndtensor: index {:?} is out of bounds for shape {:?}", index, shape),
        }
    }
}

impl<'a, A, const N: usize> From<&'a Tensor<A, N>> for TensorView<'a, A, N> {
    fn from(tensor: &'a Tensor<A, N>) -> Self {
        tensor.view()
    }
}

impl<'a, A, const N: usize> From<&'a mut Tensor<A, N>> for TensorViewMut<'a, A, N> {
    fn from(tensor: &'a mut Tensor<A, N>) -> Self {
        tensor.view_mut()
    }
}

impl<'a, A: Clone, const N: usize> From<TensorView<'a, A, N>> for Tensor<A, N> {
    fn from(view: TensorView<'a, A, N>) -> Self {
        Tensor::from_tensor_like(&view)
    }
}
