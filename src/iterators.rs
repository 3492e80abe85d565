// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::iter::FusedIterator;

use crate::indexes::Indices;
use crate::{Tensor, TensorLike, TensorView, TensorViewMut};

/// An iterator over the elements of a tensor, in row-major order.
///
/// Iterator element type is `&'a A`.
///
/// See [`.iter()`](TensorLike::iter) for more information.
pub struct Iter<'a, A, const N: usize> {
    view: TensorView<'a, A, N>,
    indices: Indices<N>,
}

impl<'a, A, const N: usize> Clone for Iter<'a, A, N> {
    fn clone(&self) -> Self {
        Iter {
            view: self.view,
            indices: self.indices.clone(),
        }
    }
}

impl<'a, A, const N: usize> Iterator for Iter<'a, A, N> {
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A> {
        let view = self.view;
        self.indices.next().map(|index| view.get_ref(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a, A, const N: usize> ExactSizeIterator for Iter<'a, A, N> {}

impl<'a, A, const N: usize> FusedIterator for Iter<'a, A, N> {}

impl<'a, A, const N: usize> IntoIterator for TensorView<'a, A, N> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A, N>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            indices: Indices::new(*self.shape()),
            view: self,
        }
    }
}

impl<'a, A, const N: usize> IntoIterator for &'a TensorView<'_, A, N> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, const N: usize> IntoIterator for &'a TensorViewMut<'_, A, N> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, const N: usize> IntoIterator for &'a Tensor<A, N> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
