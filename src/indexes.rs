// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::iter::FusedIterator;

use crate::dimension::{default_strides, size_of_shape};
use crate::Ix;

/// An iterator over the indexes of a tensor shape, in row-major order.
///
/// Iterator element type is `[Ix; N]`.
#[derive(Clone, Debug)]
pub struct Indices<const N: usize> {
    shape: [Ix; N],
    index: Option<[Ix; N]>,
}

/// Create an iterator over the tensor shape `shape`.
///
/// The last axis varies fastest. A shape with a zero-length axis yields no
/// indexes; an order 0 shape yields exactly one (empty) index.
pub fn indices<const N: usize>(shape: [Ix; N]) -> Indices<N> {
    Indices::new(shape)
}

impl<const N: usize> Indices<N> {
    /// Create an iterator over the tensor shape `shape`.
    pub fn new(shape: [Ix; N]) -> Self {
        let index = if shape.iter().any(|&d| d == 0) {
            None
        } else {
            Some([0; N])
        };
        Indices { shape, index }
    }
}

/// Advance `index` to the next row-major position inside `shape`; return
/// `None` when it wraps around.
#[inline]
fn next_for<const N: usize>(shape: &[Ix; N], mut index: [Ix; N]) -> Option<[Ix; N]> {
    for (&dim, ix) in shape.iter().zip(index.iter_mut()).rev() {
        *ix += 1;
        if *ix == dim {
            *ix = 0;
        } else {
            return Some(index);
        }
    }
    None
}

impl<const N: usize> Iterator for Indices<N> {
    type Item = [Ix; N];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        self.index = next_for(&self.shape, index);
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = match self.index {
            None => 0,
            Some(ref ix) => {
                let gone = default_strides(&self.shape)
                    .iter()
                    .zip(ix.iter())
                    .fold(0, |s, (&a, &b)| s + a * b);
                size_of_shape(&self.shape) - gone
            }
        };
        (l, Some(l))
    }
}

impl<const N: usize> ExactSizeIterator for Indices<N> {}

impl<const N: usize> FusedIterator for Indices<N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn row_major_order() {
        let all: Vec<_> = indices([2, 3]).collect();
        assert_eq!(all, [[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]);
    }

    #[test]
    fn scalar_and_empty() {
        assert_eq!(indices([]).count(), 1);
        assert_eq!(indices([3, 0, 2]).count(), 0);
    }

    #[test]
    fn exact_len() {
        let mut it = indices([3, 4, 5]);
        assert_eq!(it.len(), 60);
        it.nth(21);
        assert_eq!(it.len(), 38);
    }
}
