// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element-wise copies between tensor-like values of any layout.
//!
//! Neither side is assumed to be contiguous: every index of the shape is
//! visited exactly once, in row-major order, and both sides are addressed
//! through [`TensorLike::at`] / [`TensorLikeMut::at_mut`].

use alloc::vec::Vec;

use log::trace;

use crate::error::{incompatible_shapes, ShapeError};
use crate::indexes::indices;
use crate::{TensorLike, TensorLikeMut};

/// Copy every element of `src` into `dst`, converting with `Into`.
///
/// **Errors** if the shapes differ; `dst` is not modified then.
///
/// ```
/// use ndtensor::prelude::*;
/// use ndtensor::materialize::copy_elementwise;
///
/// let a = Tensor::from_shape_vec([3, 3], (0..9u8).collect()).unwrap();
/// let mut b = Tensor::<u32, 2>::zeros([2, 2]);
/// copy_elementwise(&a.slice(s![1.., ..2]), &mut b).unwrap();
/// assert_eq!(b.as_slice(), &[3, 4, 6, 7]);
///
/// assert!(copy_elementwise(&a, &mut b).is_err());
/// ```
pub fn copy_elementwise<S, D, const N: usize>(src: &S, dst: &mut D) -> Result<(), ShapeError>
where
    S: TensorLike<N> + ?Sized,
    D: TensorLikeMut<N> + ?Sized,
    S::Elem: Clone + Into<D::Elem>,
{
    copy_elementwise_with(src, dst, |x| x.clone().into())
}

/// Copy every element of `src` into `dst`, converting with `f`.
///
/// **Errors** if the shapes differ; `dst` is not modified then.
pub fn copy_elementwise_with<S, D, F, const N: usize>(
    src: &S,
    dst: &mut D,
    mut f: F,
) -> Result<(), ShapeError>
where
    S: TensorLike<N> + ?Sized,
    D: TensorLikeMut<N> + ?Sized,
    F: FnMut(&S::Elem) -> D::Elem,
{
    if src.shape() != dst.shape() {
        return Err(incompatible_shapes(src.shape(), dst.shape()));
    }
    let shape = *src.shape();
    trace!("ndtensor: copying {} elements of shape {:?}", src.len(), shape);
    for index in indices(shape) {
        *dst.at_mut(index) = f(src.at(index));
    }
    Ok(())
}

/// Collect the elements of `src` in row-major order, converting with `f`.
pub(crate) fn collect_row_major<S, B, F, const N: usize>(src: &S, mut f: F) -> Vec<B>
where
    S: TensorLike<N> + ?Sized,
    F: FnMut(&S::Elem) -> B,
{
    let shape = *src.shape();
    trace!("ndtensor: materializing {} elements of shape {:?}", src.len(), shape);
    let mut v = Vec::with_capacity(src.len());
    v.extend(indices(shape).map(|index| f(src.at(index))));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{s, Tensor};
    use alloc::vec;

    #[test]
    fn strided_source_and_destination() {
        let a = Tensor::from_shape_vec([4, 4], (1..=16).collect()).unwrap();
        let mut b = Tensor::from_elem([3, 4], 0i64);

        let src = a.slice(s![.., 1..4]);
        assert_eq!(src.shape(), &[4, 3]);
        let mut dst = b.slice_mut(s![.., ..]);
        assert!(copy_elementwise(&src, &mut dst).is_err());

        // column 2 of rows 1..4 into column 3
        let src = a.slice(s![1..4, 2]);
        let mut dst = b.slice_mut(s![.., 3]);
        copy_elementwise(&src, &mut dst).unwrap();
        assert_eq!(b.as_slice(), &[0, 0, 0, 7, 0, 0, 0, 11, 0, 0, 0, 15]);
    }

    #[test]
    fn contiguous_view_with_offset() {
        let a = Tensor::from_shape_vec([3, 2], vec![1u8, 2, 3, 4, 5, 6]).unwrap();
        let mut b = Tensor::from_elem([2, 2], 0u16);
        copy_elementwise(&a.slice(s![1..3, ..]), &mut b).unwrap();
        assert_eq!(b.as_slice(), &[3, 4, 5, 6]);
    }

    #[test]
    fn scalar_copy() {
        let a = Tensor::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
        let mut b = Tensor::from_elem([], 0);
        copy_elementwise_with(&a.slice(s![1, 0]), &mut b, |&x| x * 10).unwrap();
        assert_eq!(b[[]], 30);
    }
}
