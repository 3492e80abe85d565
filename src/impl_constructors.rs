// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for tensors.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::Zero;

use crate::dimension::{default_strides, size_of_shape_checked};
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::indexes::indices;
use crate::materialize;
use crate::{Ix, Tensor, TensorLike};

macro_rules! size_of_shape_checked_unwrap {
    ($shape:expr) => {
        match size_of_shape_checked($shape) {
            Ok(sz) => sz,
            Err(_) => panic!(
                "ndtensor: Shape too large, product of non-zero axis lengths overflows isize in shape {:?}",
                $shape
            ),
        }
    };
}

/// Constructor methods for n-dimensional tensors.
impl<A, const N: usize> Tensor<A, N> {
    /// Create a tensor of shape `shape` with every element set to
    /// `A::default()`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let a = Tensor::<String, 2>::new([4, 2]);
    /// assert_eq!(a.shape(), &[4, 2]);
    /// assert_eq!(a.strides(), &[2, 1]);
    /// ```
    pub fn new(shape: [Ix; N]) -> Self
    where
        A: Default,
    {
        let size = size_of_shape_checked_unwrap!(&shape);
        let v = (0..size).map(|_| A::default()).collect();
        Self::from_shape_vec_unchecked(shape, v)
    }

    /// Create a tensor of shape `shape` with every element set to zero.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    pub fn zeros(shape: [Ix; N]) -> Self
    where
        A: Clone + Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create a tensor of shape `shape` with every element set to a clone
    /// of `elem`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let a = Tensor::from_elem([2, 3], 42);
    /// assert_eq!(a.as_slice(), &[42; 6]);
    /// ```
    pub fn from_elem(shape: [Ix; N], elem: A) -> Self
    where
        A: Clone,
    {
        let size = size_of_shape_checked_unwrap!(&shape);
        let v = vec![elem; size];
        Self::from_shape_vec_unchecked(shape, v)
    }

    /// Create a tensor of shape `shape`, calling `f` with the index of each
    /// element in row-major order.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let a = Tensor::from_shape_fn([2, 2], |[i, j]| 10 * i + j);
    /// assert_eq!(a.as_slice(), &[0, 1, 10, 11]);
    /// ```
    pub fn from_shape_fn<F>(shape: [Ix; N], f: F) -> Self
    where
        F: FnMut([Ix; N]) -> A,
    {
        let size = size_of_shape_checked_unwrap!(&shape);
        let mut v = Vec::with_capacity(size);
        v.extend(indices(shape).map(f));
        Self::from_shape_vec_unchecked(shape, v)
    }

    /// Create a tensor of shape `shape` from a vector holding its elements
    /// in row-major order. No elements are copied.
    ///
    /// **Errors** if the shape overflows or if `v.len()` is not the number
    /// of elements of `shape`.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let a = Tensor::from_shape_vec([3, 2], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a[[1, 0]], 3);
    ///
    /// assert!(Tensor::from_shape_vec([4, 2], vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_shape_vec(shape: [Ix; N], v: Vec<A>) -> Result<Self, ShapeError> {
        if size_of_shape_checked(&shape)? != v.len() {
            return Err(from_kind(ErrorKind::IncompatibleLength));
        }
        Ok(Self::from_shape_vec_unchecked(shape, v))
    }

    /// Create a tensor by copying every element of `src`, converting the
    /// element type with `Into`.
    ///
    /// `src` may have any strides; elements are visited in row-major order.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let a = Tensor::from_shape_vec([4, 4], (1..=16).collect::<Vec<i32>>()).unwrap();
    /// let column = a.slice(s![.., 1]);
    /// let b: Tensor<i64, 1> = Tensor::from_tensor_like(&column);
    /// assert_eq!(b.as_slice(), &[2, 6, 10, 14]);
    /// ```
    pub fn from_tensor_like<S>(src: &S) -> Self
    where
        S: TensorLike<N> + ?Sized,
        S::Elem: Clone + Into<A>,
    {
        let data = materialize::collect_row_major(src, |x| x.clone().into());
        Self::from_shape_vec_unchecked(*src.shape(), data)
    }

    /// The length of `v` must be the number of elements of `shape`.
    pub(crate) fn from_shape_vec_unchecked(shape: [Ix; N], v: Vec<A>) -> Self {
        debug_assert_eq!(size_of_shape_checked(&shape), Ok(v.len()));
        Tensor {
            data: Some(v.into_boxed_slice()),
            shape,
            strides: default_strides(&shape),
        }
    }
}
