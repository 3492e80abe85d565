// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use core::mem;
use core::ptr;

use log::trace;

use crate::{Ix, Tensor, TensorLike, TensorLikeMut};

/// Methods specific to `Tensor`.
impl<A, const N: usize> Tensor<A, N> {
    /// Move the contents out of `self`, leaving an empty tensor behind.
    ///
    /// The empty tensor has an all-zero shape and strides, no storage, and
    /// its [`as_ptr`](TensorLike::as_ptr) is null. Indexing it panics.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let mut a = Tensor::from_elem([4, 2], 42);
    /// let b = a.take();
    /// assert!(a.as_ptr().is_null());
    /// assert_eq!(b.shape(), &[4, 2]);
    /// assert_eq!(b.strides(), &[2, 1]);
    /// ```
    pub fn take(&mut self) -> Self {
        trace!("ndtensor: taking tensor contents of shape {:?}", self.shape);
        mem::take(self)
    }

    /// Return `true` if the contents were moved out with
    /// [`take`](Self::take).
    pub fn is_taken(&self) -> bool {
        self.data.is_none()
    }

    /// Return the elements as a slice, in row-major order.
    ///
    /// Empty for a taken tensor.
    pub fn as_slice(&self) -> &[A] {
        self.data.as_deref().unwrap_or(&[])
    }

    /// Return the elements as a mutable slice, in row-major order.
    ///
    /// Empty for a taken tensor.
    pub fn as_slice_mut(&mut self) -> &mut [A] {
        match self.data {
            Some(ref mut data) => &mut data[..],
            None => &mut [],
        }
    }

    /// Return a mutable pointer to the first element, or null for a taken
    /// tensor.
    pub fn as_mut_ptr(&mut self) -> *mut A {
        match self.data {
            Some(ref mut data) => data.as_mut_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Return the elements as a vector, in row-major order.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data.map(Vec::from).unwrap_or_default()
    }
}

/// The empty tensor left behind by [`Tensor::take`].
impl<A, const N: usize> Default for Tensor<A, N> {
    fn default() -> Self {
        Tensor {
            data: None,
            shape: [0; N],
            strides: [0; N],
        }
    }
}

impl<A: Clone, const N: usize> Clone for Tensor<A, N> {
    fn clone(&self) -> Self {
        Tensor {
            data: self.data.clone(),
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// `Tensor` implements `.clone_from()` to reuse the buffer when the
    /// element counts match.
    fn clone_from(&mut self, other: &Self) {
        let reused = match (&mut self.data, &other.data) {
            (Some(data), Some(other_data)) if data.len() == other_data.len() => {
                data.clone_from_slice(other_data);
                true
            }
            _ => false,
        };
        if !reused {
            self.data = other.data.clone();
        }
        self.shape = other.shape;
        self.strides = other.strides;
    }
}

impl<A, const N: usize> TensorLike<N> for Tensor<A, N> {
    type Elem = A;

    #[inline]
    fn shape(&self) -> &[Ix; N] {
        &self.shape
    }

    #[inline]
    fn strides(&self) -> &[Ix; N] {
        &self.strides
    }

    #[inline]
    fn storage(&self) -> &[A] {
        self.as_slice()
    }

    #[inline]
    fn as_ptr(&self) -> *const A {
        match self.data {
            Some(ref data) => data.as_ptr(),
            None => ptr::null(),
        }
    }
}

impl<A, const N: usize> TensorLikeMut<N> for Tensor<A, N> {
    #[inline]
    fn storage_mut(&mut self) -> &mut [A] {
        self.as_slice_mut()
    }
}
