// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndtensor"]
#![doc(html_root_url = "https://docs.rs/ndtensor/0.1/")]
#![allow(clippy::needless_range_loop)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! The `ndtensor` crate provides fixed-order n-dimensional tensors with
//! strided storage, zero-copy views and index/range slicing.
//!
//! - [`Tensor`]: an owning, contiguous (row-major) tensor.
//! - [`TensorView`], [`TensorViewMut`]: borrowed views with their own shape,
//!   strides and offset into a buffer owned elsewhere.
//!
//! The order (number of axes) of a tensor is a const generic parameter, so
//! shapes, strides and indices are plain arrays `[Ix; N]`.
//!
//! ## Highlights
//!
//! - Slicing with the [`s![]`](s!) macro: an index selector collapses its
//!   axis, a range selector `a..b` keeps it and narrows it. The order of the
//!   result is computed while the macro expands.
//! - Slicing a view produces a view expressed directly in terms of the
//!   original buffer (offset and strides are composed, never nested).
//! - Any tensor-like value can be materialized into an owning [`Tensor`],
//!   with element type conversion, whatever its strides.
//! - Every container kind shares one element access path, the
//!   [`TensorLike`] trait.
//!
//! ```
//! use ndtensor::prelude::*;
//!
//! let a = Tensor::from_shape_vec([4, 4], (1..=16).collect()).unwrap();
//!
//! let row = a.slice(s![1, ..]);
//! assert_eq!(row.shape(), &[4]);
//! assert_eq!(row, Tensor::from_shape_vec([4], vec![5, 6, 7, 8]).unwrap());
//!
//! let block = a.slice(s![1..3, 1..3]);
//! assert_eq!(block[[1, 0]], 10);
//!
//! let owned: Tensor<f64, 2> = Tensor::from_tensor_like(&block);
//! assert_eq!(owned.strides(), &[2, 1]);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default; implements `std::error::Error` for
//!   [`ShapeError`].
//! - `rayon`: row-partitioned parallel helpers in [`parallel`].
//! - `serde`: serialization of all container kinds, deserialization of
//!   [`Tensor`].
//! - `approx`: approximate equality traits for tensors and views.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::boxed::Box;

#[macro_use]
mod macro_utils;

mod arrayformat;
mod arraytraits;
pub mod dimension;
mod error;
mod impl_constructors;
mod impl_owned_array;
mod impl_views;
mod indexes;
mod iterators;
pub mod materialize;
pub mod prelude;
mod slice;
mod tensorlike;

#[cfg(feature = "approx")]
mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;
#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub mod parallel;

pub use crate::dimension::{IncRank, Rank};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::indexes::{indices, Indices};
pub use crate::iterators::Iter;
pub use crate::slice::{Selector, SliceInfo, SliceNextRank};
pub use crate::tensorlike::{TensorLike, TensorLikeMut};

/// Tensor index type
pub type Ix = usize;

/// An owning, contiguous n-dimensional tensor of order `N`.
///
/// The buffer holds exactly `size_of_shape(shape)` elements in row-major
/// (C) order; the strides are always the default strides of the shape.
///
/// Cloning a `Tensor` copies its buffer. [`Tensor::take`] moves the
/// contents out and leaves an empty tensor behind whose
/// [`as_ptr`](TensorLike::as_ptr) is null.
///
/// ```
/// use ndtensor::prelude::*;
///
/// let a = Tensor::from_elem([2, 3], 42);
/// assert_eq!(a.len(), 6);
/// assert_eq!(a.strides(), &[3, 1]);
/// assert!(a.iter().all(|&x| x == 42));
/// ```
pub struct Tensor<A, const N: usize> {
    /// `None` after the contents have been taken.
    data: Option<Box<[A]>>,
    shape: [Ix; N],
    strides: [Ix; N],
}

/// A read-only view of order `N` into a buffer owned elsewhere.
///
/// A view records the whole backing buffer together with its own shape,
/// strides and offset, so that element `index` lives at
/// `offset + Σ index[d] * strides[d]` in that buffer.
///
/// Copying a view copies only this metadata.
pub struct TensorView<'a, A, const N: usize> {
    data: &'a [A],
    shape: [Ix; N],
    strides: [Ix; N],
    offset: usize,
}

/// A read-write view of order `N` into a buffer owned elsewhere.
///
/// See [`TensorView`] for the addressing scheme.
pub struct TensorViewMut<'a, A, const N: usize> {
    data: &'a mut [A],
    shape: [Ix; N],
    strides: [Ix; N],
    offset: usize,
}

/// zero-dimensional tensor
pub type Tensor0<A> = Tensor<A, 0>;
/// one-dimensional tensor
pub type Tensor1<A> = Tensor<A, 1>;
/// two-dimensional tensor
pub type Tensor2<A> = Tensor<A, 2>;
/// three-dimensional tensor
pub type Tensor3<A> = Tensor<A, 3>;
/// four-dimensional tensor
pub type Tensor4<A> = Tensor<A, 4>;

/// zero-dimensional tensor view
pub type TensorView0<'a, A> = TensorView<'a, A, 0>;
/// one-dimensional tensor view
pub type TensorView1<'a, A> = TensorView<'a, A, 1>;
/// two-dimensional tensor view
pub type TensorView2<'a, A> = TensorView<'a, A, 2>;
/// three-dimensional tensor view
pub type TensorView3<'a, A> = TensorView<'a, A, 3>;
/// four-dimensional tensor view
pub type TensorView4<'a, A> = TensorView<'a, A, 4>;

/// zero-dimensional read-write tensor view
pub type TensorViewMut0<'a, A> = TensorViewMut<'a, A, 0>;
/// one-dimensional read-write tensor view
pub type TensorViewMut1<'a, A> = TensorViewMut<'a, A, 1>;
/// two-dimensional read-write tensor view
pub type TensorViewMut2<'a, A> = TensorViewMut<'a, A, 2>;
/// three-dimensional read-write tensor view
pub type TensorViewMut3<'a, A> = TensorViewMut<'a, A, 3>;
/// four-dimensional read-write tensor view
pub type TensorViewMut4<'a, A> = TensorViewMut<'a, A, 4>;
