// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::{default_strides, end_offset, size_of_shape_checked, stride_offset};
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::slice::{do_slice, Selector, SliceInfo};
use crate::{Ix, TensorLike, TensorLikeMut, TensorView, TensorViewMut};

/// Check that every element reachable through the layout lies inside a
/// buffer of `len` elements.
fn check_layout<const N: usize>(
    len: usize,
    shape: &[Ix; N],
    strides: &[Ix; N],
    offset: usize,
) -> Result<(), ShapeError> {
    match end_offset(shape, strides, offset) {
        Some(end) if end <= len || shape.iter().any(|&d| d == 0) => Ok(()),
        _ => Err(from_kind(ErrorKind::OutOfBounds)),
    }
}

/// Methods for read-only tensor views.
impl<'a, A, const N: usize> TensorView<'a, A, N> {
    /// Create a view of `data` with the given layout.
    ///
    /// The layout is not validated: an index whose offset falls outside
    /// `data` panics when it is accessed. See [`try_new`](Self::try_new)
    /// for the checked constructor.
    #[inline]
    pub fn new(data: &'a [A], shape: [Ix; N], strides: [Ix; N], offset: usize) -> Self {
        TensorView {
            data,
            shape,
            strides,
            offset,
        }
    }

    /// Create a view of `data` with the given layout.
    ///
    /// **Errors** if an element reachable through the layout lies outside
    /// `data`.
    pub fn try_new(
        data: &'a [A],
        shape: [Ix; N],
        strides: [Ix; N],
        offset: usize,
    ) -> Result<Self, ShapeError> {
        check_layout(data.len(), &shape, &strides, offset)?;
        Ok(Self::new(data, shape, strides, offset))
    }

    /// Create a row-major view of `shape` over all of `data`.
    ///
    /// **Errors** if `data.len()` is not the number of elements of `shape`.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6];
    /// let v = TensorView::from_shape([3, 2], &data).unwrap();
    /// assert_eq!(v[[2, 1]], 6);
    /// ```
    pub fn from_shape(shape: [Ix; N], data: &'a [A]) -> Result<Self, ShapeError> {
        if size_of_shape_checked(&shape)? != data.len() {
            return Err(from_kind(ErrorKind::IncompatibleLength));
        }
        Ok(Self::new(data, shape, default_strides(&shape), 0))
    }

    /// Slice the view, keeping the lifetime of the original borrow.
    ///
    /// **Panics** if a selector is out of bounds for its axis.
    pub fn slice_move<const M: usize>(self, info: SliceInfo<N, M>) -> TensorView<'a, A, M> {
        match self.try_slice_move(info.as_ref()) {
            Ok(view) => view,
            Err(err) => panic!("ndtensor: invalid slice {} for shape {:?}: {}",
                               info, self.shape, err),
        }
    }

    /// Slice the view with a runtime list of selectors, keeping the
    /// lifetime of the original borrow.
    pub fn try_slice_move<const M: usize>(
        self,
        selectors: &[Selector],
    ) -> Result<TensorView<'a, A, M>, ShapeError> {
        let (shape, strides, offset) = do_slice(&self.shape, &self.strides, self.offset, selectors)?;
        Ok(TensorView::new(self.data, shape, strides, offset))
    }

    /// Return a reference to the element at `index` that lives as long as
    /// the underlying borrow.
    #[inline]
    pub(crate) fn get_ref(&self, index: [Ix; N]) -> &'a A {
        debug_bounds_check!(self.shape, index);
        let data = self.data;
        &data[stride_offset(&index, &self.strides, self.offset)]
    }
}

/// Methods for read-write tensor views.
impl<'a, A, const N: usize> TensorViewMut<'a, A, N> {
    /// Create a read-write view of `data` with the given layout.
    ///
    /// The layout is not validated, see [`TensorView::new`].
    #[inline]
    pub fn new(data: &'a mut [A], shape: [Ix; N], strides: [Ix; N], offset: usize) -> Self {
        TensorViewMut {
            data,
            shape,
            strides,
            offset,
        }
    }

    /// Create a read-write view of `data` with the given layout.
    ///
    /// **Errors** if an element reachable through the layout lies outside
    /// `data`.
    pub fn try_new(
        data: &'a mut [A],
        shape: [Ix; N],
        strides: [Ix; N],
        offset: usize,
    ) -> Result<Self, ShapeError> {
        check_layout(data.len(), &shape, &strides, offset)?;
        Ok(Self::new(data, shape, strides, offset))
    }

    /// Create a row-major read-write view of `shape` over all of `data`.
    ///
    /// **Errors** if `data.len()` is not the number of elements of `shape`.
    pub fn from_shape(shape: [Ix; N], data: &'a mut [A]) -> Result<Self, ShapeError> {
        if size_of_shape_checked(&shape)? != data.len() {
            return Err(from_kind(ErrorKind::IncompatibleLength));
        }
        Ok(Self::new(data, shape, default_strides(&shape), 0))
    }

    /// Slice the view, keeping the lifetime of the original borrow.
    ///
    /// **Panics** if a selector is out of bounds for its axis.
    pub fn slice_move<const M: usize>(self, info: SliceInfo<N, M>) -> TensorViewMut<'a, A, M> {
        let shape = self.shape;
        match self.try_slice_move(info.as_ref()) {
            Ok(view) => view,
            Err(err) => panic!("ndtensor: invalid slice {} for shape {:?}: {}",
                               info, shape, err),
        }
    }

    /// Slice the view with a runtime list of selectors, keeping the
    /// lifetime of the original borrow.
    pub fn try_slice_move<const M: usize>(
        self,
        selectors: &[Selector],
    ) -> Result<TensorViewMut<'a, A, M>, ShapeError> {
        let (shape, strides, offset) = do_slice(&self.shape, &self.strides, self.offset, selectors)?;
        Ok(TensorViewMut::new(self.data, shape, strides, offset))
    }

    /// Convert into a read-only view with the same lifetime.
    pub fn into_view(self) -> TensorView<'a, A, N> {
        TensorView::new(self.data, self.shape, self.strides, self.offset)
    }
}

impl<'a, A, const N: usize> Clone for TensorView<'a, A, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A, const N: usize> Copy for TensorView<'a, A, N> {}

impl<'a, A, const N: usize> TensorLike<N> for TensorView<'a, A, N> {
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
    fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn storage(&self) -> &[A] {
        self.data
    }
}

impl<'a, A, const N: usize> TensorLike<N> for TensorViewMut<'a, A, N> {
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
    fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn storage(&self) -> &[A] {
        &*self.data
    }
}

impl<'a, A, const N: usize> TensorLikeMut<N> for TensorViewMut<'a, A, N> {
    #[inline]
    fn storage_mut(&mut self) -> &mut [A] {
        &mut *self.data
    }
}

impl<'a, A, const N: usize> From<TensorViewMut<'a, A, N>> for TensorView<'a, A, N> {
    fn from(view: TensorViewMut<'a, A, N>) -> Self {
        view.into_view()
    }
}
