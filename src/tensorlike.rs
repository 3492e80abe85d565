// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The capability set shared by owning tensors and views.

use num_traits::AsPrimitive;

use crate::dimension::{size_of_shape, stride_offset};
use crate::error::ShapeError;
use crate::iterators::Iter;
use crate::materialize;
use crate::slice::{Selector, SliceInfo};
use crate::{Ix, Tensor, TensorView, TensorViewMut};

/// Read access to a strided tensor of order `N`.
///
/// Implementors supply the storage buffer and the layout (shape, strides and
/// offset); every other method, including element access, slicing and
/// materialization, is written once on top of those.
///
/// Implemented by [`Tensor`], [`TensorView`] and [`TensorViewMut`].
pub trait TensorLike<const N: usize> {
    /// The element type.
    type Elem;

    /// Return the shape of the tensor.
    fn shape(&self) -> &[Ix; N];

    /// Return the strides of the tensor, in elements.
    fn strides(&self) -> &[Ix; N];

    /// Return the position of element `[0; N]` in [`storage`](Self::storage).
    ///
    /// Always 0 for an owning [`Tensor`].
    #[inline]
    fn offset(&self) -> usize {
        0
    }

    /// Return the whole backing buffer, starting at its first element.
    ///
    /// For a view this is the buffer of the tensor it was derived from,
    /// not just the elements the view can reach.
    fn storage(&self) -> &[Self::Elem];

    /// Return a pointer to the first element of the backing buffer.
    ///
    /// Null for a [`Tensor`] whose contents were taken.
    #[inline]
    fn as_ptr(&self) -> *const Self::Elem {
        self.storage().as_ptr()
    }

    /// Return the order (number of axes) of the tensor.
    #[inline]
    fn ndim(&self) -> usize {
        N
    }

    /// Return the number of elements in the tensor.
    #[inline]
    fn len(&self) -> usize {
        size_of_shape(self.shape())
    }

    /// Return `true` if the tensor has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return a reference to the element at `index`.
    ///
    /// The coordinates are checked against the shape only when debug
    /// assertions are enabled; use [`get`](Self::get) for an always checked
    /// lookup. An out of bounds coordinate may silently address another
    /// element of the backing buffer, or panic if it leaves the buffer.
    #[inline]
    fn at(&self, index: [Ix; N]) -> &Self::Elem {
        debug_bounds_check!(self.shape(), index);
        &self.storage()[stride_offset(&index, self.strides(), self.offset())]
    }

    /// Return a reference to the element at `index`, or `None` if the index
    /// is out of bounds.
    fn get(&self, index: [Ix; N]) -> Option<&Self::Elem> {
        if index.iter().zip(self.shape().iter()).all(|(&i, &len)| i < len) {
            self.storage()
                .get(stride_offset(&index, self.strides(), self.offset()))
        } else {
            None
        }
    }

    /// Return a read-only view of the whole tensor.
    #[inline]
    fn view(&self) -> TensorView<'_, Self::Elem, N> {
        TensorView::new(self.storage(), *self.shape(), *self.strides(), self.offset())
    }

    /// Return an iterator of references to the elements, in row-major order.
    fn iter(&self) -> Iter<'_, Self::Elem, N> {
        self.view().into_iter()
    }

    /// Return a sliced view of the tensor.
    ///
    /// See [`s![]`](crate::s!) for how to build `info`. Index selectors
    /// remove their axis, range selectors keep it, so the result has one
    /// axis per range selector.
    ///
    /// **Panics** if a selector is out of bounds for its axis.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let a = Tensor::from_shape_vec([4, 4], (1..=16).collect()).unwrap();
    /// let column = a.slice(s![.., 1]);
    /// assert_eq!(column.iter().copied().collect::<Vec<_>>(), [2, 6, 10, 14]);
    /// ```
    fn slice<const M: usize>(&self, info: SliceInfo<N, M>) -> TensorView<'_, Self::Elem, M> {
        self.view().slice_move(info)
    }

    /// Return a sliced view of the tensor, using a runtime list of selectors.
    ///
    /// **Errors** if `selectors.len() != N`, if the number of range
    /// selectors is not `M`, or if a selector is out of bounds.
    fn try_slice<const M: usize>(
        &self,
        selectors: &[Selector],
    ) -> Result<TensorView<'_, Self::Elem, M>, ShapeError> {
        self.view().try_slice_move(selectors)
    }

    /// Copy the elements into a new owning tensor of the same shape.
    fn to_owned_tensor(&self) -> Tensor<Self::Elem, N>
    where
        Self::Elem: Clone,
    {
        Tensor::from_tensor_like(self)
    }

    /// Copy the elements into a new owning tensor, converting each element
    /// with an `as` cast.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let a = Tensor::from_shape_vec([3], vec![1.5f64, -2.25, 7.0]).unwrap();
    /// let b = a.cast::<i32>();
    /// assert_eq!(b.as_slice(), &[1, -2, 7]);
    /// ```
    fn cast<B>(&self) -> Tensor<B, N>
    where
        Self::Elem: AsPrimitive<B>,
        B: Copy + 'static,
    {
        let data = materialize::collect_row_major(self, |&x| x.as_());
        Tensor::from_shape_vec_unchecked(*self.shape(), data)
    }
}

/// Write access to a strided tensor of order `N`.
pub trait TensorLikeMut<const N: usize>: TensorLike<N> {
    /// Return the whole backing buffer, mutably.
    fn storage_mut(&mut self) -> &mut [Self::Elem];

    /// Return a mutable reference to the element at `index`.
    ///
    /// Checked like [`at`](TensorLike::at).
    #[inline]
    fn at_mut(&mut self, index: [Ix; N]) -> &mut Self::Elem {
        debug_bounds_check!(self.shape(), index);
        let offset = stride_offset(&index, self.strides(), self.offset());
        &mut self.storage_mut()[offset]
    }

    /// Return a mutable reference to the element at `index`, or `None` if
    /// the index is out of bounds.
    fn get_mut(&mut self, index: [Ix; N]) -> Option<&mut Self::Elem> {
        if index.iter().zip(self.shape().iter()).all(|(&i, &len)| i < len) {
            let offset = stride_offset(&index, self.strides(), self.offset());
            self.storage_mut().get_mut(offset)
        } else {
            None
        }
    }

    /// Return a read-write view of the whole tensor.
    fn view_mut(&mut self) -> TensorViewMut<'_, Self::Elem, N> {
        let shape = *self.shape();
        let strides = *self.strides();
        let offset = self.offset();
        TensorViewMut::new(self.storage_mut(), shape, strides, offset)
    }

    /// Return a sliced read-write view of the tensor.
    ///
    /// **Panics** if a selector is out of bounds for its axis.
    fn slice_mut<const M: usize>(
        &mut self,
        info: SliceInfo<N, M>,
    ) -> TensorViewMut<'_, Self::Elem, M> {
        self.view_mut().slice_move(info)
    }

    /// Return a sliced read-write view of the tensor, using a runtime list
    /// of selectors.
    ///
    /// **Errors** under the same conditions as
    /// [`try_slice`](TensorLike::try_slice).
    fn try_slice_mut<const M: usize>(
        &mut self,
        selectors: &[Selector],
    ) -> Result<TensorViewMut<'_, Self::Elem, M>, ShapeError> {
        self.view_mut().try_slice_move(selectors)
    }

    /// Copy every element of `src` into `self`, converting the element type.
    ///
    /// **Panics** if the shapes differ.
    fn assign<S>(&mut self, src: &S)
    where
        S: TensorLike<N> + ?Sized,
        S::Elem: Clone + Into<Self::Elem>,
    {
        if let Err(err) = self.try_assign(src) {
            panic!("ndtensor: could not assign tensor of shape {:?} to shape {:?}: {}",
                   src.shape(), self.shape(), err);
        }
    }

    /// Copy every element of `src` into `self`, converting the element type.
    ///
    /// **Errors** if the shapes differ; `self` is left untouched then.
    fn try_assign<S>(&mut self, src: &S) -> Result<(), ShapeError>
    where
        S: TensorLike<N> + ?Sized,
        S::Elem: Clone + Into<Self::Elem>,
    {
        materialize::copy_elementwise(src, self)
    }

    /// Set every element to a clone of `value`.
    fn fill(&mut self, value: Self::Elem)
    where
        Self::Elem: Clone,
    {
        for index in crate::indices(*self.shape()) {
            *self.at_mut(index) = value.clone();
        }
    }
}
