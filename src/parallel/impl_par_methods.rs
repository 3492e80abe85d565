// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;

use log::debug;
use rayon::prelude::*;

use crate::dimension::{default_strides, size_of_shape_checked};
use crate::{Ix, Tensor, TensorViewMut};

/// # Parallel methods
///
/// These methods require crate feature `rayon`.
impl<A, const N: usize> Tensor<A, N>
where
    A: Send + Sync,
{
    /// Parallel version of element-wise in place modification.
    ///
    /// Modify the tensor in place by calling `f` by mutable reference on
    /// each element.
    ///
    /// Elements are visited in arbitrary order.
    pub fn par_map_inplace<F>(&mut self, f: F)
    where
        F: Fn(&mut A) + Sync + Send,
    {
        self.as_slice_mut().par_iter_mut().for_each(f)
    }

    /// Parallel version of [`from_shape_fn`](Tensor::from_shape_fn).
    ///
    /// `f` is called once per index, in arbitrary order.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    pub fn par_from_shape_fn<F>(shape: [Ix; N], f: F) -> Self
    where
        F: Fn([Ix; N]) -> A + Sync + Send,
    {
        let size = match size_of_shape_checked(&shape) {
            Ok(sz) => sz,
            Err(_) => panic!(
                "ndtensor: Shape too large, product of non-zero axis lengths overflows isize in shape {:?}",
                shape
            ),
        };
        let strides = default_strides(&shape);
        debug!("ndtensor: parallel construction of {} elements on {} threads",
               size, rayon::current_num_threads());
        let v: Vec<A> = (0..size)
            .into_par_iter()
            .map(|i| {
                // a non-empty shape has only non-zero strides
                let mut index = [0; N];
                let mut rem = i;
                for d in 0..N {
                    index[d] = rem / strides[d];
                    rem %= strides[d];
                }
                f(index)
            })
            .collect();
        Self::from_shape_vec_unchecked(shape, v)
    }
}

impl<A> Tensor<A, 2>
where
    A: Send + Sync,
{
    /// Call `f(y, row)` for every row `y` of the tensor, in parallel.
    ///
    /// Each call receives exclusive access to its row as a one-dimensional
    /// read-write view, so rows can be written concurrently without any
    /// synchronization. Returns once every row has been visited.
    ///
    /// ```
    /// use ndtensor::prelude::*;
    ///
    /// let mut a = Tensor::from_elem([3, 2], 0usize);
    /// a.par_for_each_row_mut(|y, mut row| row.fill(y));
    /// assert_eq!(a.as_slice(), &[0, 0, 1, 1, 2, 2]);
    /// ```
    pub fn par_for_each_row_mut<F>(&mut self, f: F)
    where
        F: Fn(usize, TensorViewMut<'_, A, 1>) + Sync + Send,
    {
        let [height, width] = self.shape;
        debug!("ndtensor: parallel row traversal of {}x{} on {} threads",
               height, width, rayon::current_num_threads());
        if width == 0 {
            (0..height)
                .into_par_iter()
                .for_each(|y| f(y, TensorViewMut::new(&mut [], [0], [1], 0)));
            return;
        }
        self.as_slice_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, TensorViewMut::new(row, [width], [1], 0)));
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn from_shape_fn_matches_serial() {
        let f = |[i, j, k]: [usize; 3]| i * 100 + j * 10 + k;
        let a = Tensor::par_from_shape_fn([3, 4, 5], f);
        let b = Tensor::from_shape_fn([3, 4, 5], f);
        assert_eq!(a, b);

        let empty = Tensor::par_from_shape_fn([3, 0, 5], f);
        assert!(empty.is_empty());
        assert_eq!(empty.strides(), &[0, 5, 1]);
    }

    #[test]
    fn rows_of_zero_width() {
        let mut a = Tensor::<u8, 2>::zeros([3, 0]);
        let visited = std::sync::atomic::AtomicUsize::new(0);
        a.par_for_each_row_mut(|_, row| {
            assert_eq!(row.shape(), &[0]);
            visited.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        });
        assert_eq!(visited.into_inner(), 3);
    }
}
