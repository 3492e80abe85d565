// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parallelization features for ndtensor.
//!
//! Parallelization features are based on the crate [rayon]. Work is split
//! by row: every worker owns a disjoint set of rows, so no two workers
//! ever write the same element.
//!
//! This requires the crate feature `rayon` to be enabled.
//!
//! The following functions and methods exist:
//!
//! - [`par_for_rows`], [`par_for_row`]: run a closure over a 2D extent or
//!   a range of rows, blocking until every worker is done
//! - [`Tensor::par_for_each_row_mut()`](crate::Tensor::par_for_each_row_mut): hand each row of a 2D tensor to a
//!   worker as an exclusive [`TensorViewMut`](crate::TensorViewMut)
//! - [`Tensor::par_map_inplace()`](crate::Tensor::par_map_inplace),
//!   [`Tensor::par_from_shape_fn()`](crate::Tensor::par_from_shape_fn)
//!
//! # Examples
//!
//! Fill an image row by row, in parallel.
//!
//! ```
//! use ndtensor::prelude::*;
//!
//! let mut image = Tensor2::<u32>::zeros([4, 8]);
//! image.par_for_each_row_mut(|y, mut row| {
//!     for x in 0..row.len() {
//!         row[[x]] = (y * 8 + x) as u32;
//!     }
//! });
//! assert_eq!(image[[3, 7]], 31);
//! ```
//!
//! [rayon]: https://docs.rs/rayon/1.0/

use log::debug;
use rayon::prelude::*;

/// Into- traits for creating parallelized iterators
pub mod prelude {
    #[doc(no_inline)]
    pub use rayon::prelude::{
        IndexedParallelIterator, IntoParallelIterator, IntoParallelRefIterator,
        IntoParallelRefMutIterator, ParallelIterator,
    };
}

mod impl_par_methods;

/// Call `f(y, x)` for every `y` in `0..height` and `x` in `0..width`.
///
/// Rows are split across the rayon thread pool; within a row, `x` is
/// visited in increasing order. Returns once every call has completed.
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use ndtensor::parallel::par_for_rows;
///
/// let sum = AtomicUsize::new(0);
/// par_for_rows(3, 4, |y, x| {
///     sum.fetch_add(y * 4 + x, Ordering::Relaxed);
/// });
/// assert_eq!(sum.into_inner(), (0..12).sum());
/// ```
pub fn par_for_rows<F>(height: usize, width: usize, f: F)
where
    F: Fn(usize, usize) + Sync + Send,
{
    debug!("ndtensor: parallel for over {}x{} on {} threads",
           height, width, rayon::current_num_threads());
    (0..height).into_par_iter().for_each(|y| {
        for x in 0..width {
            f(y, x);
        }
    });
}

/// Call `f(y)` for every `y` in `0..height`.
///
/// Rows are split across the rayon thread pool. Returns once every call has
/// completed.
pub fn par_for_row<F>(height: usize, f: F)
where
    F: Fn(usize) + Sync + Send,
{
    debug!("ndtensor: parallel for over {} rows on {} threads",
           height, rayon::current_num_threads());
    (0..height).into_par_iter().for_each(f);
}
