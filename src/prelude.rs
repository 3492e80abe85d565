// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndtensor prelude.
//!
//! This module contains the most used types, type aliases, traits and macros
//! that you can import easily as a group.
//!
//! ```
//! use ndtensor::prelude::*;
//!
//! let a = Tensor2::<f32>::zeros([2, 2]);
//! assert_eq!(a.ndim(), 2);
//! ```

#[doc(no_inline)]
pub use crate::{Tensor, TensorView, TensorViewMut};

#[doc(no_inline)]
pub use crate::{Tensor0, Tensor1, Tensor2, Tensor3, Tensor4};

#[doc(no_inline)]
pub use crate::{TensorView0, TensorView1, TensorView2, TensorView3, TensorView4};

#[doc(no_inline)]
pub use crate::{TensorViewMut0, TensorViewMut1, TensorViewMut2, TensorViewMut3, TensorViewMut4};

#[doc(no_inline)]
pub use crate::{Ix, Selector, ShapeError, SliceInfo};

#[doc(no_inline)]
pub use crate::{TensorLike, TensorLikeMut};

pub use crate::s;
