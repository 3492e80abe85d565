// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::dimension::is_standard_layout;
use crate::{Ix, Tensor, TensorLike, TensorView, TensorViewMut};

/// Write the elements of `tensor` along `axis` and the axes after it, with
/// the coordinates before `axis` fixed by `index`.
fn format_axis<T, F, const N: usize>(
    tensor: &T,
    index: &mut [Ix; N],
    axis: usize,
    f: &mut fmt::Formatter<'_>,
    format: &mut F,
) -> fmt::Result
where
    T: TensorLike<N> + ?Sized,
    F: FnMut(&T::Elem, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    if axis == N {
        return format(tensor.at(*index), f);
    }
    f.write_str("[")?;
    for i in 0..tensor.shape()[axis] {
        if i != 0 {
            f.write_str(", ")?;
        }
        index[axis] = i;
        format_axis(tensor, index, axis + 1, f, format)?;
    }
    f.write_str("]")
}

fn format_tensor<T, F, const N: usize>(
    tensor: &T,
    f: &mut fmt::Formatter<'_>,
    mut format: F,
) -> fmt::Result
where
    T: TensorLike<N> + ?Sized,
    F: FnMut(&T::Elem, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    writeln!(f, "{{")?;
    writeln!(f, "    Shape = {:?}", tensor.shape())?;
    write!(f, "    Data = ")?;
    let mut index = [0; N];
    format_axis(tensor, &mut index, 0, f, &mut format)?;
    write!(f, "\n}}")
}

fn format_layout<T, const N: usize>(tensor: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: TensorLike<N> + ?Sized,
{
    let layout = if is_standard_layout(tensor.shape(), tensor.strides()) {
        "standard"
    } else {
        "strided"
    };
    write!(f, " shape={:?}, strides={:?}, offset={}, layout={}",
           tensor.shape(), tensor.strides(), tensor.offset(), layout)
}

macro_rules! impl_fmt_traits {
    ([$($generics:tt)*] $tensor:ty) => {
        /// Format the tensor using `Display` and apply the formatting
        /// parameters used to each element.
        ///
        /// The tensor is shown as its shape followed by its elements,
        /// bracketed per axis in row-major order.
        impl<$($generics)* A: fmt::Display, const N: usize> fmt::Display for $tensor {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_tensor(self, f, <_>::fmt)
            }
        }

        /// Format the tensor using `Debug` and apply the formatting
        /// parameters used to each element.
        ///
        /// Shows the layout after the elements.
        impl<$($generics)* A: fmt::Debug, const N: usize> fmt::Debug for $tensor {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_tensor(self, f, <_>::fmt)?;
                format_layout(self, f)
            }
        }

        /// Format the tensor using `LowerExp` and apply the formatting
        /// parameters used to each element.
        impl<$($generics)* A: fmt::LowerExp, const N: usize> fmt::LowerExp for $tensor {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_tensor(self, f, <_>::fmt)
            }
        }

        /// Format the tensor using `UpperExp` and apply the formatting
        /// parameters used to each element.
        impl<$($generics)* A: fmt::UpperExp, const N: usize> fmt::UpperExp for $tensor {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_tensor(self, f, <_>::fmt)
            }
        }

        /// Format the tensor using `LowerHex` and apply the formatting
        /// parameters used to each element.
        impl<$($generics)* A: fmt::LowerHex, const N: usize> fmt::LowerHex for $tensor {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_tensor(self, f, <_>::fmt)
            }
        }

        /// Format the tensor using `Binary` and apply the formatting
        /// parameters used to each element.
        impl<$($generics)* A: fmt::Binary, const N: usize> fmt::Binary for $tensor {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_tensor(self, f, <_>::fmt)
            }
        }
    };
}

impl_fmt_traits!([] Tensor<A, N>);
impl_fmt_traits!(['a,] TensorView<'a, A, N>);
impl_fmt_traits!(['a,] TensorViewMut<'a, A, N>);
