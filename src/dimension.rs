// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shape and stride arithmetic.
//!
//! All functions work on fixed-order shapes `[Ix; N]`; the order of a shape
//! is part of its type.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::Ix;

/// Return the number of elements of `shape`.
///
/// The empty product is 1, so an order 0 shape (a scalar) has one element.
/// No overflow check, see [`size_of_shape_checked`].
#[inline]
pub fn size_of_shape<const N: usize>(shape: &[Ix; N]) -> usize {
    shape.iter().product()
}

/// Return the number of elements of `shape`, or an error if the product of
/// the non-zero axis lengths does not fit in `isize`.
///
/// Axes of length zero are skipped when checking for overflow, so that
/// for example `[0, usize::MAX]` is rejected like any other huge shape even
/// though its element count is zero.
pub fn size_of_shape_checked<const N: usize>(shape: &[Ix; N]) -> Result<usize, ShapeError> {
    let size_nonzero = shape
        .iter()
        .filter(|&&d| d != 0)
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::Overflow))?;
    if size_nonzero > isize::MAX as usize {
        Err(from_kind(ErrorKind::Overflow))
    } else {
        Ok(size_of_shape(shape))
    }
}

/// Compute row-major (C order) strides for `shape`.
///
/// Shape `[a, b, c]` gives strides `[b * c, c, 1]`.
pub fn default_strides<const N: usize>(shape: &[Ix; N]) -> [Ix; N] {
    let mut strides = [0; N];
    let mut cum_prod = 1;
    for (stride, &len) in strides.iter_mut().zip(shape.iter()).rev() {
        *stride = cum_prod;
        cum_prod *= len;
    }
    strides
}

/// Return the storage offset of `index`: `base + Σ index[d] * strides[d]`.
///
/// The index is not checked against any shape.
#[inline(always)]
pub fn stride_offset<const N: usize>(index: &[Ix; N], strides: &[Ix; N], base: usize) -> usize {
    index
        .iter()
        .zip(strides.iter())
        .fold(base, |offset, (&i, &s)| offset + i * s)
}

/// Return the offset one past the last element reachable through `shape`,
/// `strides` and `offset`, or `None` on arithmetic overflow.
///
/// An empty shape reaches nothing and returns `Some(offset)`.
pub(crate) fn end_offset<const N: usize>(
    shape: &[Ix; N],
    strides: &[Ix; N],
    offset: usize,
) -> Option<usize> {
    if shape.iter().any(|&d| d == 0) {
        return Some(offset);
    }
    let mut last = offset;
    for (&d, &s) in shape.iter().zip(strides.iter()) {
        last = (d - 1).checked_mul(s).and_then(|x| x.checked_add(last))?;
    }
    last.checked_add(1)
}

/// Return `true` if `strides` are the row-major strides of `shape`.
///
/// Axes of length 1 may have any stride.
pub fn is_standard_layout<const N: usize>(shape: &[Ix; N], strides: &[Ix; N]) -> bool {
    let defaults = default_strides(shape);
    shape
        .iter()
        .zip(strides.iter().zip(defaults.iter()))
        .all(|(&d, (&s, &ds))| d == 1 || s == ds)
}

/// Type level tensor order.
///
/// Used by the [`s![]`](crate::s!) macro to compute the order of a slicing
/// result while the macro expands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank<const N: usize>;

/// The order one larger than `Self`.
pub trait IncRank {
    /// `Rank<N + 1>`
    type Larger;
}

macro_rules! impl_inc_rank {
    ($($n:expr => $m:expr),*) => {
        $(
        impl IncRank for Rank<$n> {
            type Larger = Rank<$m>;
        }
        )*
    };
}

impl_inc_rank!(0 => 1, 1 => 2, 2 => 3, 3 => 4, 4 => 5, 5 => 6, 6 => 7, 7 => 8);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scalar_shape() {
        let shape: [Ix; 0] = [];
        assert_eq!(size_of_shape(&shape), 1);
        assert_eq!(default_strides(&shape), []);
        assert_eq!(stride_offset(&[], &[], 7), 7);
    }

    #[test]
    fn overflowing_shape() {
        assert_eq!(size_of_shape_checked(&[usize::MAX, 2]),
                   Err(from_kind(ErrorKind::Overflow)));
        assert_eq!(size_of_shape_checked(&[0, usize::MAX]),
                   Err(from_kind(ErrorKind::Overflow)));
        assert_eq!(size_of_shape_checked(&[0, 1 << 20]), Ok(0));
    }

    #[test]
    fn end_offset_of_strided_shapes() {
        assert_eq!(end_offset(&[2, 2], &[4, 1], 5), Some(11));
        assert_eq!(end_offset(&[3, 0], &[4, 1], 5), Some(5));
        assert_eq!(end_offset(&[2], &[usize::MAX], 1), None);
    }

    #[test]
    fn standard_layout() {
        assert!(is_standard_layout(&[2, 3], &[3, 1]));
        assert!(is_standard_layout(&[1, 3], &[17, 1]));
        assert!(!is_standard_layout(&[2, 3], &[1, 2]));
    }
}
