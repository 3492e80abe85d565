// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::dimension::{IncRank, Rank};
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::Ix;

/// A per-axis slicing argument: a single index or a half-open range.
///
/// ## Examples
///
/// `Selector::Index(i)` picks position `i` along the axis and removes the
/// axis from the result. It can also be created with `Selector::from(i)`.
/// The macro equivalent is `s![i]`.
///
/// `Selector::Range { start: a, end: Some(b) }` keeps positions `a..b` and
/// keeps the axis, with length `b - a`. It can also be created with
/// `Selector::from(a..b)`. The macro equivalent is `s![a..b]`.
///
/// `Selector::Range { start: 0, end: None }` is the full range of an axis.
/// It can also be created with `Selector::from(..)`. If `end` is `None`,
/// the range extends to the end of the axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A single index.
    Index(Ix),
    /// A half-open range `start..end`.
    Range { start: Ix, end: Option<Ix> },
}

impl Selector {
    /// Create the range selector `start..stop`.
    #[inline]
    pub fn range(start: Ix, stop: Ix) -> Self {
        Selector::Range {
            start,
            end: Some(stop),
        }
    }

    /// Returns `true` if `self` is an `Index` value.
    pub fn is_index(&self) -> bool {
        matches!(self, Selector::Index(_))
    }

    /// Returns `true` if `self` is a `Range` value.
    pub fn is_range(&self) -> bool {
        matches!(self, Selector::Range { .. })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Selector::Index(index) => write!(f, "{}", index)?,
            Selector::Range { start, end } => {
                if start != 0 {
                    write!(f, "{}", start)?;
                }
                write!(f, "..")?;
                if let Some(i) = end {
                    write!(f, "{}", i)?;
                }
            }
        }
        Ok(())
    }
}

impl From<Ix> for Selector {
    #[inline]
    fn from(index: Ix) -> Selector {
        Selector::Index(index)
    }
}

impl From<Range<Ix>> for Selector {
    #[inline]
    fn from(r: Range<Ix>) -> Selector {
        Selector::range(r.start, r.end)
    }
}

impl From<RangeFrom<Ix>> for Selector {
    #[inline]
    fn from(r: RangeFrom<Ix>) -> Selector {
        Selector::Range {
            start: r.start,
            end: None,
        }
    }
}

impl From<RangeTo<Ix>> for Selector {
    #[inline]
    fn from(r: RangeTo<Ix>) -> Selector {
        Selector::range(0, r.end)
    }
}

impl From<RangeFull> for Selector {
    #[inline]
    fn from(_: RangeFull) -> Selector {
        Selector::Range {
            start: 0,
            end: None,
        }
    }
}

/// One selector per axis of an order `N` tensor, producing a view of
/// order `M`.
///
/// `M` is always the number of range selectors. The [`s![]`](crate::s!)
/// macro computes it while it expands; [`SliceInfo::new`] checks it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SliceInfo<const N: usize, const M: usize> {
    selectors: [Selector; N],
}

impl<const N: usize, const M: usize> SliceInfo<N, M> {
    /// Create a `SliceInfo` from one selector per axis.
    ///
    /// **Errors** if the number of range selectors is not `M`.
    ///
    /// ```
    /// use ndtensor::{Selector, SliceInfo};
    ///
    /// let info = SliceInfo::<2, 1>::new([Selector::Index(1), Selector::range(0, 4)]);
    /// assert!(info.is_ok());
    /// let info = SliceInfo::<2, 2>::new([Selector::Index(1), Selector::range(0, 4)]);
    /// assert!(info.is_err());
    /// ```
    pub fn new(selectors: [Selector; N]) -> Result<Self, ShapeError> {
        if count_ranges(&selectors) != M {
            return Err(from_kind(ErrorKind::SelectorCount));
        }
        Ok(SliceInfo { selectors })
    }

    /// Create a `SliceInfo` whose output order was computed by the
    /// [`s![]`](crate::s!) macro.
    #[doc(hidden)]
    #[inline]
    pub fn from_macro(selectors: [Selector; N], _out: PhantomData<Rank<M>>) -> Self {
        debug_assert_eq!(count_ranges(&selectors), M);
        SliceInfo { selectors }
    }

    /// Return the selectors.
    pub fn selectors(&self) -> &[Selector; N] {
        &self.selectors
    }

    /// Return the order of the sliced tensors this produces.
    pub fn out_ndim(&self) -> usize {
        M
    }
}

impl<const N: usize, const M: usize> AsRef<[Selector]> for SliceInfo<N, M> {
    fn as_ref(&self) -> &[Selector] {
        &self.selectors
    }
}

impl<const N: usize, const M: usize> fmt::Display for SliceInfo<N, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "s![")?;
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", selector)?;
        }
        write!(f, "]")
    }
}

fn count_ranges(selectors: &[Selector]) -> usize {
    selectors.iter().filter(|s| s.is_range()).count()
}

/// Compute the layout of a slice of the layout `shape`, `strides`, `offset`.
///
/// A single left to right pass: an index selector advances the offset and
/// drops its axis, a range selector advances the offset to its start and
/// keeps the axis with the original stride. Slicing a view therefore
/// yields offset and strides relative to the original buffer.
pub(crate) fn do_slice<const N: usize, const M: usize>(
    shape: &[Ix; N],
    strides: &[Ix; N],
    mut offset: usize,
    selectors: &[Selector],
) -> Result<([Ix; M], [Ix; M], usize), ShapeError> {
    if selectors.len() != N || count_ranges(selectors) != M {
        return Err(from_kind(ErrorKind::SelectorCount));
    }
    let mut new_shape = [0; M];
    let mut new_strides = [0; M];
    let mut out_axis = 0;
    for ((&len, &stride), selector) in shape.iter().zip(strides.iter()).zip(selectors) {
        match *selector {
            Selector::Index(index) => {
                if index >= len {
                    return Err(from_kind(ErrorKind::OutOfBounds));
                }
                offset += index * stride;
            }
            Selector::Range { start, end } => {
                let end = end.unwrap_or(len);
                if start > end || end > len {
                    return Err(from_kind(ErrorKind::OutOfBounds));
                }
                offset += start * stride;
                new_shape[out_axis] = end - start;
                new_strides[out_axis] = stride;
                out_axis += 1;
            }
        }
    }
    Ok((new_shape, new_strides, offset))
}

/// Compute the order of a slicing result one selector at a time.
///
/// An index keeps the order `D1`, a range increases it by one. Used by
/// the [`s![]`](crate::s!) macro.
pub trait SliceNextRank<D1, D2> {
    fn next_rank(&self, _: PhantomData<D1>) -> PhantomData<D2>;
}

impl<D1> SliceNextRank<D1, D1> for Ix {
    fn next_rank(&self, _: PhantomData<D1>) -> PhantomData<D1> {
        PhantomData
    }
}

macro_rules! impl_slicenextrank_larger {
    ($self:ty) => {
        impl<D1: IncRank> SliceNextRank<D1, D1::Larger> for $self {
            fn next_rank(&self, _: PhantomData<D1>) -> PhantomData<D1::Larger> {
                PhantomData
            }
        }
    };
}
impl_slicenextrank_larger!(Range<Ix>);
impl_slicenextrank_larger!(RangeFrom<Ix>);
impl_slicenextrank_larger!(RangeTo<Ix>);
impl_slicenextrank_larger!(RangeFull);

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges/indices, separated by comma, one per axis
/// of the tensor being sliced, and produces a [`SliceInfo`] whose output
/// order is the number of ranges.
///
/// Each element is one of:
///
/// - *index*: an index to use for taking a subview of that axis. The axis
///   is removed from the result.
/// - *range*: a range `a..b`, `a..`, `..b` or `..`, which keeps the axis
///   and narrows it to the half-open range.
///
/// The type of each expression decides its kind, so `s![i, ..]` works for
/// any `i: usize`.
///
/// ```
/// use ndtensor::prelude::*;
///
/// let a = Tensor::from_shape_fn([2, 3, 4], |[i, j, k]| 100 * i + 10 * j + k);
///
/// // index 1 on the first axis, a range on the others: order 2 result
/// let b = a.slice(s![1, 1..3, ..]);
/// assert_eq!(b.shape(), &[2, 4]);
/// assert_eq!(b[[0, 0]], 110);
///
/// // indices only: an order 0 view of one element
/// let c = a.slice(s![1, 2, 3]);
/// assert_eq!(c[[]], 123);
/// ```
#[macro_export]
macro_rules! s(
    // last item
    (@parse $rank:expr, [$($stack:tt)*] $r:expr) => {
        $crate::SliceInfo::from_macro(
            [$($stack)* $crate::s!(@convert $r)],
            $crate::SliceNextRank::next_rank(&$r, $rank),
        )
    };
    // last item, trailing comma
    (@parse $rank:expr, [$($stack:tt)*] $r:expr ,) => {
        $crate::SliceInfo::from_macro(
            [$($stack)* $crate::s!(@convert $r)],
            $crate::SliceNextRank::next_rank(&$r, $rank),
        )
    };
    (@parse $rank:expr, [$($stack:tt)*] $r:expr, $($t:tt)*) => {
        $crate::s![@parse
            $crate::SliceNextRank::next_rank(&$r, $rank),
            [$($stack)* $crate::s!(@convert $r),]
            $($t)*
        ]
    };
    // convert range/index into Selector
    (@convert $r:expr) => {
        <$crate::Selector as ::core::convert::From<_>>::from($r)
    };
    // empty: slicing an order 0 tensor
    () => {
        $crate::SliceInfo::<0, 0>::from_macro([], ::core::marker::PhantomData)
    };
    ($($t:tt)*) => {
        $crate::s![@parse ::core::marker::PhantomData::<$crate::Rank<0>>, [] $($t)*]
    };
);

#[cfg(test)]
mod tests {
    use super::*;
    use super::Selector::Index;

    fn full() -> Selector {
        Selector::from(..)
    }

    #[test]
    fn slice_layout_row_column_block() {
        let shape = [4, 4];
        let strides = [4, 1];
        let row = do_slice::<2, 1>(&shape, &strides, 0, &[Index(1), Selector::range(0, 4)]);
        assert_eq!(row, Ok(([4], [1], 4)));
        let col = do_slice::<2, 1>(&shape, &strides, 0, &[Selector::range(0, 4), Index(1)]);
        assert_eq!(col, Ok(([4], [4], 1)));
        let block = do_slice::<2, 2>(&shape, &strides, 0,
                                     &[Selector::range(1, 3), Selector::range(1, 3)]);
        assert_eq!(block, Ok(([2, 2], [4, 1], 5)));
    }

    #[test]
    fn slice_layout_errors() {
        let shape = [4, 4];
        let strides = [4, 1];
        let err = |selectors: &[Selector]| {
            do_slice::<2, 1>(&shape, &strides, 0, selectors).unwrap_err().kind()
        };
        assert_eq!(err(&[Index(1)]), ErrorKind::SelectorCount);
        assert_eq!(err(&[Index(1), Index(2)]), ErrorKind::SelectorCount);
        assert_eq!(err(&[Index(4), full()]), ErrorKind::OutOfBounds);
        assert_eq!(err(&[Index(0), Selector::range(2, 5)]), ErrorKind::OutOfBounds);
        assert_eq!(err(&[Index(0), Selector::range(3, 2)]), ErrorKind::OutOfBounds);
    }

    #[test]
    fn empty_range_is_allowed() {
        let r = do_slice::<2, 1>(&[4, 4], &[4, 1], 0, &[Index(3), Selector::range(4, 4)]);
        assert_eq!(r, Ok(([0], [1], 16)));
    }

    #[test]
    fn macro_output_order() {
        let info = s![1, 0..4];
        assert_eq!(info.out_ndim(), 1);
        assert_eq!(info.selectors(), &[Index(1), Selector::range(0, 4)]);
        let info = s![.., 2.., ..3,];
        assert_eq!(info.out_ndim(), 3);
        let info = s![0, 1, 2];
        assert_eq!(info.out_ndim(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(alloc::format!("{}", s![1, 2..4, .., 2.., ..3]),
                   "s![1, 2..4, .., 2.., ..3]");
    }
}
