// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::Ix;

/// An error related to tensor shape, selectors or layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to tensor shape, selectors or layout.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// incompatible shapes
    IncompatibleShapes,
    /// the number of elements does not match the shape
    IncompatibleLength,
    /// wrong number of selectors, or of range selectors, for the requested orders
    SelectorCount,
    /// a selector or stride leads to out of bounds indexing
    OutOfBounds,
    /// the number of elements overflows isize
    Overflow,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::IncompatibleShapes => "incompatible shapes",
            ErrorKind::IncompatibleLength => "number of elements does not match the shape",
            ErrorKind::SelectorCount => "selector count does not match the tensor order",
            ErrorKind::OutOfBounds => "selector or stride leads to out of bounds indexing",
            ErrorKind::Overflow => "number of elements overflows isize",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}

pub(crate) fn incompatible_shapes(_a: &[Ix], _b: &[Ix]) -> ShapeError {
    from_kind(ErrorKind::IncompatibleShapes)
}
