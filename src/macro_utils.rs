// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Check that every coordinate of `$index` is inside `$shape`.
///
/// Only active with debug assertions; the release build relies on the
/// storage slice's own bounds check.
#[cfg(debug_assertions)]
macro_rules! debug_bounds_check {
    ($shape:expr, $index:expr) => {
        for (axis, (&i, &len)) in $index.iter().zip($shape.iter()).enumerate() {
            assert!(i < len,
                    "ndtensor: index {:?} is out of bounds for shape {:?} (axis {})",
                    $index, $shape, axis);
        }
    };
}

#[cfg(not(debug_assertions))]
macro_rules! debug_bounds_check {
    ($shape:expr, $index:expr) => {};
}
