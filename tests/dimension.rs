use ndtensor::dimension::{
    default_strides, is_standard_layout, size_of_shape, size_of_shape_checked, stride_offset,
};
use ndtensor::ErrorKind;

use quickcheck::quickcheck;

#[test]
fn size_and_strides() {
    assert_eq!(size_of_shape(&[]), 1);
    assert_eq!(size_of_shape(&[4]), 4);
    assert_eq!(size_of_shape(&[2, 3, 4]), 24);
    assert_eq!(size_of_shape(&[2, 0, 4]), 0);

    assert_eq!(default_strides(&[]), []);
    assert_eq!(default_strides(&[4]), [1]);
    assert_eq!(default_strides(&[2, 3]), [3, 1]);
    assert_eq!(default_strides(&[2, 3, 4]), [12, 4, 1]);
    assert_eq!(default_strides(&[4, 4]), [4, 1]);
}

#[test]
fn checked_size() {
    assert_eq!(size_of_shape_checked(&[2, 3]), Ok(6));
    assert_eq!(size_of_shape_checked(&[0, 3]), Ok(0));
    assert_eq!(size_of_shape_checked(&[]), Ok(1));
    let err = size_of_shape_checked(&[usize::MAX, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    // zero-length axes do not hide an overflowing product
    let err = size_of_shape_checked(&[0, usize::MAX, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    let err = size_of_shape_checked(&[isize::MAX as usize + 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn linear_offset() {
    assert_eq!(stride_offset(&[], &[], 0), 0);
    assert_eq!(stride_offset(&[], &[], 7), 7);
    assert_eq!(stride_offset(&[1, 2], &[4, 1], 0), 6);
    assert_eq!(stride_offset(&[1, 2], &[4, 1], 5), 11);
    assert_eq!(stride_offset(&[2, 1, 3], &[12, 4, 1], 0), 31);
}

#[test]
fn standard_layout() {
    assert!(is_standard_layout(&[2, 3], &[3, 1]));
    assert!(!is_standard_layout(&[2, 3], &[1, 2]));
    assert!(!is_standard_layout(&[4], &[4]));
    assert!(is_standard_layout(&[], &[]));
}

quickcheck! {
    fn size_is_product(shape: Vec<u8>) -> bool {
        // order 3 shapes with small extents
        let s: [usize; 3] = match shape.as_slice() {
            [a, b, c, ..] => [*a as usize % 9, *b as usize % 9, *c as usize % 9],
            _ => return true,
        };
        size_of_shape(&s) == s[0] * s[1] * s[2]
            && size_of_shape_checked(&s) == Ok(s[0] * s[1] * s[2])
    }

    fn strides_are_row_major(a: u8, b: u8, c: u8, d: u8) -> bool {
        let s = [a as usize % 7, b as usize % 7, c as usize % 7, d as usize % 7];
        let strides = default_strides(&s);
        strides.len() == s.len()
            && strides[3] == 1
            && (0..3).all(|k| strides[k] == strides[k + 1] * s[k + 1])
    }

    fn offsets_of_default_strides_enumerate_buffer(a: u8, b: u8) -> bool {
        let s = [a as usize % 6 + 1, b as usize % 6 + 1];
        let strides = default_strides(&s);
        let offsets: Vec<usize> = ndtensor::indices(s)
            .map(|ix| stride_offset(&ix, &strides, 0))
            .collect();
        offsets == (0..size_of_shape(&s)).collect::<Vec<_>>()
    }
}
