use ndtensor::materialize::{copy_elementwise, copy_elementwise_with};
use ndtensor::prelude::*;
use ndtensor::ErrorKind;

use defmac::defmac;
use itertools::Itertools;
use quickcheck::quickcheck;

#[test]
fn construct_with_fill_value() {
    let a = Tensor::from_elem([2, 3], 42);
    assert_eq!(a.len(), 6);
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.strides(), &[3, 1]);
    assert_eq!(a.offset(), 0);
    assert!(a.iter().all(|&x| x == 42));
    assert!(!a.as_ptr().is_null());
}

#[test]
fn construct_default_and_zeros() {
    let a = Tensor::<String, 2>::new([2, 2]);
    assert!(a.iter().all(|s| s.is_empty()));

    let z = Tensor3::<f64>::zeros([2, 3, 4]);
    assert_eq!(z.strides(), &[12, 4, 1]);
    assert_eq!(z.len(), 24);
    assert!(z.iter().all(|&x| x == 0.));

    let scalar = Tensor0::from_elem([], 7u8);
    assert_eq!(scalar.len(), 1);
    assert_eq!(scalar[[]], 7);
}

#[test]
fn construct_with_zero_axes() {
    defmac!(test_from_fn_with_zero shape => {
        let a = Tensor::from_shape_fn(shape, |_| 1u8);
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
        assert_eq!(a.shape(), &shape);
        assert_eq!(a.iter().count(), 0);
    });
    test_from_fn_with_zero!([0]);
    test_from_fn_with_zero!([0, 1]);
    test_from_fn_with_zero!([2, 0]);
    test_from_fn_with_zero!([0, 1, 2]);
}

#[test]
fn from_shape_vec_length() {
    let err = Tensor::from_shape_vec([2, 3], vec![0; 5]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleLength);
    let err = Tensor::from_shape_vec([usize::MAX, 2], Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
}

#[test]
fn element_access() {
    let mut a = Tensor::from_shape_vec([3, 2], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a[[2, 1]], 6);
    assert_eq!(*a.at([1, 0]), 3);
    assert_eq!(a.get([1, 1]), Some(&4));
    assert_eq!(a.get([3, 0]), None);
    assert_eq!(a.get([0, 2]), None);

    a[[0, 1]] = 20;
    *a.at_mut([2, 0]) = 50;
    if let Some(x) = a.get_mut([1, 1]) {
        *x = 40;
    }
    assert_eq!(a.get_mut([1, 2]), None);
    assert_eq!(a.as_slice(), &[1, 20, 3, 40, 50, 6]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_out_of_bounds() {
    let a = Tensor::from_elem([2, 2], 0);
    let _ = a[[0, 2]];
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn at_checks_bounds_in_debug() {
    let a = Tensor::from_elem([2, 2], 0);
    // [0, 2] addresses element [1, 0] of the buffer, caught only by the debug check
    let _ = a.at([0, 2]);
}

#[test]
fn move_leaves_empty_tensor() {
    let mut a = Tensor::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    let ptr = a.as_ptr();
    let b = a.take();
    assert!(a.as_ptr().is_null());
    assert!(a.is_taken());
    assert_eq!(b.as_ptr(), ptr);
    assert_eq!(b.shape(), &[2, 2]);
    assert_eq!(b.strides(), &[2, 1]);
    assert_eq!(b.as_slice(), &[1, 2, 3, 4]);

    let c = b;
    assert_eq!(c.as_ptr(), ptr);
}

#[test]
fn clone_is_independent() {
    let a = Tensor::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    let mut b = a.clone();
    assert_ne!(a.as_ptr(), b.as_ptr());
    assert_eq!(a, b);
    b[[0, 0]] = 10;
    assert_eq!(a[[0, 0]], 1);
    assert_ne!(a, b);
}

#[test]
fn materialize_view() {
    let a = Tensor::from_shape_vec([4, 4], (1..=16).collect::<Vec<i32>>()).unwrap();
    let column = a.slice(s![.., 1]);
    let b: Tensor<i64, 1> = Tensor::from_tensor_like(&column);
    assert_eq!(b.as_slice(), &[2, 6, 10, 14]);
    assert_eq!(b.strides(), &[1]);

    let block = a.slice(s![1..3, 1..3]).to_owned_tensor();
    assert_eq!(block.as_slice(), &[6, 7, 10, 11]);
    assert_eq!(block.strides(), &[2, 1]);

    let t: Tensor<i32, 2> = a.slice(s![2.., 2..]).into();
    assert_eq!(t.as_slice(), &[11, 12, 15, 16]);
}

#[test]
fn assign_between_layouts() {
    let a = Tensor::from_shape_vec([3, 3], (0..9u8).collect()).unwrap();
    let mut b = Tensor::<u32, 2>::zeros([3, 3]);

    // transpose-like copy: rows of a into columns of b
    for i in 0..3 {
        b.slice_mut(s![.., i]).assign(&a.slice(s![i, ..]));
    }
    assert_eq!(b.as_slice(), &[0, 3, 6, 1, 4, 7, 2, 5, 8]);

    let err = b.try_assign(&a.slice(s![..2, ..])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
    // not modified
    assert_eq!(b.as_slice(), &[0, 3, 6, 1, 4, 7, 2, 5, 8]);
}

#[test]
#[should_panic(expected = "could not assign")]
fn assign_shape_mismatch_panics() {
    let a = Tensor::from_elem([2, 3], 1.);
    let mut b = Tensor::from_elem([3, 2], 0.);
    b.assign(&a);
}

#[test]
fn copy_with_conversion() {
    let a = Tensor::from_shape_fn([2, 3], |[i, j]| (i * 3 + j) as f32 + 0.5);
    let mut b = Tensor::from_elem([3], String::new());
    copy_elementwise_with(&a.slice(s![1, ..]), &mut b, |x| format!("{:.1}", x)).unwrap();
    assert_eq!(b.as_slice(), &["3.5", "4.5", "5.5"]);

    let mut c = Tensor::from_elem([2, 3], 0f64);
    copy_elementwise(&a, &mut c).unwrap();
    assert_eq!(c[[1, 2]], 5.5);
}

#[test]
fn fill_strided_view() {
    let mut a = Tensor::from_elem([4, 4], 0);
    a.slice_mut(s![1..3, ..]).fill(42);
    a.slice_mut(s![.., 0]).fill(7);
    for (i, j) in (0..4).cartesian_product(0..4) {
        let expected = if j == 0 {
            7
        } else if i == 1 || i == 2 {
            42
        } else {
            0
        };
        assert_eq!(a[[i, j]], expected, "at [{}, {}]", i, j);
    }
}

#[test]
fn cast_elements() {
    let a = Tensor::from_shape_vec([2, 2], vec![1.7f64, -2.2, 300.0, 4.0]).unwrap();
    let b = a.cast::<i32>();
    assert_eq!(b.as_slice(), &[1, -2, 300, 4]);
    let c = a.slice(s![.., 0]).cast::<u8>();
    assert_eq!(c.as_slice(), &[1, 255]);
}

#[test]
fn iterate_in_row_major_order() {
    let a = Tensor::from_shape_fn([2, 3, 2], |[i, j, k]| (i, j, k));
    let v = a.slice(s![.., 1.., 1]);
    let expected = (0..2).cartesian_product(1..3).map(|(i, j)| (i, j, 1)).collect_vec();
    assert_eq!(v.iter().copied().collect_vec(), expected);
    assert_eq!(v.iter().len(), 4);
    assert_eq!((&v).into_iter().count(), 4);
    assert_eq!(a.iter().len(), 12);
    let mut n = 0;
    for _ in &a {
        n += 1;
    }
    assert_eq!(n, 12);
}

#[test]
fn equality_across_kinds() {
    let a = Tensor::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    let b = Tensor::from_shape_vec([2, 4], vec![0, 1, 2, 0, 0, 3, 4, 0]).unwrap();
    let view = b.slice(s![.., 1..3]);
    assert_eq!(a, view);
    assert_eq!(view, a);
    assert_eq!(view, a.view());
    assert_ne!(a, b.slice(s![.., ..2]));
    let reshaped = Tensor::from_shape_vec([1, 4], vec![1, 2, 3, 4]).unwrap();
    assert_ne!(a, reshaped);
}

quickcheck! {
    fn materialize_round_trip(rows: u8, cols: u8, r0: u8, c0: u8) -> bool {
        let rows = rows as usize % 7 + 1;
        let cols = cols as usize % 7 + 1;
        let r0 = r0 as usize % rows;
        let c0 = c0 as usize % cols;
        let a = Tensor::from_shape_fn([rows, cols], |[i, j]| (i * cols + j) as i64);

        let view = a.slice(s![r0.., c0..]);
        let owned: Tensor<i64, 2> = Tensor::from_tensor_like(&view);
        let again = owned.slice(s![.., ..]);
        owned.strides() == &[cols - c0, 1]
            && again == view
            && owned == view
    }
}
