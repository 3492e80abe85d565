use ndtensor::prelude::*;

fn squeeze(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn formatting() {
    let a = Tensor::from_shape_vec([3, 2], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(squeeze(&format!("{}", a)), "{Shape=[3,2]Data=[[1,2],[3,4],[5,6]]}");
    assert_eq!(
        format!("{}", a),
        "{\n    Shape = [3, 2]\n    Data = [[1, 2], [3, 4], [5, 6]]\n}"
    );

    let a = Tensor::from_shape_vec([4], vec![1., 2., 3., 4.]).unwrap();
    assert_eq!(squeeze(&format!("{:.1}", a)), "{Shape=[4]Data=[1.0,2.0,3.0,4.0]}");
    assert_eq!(squeeze(&format!("{:4}", a)), "{Shape=[4]Data=[1,2,3,4]}");
    assert_eq!(format!("{:4}", a).lines().nth(2), Some("    Data = [   1,    2,    3,    4]"));

    let a = Tensor::from_shape_fn([2, 1, 2], |[i, _, k]| (i * 2 + k) as u8);
    assert_eq!(squeeze(&format!("{:b}", a)), "{Shape=[2,1,2]Data=[[[0,1]],[[10,11]]]}");
    assert_eq!(squeeze(&format!("{:e}", a.cast::<f32>())),
               "{Shape=[2,1,2]Data=[[[0e0,1e0]],[[2e0,3e0]]]}");
}

#[test]
fn views_print_their_own_extent() {
    let a = Tensor::from_shape_vec([4, 4], (1..=16).collect::<Vec<i32>>()).unwrap();
    assert_eq!(squeeze(&a.slice(s![1..3, 1..3]).to_string()), "{Shape=[2,2]Data=[[6,7],[10,11]]}");
    assert_eq!(squeeze(&a.slice(s![.., 1]).to_string()), "{Shape=[4]Data=[2,6,10,14]}");
    assert_eq!(squeeze(&a.slice(s![3, 3]).to_string()), "{Shape=[]Data=16}");

    let mut b = a.clone();
    let row = b.slice_mut(s![0, ..]);
    assert_eq!(squeeze(&row.to_string()), "{Shape=[4]Data=[1,2,3,4]}");
}

#[test]
fn debug_format() {
    let a = Tensor::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    assert_eq!(
        format!("{:?}", a),
        "{\n    Shape = [2, 2]\n    Data = [[1, 2], [3, 4]]\n} \
         shape=[2, 2], strides=[2, 1], offset=0, layout=standard"
    );
    let column = a.slice(s![.., 1]);
    assert!(format!("{:?}", column).ends_with("offset=1, layout=strided"));
}
