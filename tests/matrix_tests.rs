use forge_nn::Matrix;

#[test]
fn test_zeros_shape() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.rows, 2);
    assert_eq!(m.cols, 3);
    assert_eq!(m.row(0), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_row_vector() {
    let m = Matrix::row_vector(vec![1.0, 2.0, 3.0]);
    assert_eq!(m.rows, 1);
    assert_eq!(m.cols, 3);
    assert_eq!(m.get(0, 2), 3.0);
}

#[test]
fn test_transpose() {
    let mut m = Matrix::zeros(2, 3);
    m.set(0, 1, 5.0);
    m.set(1, 2, -2.0);

    let t = m.transpose();
    assert_eq!(t.rows, 3);
    assert_eq!(t.cols, 2);
    assert_eq!(t.get(1, 0), 5.0);
    assert_eq!(t.get(2, 1), -2.0);
}

#[test]
fn test_matmul() {
    // [1 2] * [5 6]   [19 22]
    // [3 4]   [7 8] = [43 50]
    let mut a = Matrix::zeros(2, 2);
    a.set(0, 0, 1.0); a.set(0, 1, 2.0);
    a.set(1, 0, 3.0); a.set(1, 1, 4.0);
    let mut b = Matrix::zeros(2, 2);
    b.set(0, 0, 5.0); b.set(0, 1, 6.0);
    b.set(1, 0, 7.0); b.set(1, 1, 8.0);

    let c = a * b;
    assert_eq!(c.row(0), &[19.0, 22.0]);
    assert_eq!(c.row(1), &[43.0, 50.0]);
}

#[test]
fn test_add_sub() {
    let a = Matrix::row_vector(vec![1.0, 2.0]);
    let b = Matrix::row_vector(vec![0.5, -1.0]);

    let sum = a.clone() + b.clone();
    assert_eq!(sum.row(0), &[1.5, 1.0]);

    let diff = a - b;
    assert_eq!(diff.row(0), &[0.5, 3.0]);
}

#[test]
fn test_hadamard() {
    let a = Matrix::row_vector(vec![2.0, 3.0]);
    let b = Matrix::row_vector(vec![4.0, -1.0]);
    let h = a.hadamard(&b);
    assert_eq!(h.row(0), &[8.0, -3.0]);
}

#[test]
fn test_map() {
    let m = Matrix::row_vector(vec![1.0, -2.0]);
    let doubled = m.map(|x| x * 2.0);
    assert_eq!(doubled.row(0), &[2.0, -4.0]);
}

#[test]
#[should_panic]
fn test_matmul_shape_mismatch_panics() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    let _ = a * b;
}

#[test]
fn test_random_in_range() {
    let m = Matrix::random(4, 4);
    for i in 0..4 {
        for j in 0..4 {
            let v = m.get(i, j);
            assert!((-1.0..1.0).contains(&v), "value {v} out of [-1, 1)");
        }
    }
}
