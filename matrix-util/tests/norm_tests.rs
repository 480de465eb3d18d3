use approx::assert_abs_diff_eq;
use matrix_util::traits::MatOps;
use nalgebra::DMatrix;

#[test]
fn scale_columns_test() {
    let mut xx = DMatrix::<f64>::from_row_slice(
        4,
        3,
        &[
            1.0, 10.0, 7.0, //
            2.0, 20.0, 7.0, //
            3.0, 30.0, 7.0, //
            4.0, 45.0, 7.0, //
        ],
    );
    xx.scale_columns_inplace();

    for j in 0..2 {
        let x_j = xx.column(j);
        assert_abs_diff_eq!(x_j.mean(), 0.0, epsilon = 1e-12);
        // population variance
        assert_abs_diff_eq!(x_j.norm_squared() / 4.0, 1.0, epsilon = 1e-12);
    }

    // constant column is centred, not divided by zero
    for &x in xx.column(2).iter() {
        assert_eq!(x, 0.0);
    }
}

#[test]
fn scale_constant_column_with_rounding() {
    let mut xx = DMatrix::<f64>::from_element(3, 1, 0.1);
    xx.scale_columns_inplace();
    assert!(xx.iter().all(|&x| x == 0.0));
}

#[test]
fn scale_columns_ignores_overall_magnitude() {
    let xx = DMatrix::<f64>::from_row_slice(
        4,
        3,
        &[
            1.0, 10.0, 7.0, //
            2.0, 20.0, 7.0, //
            3.0, 30.0, 7.0, //
            4.0, 45.0, 7.0, //
        ],
    );
    let zz = xx.scale_columns();

    for c in [1e-16, 1e-3, 1e12] {
        let zz_c = (&xx * c).scale_columns();
        assert_abs_diff_eq!(zz_c, zz, epsilon = 1e-9);
    }
}
