use approx::assert_abs_diff_eq;
use matrix_util::traits::{MatOps, PcaOps};
use nalgebra::DMatrix;

fn toy_data() -> DMatrix<f64> {
    DMatrix::from_row_slice(
        5,
        4,
        &[
            2.5, 2.4, 0.5, 1.0, //
            0.5, 0.7, 2.1, 0.0, //
            2.2, 2.9, 0.3, 1.5, //
            1.9, 2.2, 1.0, 0.2, //
            3.1, 3.0, 0.1, 0.9, //
        ],
    )
}

#[test]
fn dmatrix_pca_test() -> anyhow::Result<()> {
    let xx = toy_data().scale_columns();
    let (scores, dd, loadings) = xx.pca(3)?;

    assert_eq!(scores.shape(), (5, 3));
    assert_eq!(loadings.shape(), (4, 3));
    assert_eq!(dd.len(), 3);

    // decreasing singular values
    assert!(dd[0] >= dd[1] && dd[1] >= dd[2]);

    // orthonormal loadings
    let vtv = loadings.transpose() * &loadings;
    assert_abs_diff_eq!(vtv, DMatrix::<f64>::identity(3, 3), epsilon = 1e-10);

    // centred data give centred scores
    for k in 0..3 {
        assert_abs_diff_eq!(scores.column(k).mean(), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(scores.column(k).norm(), dd[k], epsilon = 1e-10);
    }

    // the largest loading of each component is positive
    for k in 0..3 {
        let v_k = loadings.column(k);
        let imax = v_k.iamax();
        assert!(v_k[imax] > 0.0);
    }

    Ok(())
}

#[test]
fn dmatrix_pca_sign_is_stable() -> anyhow::Result<()> {
    let xx = toy_data().scale_columns();
    let neg = -&xx;

    let (s1, _, v1) = xx.pca(2)?;
    let (s2, _, v2) = neg.pca(2)?;

    // flipping the data flips the scores but not the normalized loadings
    assert_abs_diff_eq!(v1, v2, epsilon = 1e-10);
    assert_abs_diff_eq!(s1, -s2, epsilon = 1e-10);
    Ok(())
}

#[test]
fn dmatrix_pca_sign_with_tied_loadings() -> anyhow::Result<()> {
    // the two columns load with equal magnitude and opposite signs
    let xx = DMatrix::<f64>::from_row_slice(
        4,
        2,
        &[
            -1.5, 1.5, //
            -0.5, 0.5, //
            0.5, -0.5, //
            1.5, -1.5, //
        ],
    );

    for data in [xx.clone(), -&xx] {
        let (_, _, v) = data.pca(1)?;
        assert_abs_diff_eq!(v[(0, 0)].abs(), v[(1, 0)].abs(), epsilon = 1e-12);
        assert!(v[(0, 0)] > 0.0);
        assert!(v[(1, 0)] < 0.0);
    }
    Ok(())
}

#[test]
fn dmatrix_pca_too_many_components() {
    let xx = DMatrix::<f64>::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 7.0]);
    assert!(xx.pca(3).is_err());
    assert!(xx.pca(0).is_err());
}
