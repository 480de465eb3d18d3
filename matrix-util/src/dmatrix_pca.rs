use crate::dmatrix_util::argsort;
use crate::traits::PcaOps;
use nalgebra::linalg::SVD;
use nalgebra::{DMatrix, DVector, RealField};

const SVD_MAX_ITER: usize = 0; // no limit

/// Loadings this close (relative) to the largest one count as tied
const SIGN_TIE_RTOL: f64 = 1e-8;

///
/// Index of the loading that decides a component's sign: the first
/// one whose magnitude is within `SIGN_TIE_RTOL` of the largest, so
/// rounding noise between tied loadings can't flip the component.
///
pub fn sign_anchor<T: RealField + Copy>(v: &DVector<T>) -> Option<usize> {
    let abs_v: Vec<T> = v
        .iter()
        .map(|&x| if x < T::zero() { -x } else { x })
        .collect();
    let vmax = abs_v.iter().copied().reduce(|a, b| a.max(b))?;
    let rtol: T = nalgebra::convert(SIGN_TIE_RTOL);
    let cutoff = vmax - rtol * vmax;
    abs_v.iter().position(|&a| a >= cutoff)
}

impl<T> PcaOps for DMatrix<T>
where
    T: RealField + Copy,
{
    type Mat = DMatrix<T>;
    type DVec = DVector<T>;

    /// Exact thin SVD `X = U D V'` of an `n x p` matrix, keeping
    /// the top `rank` right singular vectors as loadings (`p x
    /// rank`) and `X V` as scores (`n x rank`).
    ///
    /// Each component's sign is fixed so that its largest
    /// loading in magnitude is positive (the first one on ties).
    fn pca(&self, rank: usize) -> anyhow::Result<(Self::Mat, Self::DVec, Self::Mat)> {
        let (nn, pp) = self.shape();
        let max_rank = nn.min(pp);

        if rank == 0 || rank > max_rank {
            anyhow::bail!(
                "can't take {} components from a {} x {} matrix",
                rank,
                nn,
                pp
            );
        }

        let svd = SVD::try_new(self.clone(), false, true, T::default_epsilon(), SVD_MAX_ITER)
            .ok_or_else(|| anyhow::anyhow!("SVD did not converge"))?;

        let v_t = svd
            .v_t
            .ok_or_else(|| anyhow::anyhow!("SVD did not return V"))?;

        let dd_all: Vec<T> = svd.singular_values.iter().copied().collect();
        let order = argsort(&dd_all, false);

        let mut loadings = DMatrix::<T>::zeros(pp, rank);
        let mut dd = DVector::<T>::zeros(rank);

        for (k, &i) in order.iter().take(rank).enumerate() {
            let mut v_k = v_t.row(i).transpose();
            if let Some(j) = sign_anchor(&v_k) {
                if v_k[j] < T::zero() {
                    v_k.neg_mut();
                }
            }
            loadings.set_column(k, &v_k);
            dd[k] = dd_all[i];
        }

        let scores = self * &loadings;
        Ok((scores, dd, loadings))
    }
}
