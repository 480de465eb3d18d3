use crate::traits::*;
pub use nalgebra::{DMatrix, DVector, RealField};

/// A column whose sd is within this fraction of its mean is constant
const CONSTANT_COLUMN_RTOL: f64 = 10.0 * f64::EPSILON;

impl<T> MatOps for DMatrix<T>
where
    T: RealField + Copy,
{
    type Mat = Self;
    type Scalar = T;

    fn scale_columns_inplace(&mut self) {
        if self.nrows() == 0 {
            return;
        }
        let nn: T = nalgebra::convert(self.nrows() as f64);
        let eps: T = nalgebra::convert(CONSTANT_COLUMN_RTOL);

        for mut x_j in self.column_iter_mut() {
            let mu = x_j.sum() / nn;
            x_j.add_scalar_mut(-mu);
            let sig = (x_j.norm_squared() / nn).sqrt();
            // rounding residue of a constant column, relative to its mean
            let mu_abs = if mu < T::zero() { -mu } else { mu };
            if sig > T::zero() && sig > eps * mu_abs {
                x_j /= sig;
            } else {
                x_j.fill(T::zero());
            }
        }
    }

    fn scale_columns(&self) -> Self::Mat {
        let mut ret = self.clone();
        ret.scale_columns_inplace();
        ret
    }
}

/// Indexes that sort `vals` (stable, so ties keep their original order)
pub fn argsort<T: PartialOrd + Copy>(vals: &[T], asc: bool) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..vals.len()).collect();
    idx.sort_by(|&a, &b| {
        let c = vals[a]
            .partial_cmp(&vals[b])
            .unwrap_or(std::cmp::Ordering::Equal);
        if asc {
            c
        } else {
            c.reverse()
        }
    });
    idx
}
