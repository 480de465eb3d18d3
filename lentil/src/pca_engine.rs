use crate::assemble::AssembledMatrix;
use crate::error::{LentilError, Result};

use log::{debug, info, warn};
use matrix_util::traits::{MatOps, PcaOps};
use nalgebra::{DMatrix, DVector};

/// Number of principal components reported and plotted
pub const NUM_COMPONENTS: usize = 3;

/// Principal components of the samples
#[derive(Debug, Clone)]
pub struct PcaResult {
    /// observation names (rows of `scores`)
    pub samples: Vec<Box<str>>,
    /// feature names (rows of `loadings`)
    pub keys: Vec<Box<str>>,
    /// `sample x component`
    pub scores: DMatrix<f64>,
    /// `key x component`
    pub loadings: DMatrix<f64>,
    pub singular_values: DVector<f64>,
    pub explained_variance_ratio: Vec<f64>,
}

impl PcaResult {
    pub fn num_components(&self) -> usize {
        self.scores.ncols()
    }

    /// `PC1`, `PC2`, ...
    pub fn component_names(&self) -> Vec<Box<str>> {
        component_names(self.num_components())
    }
}

pub fn component_names(k: usize) -> Vec<Box<str>> {
    (1..=k).map(|i| format!("PC{}", i).into_boxed_str()).collect()
}

///
/// Standardize every bin-pair across samples and take the top
/// principal components. Samples are observations, bin-pairs
/// features, so the `key x sample` matrix is transposed first.
///
/// * `data` - assembled `key x sample` matrix
/// * `num_components` - number of components
///
pub fn fit_pca(data: &AssembledMatrix, num_components: usize) -> Result<PcaResult> {
    let nsamples = data.num_samples();
    let nkeys = data.num_keys();

    if num_components == 0 {
        return Err(LentilError::Config("need at least one component".into()));
    }

    if nsamples < num_components {
        return Err(LentilError::Config(format!(
            "{} components need at least {} samples, but found {}",
            num_components, num_components, nsamples
        )));
    }

    if nkeys < num_components {
        return Err(LentilError::Config(format!(
            "{} components need at least {} bin-pairs, but found {}",
            num_components, num_components, nkeys
        )));
    }

    let mut xx = data.mat.transpose();
    xx.scale_columns_inplace();

    let nconst = xx
        .column_iter()
        .filter(|x_j| x_j.iter().all(|&x| x == 0.0))
        .count();
    if nconst > 0 {
        debug!("{} bin-pairs without variance across samples", nconst);
    }

    let total_ss = xx.norm_squared();
    if total_ss <= 0.0 {
        warn!("no bin-pair varies across samples");
    }

    let (scores, singular_values, loadings) = xx
        .pca(num_components)
        .map_err(|e| LentilError::Numeric(e.to_string()))?;

    let explained_variance_ratio: Vec<f64> = singular_values
        .iter()
        .map(|&d| if total_ss > 0.0 { d * d / total_ss } else { 0.0 })
        .collect();

    for (k, r) in explained_variance_ratio.iter().enumerate() {
        info!("PC{}: {:.2}% of variance", k + 1, 100.0 * r);
    }

    Ok(PcaResult {
        samples: data.samples.clone(),
        keys: data.keys.clone(),
        scores,
        loadings,
        singular_values,
        explained_variance_ratio,
    })
}
