use crate::error::{LentilError, Result};
use crate::pca_engine::PcaResult;

use log::{info, warn};
use matrix_util::common_io::mkdir;
use matrix_util::dmatrix_util::argsort;
use matrix_util::traits::IoOps;

/// Number of bin-pairs listed per component by default
pub const DEFAULT_TOP_K: usize = 10;

/// Output file names under a common prefix `P`
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFiles {
    /// `P.csv`: sample scores
    pub scores: Box<str>,
    /// `P_components.csv`: bin-pair loadings
    pub loadings: Box<str>,
    /// `P_pca_plots.png`
    pub plot: Box<str>,
}

impl OutputFiles {
    pub fn new(prefix: &str) -> Self {
        Self {
            scores: format!("{}.csv", prefix).into_boxed_str(),
            loadings: format!("{}_components.csv", prefix).into_boxed_str(),
            plot: format!("{}_pca_plots.png", prefix).into_boxed_str(),
        }
    }

    /// Delete whichever of these files exist
    pub fn remove_all(&self) {
        for file in [&self.scores, &self.loadings, &self.plot] {
            match std::fs::remove_file(&**file) {
                Ok(()) => warn!("removed {}", file),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!("couldn't remove {}: {}", file, e),
            }
        }
    }
}

/// Bin-pairs with the largest absolute loadings on one component
#[derive(Debug, Clone, PartialEq)]
pub struct TopFeatures {
    pub component: Box<str>,
    /// `(key, |loading|)` in decreasing order
    pub features: Vec<(Box<str>, f64)>,
}

///
/// Rank bin-pairs by the magnitude of their loadings, separately
/// for each component. Ties keep the key order.
///
/// * `result` - fitted components
/// * `top_k` - number of bin-pairs per component
///
pub fn top_features(result: &PcaResult, top_k: usize) -> Vec<TopFeatures> {
    result
        .component_names()
        .into_iter()
        .enumerate()
        .map(|(k, component)| {
            let abs_k: Vec<f64> = result.loadings.column(k).iter().map(|x| x.abs()).collect();
            let features = argsort(&abs_k, false)
                .into_iter()
                .take(top_k)
                .map(|i| (result.keys[i].clone(), abs_k[i]))
                .collect();
            TopFeatures {
                component,
                features,
            }
        })
        .collect()
}

pub fn log_top_features(tops: &[TopFeatures]) {
    for top in tops {
        info!("{} top bin-pairs:", top.component);
        for (key, x) in top.features.iter() {
            info!("  {}\t{}", key, x);
        }
    }
}

///
/// Write `sample x component` scores and `key x component`
/// loadings as comma-separated tables with a header row.
/// Existing files are overwritten.
///
pub fn write_tables(result: &PcaResult, files: &OutputFiles) -> Result<()> {
    let components = result.component_names();

    mkdir(&files.scores).map_err(|e| LentilError::io(&files.scores, e))?;

    result
        .scores
        .to_csv_with_names(&files.scores, &result.samples, &components)
        .map_err(|e| LentilError::io(&files.scores, e))?;
    info!("wrote scores: {}", files.scores);

    result
        .loadings
        .to_csv_with_names(&files.loadings, &result.keys, &components)
        .map_err(|e| LentilError::io(&files.loadings, e))?;
    info!("wrote loadings: {}", files.loadings);

    Ok(())
}
