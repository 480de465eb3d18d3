pub mod common_io;
pub mod dmatrix_io;
pub mod dmatrix_pca;
pub mod dmatrix_util;
pub mod traits;
