pub mod assemble; // outer join of samples on bin-pair keys
pub mod contact_record; // one row of a contact matrix
pub mod error;
pub mod pca_engine; // standardization and principal components
pub mod pipeline; // load -> assemble -> PCA -> report
pub mod plot;
pub mod report; // score and loading tables
pub mod sample_loader; // chunked reading of contact matrix files

pub use error::{LentilError, Result};
