//! Errors of the contact-matrix PCA pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LentilError {
    /// A file is missing or can't be read/written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: Box<str>,
        #[source]
        source: std::io::Error,
    },

    /// Malformed input data
    #[error("parse error: {0}")]
    Parse(String),

    /// Inconsistent or insufficient inputs/options
    #[error("configuration error: {0}")]
    Config(String),

    /// The decomposition failed numerically
    #[error("numerical error: {0}")]
    Numeric(String),

    /// The drawing backend failed
    #[error("plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, LentilError>;

impl LentilError {
    /// Attach `path` to an error coming out of `matrix_util` I/O helpers
    pub fn io(path: &str, err: anyhow::Error) -> Self {
        let source = match err.downcast::<std::io::Error>() {
            Ok(e) => e,
            Err(e) => std::io::Error::other(e.to_string()),
        };
        LentilError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LentilError::Parse(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, LentilError::Config(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, LentilError::Io { .. })
    }
}
