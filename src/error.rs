//! Error types for mapdlc
//!
//! Library code returns `MapDlcResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::TemplateError;

/// Result type alias for mapdlc operations
pub type MapDlcResult<T> = Result<T, MapDlcError>;

/// Main error type for mapdlc operations
#[derive(Error, Debug)]
pub enum MapDlcError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A manifest template failed to compile
    #[error("invalid {kind} template: {source}")]
    InvalidTemplate {
        kind: &'static str,
        #[source]
        source: TemplateError,
    },

    /// Root input directory could not be listed
    #[error("cannot read input directory {path}: {message}")]
    InputRootUnreadable { path: PathBuf, message: String },

    /// A staging operation failed
    #[error("{operation} failed for {path}: {source}")]
    Staging {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MapDlcError {
    pub(crate) fn staging(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        MapDlcError::Staging {
            operation,
            path: path.into(),
            source,
        }
    }
}
