use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Cannot read directory '{path}': {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl TreeError {
    pub(crate) fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::DirectoryAccess {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for TreeError {
    fn from(err: std::io::Error) -> Self {
        TreeError::Output(err)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
