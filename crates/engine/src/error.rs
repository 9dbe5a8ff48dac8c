use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Counting task for '{path}' panicked: {message}")]
    TaskPanicked { path: PathBuf, message: String },

    #[error("Failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Errors that abort a run regardless of the strict setting.
    #[must_use]
    pub const fn is_run_level(&self) -> bool {
        matches!(self, Self::TaskPanicked { .. } | Self::Pool(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
