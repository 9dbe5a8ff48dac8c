// crates/cli/src/error.rs
use dircount_engine::error::EngineError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Help requested")]
    HelpRequested,

    #[error("No directory provided")]
    NoDirectory,

    #[error("Path does not exist")]
    PathNotFound(PathBuf),

    #[error("Not a directory")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Engine(EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::PathNotFound(path) => Self::PathNotFound(path),
            EngineError::NotADirectory(path) => Self::NotADirectory(path),
            other => Self::Engine(other),
        }
    }
}

impl AppError {
    /// Every failure, usage errors included, exits with status 1.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
