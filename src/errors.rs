// src/errors.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error accessing path '{path}': {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("CSV error in '{path}': {source}")]
    Csv { path: PathBuf, #[source] source: csv::Error },

    #[error("Platform API error (querying the foreground window): {0}")]
    Platform(String),

    #[error("Failed to set Ctrl-C handler: {0}")]
    CtrlC(#[from] ctrlc::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AppError::Io { path: path.to_path_buf(), source }
    }

    pub fn csv(path: &Path, source: csv::Error) -> Self {
        AppError::Csv { path: path.to_path_buf(), source }
    }

    /// True for failures of the CSV file itself (create/open/write).
    pub fn is_io(&self) -> bool {
        matches!(self, AppError::Io { .. } | AppError::Csv { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
