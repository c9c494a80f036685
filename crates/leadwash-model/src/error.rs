use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("empty file: {}", .0.display())]
    EmptyFile(PathBuf),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LeadError>;
