use adventure_core::{CatalogError, SelectionError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog file not found: {path}")]
    CatalogFileNotFound { path: PathBuf },

    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl CliError {
    pub fn catalog_not_found(path: PathBuf) -> Self {
        CliError::CatalogFileNotFound { path }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
