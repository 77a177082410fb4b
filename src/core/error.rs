use std::path::PathBuf;
use thiserror::Error;

use crate::map::validation::ValidationReport;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Input file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Invalid JSON in '{}': {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Map failed validation:\n{0}")]
    Validation(ValidationReport),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
