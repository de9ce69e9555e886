use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("dashboard file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unable to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to serialize ConfigMap: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("unable to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The rendered stream differs from the file on disk (or it is missing).
    #[error("{} is out of date, regenerate it", path.display())]
    Stale { path: PathBuf },
}

pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
