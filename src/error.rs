use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("interactive prompt unavailable: {0}")]
    InteractionUnavailable(String),

    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("unknown folder: {0}")]
    UnknownFolder(String),

    #[error("invalid template table: {0}")]
    Template(#[from] serde_json::Error),

    #[error("cannot determine base directory: {0}")]
    BaseDir(#[source] io::Error),

    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
