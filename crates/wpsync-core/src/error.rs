use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Any of these aborts the run before the manifest is rewritten.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("manifest {} not found", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("manifest {} does not contain a 'categories' list", .0.display())]
    MissingCategories(PathBuf),

    #[error("failed to create asset directory {}: {source}", .path.display())]
    AssetDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    ManifestSerialize(#[from] serde_json::Error),

    #[error("failed to write manifest {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
