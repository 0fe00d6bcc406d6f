//! Errors raised while walking a tree

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("getting file info for '{}': {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading directory '{}': {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing output: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, WalkError>;

impl WalkError {
    pub fn metadata(path: &Path, source: io::Error) -> Self {
        WalkError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn listing(path: &Path, source: io::Error) -> Self {
        WalkError::Listing {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path being queried when the walk failed, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WalkError::Metadata { path, .. } | WalkError::Listing { path, .. } => Some(path),
            WalkError::Output(_) => None,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            WalkError::Metadata { source, .. } | WalkError::Listing { source, .. } => source,
            WalkError::Output(source) => source,
        }
    }
}
