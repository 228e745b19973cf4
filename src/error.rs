//! Error taxonomy shared by the traversal, rendering and export paths

use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by canopy.
///
/// Only `NotFound`, `PolicyFile` and `Io` ever reach a caller. `AccessDenied`
/// and `Read` are produced while walking a tree and are recovered at the
/// frame where they happen (skipped entry, inline notice or error block).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path does not exist or is not a directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid policy file {}: {message}", path.display())]
    PolicyFile { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify an I/O failure that happened while reading `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Error::AccessDenied(path.to_path_buf()),
            _ => Error::Read {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
