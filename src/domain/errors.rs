use crate::domain::constants::NO_HEADER_OR_FOOTER_MESSAGE;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("{}", NO_HEADER_OR_FOOTER_MESSAGE)]
    Empty,

    #[error("file {} not found.", path.display())]
    SourceNotFound { path: PathBuf },
}

/// Per-file failures. These skip the file and never abort the batch.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Skipped {}: Insufficient Permissions ...", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Skipped {}: not valid UTF-8 text ...", path.display())]
    NotText { path: PathBuf },

    #[error("failed to process {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => FileError::NotText { path },
            _ => FileError::Io { path, source },
        }
    }

    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FileError::Io { .. })
    }
}
