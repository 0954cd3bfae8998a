//! Scan errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The root, or a directory below it, could not be traversed
    #[error("cannot walk {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The scan root exists but is not a directory
    #[error("scan root {} is not a directory", .path.display())]
    RootNotDirectory { path: PathBuf },

    /// A discovered file could not be opened or read
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line matched the import pattern but no reference could be derived from it
    #[error("malformed import at {}:{line}: {text:?}", .path.display())]
    MalformedImport {
        path: PathBuf,
        line: usize,
        text: String,
    },

    /// Writing the report failed
    #[error("cannot write output")]
    Output(#[source] io::Error),
}

impl ScanError {
    /// Underlying I/O error kind, when there is one
    #[cfg(test)]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ScanError::Walk { source, .. } => source.io_error().map(io::Error::kind),
            ScanError::Io { source, .. } | ScanError::Output(source) => Some(source.kind()),
            ScanError::RootNotDirectory { .. } | ScanError::MalformedImport { .. } => None,
        }
    }
}
