//! Errors from hiding and revealing paths.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error produced by a hide, reveal, or hidden-state query.
#[derive(Error, Debug)]
pub enum HideError {
    #[error("cannot rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read attributes of {}: {source}", path.display())]
    ReadAttribute {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot set attributes of {}: {source}", path.display())]
    WriteAttribute {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, HideError>;

impl HideError {
    /// Get the kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            HideError::Rename { source, .. } => source.kind(),
            HideError::ReadAttribute { source, .. } => source.kind(),
            HideError::WriteAttribute { source, .. } => source.kind(),
            HideError::Task(_) => io::ErrorKind::Other,
        }
    }

    /// Query whether this error was caused by a missing path.
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rename_message() {
        let err = HideError::Rename {
            from: PathBuf::from("fake"),
            to: PathBuf::from(".fake"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "cannot rename fake to .fake: no such file");
    }

    #[test]
    fn test_attribute_kind() {
        let err = HideError::WriteAttribute {
            path: PathBuf::from(".temp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
