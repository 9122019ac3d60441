use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raised whenever a directory cannot produce a children list.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("{0} does not exist")]
    NotFound(PathBuf),
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("cannot list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) | Self::NotADirectory(path) | Self::PermissionDenied(path) => path,
            Self::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kind() {
        let path = Path::new("/srv/data");
        let err = ListingError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ListingError::NotFound(_)));

        let err = ListingError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ListingError::PermissionDenied(_)));
        assert_eq!(err.path(), path);

        let err = ListingError::from_io(path, io::Error::other("disk on fire"));
        assert!(matches!(err, ListingError::Io { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }
}
