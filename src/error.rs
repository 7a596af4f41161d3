use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of [`ImageFolderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing root, no class subdirectories, or an unreadable directory
    Setup,
    /// Retrieval index outside `[0, len)`
    IndexOutOfRange,
    /// Missing, corrupt or unreadable image file
    Decode,
    /// Transform missing or failed
    Transform,
}

#[derive(Debug, Error)]
pub enum ImageFolderError {
    #[error("dataset root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("no class subdirectories found in {}", .0.display())]
    NoClasses(PathBuf),
    #[error("failed to scan directory {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("index {index} out of range for dataset of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("no transform was supplied to the dataset")]
    MissingTransform,
    #[error("transform failed: {0}")]
    Transform(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ImageFolderError {
    /// Wraps anything a [`Transform`](crate::Transform) fails with, messages included
    pub fn transform<E>(err: E) -> ImageFolderError
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ImageFolderError::Transform(err.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageFolderError::NotADirectory(_)
            | ImageFolderError::NoClasses(_)
            | ImageFolderError::Scan { .. } => ErrorKind::Setup,
            ImageFolderError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ImageFolderError::Decode { .. } => ErrorKind::Decode,
            ImageFolderError::MissingTransform | ImageFolderError::Transform(_) => {
                ErrorKind::Transform
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageFolderError>;
