use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while listing the image library.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The `title` parameter was missing or empty
    #[error("title is required")]
    EmptyTitle,

    /// The title would escape the image root (path separators, `.` or `..`)
    #[error("invalid title: {0:?}")]
    InvalidTitle(String),

    /// No directory with this name under the image root
    #[error("no gallery named {0:?}")]
    TitleNotFound(String),

    /// The gallery directory exists but holds no image files
    #[error("gallery {0:?} has no images")]
    NoImages(String),

    /// Filesystem error while reading the root or a gallery directory
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LibraryError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the metadata store.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// `title` was missing, empty, or not a string
    #[error("title is required")]
    EmptyTitle,

    /// `tags` was missing, not an array, or contained non-strings
    #[error("tags must be an array of strings")]
    InvalidTags,

    /// Failed to read the metadata file
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the metadata file
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata file exists but is not valid JSON for the expected shape
    #[error("{path:?} is not a valid metadata file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
