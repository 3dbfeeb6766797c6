//! The image library: gallery folders under a single image root.
//!
//! Each direct subdirectory of the root is one gallery ("title"); the image
//! files inside it are its pages. This module lists titles, lists and sorts
//! the pages of a title, and picks cover images. All filesystem access goes
//! through `tokio::fs`.
//!
//! # Layout
//!
//! ```text
//! images/
//! ├── Alpha/
//! │   ├── page (1).jpg
//! │   ├── page (2).jpg
//! │   └── page (10).jpg
//! └── Beta (2)/
//!     └── cover.png
//! ```

pub mod sort;

use std::path::{Path, PathBuf};

use crate::error::LibraryError;

pub use sort::{extract_sort_key, natural_cmp};

/// File extensions treated as gallery pages (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["avif", "jpg", "jpeg", "png", "webp"];

/// Check whether a filename has one of the supported image extensions.
pub fn is_image_file(name: &str) -> bool {
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty() && IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e))
}

// =============================================================================
// Library
// =============================================================================

/// A gallery library rooted at a single directory.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    /// Create a library over the given image root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The image root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List all gallery titles, numeric-aware sorted.
    ///
    /// Only directory entries count; plain files and non-UTF-8 names are
    /// skipped. An unreadable root is an error, never a partial result.
    pub async fn list_titles(&self) -> Result<Vec<String>, LibraryError> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| LibraryError::io(&self.root, e))?;

        let mut titles = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| LibraryError::io(&self.root, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| LibraryError::io(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                titles.push(name.to_string());
            }
        }

        titles.sort_by(|a, b| natural_cmp(a, b));
        Ok(titles)
    }

    /// List the image files of a title, sorted by page order.
    ///
    /// Files are filtered to [`IMAGE_EXTENSIONS`] and sorted ascending by
    /// [`extract_sort_key`]. The sort is stable: files with equal keys keep
    /// their directory order.
    pub async fn list_images(&self, title: &str) -> Result<Vec<String>, LibraryError> {
        let dir = self.title_dir(title)?;

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LibraryError::TitleNotFound(title.to_string()));
            }
            Err(e) => return Err(LibraryError::io(&dir, e)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| LibraryError::io(&dir, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| LibraryError::io(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if is_image_file(&name) {
                files.push(name);
            }
        }

        files.sort_by_key(|name| extract_sort_key(name));
        Ok(files)
    }

    /// The cover image of a title: its first page under the canonical order.
    pub async fn cover_image(&self, title: &str) -> Result<String, LibraryError> {
        let mut files = self.list_images(title).await?;
        if files.is_empty() {
            return Err(LibraryError::NoImages(title.to_string()));
        }
        Ok(files.swap_remove(0))
    }

    /// Resolve the directory of a title, rejecting names that would leave
    /// the image root.
    fn title_dir(&self, title: &str) -> Result<PathBuf, LibraryError> {
        if title.is_empty() {
            return Err(LibraryError::EmptyTitle);
        }
        if title.contains(['/', '\\']) || title == "." || title == ".." {
            return Err(LibraryError::InvalidTitle(title.to_string()));
        }
        Ok(self.root.join(title))
    }
}

// =============================================================================
// Tests
// =============================================================================
