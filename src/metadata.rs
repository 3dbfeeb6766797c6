//! Persisted per-title metadata.
//!
//! Tags are stored as a single JSON document mapping title → record,
//! pretty-printed:
//!
//! ```json
//! {
//!   "Alpha": {
//!     "tags": ["ongoing", "favorite"]
//!   }
//! }
//! ```
//!
//! The store reads, modifies, and rewrites the whole file on every update.
//! There is no lock discipline: concurrent writers race and the last write
//! wins, which is acceptable only under a single-writer assumption. The
//! [`MetadataStore`] trait is the seam where a locking or database-backed
//! implementation would slot in.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MetadataError;

/// The metadata record of a single title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMetadata {
    /// Ordered tag list
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The full persisted mapping. `BTreeMap` keeps the file output stable.
pub type MetadataMap = BTreeMap<String, TitleMetadata>;

// =============================================================================
// Store Trait
// =============================================================================

/// Read/modify/write access to the title → tags mapping.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Read the whole mapping. A missing backing file is an empty mapping,
    /// not an error.
    async fn read_all(&self) -> Result<MetadataMap, MetadataError>;

    /// Replace the tag list of one title, preserving all other titles.
    ///
    /// The title must be non-empty. Titles absent from the mapping are
    /// created.
    async fn set_tags(&self, title: &str, tags: Vec<String>) -> Result<(), MetadataError>;
}

// =============================================================================
// JSON File Store
// =============================================================================

/// Whole-file JSON implementation of [`MetadataStore`].
#[derive(Debug, Clone)]
pub struct JsonMetadataStore {
    path: PathBuf,
}

impl JsonMetadataStore {
    /// Create a store backed by the given file path. The file is created on
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MetadataStore for JsonMetadataStore {
    async fn read_all(&self) -> Result<MetadataMap, MetadataError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(MetadataMap::new());
            }
            Err(e) => {
                return Err(MetadataError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| MetadataError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    async fn set_tags(&self, title: &str, tags: Vec<String>) -> Result<(), MetadataError> {
        if title.is_empty() {
            return Err(MetadataError::EmptyTitle);
        }

        let mut all = self.read_all().await?;
        all.entry(title.to_string()).or_default().tags = tags;

        let json = serde_json::to_string_pretty(&all).expect("tag map serializes to JSON");
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| MetadataError::Write {
                path: self.path.clone(),
                source: e,
            })
    }
}

// =============================================================================
// Tests
// =============================================================================
