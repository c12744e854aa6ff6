// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-file implementation of the SnapshotStore trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use talentflow_core::types::StoreSnapshot;
use talentflow_core::{SnapshotStore, TalentError};

/// Snapshot gateway backed by a single JSON file.
///
/// The whole dataset is written as one document under the configured path.
/// Writes land in a sibling `.tmp` file first and are renamed over the
/// target, so an interrupted write leaves the previous snapshot intact.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a gateway for the given snapshot file path.
    ///
    /// Nothing is touched on disk until [`SnapshotStore::restore`] or
    /// [`SnapshotStore::persist`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn storage_err(source: impl std::error::Error + Send + Sync + 'static) -> TalentError {
        TalentError::Storage {
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn restore(&self) -> Result<Option<StoreSnapshot>, TalentError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::storage_err(e)),
        };
        // An unreadable snapshot is surfaced, never silently discarded.
        let snapshot: StoreSnapshot =
            serde_json::from_slice(&raw).map_err(Self::storage_err)?;
        debug!(path = %self.path.display(), bytes = raw.len(), "snapshot restored");
        Ok(Some(snapshot))
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), TalentError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(Self::storage_err)?;
            }
        }
        let raw = serde_json::to_vec(snapshot).map_err(Self::storage_err)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, &raw).await.map_err(Self::storage_err)?;
        fs::rename(&tmp, &self.path).await.map_err(Self::storage_err)?;
        debug!(path = %self.path.display(), bytes = raw.len(), "snapshot persisted");
        Ok(())
    }
}
