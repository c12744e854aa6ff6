// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence gateway trait for whole-store snapshots.

use async_trait::async_trait;

use crate::error::TalentError;
use crate::types::StoreSnapshot;

/// Gateway to the single persisted snapshot of the entity store.
///
/// There is exactly one logical slot: `persist` replaces whatever was
/// stored before, and `restore` returns the latest persisted state. The
/// service layer writes through this trait after every successful mutation,
/// best-effort; a failed write is logged and never fails the originating
/// request.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the previously persisted snapshot, or `None` when nothing has
    /// been persisted yet.
    async fn restore(&self) -> Result<Option<StoreSnapshot>, TalentError>;

    /// Replaces the persisted snapshot.
    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), TalentError>;
}
