// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory snapshot gateway for deterministic testing.
//!
//! `MemorySnapshotStore` implements `SnapshotStore` against a single
//! in-process slot, enabling fast tests without temp files. Persist calls
//! are counted, and fault injection turns every write into a storage error
//! so tests can exercise the best-effort write-through path.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use talentflow_core::types::StoreSnapshot;
use talentflow_core::{SnapshotStore, TalentError};

/// An in-memory snapshot gateway holding at most one snapshot.
///
/// Matches the file gateway's contract: `persist` replaces the slot,
/// `restore` clones it out. The slot survives service reboots as long as
/// the same instance is reused, so restart behavior is testable without
/// a real file.
pub struct MemorySnapshotStore {
    slot: Mutex<Option<StoreSnapshot>>,
    persist_count: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemorySnapshotStore {
    /// Create a gateway with an empty slot.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            persist_count: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Create a gateway whose slot already holds `snapshot`, as if a prior
    /// run had persisted it.
    pub fn preload(snapshot: StoreSnapshot) -> Self {
        Self {
            slot: Mutex::new(Some(snapshot)),
            persist_count: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Number of `persist` calls so far, failed ones included.
    pub fn persist_count(&self) -> usize {
        self.persist_count.load(Ordering::SeqCst)
    }

    /// Make every subsequent `persist` fail with a storage error. The slot
    /// keeps whatever it held before.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The snapshot currently in the slot, if any.
    pub async fn current(&self) -> Option<StoreSnapshot> {
        self.slot.lock().await.clone()
    }
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn restore(&self) -> Result<Option<StoreSnapshot>, TalentError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), TalentError> {
        self.persist_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TalentError::Storage {
                source: Box::new(std::io::Error::other("injected snapshot write failure")),
            });
        }
        *self.slot.lock().await = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn one_job_snapshot() -> StoreSnapshot {
        StoreSnapshot {
            jobs: vec![fixtures::job("j1", "Backend Engineer", 0)],
            ..StoreSnapshot::default()
        }
    }

    #[tokio::test]
    async fn restore_returns_none_until_persisted() {
        let gateway = MemorySnapshotStore::new();
        assert_eq!(gateway.restore().await.unwrap(), None);
        assert_eq!(gateway.persist_count(), 0);
    }

    #[tokio::test]
    async fn persist_then_restore_round_trips() {
        let gateway = MemorySnapshotStore::new();
        let snapshot = one_job_snapshot();
        gateway.persist(&snapshot).await.unwrap();
        assert_eq!(gateway.restore().await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn preload_seeds_the_slot() {
        let gateway = MemorySnapshotStore::preload(one_job_snapshot());
        let restored = gateway.restore().await.unwrap().unwrap();
        assert_eq!(restored.jobs[0].id, "j1");
        assert_eq!(gateway.persist_count(), 0, "preload is not a write");
    }

    #[tokio::test]
    async fn persist_replaces_the_previous_snapshot() {
        let gateway = MemorySnapshotStore::preload(one_job_snapshot());
        gateway.persist(&StoreSnapshot::default()).await.unwrap();
        let restored = gateway.restore().await.unwrap().unwrap();
        assert!(restored.jobs.is_empty());
    }

    #[tokio::test]
    async fn persist_count_includes_failed_writes() {
        let gateway = MemorySnapshotStore::new();
        gateway.persist(&StoreSnapshot::default()).await.unwrap();
        gateway.set_fail_writes(true);
        let _ = gateway.persist(&one_job_snapshot()).await;
        assert_eq!(gateway.persist_count(), 2);
    }

    #[tokio::test]
    async fn injected_failure_surfaces_as_storage_error_and_keeps_the_slot() {
        let gateway = MemorySnapshotStore::preload(one_job_snapshot());
        gateway.set_fail_writes(true);

        let err = gateway
            .persist(&StoreSnapshot::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), 500);

        let kept = gateway.current().await.unwrap();
        assert_eq!(kept.jobs[0].id, "j1", "failed write must not clobber the slot");

        gateway.set_fail_writes(false);
        gateway.persist(&StoreSnapshot::default()).await.unwrap();
        assert!(gateway.current().await.unwrap().jobs.is_empty());
    }
}
