// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The TalentFlow service object and its boot lifecycle.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use talentflow_config::model::TalentflowConfig;
use talentflow_core::types::{StoreSnapshot, TableCounts};
use talentflow_core::{SnapshotStore, TalentError};
use talentflow_store::EntityStore;

/// The hiring-board API as an in-process service.
///
/// One instance owns the whole dataset behind a read-write lock and exposes
/// the operations of the original HTTP surface as typed methods. Errors
/// carry the equivalent status code via [`TalentError::status`], so an
/// embedding UI can surface failures the way a real backend would.
///
/// Every successful mutation is written through to the snapshot gateway
/// best-effort: a failed write is logged and the mutation stands.
pub struct TalentApi {
    pub(crate) store: Arc<RwLock<EntityStore>>,
    snapshots: Arc<dyn SnapshotStore>,
    pub(crate) job_page_size: u32,
    pub(crate) candidate_page_size: u32,
    pub(crate) reorder_failure_rate: f64,
    pub(crate) rng: Mutex<StdRng>,
}

impl TalentApi {
    /// Boots the service: restores the persisted snapshot when one exists,
    /// otherwise generates the seed dataset and persists it once.
    ///
    /// A snapshot that exists but fails to restore is an error; booting
    /// must not quietly reseed over data that was there before. With
    /// `seed.rng_seed` set, both the seed dataset and the reorder fault
    /// draws are reproducible.
    pub async fn boot(
        config: &TalentflowConfig,
        snapshots: Arc<dyn SnapshotStore>,
    ) -> Result<Self, TalentError> {
        let mut rng = match config.seed.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut store = EntityStore::new();
        match snapshots.restore().await? {
            Some(snapshot) => {
                store.load(snapshot);
                let counts = store.counts();
                info!(
                    jobs = counts.jobs,
                    candidates = counts.candidates,
                    assessments = counts.assessments,
                    timeline_entries = counts.timeline_entries,
                    "store restored from snapshot"
                );
            }
            None => {
                talentflow_seed::seed_store(&mut store, &config.seed, &mut rng);
                let counts = store.counts();
                info!(
                    jobs = counts.jobs,
                    candidates = counts.candidates,
                    assessments = counts.assessments,
                    "no snapshot found; seed dataset generated"
                );
                if let Err(e) = snapshots.persist(&store.dump()).await {
                    warn!(error = %e, "initial snapshot write failed; continuing in-memory");
                }
            }
        }

        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            snapshots,
            job_page_size: config.api.job_page_size,
            candidate_page_size: config.api.candidate_page_size,
            reorder_failure_rate: config.api.reorder_failure_rate.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        })
    }

    /// Writes the current store contents through to the snapshot gateway.
    ///
    /// Called under the same write guard as the mutation it follows, so
    /// snapshots never interleave with a half-applied request. Failures are
    /// logged and swallowed; the mutation stands.
    pub(crate) async fn persist_best_effort(&self, store: &EntityStore) {
        if let Err(e) = self.snapshots.persist(&store.dump()).await {
            warn!(error = %e, "snapshot write failed; mutation kept in memory");
        }
    }

    /// Current per-table row counts.
    pub async fn counts(&self) -> TableCounts {
        self.store.read().await.counts()
    }

    /// Full dump of the current store contents.
    pub async fn dump(&self) -> StoreSnapshot {
        self.store.read().await.dump()
    }
}

/// Parses a raw JSON request body into a typed payload.
///
/// Any parse failure maps to the boundary contract: 400 with the message
/// `Invalid request body`. Unknown keys inside a valid body are ignored by
/// the payload types themselves.
pub fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T, TalentError> {
    serde_json::from_str(raw).map_err(|_| TalentError::validation("Invalid request body"))
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use talentflow_store::FileSnapshotStore;

    use super::testing::{boot_service, job_draft};
    use super::*;

    #[tokio::test]
    async fn boot_without_snapshot_seeds_and_persists() {
        let service = boot_service(|_| {}).await;
        let counts = service.api.counts().await;
        assert_eq!(counts.jobs, 8);
        assert_eq!(counts.candidates, 40);
        assert!(counts.assessments >= 6, "2 assessed jobs, 3-4 each");
        assert_eq!(counts.timeline_entries, 0);

        let gateway = FileSnapshotStore::new(&service.config.storage.snapshot_path);
        let persisted = gateway.restore().await.expect("snapshot readable");
        assert!(persisted.is_some(), "seed dataset is persisted at boot");
    }

    #[tokio::test]
    async fn boot_with_snapshot_restores_instead_of_reseeding() {
        let service = boot_service(|_| {}).await;
        let created = service
            .api
            .create_job(job_draft("Recovery Marker", 99))
            .await
            .expect("create succeeds");

        let snapshots = Arc::new(FileSnapshotStore::new(
            &service.config.storage.snapshot_path,
        ));
        let rebooted = TalentApi::boot(&service.config, snapshots)
            .await
            .expect("reboot succeeds");

        assert_eq!(rebooted.counts().await.jobs, 9);
        let dump = rebooted.dump().await;
        assert!(
            dump.jobs.iter().any(|j| j.id == created.job.id),
            "created job survives the reboot"
        );
    }

    #[tokio::test]
    async fn boot_surfaces_a_corrupt_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, b"definitely not json").expect("write");

        let mut config = TalentflowConfig::default();
        config.storage.snapshot_path = path.to_string_lossy().into_owned();
        let snapshots = Arc::new(FileSnapshotStore::new(&path));

        let result = TalentApi::boot(&config, snapshots).await;
        let err = result.err().expect("corrupt snapshot must abort boot");
        assert_eq!(err.status(), 500);
    }

    #[tokio::test]
    async fn fixed_rng_seed_reproduces_the_dataset() {
        let a = boot_service(|c| c.seed.rng_seed = Some(2026)).await;
        let b = boot_service(|c| c.seed.rng_seed = Some(2026)).await;
        assert_eq!(a.api.dump().await, b.api.dump().await);
    }

    #[test]
    fn parse_payload_maps_bad_json_to_the_contract_message() {
        let err = parse_payload::<talentflow_core::payload::JobDraft>("{not json")
            .err()
            .expect("parse fails");
        assert_eq!(err.to_string(), "Invalid request body");
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn parse_payload_accepts_unknown_keys() {
        let draft: talentflow_core::payload::JobDraft =
            parse_payload(r#"{"title":"X","mystery":42}"#).expect("parses");
        assert_eq!(draft.title.as_deref(), Some("X"));
    }
}
