// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Job reordering with full renumbering and injected rollback.

use rand::Rng;
use tracing::{debug, warn};

use talentflow_core::payload::ReorderRequest;
use talentflow_core::TalentError;

use crate::response::{ReorderResponse, ReorderedJob};
use crate::service::TalentApi;

impl TalentApi {
    /// `PATCH /jobs/:id/reorder`: move the job from one board position to
    /// another and renumber every job to a contiguous `0..N-1` sequence.
    ///
    /// Positions index into the jobs sorted by current `orderId`.
    /// `from_order` must name the moved job's actual position: a mismatch
    /// means the caller's view of the board is stale, and applying the move
    /// blindly would shuffle a different job.
    ///
    /// With probability `reorder_failure_rate` the operation fails after
    /// the renumbering: the store is rolled back to its pre-reorder
    /// snapshot and the caller gets a 500, exercising the UI's optimistic
    /// rollback path.
    pub async fn reorder_job(
        &self,
        id: &str,
        request: ReorderRequest,
    ) -> Result<ReorderResponse, TalentError> {
        let mut store = self.store.write().await;

        // Board sequence: every job id, sorted by current orderId.
        let mut sequence: Vec<(String, u32)> = store
            .jobs()
            .map(|job| (job.id.clone(), job.order_id))
            .collect();
        sequence.sort_by_key(|(_, order_id)| *order_id);
        let mut board: Vec<String> = sequence.into_iter().map(|(job_id, _)| job_id).collect();

        let Some(position) = board.iter().position(|job_id| job_id == id) else {
            return Err(TalentError::not_found("Job not found"));
        };
        if request.from_order != position {
            return Err(TalentError::validation(
                "fromOrder does not match the job's current position",
            ));
        }
        if request.to_order >= board.len() {
            return Err(TalentError::validation("toOrder out of range"));
        }

        // Pre-image for the injected-failure rollback.
        let preimage = store.dump();

        let moved = board.remove(position);
        board.insert(request.to_order, moved);
        for (index, job_id) in board.iter().enumerate() {
            if let Some(job) = store.job_mut(job_id) {
                job.order_id = index as u32;
            }
        }

        let failed = self.rng.lock().await.gen_bool(self.reorder_failure_rate);
        if failed {
            store.load(preimage);
            warn!(job_id = %id, "injected reorder failure fired; store rolled back");
            return Err(TalentError::Internal("Reorder failed, rolled back".into()));
        }

        let jobs: Vec<ReorderedJob> = board
            .iter()
            .enumerate()
            .map(|(index, job_id)| ReorderedJob {
                id: job_id.clone(),
                order_id: index as u32,
            })
            .collect();
        self.persist_best_effort(&store).await;
        debug!(
            job_id = %id,
            from = request.from_order,
            to = request.to_order,
            "board renumbered"
        );
        Ok(ReorderResponse {
            success: true,
            jobs,
        })
    }
}
