// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate listing, creation, partial update, and timeline lookup.

use tracing::debug;

use talentflow_core::payload::{CandidateDraft, CandidatePatch, CandidateQuery};
use talentflow_core::types::Candidate;
use talentflow_core::TalentError;

use crate::pagination::paginate;
use crate::response::{CandidateListResponse, CandidateResponse, TimelineResponse};
use crate::service::TalentApi;

impl TalentApi {
    /// `GET /candidates`: filter, then paginate at the fixed page size.
    ///
    /// `search` is a case-insensitive substring match on the name; `stage`
    /// is an exact token, so an unknown token matches nothing.
    pub async fn list_candidates(
        &self,
        query: CandidateQuery,
    ) -> Result<CandidateListResponse, TalentError> {
        let store = self.store.read().await;
        let needle = query.search.as_deref().map(str::to_lowercase);
        let matched: Vec<Candidate> = store
            .candidates()
            .filter(|candidate| {
                needle
                    .as_deref()
                    .is_none_or(|n| candidate.name.to_lowercase().contains(n))
            })
            .filter(|candidate| {
                query
                    .stage
                    .as_deref()
                    .is_none_or(|stage| candidate.stage.as_str() == stage)
            })
            .cloned()
            .collect();

        let slice = paginate(matched, query.page.unwrap_or(1), self.candidate_page_size);
        Ok(CandidateListResponse {
            candidates: slice.items,
            page: slice.page,
            page_size: slice.page_size,
            total_candids: slice.total,
            total_pages: slice.total_pages,
        })
    }

    /// `POST /candidates`: validate the draft, insert, write through.
    ///
    /// The owning job reference is stored as supplied; dangling ids are the
    /// caller's responsibility, matching the loose relational model.
    pub async fn create_candidate(
        &self,
        draft: CandidateDraft,
    ) -> Result<CandidateResponse, TalentError> {
        let fields = draft.validate()?;
        let mut store = self.store.write().await;
        let candidate = store.create_candidate(fields);
        self.persist_best_effort(&store).await;
        debug!(candidate_id = %candidate.id, stage = %candidate.stage, "candidate created");
        Ok(CandidateResponse { candidate })
    }

    /// `PATCH /candidates/:id`: apply only the supplied fields.
    ///
    /// A stage change to a different value appends exactly one timeline
    /// entry, carrying the patch's `notes`; same-stage updates append
    /// nothing. The lookup runs first, so an unknown id reports 404 before
    /// any payload complaint.
    pub async fn update_candidate(
        &self,
        id: &str,
        patch: CandidatePatch,
    ) -> Result<CandidateResponse, TalentError> {
        let mut store = self.store.write().await;
        let Some(candidate) = store.candidate_mut(id) else {
            return Err(TalentError::not_found("Candidate not found"));
        };
        if patch.is_empty() {
            return Err(TalentError::validation("No valid fields to update"));
        }
        let parsed_stage = patch.parsed_stage()?;

        let previous_stage = candidate.stage;
        if let Some(name) = &patch.name {
            candidate.name = name.clone();
        }
        if let Some(email) = &patch.email {
            candidate.email = email.clone();
        }
        if let Some(stage) = parsed_stage {
            candidate.stage = stage;
        }
        let candidate = candidate.clone();

        if let Some(stage) = parsed_stage {
            if stage != previous_stage {
                store.append_timeline(id, stage, patch.notes.clone());
                debug!(
                    candidate_id = %id,
                    from = %previous_stage,
                    to = %stage,
                    "stage change recorded"
                );
            }
        }

        self.persist_best_effort(&store).await;
        Ok(CandidateResponse { candidate })
    }

    /// `GET /candidates/:id/timeline`: the candidate's stage history,
    /// newest first.
    pub async fn candidate_timeline(&self, id: &str) -> Result<TimelineResponse, TalentError> {
        let store = self.store.read().await;
        if store.candidate(id).is_none() {
            return Err(TalentError::not_found("Candidate not found"));
        }
        Ok(TimelineResponse {
            timeline: store.timeline_for_candidate(id),
        })
    }
}
