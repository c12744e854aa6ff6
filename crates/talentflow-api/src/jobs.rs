// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Job listing, creation, and partial update.

use tracing::debug;

use talentflow_core::payload::{JobDraft, JobPatch, JobQuery};
use talentflow_core::types::Job;
use talentflow_core::TalentError;

use crate::pagination::paginate;
use crate::response::{JobListResponse, JobResponse};
use crate::service::TalentApi;

impl TalentApi {
    /// `GET /jobs`: filter, then paginate.
    ///
    /// `search` is a case-insensitive substring match on the title;
    /// `status` is an exact token, so an unknown token matches nothing.
    /// The caller may override the configured page size; absent or zero
    /// falls back to the default.
    pub async fn list_jobs(&self, query: JobQuery) -> Result<JobListResponse, TalentError> {
        let store = self.store.read().await;
        let needle = query.search.as_deref().map(str::to_lowercase);
        let matched: Vec<Job> = store
            .jobs()
            .filter(|job| {
                needle
                    .as_deref()
                    .is_none_or(|n| job.title.to_lowercase().contains(n))
            })
            .filter(|job| {
                query
                    .status
                    .as_deref()
                    .is_none_or(|status| job.status.as_str() == status)
            })
            .cloned()
            .collect();

        let page_size = query
            .page_size
            .filter(|&size| size > 0)
            .unwrap_or(self.job_page_size);
        let slice = paginate(matched, query.page.unwrap_or(1), page_size);
        Ok(JobListResponse {
            jobs: slice.items,
            page: slice.page,
            page_size: slice.page_size,
            total_jobs: slice.total,
            total_pages: slice.total_pages,
        })
    }

    /// `POST /jobs`: validate the draft, insert, write through.
    pub async fn create_job(&self, draft: JobDraft) -> Result<JobResponse, TalentError> {
        let fields = draft.validate()?;
        let mut store = self.store.write().await;
        let job = store.create_job(fields);
        self.persist_best_effort(&store).await;
        debug!(job_id = %job.id, title = %job.title, "job created");
        Ok(JobResponse { job })
    }

    /// `PATCH /jobs/:id`: apply only the supplied fields.
    ///
    /// The job is resolved first, so an unknown id reports 404 before any
    /// payload complaint.
    pub async fn update_job(&self, id: &str, patch: JobPatch) -> Result<JobResponse, TalentError> {
        let mut store = self.store.write().await;
        let Some(job) = store.job_mut(id) else {
            return Err(TalentError::not_found("Job not found"));
        };
        patch.apply_to(job)?;
        let job = job.clone();
        self.persist_best_effort(&store).await;
        debug!(job_id = %id, "job updated");
        Ok(JobResponse { job })
    }
}
