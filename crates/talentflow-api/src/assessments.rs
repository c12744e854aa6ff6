// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assessment lookup, creation, question replacement, and submission.

use tracing::debug;

use talentflow_core::payload::{AssessmentDraft, AssessmentSubmission, QuestionsPayload};
use talentflow_core::TalentError;

use crate::response::{AssessmentLookup, AssessmentResponse};
use crate::service::TalentApi;

impl TalentApi {
    /// `GET /assessments/:param`: the id is tried against the assessment
    /// table first; a miss falls through to "every assessment owned by job
    /// `param`". An unknown job id simply yields an empty fan-out.
    pub async fn assessments(&self, param: &str) -> Result<AssessmentLookup, TalentError> {
        let store = self.store.read().await;
        if let Some(assessment) = store.assessment(param) {
            return Ok(AssessmentLookup::Single {
                assessment: assessment.clone(),
            });
        }
        Ok(AssessmentLookup::ForJob {
            assessments: store.assessments_for_job(param).cloned().collect(),
        })
    }

    /// `POST /assessments/create`: validate, check the job reference, then
    /// the question list.
    ///
    /// The order matters: a dangling `jobId` is reported even when the
    /// question list is also empty.
    pub async fn create_assessment(
        &self,
        draft: AssessmentDraft,
    ) -> Result<AssessmentResponse, TalentError> {
        let fields = draft.validate()?;
        let mut store = self.store.write().await;
        if store.job(&fields.job_id).is_none() {
            return Err(TalentError::validation("Job not found for jobId"));
        }
        if fields.questions.is_empty() {
            return Err(TalentError::validation(
                "Questions must be a non-empty array",
            ));
        }
        let assessment = store.create_assessment(fields);
        self.persist_best_effort(&store).await;
        debug!(
            assessment_id = %assessment.id,
            job_id = %assessment.job_id,
            questions = assessment.questions.len(),
            "assessment created"
        );
        Ok(AssessmentResponse { assessment })
    }

    /// `PUT /assessments/:id`: replace the question list wholesale.
    ///
    /// Existence is checked before the payload, so an unknown id reports
    /// 404 even when the body is also bad.
    pub async fn replace_questions(
        &self,
        id: &str,
        payload: QuestionsPayload,
    ) -> Result<AssessmentResponse, TalentError> {
        let mut store = self.store.write().await;
        if store.assessment(id).is_none() {
            return Err(TalentError::not_found("Assessment not found for this job"));
        }
        let questions = payload.validate()?;
        let assessment = store
            .replace_questions(id, questions)
            .ok_or_else(|| TalentError::not_found("Assessment not found for this job"))?;
        self.persist_best_effort(&store).await;
        debug!(
            assessment_id = %id,
            questions = assessment.questions.len(),
            "questions replaced"
        );
        Ok(AssessmentResponse { assessment })
    }

    /// `POST /assessments/:jobId/submit`: acknowledged, not persisted.
    ///
    /// The original surface records nothing for submissions; this keeps the
    /// shape (accept and return success) so UI flows complete.
    pub async fn submit_assessment(
        &self,
        job_id: &str,
        submission: AssessmentSubmission,
    ) -> Result<(), TalentError> {
        debug!(
            job_id = %job_id,
            candidate_id = ?submission.candidate_id,
            responses = submission.responses.len(),
            "assessment submission acknowledged"
        );
        Ok(())
    }
}
