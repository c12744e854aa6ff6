// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response envelopes of the API surface.
//!
//! Serialized field names preserve the original wire contract (`pageSize`,
//! `totalJobs`, `totalCandids`, `orderId`), so an embedding UI can consume
//! these envelopes unchanged.

use serde::Serialize;

use talentflow_core::types::{Assessment, Candidate, Job, TimelineEntry};
use talentflow_core::TalentError;

/// `GET /jobs` envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub page: u32,
    pub page_size: u32,
    pub total_jobs: usize,
    pub total_pages: u32,
}

/// Envelope of job create and update.
#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub job: Job,
}

/// One job's position after a reorder, trimmed to what the caller needs to
/// verify its optimistic update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderedJob {
    pub id: String,
    pub order_id: u32,
}

/// Successful reorder envelope: the whole board in its new order.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderResponse {
    pub success: bool,
    pub jobs: Vec<ReorderedJob>,
}

/// `GET /candidates` envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListResponse {
    pub candidates: Vec<Candidate>,
    pub page: u32,
    pub page_size: u32,
    pub total_candids: usize,
    pub total_pages: u32,
}

/// Envelope of candidate create and update.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResponse {
    pub candidate: Candidate,
}

/// `GET /candidates/:id/timeline` envelope. Entries are newest first.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineResponse {
    pub timeline: Vec<TimelineEntry>,
}

/// Envelope of assessment create and question replacement.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub assessment: Assessment,
}

/// `GET /assessments/:param` envelope: a single assessment when `param`
/// matched an assessment id, otherwise every assessment owned by the job
/// `param` names.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AssessmentLookup {
    Single { assessment: Assessment },
    ForJob { assessments: Vec<Assessment> },
}

impl AssessmentLookup {
    /// The single assessment, when `param` resolved as an assessment id.
    pub fn assessment(&self) -> Option<&Assessment> {
        match self {
            AssessmentLookup::Single { assessment } => Some(assessment),
            AssessmentLookup::ForJob { .. } => None,
        }
    }

    /// The job fan-out, when `param` resolved as a job id.
    pub fn assessments(&self) -> Option<&[Assessment]> {
        match self {
            AssessmentLookup::Single { .. } => None,
            AssessmentLookup::ForJob { assessments } => Some(assessments),
        }
    }
}

/// Body shape an embedding UI surfaces for a failed request, paired with
/// [`TalentError::status`] for the code.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&TalentError> for ErrorBody {
    fn from(err: &TalentError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
