// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request payload types for the TalentFlow API surface, with their
//! validation rules.
//!
//! Drafts and patches mirror the JSON bodies of the original endpoints:
//! every field is optional at the parsing stage, unknown keys are ignored,
//! and validation runs as an explicit step that reports *all* missing
//! required fields in one error. Enum-valued fields arrive as raw strings so
//! the contract messages (`Invalid status value`, `Invalid stage value`)
//! survive the typed boundary.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::TalentError;
use crate::types::{Job, JobStatus, Question, Stage};

/// Tracks which required fields a draft is missing, in wire order.
fn require<T>(value: &Option<T>, name: &'static str, missing: &mut Vec<String>) {
    if value.is_none() {
        missing.push(name.to_string());
    }
}

// --- Jobs ---

/// Body of a job create request. All fields are required; see
/// [`JobDraft::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDraft {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub slug: Option<String>,
    pub salary: Option<String>,
    pub applicants: Option<i64>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order_id: Option<u32>,
}

/// A fully validated job field set, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFields {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub slug: String,
    pub salary: String,
    pub applicants: u32,
    pub status: JobStatus,
    pub tags: Vec<String>,
    pub order_id: u32,
}

impl JobDraft {
    /// Checks the draft against the create contract.
    ///
    /// Missing required fields are reported together; content checks
    /// (status token, non-empty tags, non-negative applicants) then run in
    /// wire order and fail on the first violation.
    pub fn validate(self) -> Result<JobFields, TalentError> {
        let mut missing = Vec::new();
        require(&self.title, "title", &mut missing);
        require(&self.department, "department", &mut missing);
        require(&self.location, "location", &mut missing);
        require(&self.employment_type, "type", &mut missing);
        require(&self.slug, "slug", &mut missing);
        require(&self.salary, "salary", &mut missing);
        require(&self.applicants, "applicants", &mut missing);
        require(&self.status, "status", &mut missing);
        require(&self.tags, "tags", &mut missing);
        require(&self.order_id, "orderId", &mut missing);

        let JobDraft {
            title: Some(title),
            department: Some(department),
            location: Some(location),
            employment_type: Some(employment_type),
            slug: Some(slug),
            salary: Some(salary),
            applicants: Some(applicants),
            status: Some(status),
            tags: Some(tags),
            order_id: Some(order_id),
        } = self
        else {
            return Err(TalentError::missing_fields(missing));
        };

        let status = parse_status(&status)?;
        if tags.is_empty() {
            return Err(TalentError::validation("Tags must be a non-empty array"));
        }
        if applicants < 0 {
            return Err(TalentError::validation(
                "Applicants must be a non-negative number",
            ));
        }

        Ok(JobFields {
            title,
            department,
            location,
            employment_type,
            slug,
            salary,
            applicants: applicants as u32,
            status,
            tags,
            order_id,
        })
    }
}

/// Body of a job partial-update request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPatch {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub slug: Option<String>,
    pub salary: Option<String>,
    pub applicants: Option<i64>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order_id: Option<u32>,
}

impl JobPatch {
    /// True when no recognized field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.department.is_none()
            && self.location.is_none()
            && self.employment_type.is_none()
            && self.slug.is_none()
            && self.salary.is_none()
            && self.applicants.is_none()
            && self.status.is_none()
            && self.tags.is_none()
            && self.order_id.is_none()
    }

    /// Validates every supplied field, then applies them to `job`.
    ///
    /// The job is never partially updated: all checks run before the first
    /// assignment.
    pub fn apply_to(&self, job: &mut Job) -> Result<(), TalentError> {
        if self.is_empty() {
            return Err(TalentError::validation("No valid fields to update"));
        }
        let status = match self.status.as_deref() {
            Some(raw) => Some(parse_status(raw)?),
            None => None,
        };
        if let Some(tags) = &self.tags {
            if tags.is_empty() {
                return Err(TalentError::validation("Tags must be a non-empty array"));
            }
        }
        if let Some(applicants) = self.applicants {
            if applicants < 0 {
                return Err(TalentError::validation(
                    "Applicants must be a non-negative number",
                ));
            }
        }

        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(department) = &self.department {
            job.department = department.clone();
        }
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(employment_type) = &self.employment_type {
            job.employment_type = employment_type.clone();
        }
        if let Some(slug) = &self.slug {
            job.slug = slug.clone();
        }
        if let Some(salary) = &self.salary {
            job.salary = salary.clone();
        }
        if let Some(applicants) = self.applicants {
            job.applicants = applicants as u32;
        }
        if let Some(status) = status {
            job.status = status;
        }
        if let Some(tags) = &self.tags {
            job.tags = tags.clone();
        }
        if let Some(order_id) = self.order_id {
            job.order_id = order_id;
        }
        Ok(())
    }
}

/// Query parameters of the job listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobQuery {
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
    /// Exact status token; an unknown token matches nothing.
    pub status: Option<String>,
    /// 1-indexed page, clamped into range.
    pub page: Option<u32>,
    /// Overrides the configured default page size.
    pub page_size: Option<u32>,
}

/// Reorder request for a job: move it from one board position to another.
///
/// Positions index into the jobs sorted by `orderId`. `from_order` must
/// match the job's current position; a mismatch means the client raced a
/// concurrent move and is rejected rather than applied blindly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub from_order: usize,
    pub to_order: usize,
}

// --- Candidates ---

/// Body of a candidate create request. `name` and `email` are required;
/// `stage` defaults to `applied`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub stage: Option<String>,
    /// Optional owning job; stored as-is.
    pub job_id: Option<String>,
}

/// A fully validated candidate field set, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFields {
    pub name: String,
    pub email: String,
    pub stage: Stage,
    pub job_id: Option<String>,
}

impl CandidateDraft {
    /// Checks the draft against the create contract.
    pub fn validate(self) -> Result<CandidateFields, TalentError> {
        let mut missing = Vec::new();
        require(&self.name, "name", &mut missing);
        require(&self.email, "email", &mut missing);

        let CandidateDraft {
            name: Some(name),
            email: Some(email),
            stage,
            job_id,
        } = self
        else {
            return Err(TalentError::missing_fields(missing));
        };

        let stage = match stage.as_deref() {
            Some(raw) => parse_stage(raw)?,
            None => Stage::Applied,
        };

        Ok(CandidateFields {
            name,
            email,
            stage,
            job_id,
        })
    }
}

/// Body of a candidate partial-update request.
///
/// `notes` is not a candidate field: it rides along a stage change and lands
/// on the timeline entry the change produces.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub stage: Option<String>,
    pub notes: Option<String>,
}

impl CandidatePatch {
    /// True when no updatable field is present. `notes` alone does not count
    /// as an update.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.stage.is_none()
    }

    /// Parses the stage token, when supplied.
    pub fn parsed_stage(&self) -> Result<Option<Stage>, TalentError> {
        match self.stage.as_deref() {
            Some(raw) => Ok(Some(parse_stage(raw)?)),
            None => Ok(None),
        }
    }
}

/// Query parameters of the candidate listing. The page size is fixed by
/// configuration, not by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateQuery {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    /// Exact stage token; an unknown token matches nothing.
    pub stage: Option<String>,
    /// 1-indexed page, clamped into range.
    pub page: Option<u32>,
}

// --- Assessments ---

/// Body of an assessment create request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentDraft {
    pub title: Option<String>,
    pub job_id: Option<String>,
    pub questions: Option<Vec<Question>>,
}

/// A validated assessment field set. The referenced job's existence is
/// checked by the service, which holds the store.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentFields {
    pub title: String,
    pub job_id: String,
    pub questions: Vec<Question>,
}

impl AssessmentDraft {
    /// Checks for the three required fields. Emptiness of `questions` is
    /// checked by the service after the job reference, so a bad job id wins
    /// over an empty question list.
    pub fn validate(self) -> Result<AssessmentFields, TalentError> {
        let mut missing = Vec::new();
        require(&self.title, "title", &mut missing);
        require(&self.job_id, "jobId", &mut missing);
        require(&self.questions, "questions[]", &mut missing);

        let AssessmentDraft {
            title: Some(title),
            job_id: Some(job_id),
            questions: Some(questions),
        } = self
        else {
            return Err(TalentError::missing_fields(missing));
        };

        Ok(AssessmentFields {
            title,
            job_id,
            questions,
        })
    }
}

/// Body of the question replacement request: the full new question list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionsPayload {
    pub questions: Option<Vec<Question>>,
}

impl QuestionsPayload {
    /// Extracts the question list, enforcing presence and non-emptiness.
    pub fn validate(self) -> Result<Vec<Question>, TalentError> {
        let Some(questions) = self.questions else {
            return Err(TalentError::validation(
                "Missing or invalid 'questions' array in request body",
            ));
        };
        if questions.is_empty() {
            return Err(TalentError::validation(
                "Questions must be a non-empty array",
            ));
        }
        Ok(questions)
    }
}

/// A candidate's recorded answers for one assessment. Accepted and
/// acknowledged; answers are keyed by question id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentSubmission {
    pub candidate_id: Option<String>,
    pub responses: serde_json::Map<String, serde_json::Value>,
    pub submitted_at: Option<DateTime<Utc>>,
}

fn parse_status(raw: &str) -> Result<JobStatus, TalentError> {
    raw.parse::<JobStatus>()
        .map_err(|_| TalentError::validation("Invalid status value"))
}

fn parse_stage(raw: &str) -> Result<Stage, TalentError> {
    raw.parse::<Stage>()
        .map_err(|_| TalentError::validation("Invalid stage value"))
}
