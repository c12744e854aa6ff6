// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity model shared across the TalentFlow workspace.
//!
//! Serialized field names follow the original JSON contract of the hiring
//! board (camelCase, with `type` for the employment and question kinds), so
//! snapshots and API envelopes stay byte-compatible with stored data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle state of a job posting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Archived,
}

impl JobStatus {
    /// Wire token without allocating.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Archived => "archived",
        }
    }
}

/// Pipeline stage of a candidate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Applied,
    Screen,
    Tech,
    Offer,
    Hired,
    Rejected,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Applied,
        Stage::Screen,
        Stage::Tech,
        Stage::Offer,
        Stage::Hired,
        Stage::Rejected,
    ];

    /// Wire token without allocating.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::Screen => "screen",
            Stage::Tech => "tech",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
            Stage::Rejected => "rejected",
        }
    }
}

/// Kind of an assessment question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    SingleChoice,
    MultiChoice,
    ShortText,
    LongText,
    Numeric,
    FileUpload,
}

impl QuestionType {
    /// Whether answers are picked from a fixed option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionType::SingleChoice | QuestionType::MultiChoice)
    }
}

/// A job posting on the hiring board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    /// Employment arrangement, e.g. `Full-time`. Serialized as `type`.
    #[serde(rename = "type")]
    pub employment_type: String,
    /// URL slug derived from the title at creation time.
    pub slug: String,
    pub salary: String,
    /// Applicant count shown on the board; never negative.
    pub applicants: u32,
    pub status: JobStatus,
    /// At least one tag; order is preserved as supplied.
    pub tags: Vec<String>,
    /// Board position. Contiguous 0..N-1 after any reorder.
    pub order_id: u32,
}

/// A candidate in the hiring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub stage: Stage,
    /// Owning job, when the candidate was attached to one.
    pub job_id: Option<String>,
}

/// One stage transition in a candidate's history. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub candidate_id: String,
    /// The stage the candidate moved into.
    pub stage: Stage,
    pub changed_at: DateTime<Utc>,
    /// Free-form note recorded with the transition; may embed `@mention`
    /// tokens.
    pub notes: Option<String>,
}

impl TimelineEntry {
    /// Extracts `@mention` tokens from the notes text, in order of
    /// appearance. A token is the run of alphanumeric or underscore
    /// characters directly after an `@`.
    pub fn mentions(&self) -> Vec<&str> {
        let Some(notes) = self.notes.as_deref() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut rest = notes;
        while let Some(at) = rest.find('@') {
            let tail = &rest[at + 1..];
            let end = tail
                .find(|c: char| !c.is_alphanumeric() && c != '_')
                .unwrap_or(tail.len());
            if end > 0 {
                out.push(&tail[..end]);
            }
            rest = &tail[end..];
        }
        out
    }
}

/// Optional per-question answer constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Conditional display rule: the question is shown only when the answer to
/// another question matches the expected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub depends_on_question_id: String,
    pub expected_value: serde_json::Value,
}

/// A single assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    /// Present (and non-empty) for the two choice kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

/// A question set attached to a job. A job owns zero or more assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub job_id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// Full dump of every entity table, sufficient to rebuild the store.
///
/// This is the persisted wire form: one JSON document keyed per table, with
/// rows in table insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub assessments: Vec<Assessment>,
    pub timeline_entries: Vec<TimelineEntry>,
}

/// Per-table row counts, for the status surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub jobs: usize,
    pub candidates: usize,
    pub assessments: usize,
    pub timeline_entries: usize,
}
