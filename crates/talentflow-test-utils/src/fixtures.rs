// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Valid request bodies and stored entities for tests.
//!
//! Every fixture passes validation as-is; tests that need an invalid
//! payload mutate the returned value.

use talentflow_core::payload::{CandidateDraft, JobDraft};
use talentflow_core::slug::slugify;
use talentflow_core::types::{Job, JobStatus, Question, QuestionType};

/// A complete, valid job create body.
pub fn job_draft(title: &str, order_id: u32) -> JobDraft {
    JobDraft {
        title: Some(title.to_string()),
        department: Some("Engineering".to_string()),
        location: Some("Remote".to_string()),
        employment_type: Some("Full-time".to_string()),
        slug: Some(slugify(title)),
        salary: Some("$120,000 - $150,000".to_string()),
        applicants: Some(0),
        status: Some("active".to_string()),
        tags: Some(vec!["Rust".to_string()]),
        order_id: Some(order_id),
    }
}

/// A complete, valid candidate create body, optionally attached to a job.
pub fn candidate_draft(name: &str, job_id: Option<&str>) -> CandidateDraft {
    CandidateDraft {
        name: Some(name.to_string()),
        email: Some(format!(
            "{}@google.com",
            name.to_lowercase().replace(' ', ".")
        )),
        stage: None,
        job_id: job_id.map(str::to_string),
    }
}

/// A minimal short-text question.
pub fn short_text_question(id: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        question_type: QuestionType::ShortText,
        text: text.to_string(),
        options: None,
        validation: None,
        condition: None,
    }
}

/// A single-choice question with the given options.
pub fn single_choice_question(id: &str, text: &str, options: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        question_type: QuestionType::SingleChoice,
        text: text.to_string(),
        options: Some(options.iter().map(|o| o.to_string()).collect()),
        validation: None,
        condition: None,
    }
}

/// A stored job row, for hand-built snapshots.
pub fn job(id: &str, title: &str, order_id: u32) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        department: "Engineering".to_string(),
        location: "Remote".to_string(),
        employment_type: "Full-time".to_string(),
        slug: slugify(title),
        salary: "$120,000 - $150,000".to_string(),
        applicants: 0,
        status: JobStatus::Active,
        tags: vec!["Rust".to_string()],
        order_id,
    }
}
