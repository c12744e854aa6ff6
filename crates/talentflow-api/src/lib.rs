// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process request router for the TalentFlow hiring data layer.
//!
//! The original surface is HTTP-shaped; here it is a service object,
//! [`TalentApi`], whose methods map one-to-one onto the endpoints: typed
//! payloads in, typed envelopes out, [`TalentError`](talentflow_core::TalentError)
//! with an equivalent status code on failure. Boot restores the persisted
//! snapshot or seeds a fresh dataset, and every successful mutation is
//! written through to the snapshot gateway best-effort.

pub mod pagination;
pub mod response;
pub mod service;

mod assessments;
mod candidates;
mod jobs;
mod reorder;

pub use response::{
    AssessmentLookup, AssessmentResponse, CandidateListResponse, CandidateResponse, ErrorBody,
    JobListResponse, JobResponse, ReorderResponse, ReorderedJob, TimelineResponse,
};
pub use service::{parse_payload, TalentApi};
