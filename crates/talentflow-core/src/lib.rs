// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the TalentFlow hiring data layer.
//!
//! This crate provides the entity model, the request payload types with
//! their validation rules, the shared error taxonomy, and the trait seams
//! (snapshot persistence, question generation) implemented by the outer
//! workspace crates.

pub mod error;
pub mod payload;
pub mod slug;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TalentError;
pub use types::{
    Assessment, Candidate, Job, JobStatus, Question, QuestionType, Stage, StoreSnapshot,
    TableCounts, TimelineEntry,
};

// Re-export the trait seams at crate root.
pub use traits::{QuestionGenerator, SnapshotStore};
