// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams implemented outside the core crate.
//!
//! Both traits use `#[async_trait]` for dynamic dispatch compatibility, so
//! implementations can be swapped behind `Arc<dyn ...>` without touching
//! the service layer.

pub mod generate;
pub mod snapshot;

pub use generate::QuestionGenerator;
pub use snapshot::SnapshotStore;
