// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory entity tables and snapshot persistence for TalentFlow.
//!
//! Provides the [`EntityStore`] backing every API resource (jobs,
//! candidates, timeline entries, assessments) and the [`FileSnapshotStore`]
//! gateway that serializes whole-store snapshots to a single JSON file.

pub mod persist;
pub mod store;

pub use persist::FileSnapshotStore;
pub use store::EntityStore;
