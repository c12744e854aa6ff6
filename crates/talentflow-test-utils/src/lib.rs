// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for TalentFlow integration tests.
//!
//! Provides an in-memory snapshot gateway and a test harness for fast,
//! deterministic, CI-runnable tests that never touch the filesystem.
//!
//! # Components
//!
//! - [`MemorySnapshotStore`] - In-memory snapshot gateway with write counting and fault injection
//! - [`TestHarness`] - Booted service over a memory gateway, rebootable in place
//! - [`fixtures`] - Valid request bodies and entities for hand-built datasets

pub mod fixtures;
pub mod harness;
pub mod snapshot;

pub use harness::TestHarness;
pub use snapshot::MemorySnapshotStore;
