// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` boots a complete service over an in-memory snapshot
//! gateway with a small deterministic seed dataset. `reboot()` boots a
//! fresh service over the same gateway, simulating a process restart
//! without a real snapshot file.

use std::sync::Arc;

use talentflow_api::TalentApi;
use talentflow_config::model::TalentflowConfig;
use talentflow_core::TalentError;

use crate::snapshot::MemorySnapshotStore;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    jobs: usize,
    candidates: usize,
    assessed_jobs: usize,
    questions_per_assessment: usize,
    rng_seed: Option<u64>,
    reorder_failure_rate: f64,
    snapshots: Option<Arc<MemorySnapshotStore>>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            jobs: 10,
            candidates: 50,
            assessed_jobs: 2,
            questions_per_assessment: 4,
            rng_seed: Some(42),
            reorder_failure_rate: 0.0,
            snapshots: None,
        }
    }

    /// Set the number of seeded jobs and candidates.
    pub fn with_seed_counts(mut self, jobs: usize, candidates: usize) -> Self {
        self.jobs = jobs;
        self.candidates = candidates;
        self
    }

    /// Set how many leading jobs receive assessments, and how many
    /// questions each assessment carries.
    pub fn with_assessments(
        mut self,
        assessed_jobs: usize,
        questions_per_assessment: usize,
    ) -> Self {
        self.assessed_jobs = assessed_jobs;
        self.questions_per_assessment = questions_per_assessment;
        self
    }

    /// Fix the RNG seed. The default is already deterministic; pass a
    /// different seed to get a different (still reproducible) dataset.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Set the injected reorder failure probability. The builder default
    /// is 0.0 so reorders in tests succeed unless a test opts in.
    pub fn with_reorder_failure_rate(mut self, rate: f64) -> Self {
        self.reorder_failure_rate = rate;
        self
    }

    /// Boot over an existing gateway instead of a fresh empty one. A
    /// preloaded gateway makes boot restore instead of seed.
    pub fn with_snapshots(mut self, snapshots: Arc<MemorySnapshotStore>) -> Self {
        self.snapshots = Some(snapshots);
        self
    }

    /// Build the test harness, booting the service.
    pub async fn build(self) -> Result<TestHarness, TalentError> {
        let mut config = TalentflowConfig::default();
        config.seed.jobs = self.jobs;
        config.seed.candidates = self.candidates;
        config.seed.assessed_jobs = self.assessed_jobs;
        config.seed.questions_per_assessment = self.questions_per_assessment;
        config.seed.rng_seed = self.rng_seed;
        config.api.reorder_failure_rate = self.reorder_failure_rate;

        let snapshots = self
            .snapshots
            .unwrap_or_else(|| Arc::new(MemorySnapshotStore::new()));
        let api = TalentApi::boot(&config, snapshots.clone()).await?;

        Ok(TestHarness {
            api,
            snapshots,
            config,
        })
    }
}

/// A complete test environment: a booted service plus direct access to the
/// gateway behind it for write assertions and preloads.
pub struct TestHarness {
    /// The service under test.
    pub api: TalentApi,
    /// The in-memory snapshot gateway the service writes through to.
    pub snapshots: Arc<MemorySnapshotStore>,
    /// The configuration the service was booted with.
    pub config: TalentflowConfig,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Boot a fresh service over the same gateway and config, simulating a
    /// process restart. The current service stays usable; tests that want
    /// restart-only semantics should drop it.
    pub async fn reboot(&self) -> Result<TestHarness, TalentError> {
        let api = TalentApi::boot(&self.config, self.snapshots.clone()).await?;
        Ok(TestHarness {
            api,
            snapshots: self.snapshots.clone(),
            config: self.config.clone(),
        })
    }
}
