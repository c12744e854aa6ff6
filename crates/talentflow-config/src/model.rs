// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the TalentFlow data layer.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level TalentFlow configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TalentflowConfig {
    /// Application-wide settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Snapshot persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// API surface settings (paging, fault injection).
    #[serde(default)]
    pub api: ApiConfig,

    /// Seed dataset settings, used when no snapshot exists at boot.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Application-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Snapshot persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the JSON snapshot file the store persists to and restores from.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("talentflow").join("snapshot.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("snapshot.json"))
        .to_string_lossy()
        .into_owned()
}

/// API surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Default page size of the job listing (caller-overridable per request).
    #[serde(default = "default_job_page_size")]
    pub job_page_size: u32,

    /// Fixed page size of the candidate listing.
    #[serde(default = "default_candidate_page_size")]
    pub candidate_page_size: u32,

    /// Probability in [0.0, 1.0] that a reorder request fails after the
    /// renumbering and is rolled back. Set to 0.0 to disable fault
    /// injection, 1.0 to force it.
    #[serde(default = "default_reorder_failure_rate")]
    pub reorder_failure_rate: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            job_page_size: default_job_page_size(),
            candidate_page_size: default_candidate_page_size(),
            reorder_failure_rate: default_reorder_failure_rate(),
        }
    }
}

fn default_job_page_size() -> u32 {
    20
}

fn default_candidate_page_size() -> u32 {
    10
}

fn default_reorder_failure_rate() -> f64 {
    0.1
}

/// Seed dataset configuration.
///
/// Applied only when boot finds no snapshot to restore.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Number of jobs to generate.
    #[serde(default = "default_seed_jobs")]
    pub jobs: usize,

    /// Number of candidates to generate, randomly attached to jobs.
    #[serde(default = "default_seed_candidates")]
    pub candidates: usize,

    /// How many of the first jobs receive assessments.
    #[serde(default = "default_assessed_jobs")]
    pub assessed_jobs: usize,

    /// Questions generated per assessment.
    #[serde(default = "default_questions_per_assessment")]
    pub questions_per_assessment: usize,

    /// Fixed RNG seed for reproducible datasets. `None` seeds from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            jobs: default_seed_jobs(),
            candidates: default_seed_candidates(),
            assessed_jobs: default_assessed_jobs(),
            questions_per_assessment: default_questions_per_assessment(),
            rng_seed: None,
        }
    }
}

fn default_seed_jobs() -> usize {
    25
}

fn default_seed_candidates() -> usize {
    1000
}

fn default_assessed_jobs() -> usize {
    4
}

fn default_questions_per_assessment() -> usize {
    10
}
