// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./talentflow.toml` > `~/.config/talentflow/talentflow.toml` > `/etc/talentflow/talentflow.toml`
//! with environment variable overrides via `TALENTFLOW_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TalentflowConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/talentflow/talentflow.toml` (system-wide)
/// 3. `~/.config/talentflow/talentflow.toml` (user XDG config)
/// 4. `./talentflow.toml` (local directory)
/// 5. `TALENTFLOW_*` environment variables
pub fn load_config() -> Result<TalentflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TalentflowConfig::default()))
        .merge(Toml::file("/etc/talentflow/talentflow.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("talentflow/talentflow.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("talentflow.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and embedding with pre-built config content.
pub fn load_config_from_str(toml_content: &str) -> Result<TalentflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TalentflowConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TalentflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TalentflowConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// CRITICAL: Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `TALENTFLOW_API_JOB_PAGE_SIZE`
/// must map to `api.job_page_size`, not `api.job.page.size`.
fn env_provider() -> Env {
    Env::prefixed("TALENTFLOW_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: TALENTFLOW_API_JOB_PAGE_SIZE -> "api_job_page_size"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("api_", "api.", 1)
            .replacen("seed_", "seed.", 1);
        mapped.into()
    })
}
