// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `talentflow init` command implementation.
//!
//! Boots the data layer once: restores the persisted snapshot when one
//! exists, otherwise seeds a fresh dataset and persists it. Prints the
//! resulting table counts either way.

use std::sync::Arc;

use talentflow_api::TalentApi;
use talentflow_config::model::TalentflowConfig;
use talentflow_core::TalentError;
use talentflow_store::FileSnapshotStore;

/// Run the `talentflow init` command.
pub async fn run_init(config: &TalentflowConfig) -> Result<(), TalentError> {
    let path = &config.storage.snapshot_path;
    let had_snapshot = tokio::fs::try_exists(path).await.unwrap_or(false);

    let snapshots = Arc::new(FileSnapshotStore::new(path));
    let api = TalentApi::boot(config, snapshots).await?;
    let counts = api.counts().await;

    println!();
    println!("  talentflow init");
    println!("  {}", "-".repeat(35));
    println!(
        "    Source:           {}",
        if had_snapshot {
            "restored snapshot"
        } else {
            "seeded fresh dataset"
        }
    );
    println!("    Jobs:             {}", counts.jobs);
    println!("    Candidates:       {}", counts.candidates);
    println!("    Assessments:      {}", counts.assessments);
    println!("    Timeline entries: {}", counts.timeline_entries);
    println!("    Snapshot:         {path}");
    println!();

    Ok(())
}
