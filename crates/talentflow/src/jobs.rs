// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `talentflow jobs` command implementation.
//!
//! Boots the data layer and lists jobs through the same query path the
//! API surface exposes, so filters, paging, and clamping behave exactly
//! as an embedding UI would see them.

use std::sync::Arc;

use talentflow_api::TalentApi;
use talentflow_config::model::TalentflowConfig;
use talentflow_core::payload::JobQuery;
use talentflow_core::types::Job;
use talentflow_core::TalentError;
use talentflow_store::FileSnapshotStore;

/// Run the `talentflow jobs` command.
pub async fn run_jobs(
    config: &TalentflowConfig,
    search: Option<String>,
    status: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<(), TalentError> {
    let snapshots = Arc::new(FileSnapshotStore::new(&config.storage.snapshot_path));
    let api = TalentApi::boot(config, snapshots).await?;

    let listing = api
        .list_jobs(JobQuery {
            search,
            status,
            page,
            page_size,
        })
        .await?;

    println!();
    println!(
        "  jobs: page {} of {} ({} total)",
        listing.page, listing.total_pages, listing.total_jobs
    );
    println!("  {}", "-".repeat(72));
    for job in &listing.jobs {
        println!("  {}", job_row(job));
    }
    println!();

    Ok(())
}

/// One listing row: board position, status, title, department.
fn job_row(job: &Job) -> String {
    format!(
        "{:>4}  {:<8}  {:<36}  {}",
        job.order_id,
        job.status.as_str(),
        job.title,
        job.department
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentflow_core::types::JobStatus;

    #[test]
    fn job_row_shows_position_status_and_title() {
        let job = Job {
            id: "j1".into(),
            title: "Staff Platform Engineer".into(),
            department: "Engineering".into(),
            location: "Remote".into(),
            employment_type: "Full-time".into(),
            slug: "staff-platform-engineer".into(),
            salary: "$140,000 - $170,000".into(),
            applicants: 9,
            status: JobStatus::Archived,
            tags: vec!["Rust".into()],
            order_id: 7,
        };
        let row = job_row(&job);
        assert!(row.contains("   7"));
        assert!(row.contains("archived"));
        assert!(row.contains("Staff Platform Engineer"));
        assert!(row.contains("Engineering"));
    }

    #[tokio::test]
    async fn jobs_command_boots_and_lists() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = TalentflowConfig::default();
        config.storage.snapshot_path = dir
            .path()
            .join("snapshot.json")
            .to_string_lossy()
            .into_owned();
        config.seed.jobs = 4;
        config.seed.candidates = 0;
        config.seed.assessed_jobs = 0;
        config.seed.rng_seed = Some(3);

        run_jobs(&config, None, None, None, Some(2)).await.unwrap();
    }
}
