// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `talentflow status` command implementation.
//!
//! Reads the snapshot file directly, without booting the service, so
//! checking status never seeds or mutates anything. Reports snapshot
//! presence, size, and per-table counts.

use std::io::IsTerminal;

use serde::Serialize;
use talentflow_config::model::TalentflowConfig;
use talentflow_core::{SnapshotStore, TalentError};
use talentflow_store::FileSnapshotStore;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub snapshot_present: bool,
    pub snapshot_path: String,
    pub snapshot_bytes: Option<u64>,
    pub jobs: Option<usize>,
    pub candidates: Option<usize>,
    pub assessments: Option<usize>,
    pub timeline_entries: Option<usize>,
}

/// Format a byte count into a human-readable size string.
fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

/// Run the `talentflow status` command.
///
/// If `--json` is passed, outputs structured JSON for scripting.
/// If `--plain` is passed or stdout is not a TTY, disables colors.
/// A snapshot that exists but cannot be parsed is reported as an error
/// rather than glossed over as absent.
pub async fn run_status(
    config: &TalentflowConfig,
    json: bool,
    plain: bool,
) -> Result<(), TalentError> {
    let path = &config.storage.snapshot_path;
    let gateway = FileSnapshotStore::new(path);
    let snapshot = gateway.restore().await?;
    let snapshot_bytes = tokio::fs::metadata(path).await.ok().map(|m| m.len());

    let response = match &snapshot {
        Some(s) => StatusResponse {
            snapshot_present: true,
            snapshot_path: path.clone(),
            snapshot_bytes,
            jobs: Some(s.jobs.len()),
            candidates: Some(s.candidates.len()),
            assessments: Some(s.assessments.len()),
            timeline_entries: Some(s.timeline_entries.len()),
        },
        None => StatusResponse {
            snapshot_present: false,
            snapshot_path: path.clone(),
            snapshot_bytes: None,
            jobs: None,
            candidates: None,
            assessments: None,
            timeline_entries: None,
        },
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    if response.snapshot_present {
        print_status_present(&response, use_color);
    } else {
        print_status_missing(path, use_color);
    }

    Ok(())
}

/// Print status for an existing snapshot, with optional colors.
fn print_status_present(response: &StatusResponse, use_color: bool) {
    let size = response
        .snapshot_bytes
        .map(format_bytes)
        .unwrap_or_else(|| "unknown size".to_string());

    println!();
    println!("  talentflow status");
    println!("  {}", "-".repeat(35));

    if use_color {
        use colored::Colorize;
        println!(
            "    Snapshot: {} {} ({size})",
            "✓".green(),
            "present".green()
        );
    } else {
        println!("    Snapshot: [OK] present ({size})");
    }

    println!("    Path:     {}", response.snapshot_path);
    println!("    Jobs:             {}", response.jobs.unwrap_or(0));
    println!("    Candidates:       {}", response.candidates.unwrap_or(0));
    println!("    Assessments:      {}", response.assessments.unwrap_or(0));
    println!(
        "    Timeline entries: {}",
        response.timeline_entries.unwrap_or(0)
    );
    println!();
}

/// Print status for a missing snapshot, with optional colors.
fn print_status_missing(path: &str, use_color: bool) {
    println!();
    println!("  talentflow status");
    println!("  {}", "-".repeat(35));

    if use_color {
        use colored::Colorize;
        println!("    Snapshot: {} {}", "✗".red(), "not initialized".red());
    } else {
        println!("    Snapshot: [FAIL] not initialized");
    }

    println!("    Path:     {path}");
    println!();
    println!("  Seed one with: talentflow init");
    println!();
}
