// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `talentflow reset` command implementation.

use talentflow_config::model::TalentflowConfig;
use talentflow_core::TalentError;

/// Run the `talentflow reset` command.
///
/// Deletes the persisted snapshot so the next boot seeds a fresh dataset.
/// A snapshot that is already absent is not an error.
pub async fn run_reset(config: &TalentflowConfig) -> Result<(), TalentError> {
    let path = &config.storage.snapshot_path;
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            println!("talentflow: snapshot removed ({path})");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("talentflow: no snapshot at {path}");
            Ok(())
        }
        Err(e) => Err(TalentError::Storage {
            source: Box::new(e),
        }),
    }
}
