// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TalentFlow - a hiring-board data layer with snapshot persistence.
//!
//! This is the binary entry point for the TalentFlow CLI.

use clap::{Parser, Subcommand};

mod init;
mod jobs;
mod reset;
mod status;

/// TalentFlow - a hiring-board data layer with snapshot persistence.
#[derive(Parser, Debug)]
#[command(name = "talentflow", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Boot the data layer: restore the snapshot, or seed and persist a fresh dataset.
    Init,
    /// Show snapshot presence, size, and per-table counts.
    Status {
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// List jobs on the board, filterable and paginated.
    Jobs {
        /// Case-insensitive title substring filter.
        #[arg(long)]
        search: Option<String>,
        /// Exact status filter (active or archived).
        #[arg(long)]
        status: Option<String>,
        /// 1-indexed page; out-of-range values are clamped.
        #[arg(long)]
        page: Option<u32>,
        /// Per-request page size override.
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Delete the persisted snapshot; the next boot reseeds.
    Reset,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match talentflow_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            talentflow_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Init) => init::run_init(&config).await,
        Some(Commands::Status { json, plain }) => status::run_status(&config, json, plain).await,
        Some(Commands::Jobs {
            search,
            status,
            page,
            page_size,
        }) => jobs::run_jobs(&config, search, status, page, page_size).await,
        Some(Commands::Reset) => reset::run_reset(&config).await,
        None => {
            println!("talentflow: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("talentflow: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("talentflow={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
