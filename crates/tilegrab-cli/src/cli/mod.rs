//! CLI for the tilegrab tile fetcher.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_bmng, run_extract, run_srtm};

/// Top-level CLI for the tilegrab tile fetcher.
#[derive(Debug, Parser)]
#[command(name = "tilegrab")]
#[command(about = "Download and extract Blue Marble / SRTM tile datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the 96 Blue Marble monthly imagery tiles.
    Bmng {
        /// Base directory to write tiles to (must exist).
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Number of concurrent downloads.
        #[arg(long, default_value = "1", value_name = "N")]
        jobs: usize,

        /// Abort on the first failed tile instead of collecting failures
        /// into the batch summary.
        #[arg(long)]
        fail_fast: bool,
    },

    /// Download the SRTM elevation tiles listed in an index document.
    ///
    /// Reads the session credential from the COOKIE environment variable.
    Srtm {
        /// Feature-collection index of tiles to download.
        #[arg(short, long, value_name = "FILE")]
        index: PathBuf,

        /// Directory to write tiles to (must exist).
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Number of concurrent downloads.
        #[arg(long, default_value = "4", value_name = "N")]
        jobs: usize,

        /// Abort on the first failed tile instead of collecting failures
        /// into the batch summary.
        #[arg(long)]
        fail_fast: bool,
    },

    /// Extract downloaded SRTM tile archives.
    Extract {
        /// Feature-collection index naming the archives.
        #[arg(short, long, value_name = "FILE")]
        index: PathBuf,

        /// Directory the downloaded archives live in.
        #[arg(short, long, value_name = "DIR")]
        directory: PathBuf,

        /// Directory to extract into (must exist).
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Bmng {
                output,
                jobs,
                fail_fast,
            } => run_bmng(&output, jobs, fail_fast)?,
            CliCommand::Srtm {
                index,
                output,
                jobs,
                fail_fast,
            } => {
                // Resolved once up front so a missing credential fails
                // before any target is enumerated.
                let cookie = std::env::var("COOKIE")
                    .context("COOKIE environment variable must hold the session credential")?;
                run_srtm(&index, &output, &cookie, jobs, fail_fast)?;
            }
            CliCommand::Extract {
                index,
                directory,
                output,
            } => run_extract(&index, &directory, &output)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
