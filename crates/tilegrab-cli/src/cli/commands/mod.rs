//! CLI command handlers, one file per command.

mod bmng;
mod extract;
mod srtm;

pub use bmng::run_bmng;
pub use extract::run_extract;
pub use srtm::run_srtm;

use anyhow::{bail, ensure, Result};
use std::path::Path;
use tilegrab_core::dispatch::BatchReport;

/// Output directories must pre-exist.
pub(crate) fn ensure_output_dir(dir: &Path) -> Result<()> {
    ensure!(
        dir.is_dir(),
        "output directory does not exist: {}",
        dir.display()
    );
    Ok(())
}

/// Prints the batch summary and turns failures into a non-zero exit.
pub(crate) fn finish_batch(report: &BatchReport) -> Result<()> {
    println!(
        "fetched {}, skipped {}, failed {}",
        report.fetched,
        report.skipped,
        report.failed.len()
    );
    for failure in &report.failed {
        eprintln!("  {}: {}: {}", failure.index, failure.url, failure.error);
    }
    tracing::info!(
        fetched = report.fetched,
        skipped = report.skipped,
        failed = report.failed.len(),
        "batch finished"
    );
    if !report.is_success() {
        bail!("{} tile(s) failed to download", report.failed.len());
    }
    Ok(())
}
