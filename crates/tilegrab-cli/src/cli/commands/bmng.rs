//! `tilegrab bmng` – download the Blue Marble monthly imagery set.

use anyhow::{ensure, Result};
use std::path::Path;
use tilegrab_core::dispatch::{run_batch, DispatchOptions};
use tilegrab_core::targets;

use super::{ensure_output_dir, finish_batch};

pub fn run_bmng(output: &Path, jobs: usize, fail_fast: bool) -> Result<()> {
    ensure_output_dir(output)?;
    ensure!(jobs > 0, "--jobs must be a positive integer");

    let targets = targets::bmng_targets(output);
    println!("downloading {} tiles", targets.len());
    let report = run_batch(
        targets,
        None,
        DispatchOptions {
            workers: jobs,
            fail_fast,
        },
    );
    finish_batch(&report)
}
