//! `tilegrab srtm` – download SRTM elevation tiles from an index.

use anyhow::{ensure, Result};
use std::path::Path;
use tilegrab_core::dispatch::{run_batch, DispatchOptions};
use tilegrab_core::index::TileIndex;
use tilegrab_core::targets;

use super::{ensure_output_dir, finish_batch};

pub fn run_srtm(
    index_path: &Path,
    output: &Path,
    cookie: &str,
    jobs: usize,
    fail_fast: bool,
) -> Result<()> {
    ensure_output_dir(output)?;
    ensure!(jobs > 0, "--jobs must be a positive integer");

    let index = TileIndex::load(index_path)?;
    let targets = targets::srtm_targets(&index, output);
    println!("downloading {} tiles", targets.len());
    let report = run_batch(
        targets,
        Some(cookie),
        DispatchOptions {
            workers: jobs,
            fail_fast,
        },
    );
    finish_batch(&report)
}
