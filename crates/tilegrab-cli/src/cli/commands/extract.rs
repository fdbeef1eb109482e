//! `tilegrab extract` – unpack downloaded tile archives.

use anyhow::Result;
use std::path::Path;
use tilegrab_core::extract::extract_archives;
use tilegrab_core::index::TileIndex;

use super::ensure_output_dir;

pub fn run_extract(index_path: &Path, directory: &Path, output: &Path) -> Result<()> {
    ensure_output_dir(output)?;

    let index = TileIndex::load(index_path)?;
    let archives: Vec<_> = index
        .data_files()
        .map(|name| directory.join(name))
        .collect();
    println!("checking {} tiles", archives.len());
    let report = extract_archives(&archives, output)?;
    println!(
        "extracted {} file(s) from {} archive(s)",
        report.entries, report.archives
    );
    Ok(())
}
