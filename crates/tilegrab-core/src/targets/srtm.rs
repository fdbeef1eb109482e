//! SRTM elevation tile targets from a feature-collection index.

use std::path::Path;

use crate::index::TileIndex;

use super::DownloadTarget;

/// USGS release directory all SRTMGL1 v003 tiles are published under.
const BASE_PATH: &str = "https://e4ftl01.cr.usgs.gov/MEASURES/SRTMGL1.003/2000.02.11/";

/// One target per index feature, in document order. The feature's
/// `dataFile` name is both the remote filename and the local one.
pub fn srtm_targets(index: &TileIndex, output_dir: &Path) -> Vec<DownloadTarget> {
    index
        .data_files()
        .enumerate()
        .map(|(i, name)| DownloadTarget {
            index: i + 1,
            dest: output_dir.join(name),
            url: format!("{}{}", BASE_PATH, name),
        })
        .collect()
}
