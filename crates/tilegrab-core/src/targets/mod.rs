//! Download target enumeration.
//!
//! A target pairs one remote tile with the local path it materializes at.
//! The Blue Marble enumerator builds its list from a fixed month/band
//! table; the SRTM enumerator is driven by a feature-collection index.

mod bmng;
mod srtm;

pub use bmng::bmng_targets;
pub use srtm::srtm_targets;

use std::path::PathBuf;

/// One remote tile to fetch and the local path to write it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// 1-based position in enumeration order; used only for progress lines.
    pub index: usize,
    /// Final destination path. Unique across a target set.
    pub dest: PathBuf,
    /// Source URL.
    pub url: String,
}
