//! Tile file staging.
//!
//! Tiles are streamed into a `.part` file next to their destination and
//! renamed into place only after the full body is flushed. The
//! exists-check that makes reruns idempotent therefore never observes a
//! truncated file.

mod writer;

pub use writer::TileWriter;

/// Staging suffix appended to the destination filename.
pub const TEMP_SUFFIX: &str = ".part";

/// Staging path for a destination: `N00E006.hgt.zip` → `N00E006.hgt.zip.part`.
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut staged = final_path.as_os_str().to_owned();
    staged.push(TEMP_SUFFIX);
    std::path::PathBuf::from(staged)
}
