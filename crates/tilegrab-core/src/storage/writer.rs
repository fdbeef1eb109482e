//! Staged writer for one tile file.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(unix)]
use std::os::unix::fs::FileExt;

/// Writes a tile body to `<final>.part`, then renames it into place.
/// Clone-safe: `write_at` is pwrite-style, so the HTTP write callback can
/// own a clone while the caller keeps the original for finalize.
#[derive(Clone)]
pub struct TileWriter {
    file: Arc<File>,
    temp_path: PathBuf,
}

impl TileWriter {
    /// Creates (or truncates) the staging file for `final_path`.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let temp_path = super::temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        Ok(TileWriter {
            file: Arc::new(file),
            temp_path,
        })
    }

    /// Writes `data` at `offset` without moving a shared cursor.
    #[cfg(unix)]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> io::Result<()> {
        let n = self.file.write_at(data, offset)?;
        if n != data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {} of {}", n, data.len()),
            ));
        }
        Ok(())
    }

    /// Non-Unix fallback: seek + write on a cloned handle. The fetch path
    /// only ever writes sequentially, so the shared cursor is harmless.
    #[cfg(not(unix))]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> io::Result<()> {
        use std::io::{Seek, SeekFrom, Write};
        let mut f = self.file.try_clone()?;
        f.seek(SeekFrom::Start(offset))?;
        f.write_all(data)
    }

    /// Flushes file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Path of the staging file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Atomically renames the staging file to `final_path`. If the rename
    /// fails the staging file is removed so a rerun starts clean.
    pub fn finalize(self, final_path: &Path) -> io::Result<()> {
        let temp_path = self.temp_path;
        drop(self.file);
        let renamed = std::fs::rename(&temp_path, final_path);
        if renamed.is_err() {
            let _ = std::fs::remove_file(&temp_path);
        }
        renamed
    }

    /// Removes the staging file after a failed fetch.
    pub fn discard(self) {
        let temp_path = self.temp_path;
        drop(self.file);
        let _ = std::fs::remove_file(&temp_path);
    }
}
