//! Fetch-and-materialize task: one tile from URL to disk.
//!
//! Skips targets whose destination already exists, otherwise streams the
//! body into a staged `.part` file and renames it into place. Peak memory
//! is one curl buffer regardless of tile size.

mod error;

pub use error::FetchError;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::storage::{self, TileWriter};
use crate::targets::DownloadTarget;

/// What a fetch task did. Failures are `FetchError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination already existed; no network access.
    Skipped,
    /// Body streamed and renamed into place; byte count written.
    Fetched(u64),
}

/// Fetches one target. `cookie` is attached as a `DATA=<value>` cookie
/// when present (the USGS endpoint requires a session credential).
pub fn fetch_tile(target: &DownloadTarget, cookie: Option<&str>) -> Result<FetchOutcome, FetchError> {
    if target.dest.exists() {
        println!("{}: skipping {}", target.index, target.dest.display());
        tracing::debug!(dest = %target.dest.display(), "destination present, skipping");
        return Ok(FetchOutcome::Skipped);
    }

    if let Some(parent) = target.dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FetchError::storage(parent, e))?;
    }

    println!("{}: fetching {}", target.index, target.url);
    let writer = TileWriter::create(&target.dest)
        .map_err(|e| FetchError::storage(storage::temp_path(&target.dest), e))?;

    let bytes = match stream_into(&target.url, cookie, &writer) {
        Ok(n) => n,
        Err(e) => {
            writer.discard();
            return Err(e);
        }
    };

    if let Err(e) = writer.sync() {
        let path = writer.temp_path().to_path_buf();
        writer.discard();
        return Err(FetchError::storage(path, e));
    }
    writer
        .finalize(&target.dest)
        .map_err(|e| FetchError::storage(&target.dest, e))?;

    tracing::info!(dest = %target.dest.display(), bytes, "tile materialized");
    Ok(FetchOutcome::Fetched(bytes))
}

/// Streams a GET of `url` into `writer`. Returns the byte count written.
fn stream_into(url: &str, cookie: Option<&str>, writer: &TileWriter) -> Result<u64, FetchError> {
    let offset = Arc::new(AtomicU64::new(0));
    let offset_cb = Arc::clone(&offset);
    let write_error: Arc<Mutex<Option<std::io::Error>>> = Arc::new(Mutex::new(None));
    let write_error_cb = Arc::clone(&write_error);
    let writer_cb = writer.clone();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::Curl)?;
    easy.follow_location(true).map_err(FetchError::Curl)?;
    easy.connect_timeout(Duration::from_secs(30))
        .map_err(FetchError::Curl)?;
    // Abort if throughput drops below 1 KiB/s for 60s; tiles are tens of
    // megabytes, so a hard wall-clock timeout would kill slow links.
    easy.low_speed_limit(1024).map_err(FetchError::Curl)?;
    easy.low_speed_time(Duration::from_secs(60))
        .map_err(FetchError::Curl)?;
    if let Some(value) = cookie {
        easy.cookie(&format!("DATA={}", value))
            .map_err(FetchError::Curl)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(move |data| {
                let off = offset_cb.fetch_add(data.len() as u64, Ordering::Relaxed);
                match writer_cb.write_at(off, data) {
                    Ok(()) => Ok(data.len()),
                    Err(e) => {
                        let _ = write_error_cb.lock().unwrap().replace(e);
                        Ok(0) // abort transfer
                    }
                }
            })
            .map_err(FetchError::Curl)?;
        if let Err(e) = transfer.perform() {
            if e.is_write_error() {
                if let Some(io_err) = write_error.lock().unwrap().take() {
                    return Err(FetchError::storage(writer.temp_path(), io_err));
                }
            }
            return Err(FetchError::Curl(e));
        }
    }

    let status = easy.response_code().map_err(FetchError::Curl)?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: url.to_string(),
            status,
        });
    }

    Ok(offset.load(Ordering::Relaxed))
}
