//! Fetch error type.

use std::fmt;
use std::path::PathBuf;

/// Error from one fetch-and-materialize task. Returned as a value so the
/// dispatcher can aggregate failures instead of aborting the batch.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported a transport error (timeout, connection, TLS, ...).
    Curl(curl::Error),
    /// The server answered with a non-2xx status.
    Http { url: String, status: u32 },
    /// Creating or writing the staged tile file failed.
    Storage { path: PathBuf, source: std::io::Error },
}

impl FetchError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Storage {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http { url, status } => write!(f, "HTTP {} from {}", status, url),
            FetchError::Storage { path, source } => {
                write!(f, "writing {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Storage { source, .. } => Some(source),
            FetchError::Http { .. } => None,
        }
    }
}
