//! Fetch error type.

use thiserror::Error;

/// Error returned by a single asset fetch (curl failure, HTTP error, or storage failure).
/// None of these are retried; the synchronizer keeps the entry's old `url`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, invalid URL, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the asset to disk failed (e.g. disk full, permission denied).
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
