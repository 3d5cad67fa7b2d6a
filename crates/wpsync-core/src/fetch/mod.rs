//! Streaming HTTP(S) GET of a single asset to disk.
//!
//! The body is written chunk by chunk to `<dest>.part` and renamed onto
//! `dest` only after a 2xx transfer completes, so a failed fetch never
//! leaves a file at `dest`.

mod error;

pub use error::FetchError;

use crate::config::HttpConfig;
use crate::url_model::NAME_MAX;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Downloads one URL to one path. Implemented by [`CurlFetcher`]; tests plug in fakes.
pub trait Fetcher {
    /// Fetches `url` into `dest`, returning the number of body bytes written.
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

/// libcurl-backed fetcher. Blocking; one transfer at a time.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    http: HttpConfig,
}

impl CurlFetcher {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn download_to(&self, url: &str, part: &Path) -> Result<u64, FetchError> {
        let file = File::create(part)?;
        let mut out = BufWriter::new(file);
        let mut written: u64 = 0;
        let mut write_err: Option<io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.http.max_redirects)?;
        easy.fail_on_error(true)?;
        if let Some(secs) = self.http.connect_timeout_secs {
            easy.connect_timeout(Duration::from_secs(secs))?;
        }
        if let Some(secs) = self.http.timeout_secs {
            easy.timeout(Duration::from_secs(secs))?;
        }
        if let Some(ua) = &self.http.user_agent {
            easy.useragent(ua)?;
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match out.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = write_err {
            return Err(FetchError::Storage(e));
        }
        if let Err(e) = performed {
            if e.is_http_returned_error() {
                return Err(FetchError::Http(easy.response_code()?));
            }
            return Err(FetchError::Curl(e));
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        out.flush()?;
        Ok(written)
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let part = part_path(dest);
        let result = self
            .download_to(url, &part)
            .and_then(|n| fs::rename(&part, dest).map(|()| n).map_err(FetchError::from));
        if result.is_err() {
            let _ = fs::remove_file(&part);
        }
        result
    }
}

/// Suffix of the temp file an in-flight transfer writes to.
pub const PART_SUFFIX: &str = ".part";

/// Temp path for an in-flight transfer: `<dest>.part`, with the file name
/// shortened as needed so the whole component stays within NAME_MAX.
pub fn part_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut take = name.len().min(NAME_MAX - PART_SUFFIX.len());
    while !name.is_char_boundary(take) {
        take -= 1;
    }
    dest.with_file_name(format!("{}{}", &name[..take], PART_SUFFIX))
}
