use std::fs::File;
use std::io;
use std::path::Path;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info};

use super::compression::LzmaReader;
use super::progress::{ProgressFormatter, ProgressReader};
use crate::{Error, Result};

/// Fetch an LZMA payload and write it, decompressed, to `out`.
///
/// `out` is created or truncated only once the stream header has been
/// accepted. Returns the number of decompressed bytes written.
pub fn download_file(http: &Client, url: &str, out: &Path) -> Result<u64> {
    debug!(url, "fetching payload");
    let response = http.get(url).send()?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::NonOkStatus(status));
    }

    let total = response.content_length().unwrap_or(0);
    let mut decoded = LzmaReader::new(ProgressReader::new(response, total))?;

    let mut file = File::create(out)?;
    let written = io::copy(&mut decoded, &mut file)?;

    let stats = decoded.get_ref().stats();
    info!(
        "Fetched {} at {}, {} bytes after decompression",
        stats.format_progress(),
        stats.format_speed(),
        written
    );
    Ok(written)
}
