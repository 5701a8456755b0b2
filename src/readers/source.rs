use crate::error::{ProcessingError, Result};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use flate2::read::GzDecoder;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a run's input lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Pick the local file when one is given, otherwise the remote default
    pub fn from_input(input: Option<PathBuf>, default_url: &str) -> Self {
        match input {
            Some(path) => DataSource::File(path),
            None => DataSource::Url(default_url.to_string()),
        }
    }

    pub fn is_gzip(&self) -> bool {
        match self {
            DataSource::File(path) => path.extension().is_some_and(|ext| ext == "gz"),
            DataSource::Url(url) => url.ends_with(".gz"),
        }
    }

    /// Open the source as a buffered line stream, decompressing `.gz` inputs.
    ///
    /// Every failure here is reported as `SourceUnavailable`, before any
    /// output has been created.
    pub async fn open(&self) -> Result<Box<dyn BufRead + Send>> {
        let raw: Box<dyn Read + Send> = match self {
            DataSource::File(path) => Box::new(open_file(path)?),
            DataSource::Url(url) => Box::new(Cursor::new(download(url).await?)),
        };

        let reader: Box<dyn BufRead + Send> = if self.is_gzip() {
            Box::new(BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                GzDecoder::new(raw),
            ))
        } else {
            Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, raw))
        };

        Ok(reader)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        ProcessingError::SourceUnavailable(format!("cannot open '{}': {}", path.display(), e))
    })
}

async fn download(url: &str) -> Result<Vec<u8>> {
    info!("Downloading {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| ProcessingError::SourceUnavailable(format!("{}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(ProcessingError::SourceUnavailable(format!(
            "{}: HTTP {}",
            url,
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ProcessingError::SourceUnavailable(format!("{}: {}", url, e)))?;

    debug!("Downloaded {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}
