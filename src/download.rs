/*! Archive downloading and extraction.

Archives are stored in a local cache directory:

- `<cache>/downloads/<sha256 of url>` holds the downloaded archive,
- `<cache>/extracted/<sha256 of archive path>` holds its extracted content.

Both are reused when present, so that subsets sharing an archive (EU legislation and court cases)
only download it once. Partial results are written next to their final location with an `.incomplete`
extension and renamed once complete.

`file://` urls are copied from the local filesystem instead of being fetched.
!*/
use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, info};
use reqwest::Url;
use sha2::{Digest, Sha256};
use zip::ZipArchive;

use crate::error::Error;

/// holds the cache location and
/// http client that will make the requests.
pub struct DownloadManager {
    cache_dir: PathBuf,
    client: reqwest::blocking::Client,
}

impl DownloadManager {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn downloads_dir(&self) -> PathBuf {
        self.cache_dir.join("downloads")
    }

    fn extracted_dir(&self) -> PathBuf {
        self.cache_dir.join("extracted")
    }

    /// Download `url` into the cache, returning the path of the local copy.
    pub fn download(&self, url: &Url) -> Result<PathBuf, Error> {
        let dst = self.downloads_dir().join(cache_key(url.as_str()));
        if dst.is_file() {
            debug!("{} already downloaded at {:?}", url, dst);
            return Ok(dst);
        }

        fs::create_dir_all(self.downloads_dir())?;
        let partial = dst.with_extension("incomplete");

        if url.scheme() == "file" {
            let src = url
                .to_file_path()
                .map_err(|_| Error::Custom(format!("{} is not a local path", url)))?;
            info!("copying {:?}", src);
            fs::copy(&src, &partial)?;
        } else {
            info!("downloading {}", url);
            let mut response = self.client.get(url.clone()).send()?.error_for_status()?;
            let mut out = File::create(&partial)?;
            std::io::copy(&mut response, &mut out)?;
        }

        fs::rename(&partial, &dst)?;
        debug!("{} stored at {:?}", url, dst);
        Ok(dst)
    }

    /// Extract a zip `archive` into the cache, returning the extraction directory.
    pub fn extract(&self, archive: &Path) -> Result<PathBuf, Error> {
        let dst = self
            .extracted_dir()
            .join(cache_key(&archive.to_string_lossy()));
        if dst.is_dir() {
            debug!("{:?} already extracted at {:?}", archive, dst);
            return Ok(dst);
        }

        let partial = dst.with_extension("incomplete");
        if partial.exists() {
            fs::remove_dir_all(&partial)?;
        }
        fs::create_dir_all(&partial)?;

        info!("extracting {:?}", archive);
        let f = File::open(archive)?;
        let mut zip = ZipArchive::new(BufReader::new(f))?;
        // entries escaping the destination are rejected by the zip crate
        zip.extract(&partial)?;

        fs::rename(&partial, &dst)?;
        Ok(dst)
    }

    pub fn download_and_extract(&self, url: &Url) -> Result<PathBuf, Error> {
        let archive = self.download(url)?;
        self.extract(&archive)
    }
}

/// hex encoded sha256 of `s`.
fn cache_key(s: &str) -> String {
    format!("{:x}", Sha256::digest(s.as_bytes()))
}
