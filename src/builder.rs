/*! Dataset builder

Binds a subset to a [DownloadManager]: the subset archive is downloaded and extracted once,
then each split gets its own [SplitGenerator] pointing to the split file in the extracted archive.
!*/
use std::fs::File;
use std::path::{Path, PathBuf};

use log::info;

use crate::download::DownloadManager;
use crate::error::Error;
use crate::io::reader::Examples;
use crate::metadata::DatasetInfo;
use crate::split::Split;
use crate::subsets::SubsetConfig;

/// A split and the file its examples are generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitGenerator {
    pub split: Split,
    pub filepath: PathBuf,
}

impl SplitGenerator {
    /// Split generators for every split, reading from `data_dir`.
    pub fn from_data_dir(data_dir: &Path) -> Vec<SplitGenerator> {
        Split::ALL
            .iter()
            .map(|split| SplitGenerator {
                split: *split,
                filepath: split.path_in(data_dir),
            })
            .collect()
    }
}

pub struct LexFiles {
    config: &'static SubsetConfig,
    manager: DownloadManager,
}

impl LexFiles {
    pub fn new(config: &'static SubsetConfig, manager: DownloadManager) -> Self {
        Self { config, manager }
    }

    /// Build from a subset name. Fails on unknown names.
    pub fn from_name(name: &str, manager: DownloadManager) -> Result<Self, Error> {
        Ok(Self::new(SubsetConfig::from_name(name)?, manager))
    }

    pub fn config(&self) -> &'static SubsetConfig {
        self.config
    }

    /// Corpus information, shared by every subset.
    pub fn info() -> DatasetInfo {
        DatasetInfo::default()
    }

    /// Download and extract the subset archive, returning the extracted location.
    pub fn data_dir(&self) -> Result<PathBuf, Error> {
        let url = self.config.parsed_url()?;
        let data_dir = self.manager.download_and_extract(&url)?;
        info!("[{}] data available at {:?}", self.config, data_dir);
        Ok(data_dir)
    }

    /// Download and extract the subset archive, then bind each split to its file.
    pub fn split_generators(&self) -> Result<Vec<SplitGenerator>, Error> {
        Ok(SplitGenerator::from_data_dir(&self.data_dir()?))
    }

    /// Lazily generate the examples of a split.
    pub fn generate_examples(&self, generator: &SplitGenerator) -> Result<Examples<File>, Error> {
        Examples::from_path(self.config, &generator.filepath, generator.split)
    }
}
