//! Subset registry.
//!
//! Holds the twelve subsets of the LexFiles corpus. Each subset is backed by a
//! zip archive hosted on the Hugging Face hub. Both EU subsets are read from the
//! same EUR-Lex archive and are told apart by the `sector` field of each record.
use std::fmt;

use url::Url;

use crate::error::Error;

/// Version shared by every subset.
pub const VERSION: &str = "1.0.0";

/// Sector tag of EUR-Lex records that are court cases.
pub const COURT_SECTOR: &str = "6";

/// Archive hosted in the main `lex_files` repository.
macro_rules! lex_files {
    ($file:literal) => {
        concat!(
            "https://huggingface.co/datasets/lexlms/lex_files/resolve/main/",
            $file
        )
    };
}

/// Which records of a split file end up in the subset, and how they are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every line, keyed by `{subset}-{split}-{line}`.
    All,
    /// Lines whose `sector` equals the value, keyed by their `id`.
    SectorEquals(&'static str),
    /// Lines whose `sector` differs from the value, keyed by their `id`.
    SectorNotEquals(&'static str),
}

/// Static description of a subset.
#[derive(Debug, PartialEq, Eq)]
pub struct SubsetConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub url: &'static str,
    pub selection: Selection,
}

macro_rules! subset {
    ($name:literal, $description:literal, $url:expr) => {
        subset!($name, $description, $url, Selection::All)
    };
    ($name:literal, $description:literal, $url:expr, $selection:expr) => {
        SubsetConfig {
            name: $name,
            description: $description,
            version: VERSION,
            url: $url,
            selection: $selection,
        }
    };
}

pub static SUBSETS: [SubsetConfig; 12] = [
    subset!(
        "eu-legislation",
        "EU Legislation",
        lex_files!("eurlex.zip"),
        Selection::SectorNotEquals(COURT_SECTOR)
    ),
    subset!(
        "eu-court-cases",
        "EU Court cases",
        lex_files!("eurlex.zip"),
        Selection::SectorEquals(COURT_SECTOR)
    ),
    subset!(
        "legal-c4",
        "Legal webpages extracted from C4",
        "https://huggingface.co/datasets/lexlms/lexfiles4/resolve/main/legal_c4.zip"
    ),
    subset!(
        "ecthr-cases",
        "ECtHR cases",
        lex_files!("ecthr_cases.zip")
    ),
    subset!(
        "uk-legislation",
        "UK Legislation",
        lex_files!("uk_legislation.zip")
    ),
    subset!(
        "uk-court-cases",
        "UK Court cases",
        lex_files!("uk_courts_cases.zip")
    ),
    subset!(
        "indian-court-cases",
        "Indian Court cases",
        lex_files!("indian_courts_cases.zip")
    ),
    subset!(
        "us-contracts",
        "US Contracts",
        lex_files!("us_contracts.zip")
    ),
    subset!(
        "us-court-cases",
        "US Court cases",
        lex_files!("courtlistener.zip")
    ),
    subset!(
        "us-legislation",
        "US Legislation",
        lex_files!("us_legislation.zip")
    ),
    subset!(
        "canadian-legislation",
        "Canadian Legislation",
        lex_files!("canadian_legislation.zip")
    ),
    // published with the legislation description
    subset!(
        "canadian-court-cases",
        "Canadian Legislation",
        lex_files!("canadian_court_cases.zip")
    ),
];

impl SubsetConfig {
    /// Resolve a subset by name.
    pub fn from_name(name: &str) -> Result<&'static SubsetConfig, Error> {
        SUBSETS
            .iter()
            .find(|subset| subset.name == name)
            .ok_or_else(|| Error::UnknownSubset(name.to_string()))
    }

    /// Parsed download URL.
    pub fn parsed_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(self.url)?)
    }
}

impl fmt::Display for SubsetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Names of every subset, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    SUBSETS.iter().map(|subset| subset.name)
}
