//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A line could not be decoded as a JSON object.
    Json {
        line: usize,
        source: serde_json::Error,
    },
    /// A field needed by the subset is absent from a record.
    MissingField {
        field: &'static str,
        line: usize,
    },
    /// A field is present but does not have the expected JSON type.
    InvalidField {
        field: &'static str,
        line: usize,
    },
    UnknownSubset(String),
    UnknownSplit(String),
    Download(reqwest::Error),
    Url(url::ParseError),
    Zip(zip::result::ZipError),
    Serde(serde_json::Error),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Json { line, source } => {
                write!(f, "could not decode line {}: {}", line, source)
            }
            Error::MissingField { field, line } => {
                write!(f, "missing field `{}` on line {}", field, line)
            }
            Error::InvalidField { field, line } => {
                write!(f, "field `{}` on line {} is not a string", field, line)
            }
            Error::UnknownSubset(name) => write!(f, "unknown subset: {}", name),
            Error::UnknownSplit(name) => write!(f, "unknown split: {}", name),
            Error::Download(e) => write!(f, "download error: {}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::Zip(e) => write!(f, "archive error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json { source, .. } => Some(source),
            Error::Download(e) => Some(e),
            Error::Url(e) => Some(e),
            Error::Zip(e) => Some(e),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Download(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Error {
        Error::Zip(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
