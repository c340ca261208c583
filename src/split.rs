//! Train/validation/test splits and the files backing them.
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    /// Every split, in generation order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Validation, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
            Split::Test => "test",
        }
    }

    /// Name of the split file inside an extracted archive.
    pub fn file_name(&self) -> &'static str {
        match self {
            Split::Train => "train.jsonl",
            Split::Validation => "validation.jsonl",
            Split::Test => "test.jsonl",
        }
    }

    /// Path of the split file in `data_dir`.
    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Split::Train),
            "validation" => Ok(Split::Validation),
            "test" => Ok(Split::Test),
            other => Err(Error::UnknownSplit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let names: Vec<_> = Split::ALL.iter().map(Split::file_name).collect();
        assert_eq!(names, vec!["train.jsonl", "validation.jsonl", "test.jsonl"]);
    }

    #[test]
    fn test_parse() {
        for split in Split::ALL {
            assert_eq!(split.as_str().parse::<Split>().unwrap(), split);
        }
        assert!(matches!(
            "dev".parse::<Split>(),
            Err(Error::UnknownSplit(s)) if s == "dev"
        ));
    }

    #[test]
    fn test_path_in() {
        let p = Split::Validation.path_in(Path::new("data/eurlex"));
        assert_eq!(p, PathBuf::from("data/eurlex/validation.jsonl"));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Split::Test).unwrap(), r#""test""#);
    }
}
