//! Dataset information: corpus description, homepage, version and output schema.
use serde::Deserialize;
use serde::Serialize;

use crate::subsets::VERSION;

pub const DESCRIPTION: &str = "LexFiles: English Multinational Legal Corpora";
pub const HOMEPAGE: &str = "https://huggingface.co/lexlms";

/// A named output column and its value type.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Feature {
    pub name: String,
    pub dtype: String,
}

/// Holds corpus-level information shared by every subset.
///
/// `features` is the output schema of generated records: a single `text`
/// column holding a string.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct DatasetInfo {
    pub description: String,
    pub homepage: String,
    pub version: String,
    pub features: Vec<Feature>,
}

impl Default for DatasetInfo {
    fn default() -> Self {
        Self {
            description: DESCRIPTION.to_string(),
            homepage: HOMEPAGE.to_string(),
            version: VERSION.to_string(),
            features: vec![Feature {
                name: "text".to_string(),
                dtype: "string".to_string(),
            }],
        }
    }
}
