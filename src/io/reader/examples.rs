/*! Keyed record generation from a JSON lines split file.

Each line of a split file is a JSON object holding at least a `text` field.
`\n`, `\r\n` and a lone `\r` all end a line (see [UniversalLines]).
Lines are decoded one at a time and turned into `(key, Record)` pairs following
the [Selection] of the subset:

- [Selection::All]: every line is yielded, keyed `{subset}-{split}-{line}` (zero-based line).
- [Selection::SectorEquals]/[Selection::SectorNotEquals]: lines are kept depending on
  their `sector` field and keyed by their own `id` field.

The first error (io, decoding or missing field) ends the iteration.
!*/
use std::fs::File;
use std::io::{BufReader, Read};
use std::iter::Enumerate;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lines::UniversalLines;
use crate::error::Error;
use crate::split::Split;
use crate::subsets::{Selection, SubsetConfig};

/// Output record. `text` is the only field exposed downstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub text: String,
}

/// Lazy sequence of keyed records over a split file.
#[derive(Debug)]
pub struct Examples<T>
where
    T: Read,
{
    subset: &'static SubsetConfig,
    split: Split,
    lines: Enumerate<UniversalLines<BufReader<T>>>,
    failed: bool,
}

impl Examples<File> {
    /// Open `src` and generate the examples of `split` for `subset`.
    pub fn from_path(
        subset: &'static SubsetConfig,
        src: &Path,
        split: Split,
    ) -> Result<Self, Error> {
        info!("generating examples from {:?}", src);
        let f = File::open(src)?;
        Ok(Self::new(subset, f, split))
    }
}

impl<T> Examples<T>
where
    T: Read,
{
    pub fn new(subset: &'static SubsetConfig, reader: T, split: Split) -> Self {
        Self {
            subset,
            split,
            lines: UniversalLines::new(BufReader::new(reader)).enumerate(),
            failed: false,
        }
    }
}

/// Decode line `idx` and apply the subset selection.
///
/// Returns `Ok(None)` when the line is filtered out.
fn example(
    subset: &SubsetConfig,
    split: Split,
    idx: usize,
    row: &str,
) -> Result<Option<(String, Record)>, Error> {
    let line = idx + 1;
    let row: Map<String, Value> =
        serde_json::from_str(row).map_err(|source| Error::Json { line, source })?;

    match subset.selection {
        Selection::All => {
            let key = format!("{}-{}-{}", subset.name, split, idx);
            let text = text_field(&row, line)?;
            Ok(Some((key, Record { text })))
        }
        Selection::SectorEquals(sector) => {
            let keep = sector_field(&row, line)? == Some(sector);
            keyed_by_id(&row, line, keep)
        }
        Selection::SectorNotEquals(sector) => {
            let keep = sector_field(&row, line)? != Some(sector);
            keyed_by_id(&row, line, keep)
        }
    }
}

/// get the `sector` field. `None` if it is not a string.
fn sector_field(row: &Map<String, Value>, line: usize) -> Result<Option<&str>, Error> {
    row.get("sector")
        .map(Value::as_str)
        .ok_or(Error::MissingField {
            field: "sector",
            line,
        })
}

/// Build an example keyed by its `id`, if `keep` is set.
fn keyed_by_id(
    row: &Map<String, Value>,
    line: usize,
    keep: bool,
) -> Result<Option<(String, Record)>, Error> {
    if !keep {
        return Ok(None);
    }

    let key = id_field(row, line)?;
    let text = text_field(row, line)?;
    Ok(Some((key, Record { text })))
}

/// get the `text` field, that has to be a string.
fn text_field(row: &Map<String, Value>, line: usize) -> Result<String, Error> {
    match row.get("text") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(Error::InvalidField {
            field: "text",
            line,
        }),
        None => Err(Error::MissingField {
            field: "text",
            line,
        }),
    }
}

/// get the `id` field. Non-string ids are rendered as JSON.
fn id_field(row: &Map<String, Value>, line: usize) -> Result<String, Error> {
    match row.get("id") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(Error::MissingField { field: "id", line }),
    }
}

impl<T> Iterator for Examples<T>
where
    T: Read,
{
    type Item = Result<(String, Record), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (subset, split) = (self.subset, self.split);

        // skip filtered out lines
        for (idx, row) in self.lines.by_ref() {
            let result = row
                .map_err(Error::Io)
                .and_then(|row| example(subset, split, idx, &row));
            match result {
                Ok(Some(example)) => return Some(Ok(example)),
                Ok(None) => continue,
                Err(e) => {
                    debug!("[{}] stopping generation: {}", self.subset, e);
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}
