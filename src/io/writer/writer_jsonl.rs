/*! JSON lines writer for keyed examples.

Wraps any [Write] (a file, stdout) and writes each example as `{"id":…,"text":…}` followed by a newline.
!*/
use std::io::Write;

use serde::Serialize;

use crate::error::Error;
use crate::io::reader::Record;

/// Serialized form of an example.
#[derive(Serialize)]
struct KeyedRecord<'a> {
    id: &'a str,
    text: &'a str,
}

pub struct WriterJsonl<W: Write> {
    handle: W,
    nb_written: usize,
}

impl<W: Write> WriterJsonl<W> {
    pub fn new(handle: W) -> Self {
        Self {
            handle,
            nb_written: 0,
        }
    }

    /// writes a single example.
    pub fn write_single(&mut self, key: &str, record: &Record) -> Result<(), Error> {
        let keyed = KeyedRecord {
            id: key,
            text: &record.text,
        };
        serde_json::to_writer(&mut self.handle, &keyed)?;
        self.handle.write_all(b"\n")?;
        self.nb_written += 1;
        Ok(())
    }

    /// Write every example of `examples`, stopping at the first error.
    ///
    /// Returns the number of examples written by this call.
    pub fn write_all<I>(&mut self, examples: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = Result<(String, Record), Error>>,
    {
        let before = self.nb_written;
        for example in examples {
            let (key, record) = example?;
            self.write_single(&key, &record)?;
        }
        self.handle.flush()?;
        Ok(self.nb_written - before)
    }

    /// number of examples written since creation.
    pub fn nb_written(&self) -> usize {
        self.nb_written
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}
