/*! # LexFiles

Loader for LexFiles, the English multinational legal corpora.

A subset is picked from [subsets::SUBSETS] by name, its archive is fetched and extracted by a
[download::DownloadManager], and each split file is read as a lazy stream of keyed [io::reader::Record]s.

```no_run
use std::path::Path;

use lexfiles::builder::LexFiles;
use lexfiles::download::DownloadManager;

# fn main() -> Result<(), lexfiles::error::Error> {
let lf = LexFiles::from_name("uk-court-cases", DownloadManager::new(Path::new("lexfiles_cache")))?;
for generator in lf.split_generators()? {
    for example in lf.generate_examples(&generator)? {
        let (key, record) = example?;
        println!("{}: {}", key, record.text.len());
    }
}
# Ok(())
# }
```
!*/
pub mod builder;
pub mod cli;
pub mod download;
pub mod error;
pub mod io;
pub mod metadata;
pub mod split;
pub mod subsets;
