//! # LexFiles
//!
//! Loader for LexFiles, the English multinational legal corpora.
//!
//! Twelve subsets (legislation, court cases and contracts from the EU, the UK, the US, Canada and India)
//! are available, each one backed by a zip archive holding `train`, `validation` and `test` JSON lines files.
//!
//! ## Getting started
//!
//! ```sh
//! lexfiles 1.0.0
//! LexFiles legal corpora loader.
//!
//! USAGE:
//!     lexfiles <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     download    Download and extract a subset archive
//!     generate    Generate examples of a subset as JSON lines
//!     help        Prints this message or the help of the given subcommand(s)
//!     info        Print dataset information as JSON
//!     list        List available subsets
//! ```
//!
use std::fs::File;
use std::io::{BufWriter, Write};

use structopt::StructOpt;

use lexfiles::builder::{LexFiles, SplitGenerator};
use lexfiles::cli::{self, LexFilesCmd};
use lexfiles::download::DownloadManager;
use lexfiles::error::Error;
use lexfiles::io::writer::WriterJsonl;
use lexfiles::subsets::{self, SubsetConfig};

#[macro_use]
extern crate log;

fn generate(g: cli::Generate) -> Result<(), Error> {
    let lf = LexFiles::from_name(&g.subset, DownloadManager::new(&g.cache_dir))?;

    let generators = match &g.data_dir {
        Some(data_dir) => SplitGenerator::from_data_dir(data_dir),
        None => lf.split_generators()?,
    };

    let out: Box<dyn Write> = match &g.dst {
        Some(dst) => Box::new(BufWriter::new(File::create(dst)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    let mut writer = WriterJsonl::new(out);

    for generator in generators
        .iter()
        .filter(|generator| g.split.map_or(true, |split| split == generator.split))
    {
        let examples = lf.generate_examples(generator)?;
        let nb = writer.write_all(examples)?;
        info!("[{}] {} examples in {} split", lf.config(), nb, generator.split);
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = LexFilesCmd::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        LexFilesCmd::List => {
            for name in subsets::names() {
                let subset = SubsetConfig::from_name(name)?;
                println!("{}\t{}\t{}", subset.name, subset.description, subset.url);
            }
        }
        LexFilesCmd::Info => {
            println!("{}", serde_json::to_string_pretty(&LexFiles::info())?);
        }
        LexFilesCmd::Download(d) => {
            let lf = LexFiles::from_name(&d.subset, DownloadManager::new(&d.cache_dir))?;
            println!("{}", lf.data_dir()?.display());
        }
        LexFilesCmd::Generate(g) => generate(g)?,
    };
    Ok(())
}
