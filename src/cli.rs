//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::split::Split;

#[derive(Debug, StructOpt)]
#[structopt(name = "lexfiles", about = "LexFiles legal corpora loader.")]
/// Holds every command that is callable by the `lexfiles` command.
pub enum LexFilesCmd {
    #[structopt(about = "List available subsets")]
    List,
    #[structopt(about = "Print dataset information as JSON")]
    Info,
    #[structopt(about = "Download and extract a subset archive")]
    Download(Download),
    #[structopt(about = "Generate examples of a subset as JSON lines")]
    Generate(Generate),
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
/// ```sh
/// lexfiles-download
/// Download and extract a subset archive
///
/// USAGE:
///     lexfiles download [OPTIONS] <subset>
///
/// OPTIONS:
///     -c, --cache-dir <cache-dir>    cache location [default: lexfiles_cache]
///
/// ARGS:
///     <subset>    subset name (see `lexfiles list`)
/// ```
pub struct Download {
    #[structopt(help = "subset name (see `lexfiles list`)")]
    pub subset: String,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "cache-dir",
        help = "cache location",
        default_value = "lexfiles_cache"
    )]
    pub cache_dir: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Generate command and parameters.
///
/// ```sh
/// lexfiles-generate
/// Generate examples of a subset as JSON lines
///
/// USAGE:
///     lexfiles generate [OPTIONS] <subset>
///
/// OPTIONS:
///     -s, --split <split>            split to generate (train, validation, test). Default is all of them.
///     -d, --data-dir <data-dir>      already extracted archive location. Skips downloading.
///     -c, --cache-dir <cache-dir>    cache location [default: lexfiles_cache]
///     -o, --dst <dst>                output file. Default is stdout.
///
/// ARGS:
///     <subset>    subset name (see `lexfiles list`)
/// ```
pub struct Generate {
    #[structopt(help = "subset name (see `lexfiles list`)")]
    pub subset: String,
    #[structopt(
        short = "s",
        long = "split",
        help = "split to generate (train, validation, test). Default is all of them."
    )]
    pub split: Option<Split>,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "data-dir",
        help = "already extracted archive location. Skips downloading."
    )]
    pub data_dir: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "cache-dir",
        help = "cache location",
        default_value = "lexfiles_cache"
    )]
    pub cache_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "dst",
        help = "output file. Default is stdout."
    )]
    pub dst: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args() {
        let cmd = LexFilesCmd::from_iter_safe(&[
            "lexfiles",
            "generate",
            "eu-court-cases",
            "--split",
            "validation",
            "-d",
            "data/eurlex",
        ])
        .unwrap();

        match cmd {
            LexFilesCmd::Generate(g) => {
                assert_eq!(g.subset, "eu-court-cases");
                assert_eq!(g.split, Some(Split::Validation));
                assert_eq!(g.data_dir, Some(PathBuf::from("data/eurlex")));
                assert_eq!(g.cache_dir, PathBuf::from("lexfiles_cache"));
                assert!(g.dst.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_split() {
        let cmd = LexFilesCmd::from_iter_safe(&["lexfiles", "generate", "legal-c4", "-s", "dev"]);
        assert!(cmd.is_err());
    }

    #[test]
    fn test_list() {
        let cmd = LexFilesCmd::from_iter_safe(&["lexfiles", "list"]).unwrap();
        assert!(matches!(cmd, LexFilesCmd::List));
    }
}
