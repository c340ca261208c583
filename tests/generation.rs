use std::fs::File;
use std::io::Write;
use std::path::Path;

use lexfiles::builder::{LexFiles, SplitGenerator};
use lexfiles::download::DownloadManager;
use lexfiles::error::Error;
use lexfiles::io::reader::{Examples, Record};
use lexfiles::io::writer::WriterJsonl;
use lexfiles::split::Split;
use lexfiles::subsets::SubsetConfig;
use url::Url;
use zip::write::FileOptions;
use zip::ZipWriter;

fn eurlex_split(split: Split) -> String {
    (0..3)
        .map(|i| {
            let sector = if i == 1 { "1" } else { "6" };
            format!(
                r#"{{"id":"{}-{}","sector":"{}","text":"{} document {}"}}"#,
                split, i, sector, split, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_splits(dir: &Path) {
    for split in Split::ALL {
        std::fs::write(split.path_in(dir), eurlex_split(split)).unwrap();
    }
}

fn lexfiles(name: &str, cache: &Path) -> LexFiles {
    LexFiles::from_name(name, DownloadManager::new(cache)).unwrap()
}

fn all_examples(lf: &LexFiles, generators: &[SplitGenerator]) -> Vec<(String, Record)> {
    generators
        .iter()
        .flat_map(|generator| lf.generate_examples(generator).unwrap())
        .map(Result::unwrap)
        .collect()
}

#[test_log::test]
fn eu_subsets_partition_the_archive() {
    let data = tempfile::tempdir().unwrap();
    write_splits(data.path());
    let generators = SplitGenerator::from_data_dir(data.path());

    let court = all_examples(&lexfiles("eu-court-cases", data.path()), &generators);
    let legislation = all_examples(&lexfiles("eu-legislation", data.path()), &generators);

    assert_eq!(court.len(), 6);
    assert_eq!(legislation.len(), 3);

    let court_keys: Vec<_> = court.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(
        court_keys,
        vec!["train-0", "train-2", "validation-0", "validation-2", "test-0", "test-2"]
    );
    let legislation_keys: Vec<_> = legislation.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(legislation_keys, vec!["train-1", "validation-1", "test-1"]);
}

#[test]
fn other_subsets_keep_every_line() {
    let data = tempfile::tempdir().unwrap();
    write_splits(data.path());
    let generators = SplitGenerator::from_data_dir(data.path());
    let lf = lexfiles("indian-court-cases", data.path());

    let examples = all_examples(&lf, &generators);
    assert_eq!(examples.len(), 9);
    assert_eq!(examples[0].0, "indian-court-cases-train-0");
    assert_eq!(examples[4].0, "indian-court-cases-validation-1");
    assert_eq!(examples[8].0, "indian-court-cases-test-2");
    assert_eq!(examples[8].1.text, "test document 2");
}

#[test]
fn generation_is_restartable() {
    let data = tempfile::tempdir().unwrap();
    write_splits(data.path());
    let subset = SubsetConfig::from_name("eu-court-cases").unwrap();
    let path = Split::Validation.path_in(data.path());

    let first: Vec<_> = Examples::from_path(subset, &path, Split::Validation)
        .unwrap()
        .map(Result::unwrap)
        .collect();
    let second: Vec<_> = Examples::from_path(subset, &path, Split::Validation)
        .unwrap()
        .map(Result::unwrap)
        .collect();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn malformed_line_aborts_writing() {
    let data = tempfile::tempdir().unwrap();
    let path = Split::Train.path_in(data.path());
    let mut f = File::create(&path).unwrap();
    writeln!(f, r#"{{"text":"ok"}}"#).unwrap();
    writeln!(f, r#"{{"text":"#).unwrap();
    writeln!(f, r#"{{"text":"never read"}}"#).unwrap();
    drop(f);

    let subset = SubsetConfig::from_name("us-legislation").unwrap();
    let examples = Examples::from_path(subset, &path, Split::Train).unwrap();
    let mut writer = WriterJsonl::new(Vec::new());

    let result = writer.write_all(examples);
    assert!(matches!(result, Err(Error::Json { line: 2, .. })));
    assert_eq!(writer.nb_written(), 1);
}

#[test]
fn extracted_archive_feeds_generation() {
    let src = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();

    let archive = src.path().join("eurlex.zip");
    let mut zip = ZipWriter::new(File::create(&archive).unwrap());
    for split in Split::ALL {
        zip.start_file(split.file_name(), FileOptions::default())
            .unwrap();
        zip.write_all(eurlex_split(split).as_bytes()).unwrap();
    }
    zip.finish().unwrap();

    let dm = DownloadManager::new(cache.path());
    let data_dir = dm
        .download_and_extract(&Url::from_file_path(&archive).unwrap())
        .unwrap();
    let generators = SplitGenerator::from_data_dir(&data_dir);

    let lf = lexfiles("eu-legislation", cache.path());
    let examples = all_examples(&lf, &generators);
    assert_eq!(examples.len(), 3);

    let mut writer = WriterJsonl::new(Vec::new());
    let nb = writer
        .write_all(lf.generate_examples(&generators[0]).unwrap())
        .unwrap();
    assert_eq!(nb, 1);
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, "{\"id\":\"train-1\",\"text\":\"train document 1\"}\n");
}
