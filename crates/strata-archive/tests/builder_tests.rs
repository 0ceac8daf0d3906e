//! Integration tests for strata-archive

use chrono::{NaiveDate, NaiveDateTime};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use strata_archive::{ArchiveError, ZipArchiveBuilder};
use strata_domain::traits::ArchiveBuilder;
use strata_domain::ArchiveLayout;
use tempfile::TempDir;
use zip::ZipArchive;

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(14, 5, 9)
        .unwrap()
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn entry_names(artifact: &Path) -> Vec<String> {
    let archive = ZipArchive::new(File::open(artifact).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[test]
fn test_artifact_lands_at_deterministic_path() {
    let source = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();
    write(source.path(), "index.html", "<html></html>");

    let layout = ArchiveLayout::new(backups.path(), "webapp");
    let artifact = ZipArchiveBuilder::new()
        .build(source.path(), &layout, instant())
        .unwrap();

    assert_eq!(
        artifact,
        backups
            .path()
            .join("webapp/2024/03/15/webapp_20240315_140509.zip")
    );
    assert_eq!(artifact, layout.artifact_path(instant()));
    assert!(artifact.is_file());
}

#[test]
fn test_every_file_is_stored_under_its_relative_path() {
    let source = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();
    write(source.path(), "README.md", "hello");
    write(source.path(), "src/main.rs", "fn main() {}");
    write(source.path(), "src/nested/deep/data.json", "{}");
    fs::create_dir_all(source.path().join("empty")).unwrap();

    let layout = ArchiveLayout::new(backups.path(), "webapp");
    let artifact = ZipArchiveBuilder::new()
        .build(source.path(), &layout, instant())
        .unwrap();

    assert_eq!(
        entry_names(&artifact),
        vec!["README.md", "src/main.rs", "src/nested/deep/data.json"]
    );

    let mut archive = ZipArchive::new(File::open(&artifact).unwrap()).unwrap();
    let mut contents = String::new();
    archive
        .by_name("src/main.rs")
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "fn main() {}");
}

#[test]
fn test_empty_source_yields_empty_archive() {
    let source = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();

    let layout = ArchiveLayout::new(backups.path(), "webapp");
    let artifact = ZipArchiveBuilder::new()
        .with_compression_level(1)
        .build(source.path(), &layout, instant())
        .unwrap();

    assert!(entry_names(&artifact).is_empty());
}

#[test]
fn test_missing_source_fails() {
    let backups = TempDir::new().unwrap();
    let layout = ArchiveLayout::new(backups.path(), "webapp");

    let err = ZipArchiveBuilder::new()
        .build(&backups.path().join("nope"), &layout, instant())
        .unwrap_err();

    assert!(matches!(err, ArchiveError::SourceNotDirectory { .. }));
    assert!(!layout.project_root().exists(), "nothing is created for a bad source");
}

#[test]
fn test_unwritable_destination_fails() {
    let source = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();
    write(source.path(), "a.txt", "a");

    // A regular file where the backup root should be
    let blocked = backups.path().join("root-is-a-file");
    fs::write(&blocked, b"x").unwrap();

    let layout = ArchiveLayout::new(&blocked, "webapp");
    let err = ZipArchiveBuilder::new()
        .build(source.path(), &layout, instant())
        .unwrap_err();

    assert!(matches!(err, ArchiveError::Io { .. }));
}

#[test]
fn test_two_runs_on_one_day_share_a_day_directory() {
    let source = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();
    write(source.path(), "a.txt", "a");

    let layout = ArchiveLayout::new(backups.path(), "webapp");
    let builder = ZipArchiveBuilder::new();
    let first = builder.build(source.path(), &layout, instant()).unwrap();
    let later = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let second = builder.build(source.path(), &layout, later).unwrap();

    assert_ne!(first, second);
    assert_eq!(first.parent(), second.parent());
}
