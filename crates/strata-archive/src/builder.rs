//! Zip implementation of [`ArchiveBuilder`]

use crate::ArchiveError;
use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Component, Path, PathBuf};
use strata_domain::traits::ArchiveBuilder;
use strata_domain::ArchiveLayout;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive builder writing deflate-compressed zip files
#[derive(Debug, Clone, Default)]
pub struct ZipArchiveBuilder {
    compression: Option<i64>,
}

impl ZipArchiveBuilder {
    /// Create a builder with the default deflate level
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit deflate level (0-9)
    pub fn with_compression_level(mut self, level: i64) -> Self {
        self.compression = Some(level.clamp(0, 9));
        self
    }

    fn options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(self.compression)
    }
}

impl ArchiveBuilder for ZipArchiveBuilder {
    type Error = ArchiveError;

    fn build(
        &self,
        source: &Path,
        layout: &ArchiveLayout,
        instant: NaiveDateTime,
    ) -> Result<PathBuf, ArchiveError> {
        if !source.is_dir() {
            return Err(ArchiveError::SourceNotDirectory {
                path: source.to_path_buf(),
            });
        }
        fs::read_dir(source).map_err(|e| ArchiveError::io(source, e))?;

        let artifact = layout.artifact_path(instant);
        if let Some(day_dir) = artifact.parent() {
            fs::create_dir_all(day_dir).map_err(|e| ArchiveError::io(day_dir, e))?;
        }

        let file = File::create(&artifact).map_err(|e| ArchiveError::io(&artifact, e))?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let mut files = 0usize;

        for entry in WalkDir::new(source).follow_links(false).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let name = archive_name(source, entry.path());
            let size = entry
                .metadata()
                .map(|m| m.len())
                .unwrap_or_default();
            let options = self.options().large_file(size >= u64::from(u32::MAX));

            zip.start_file(name, options)?;
            let mut reader = BufReader::new(
                File::open(entry.path()).map_err(|e| ArchiveError::io(entry.path(), e))?,
            );
            io::copy(&mut reader, &mut zip).map_err(|e| ArchiveError::io(entry.path(), e))?;
            files += 1;
        }

        zip.finish()?;
        tracing::debug!("Archived {} files from {}", files, source.display());

        Ok(artifact)
    }
}

/// Path of `path` relative to `root`, `/`-separated as zip expects
fn archive_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_name_is_relative_and_slash_separated() {
        let root = Path::new("/srv/app");
        assert_eq!(
            archive_name(root, &root.join("src").join("main.rs")),
            "src/main.rs"
        );
        assert_eq!(archive_name(root, &root.join("README.md")), "README.md");
    }

    #[test]
    fn test_compression_level_is_clamped() {
        let builder = ZipArchiveBuilder::new().with_compression_level(42);
        assert_eq!(builder.compression, Some(9));
    }
}
