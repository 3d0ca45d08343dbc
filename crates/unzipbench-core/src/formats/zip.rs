//! In-memory ZIP extraction.

use std::io::Cursor;
use std::path::Path;

use tracing::trace;

use crate::ExtractionReport;
use crate::Result;
use crate::config::ExtractConfig;
use crate::copy::CopyBuffer;
use crate::types::DestDir;
use crate::types::SafePath;

use super::common::DEFAULT_FILE_MODE;
use super::common::create_directory;
use super::common::extract_file;

/// Extracts ZIP archives held in memory.
///
/// Owns the copy buffer so repeated extractions (one per benchmarked
/// archive) reuse a single allocation.
#[derive(Debug)]
pub struct ZipExtractor {
    config: ExtractConfig,
    copy_buffer: CopyBuffer,
}

impl ZipExtractor {
    /// Creates an extractor with the given settings.
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            copy_buffer: CopyBuffer::new(),
        }
    }

    /// Reconstructs the files and directories of `bytes` under `dest`.
    ///
    /// Entries are processed in central-directory order. Each entry name is
    /// validated with [`SafePath::validate`] before anything is written for
    /// it; the first invalid name or failing entry stops the extraction and
    /// leaves earlier entries on disk.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::InvalidArchive` if `bytes` is not a readable ZIP
    ///   archive or an entry's data is corrupt
    /// - `ExtractionError::PathTraversal` / `SecurityViolation` for unsafe
    ///   entry names
    /// - `ExtractionError::Io` for filesystem failures under `dest`
    pub fn extract(&mut self, dest: &Path, bytes: &[u8]) -> Result<ExtractionReport> {
        let dest = DestDir::new(dest)?;
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut report = ExtractionReport::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let safe_path = SafePath::validate(Path::new(entry.name()), &dest, &self.config)?;

            if entry.is_dir() {
                trace!(entry = %safe_path.as_path().display(), "directory");
                create_directory(&safe_path, &dest, &mut report)?;
            } else {
                let mode = if self.config.preserve_permissions {
                    entry.unix_mode().map_or(DEFAULT_FILE_MODE, |m| m & 0o777)
                } else {
                    DEFAULT_FILE_MODE
                };
                trace!(
                    entry = %safe_path.as_path().display(),
                    size = entry.size(),
                    mode = format_args!("{mode:o}"),
                    "file"
                );
                extract_file(
                    &mut entry,
                    &safe_path,
                    mode,
                    &dest,
                    &mut report,
                    &mut self.copy_buffer,
                )?;
            }
        }

        Ok(report)
    }
}

impl Default for ZipExtractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

/// Extracts the ZIP archive in `bytes` into `dest`.
///
/// Convenience wrapper around [`ZipExtractor`] for one-off extractions.
///
/// # Examples
///
/// ```no_run
/// use unzipbench_core::config::ExtractConfig;
/// use unzipbench_core::extract_zip;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bytes = std::fs::read("symbols.zip")?;
/// let report = extract_zip("/tmp/out", &bytes, &ExtractConfig::default())?;
/// println!("{} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_zip(
    dest: impl AsRef<Path>,
    bytes: &[u8],
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    ZipExtractor::new(config.clone()).extract(dest.as_ref(), bytes)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ExtractionError;
    use crate::test_utils::ZipTestBuilder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new()
            .add_directory("docs/")
            .add_file("docs/readme.txt", b"read me")
            .add_file("top.bin", &[0, 1, 2, 3])
            .build();

        let report = extract_zip(temp.path(), &data, &ExtractConfig::default()).unwrap();

        assert_eq!(report.files_extracted, 2);
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.bytes_written, 11);
        assert_eq!(
            fs::read_to_string(temp.path().join("docs/readme.txt")).unwrap(),
            "read me"
        );
        assert_eq!(fs::read(temp.path().join("top.bin")).unwrap(), [0, 1, 2, 3]);
    }

    #[test]
    fn test_extract_deflated_entry() {
        let temp = TempDir::new().unwrap();
        let body = "compressible ".repeat(1000);
        let data = ZipTestBuilder::new()
            .deflated()
            .add_file("text.txt", body.as_bytes())
            .build();

        extract_zip(temp.path(), &data, &ExtractConfig::default()).unwrap();
        assert_eq!(fs::read_to_string(temp.path().join("text.txt")).unwrap(), body);
    }

    #[test]
    fn test_file_without_directory_entry() {
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new()
            .add_file("a/b/c/deep.txt", b"deep")
            .build();

        let report = extract_zip(temp.path(), &data, &ExtractConfig::default()).unwrap();
        assert_eq!(report.directories_created, 0);
        assert!(temp.path().join("a/b/c/deep.txt").is_file());
    }

    #[test]
    fn test_empty_archive() {
        let temp = TempDir::new().unwrap();
        let data = ZipTestBuilder::new().build();

        let report = extract_zip(temp.path(), &data, &ExtractConfig::default()).unwrap();
        assert_eq!(report.total_items(), 0);
    }

    #[test]
    fn test_garbage_is_invalid_archive() {
        let temp = TempDir::new().unwrap();
        let result = extract_zip(temp.path(), b"definitely not a zip", &ExtractConfig::default());
        assert!(matches!(result, Err(ExtractionError::InvalidArchive(_))));
    }

    #[test]
    fn test_traversal_entry_rejected() {
        let outer = TempDir::new().unwrap();
        let dest = outer.path().join("dest");
        fs::create_dir(&dest).unwrap();
        let data = ZipTestBuilder::new()
            .add_file("ok.txt", b"fine")
            .add_file("../escaped.txt", b"evil")
            .build();

        let result = extract_zip(&dest, &data, &ExtractConfig::default());

        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
        assert!(!outer.path().join("escaped.txt").exists());
        assert!(dest.join("ok.txt").exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_permissions_preserved_and_ignored() {
        use std::os::unix::fs::PermissionsExt;

        let data = ZipTestBuilder::new()
            .add_file_with_mode("tool", b"bin", 0o700)
            .build();
        let mode_of = |dir: &Path| {
            fs::metadata(dir.join("tool")).unwrap().permissions().mode() & 0o777
        };

        let temp = TempDir::new().unwrap();
        extract_zip(temp.path(), &data, &ExtractConfig::default()).unwrap();
        assert_eq!(mode_of(temp.path()), 0o700);

        let temp = TempDir::new().unwrap();
        let config = ExtractConfig {
            preserve_permissions: false,
            ..ExtractConfig::default()
        };
        extract_zip(temp.path(), &data, &config).unwrap();
        assert_ne!(mode_of(temp.path()), 0o700);
    }

    #[test]
    fn test_missing_destination() {
        let data = ZipTestBuilder::new().add_file("a", b"a").build();
        let result = extract_zip("/nonexistent/unzipbench/dest", &data, &ExtractConfig::default());
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }

    #[test]
    fn test_extractor_reused_across_archives() {
        let mut extractor = ZipExtractor::default();
        let first = ZipTestBuilder::new().add_file("one.txt", b"1").build();
        let second = ZipTestBuilder::new().add_file("two.txt", b"22").build();

        let t1 = TempDir::new().unwrap();
        let t2 = TempDir::new().unwrap();
        assert_eq!(extractor.extract(t1.path(), &first).unwrap().bytes_written, 1);
        assert_eq!(extractor.extract(t2.path(), &second).unwrap().bytes_written, 2);
        assert!(!t2.path().join("one.txt").exists());
    }
}
