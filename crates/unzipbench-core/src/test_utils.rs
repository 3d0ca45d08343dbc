//! Test helpers: in-memory ZIP archives and a deterministic timer.
//!
//! # Panics
//!
//! The builders panic on write errors; they only target in-memory buffers.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

use crate::bench::Timer;

/// Builder for ZIP test archives.
///
/// Entries are stored uncompressed with mode `0o644` unless configured
/// otherwise. Entry names are written verbatim, so traversal names such as
/// `../evil` can be produced.
///
/// # Examples
///
/// ```
/// use unzipbench_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_directory("dir/")
///     .add_file("dir/nested.txt", b"world")
///     .build();
/// assert!(!zip_data.is_empty());
/// ```
pub struct ZipTestBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    method: CompressionMethod,
}

impl ZipTestBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            method: CompressionMethod::Stored,
        }
    }

    /// Deflate entries added after this call.
    #[must_use]
    pub fn deflated(mut self) -> Self {
        self.method = CompressionMethod::Deflated;
        self
    }

    /// Adds a regular file with mode `0o644`.
    #[must_use]
    pub fn add_file(self, name: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(name, data, 0o644)
    }

    /// Adds a regular file with a custom Unix mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, name: &str, data: &[u8], mode: u32) -> Self {
        let options = self.options().unix_permissions(mode);
        self.writer.start_file(name, options).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry. A trailing `/` is added by the writer if
    /// missing.
    #[must_use]
    pub fn add_directory(mut self, name: &str) -> Self {
        let options = self.options().unix_permissions(0o755);
        self.writer.add_directory(name, options).unwrap();
        self
    }

    /// Finishes the archive and returns its bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }

    fn options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(self.method)
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an archive holding one stored file of `payload_len` bytes.
#[must_use]
pub fn zip_with_payload(name: &str, payload_len: usize) -> Vec<u8> {
    let payload: Vec<u8> = (0..payload_len).map(|i| (i % 251) as u8).collect();
    ZipTestBuilder::new().add_file(name, &payload).build()
}

/// Writes `bytes` to `dir/name` and returns the path.
pub fn write_archive(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Timer that runs the closure but always reports the same duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimer(pub Duration);

impl Timer for FixedTimer {
    fn time<T>(&mut self, f: impl FnOnce() -> T) -> (T, Duration) {
        (f(), self.0)
    }
}
