//! Filesystem helpers shared by the extractor.
//!
//! - [`create_directory`]: directory entry creation (idempotent)
//! - [`extract_file`]: regular file creation with a recorded mode

use std::fs::OpenOptions;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use crate::ExtractionReport;
use crate::Result;
use crate::copy::COPY_BUFFER_SIZE;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::types::DestDir;
use crate::types::SafePath;

/// Mode used for files whose archive entry records none.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Creates a directory entry and any missing parents.
///
/// `create_dir_all` succeeds when the directory already exists, so an
/// archive that lists a directory twice, or after one of its files, is fine.
pub fn create_directory(
    safe_path: &SafePath,
    dest: &DestDir,
    report: &mut ExtractionReport,
) -> Result<()> {
    let dir_path = dest.join(safe_path);
    create_dir_all(&dir_path).map_err(|e| with_path(e, &dir_path))?;
    report.directories_created += 1;
    Ok(())
}

/// Writes one regular file entry.
///
/// The parent directory is created first. The file is created (or
/// truncated) with `mode` on Unix, filled from `reader`, and flushed. The
/// file handle is dropped before returning on every path.
pub fn extract_file<R: Read>(
    reader: &mut R,
    safe_path: &SafePath,
    mode: u32,
    dest: &DestDir,
    report: &mut ExtractionReport,
    copy_buffer: &mut CopyBuffer,
) -> Result<()> {
    let output_path = dest.join(safe_path);

    if let Some(parent) = output_path.parent() {
        create_dir_all(parent).map_err(|e| with_path(e, parent))?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let file = options
        .open(&output_path)
        .map_err(|e| with_path(e, &output_path))?;
    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, file);
    let bytes_written = copy_with_buffer(reader, &mut writer, copy_buffer)?;
    writer.flush().map_err(|e| with_path(e, &output_path))?;

    report.files_extracted += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

fn with_path(err: std::io::Error, path: &Path) -> std::io::Error {
    std::io::Error::new(err.kind(), format!("{}: {err}", path.display()))
}
