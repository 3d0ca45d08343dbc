//! Entry copy loop with a buffer reused across entries and archives.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ExtractionError;

/// Size of the reusable copy buffer (64 KiB).
pub const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Heap buffer shared by every entry copy of a run.
///
/// Allocated once per [`Benchmark`](crate::Benchmark) so the timed region
/// does not pay for a fresh allocation per entry.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a zeroed buffer of [`COPY_BUFFER_SIZE`] bytes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `reader` into `writer` and returns the number of bytes copied.
///
/// Read failures of kind `InvalidData` or `UnexpectedEof` come from the
/// decompressor (bad deflate stream, CRC mismatch, truncated entry) and are
/// reported as `ExtractionError::InvalidArchive`; every other failure is
/// `ExtractionError::Io`.
pub fn copy_with_buffer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, ExtractionError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(classify_read_error(e)),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        total += bytes_read as u64;
    }

    Ok(total)
}

fn classify_read_error(err: io::Error) -> ExtractionError {
    match err.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            ExtractionError::InvalidArchive(format!("corrupt entry data: {err}"))
        }
        _ => ExtractionError::Io(err),
    }
}
