//! Error types for archive extraction and benchmark runs.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while extracting a single archive.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Entry name would resolve outside the destination directory.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The entry name that attempted traversal.
        path: PathBuf,
    },

    /// Entry rejected by a validation rule other than traversal.
    #[error("operation denied by security policy: {reason}")]
    SecurityViolation {
        /// Reason for the violation.
        reason: String,
    },
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

impl ExtractionError {
    /// Returns `true` if this error represents a rejected entry name.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use unzipbench_core::ExtractionError;
    ///
    /// let err = ExtractionError::PathTraversal {
    ///     path: PathBuf::from("../etc/passwd"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ExtractionError::InvalidArchive("bad header".into());
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(
            self,
            Self::PathTraversal { .. } | Self::SecurityViolation { .. }
        )
    }
}

/// Errors that abort (or, under `FailurePolicy::Continue`, skip) one step of
/// a benchmark run.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Listing the source directory failed.
    #[error("cannot list archives in {path}: {source}")]
    Discovery {
        /// Source directory.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Reading an archive into memory failed.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Archive path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Creating the scratch directory failed.
    #[error("cannot create temporary directory for {path}: {source}")]
    TempDir {
        /// Archive path the directory was meant for.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Extracting an archive failed.
    #[error("cannot extract {path}: {source}")]
    Extraction {
        /// Archive path.
        path: PathBuf,
        /// Underlying error.
        source: ExtractionError,
    },

    /// The source directory holds no matching archives.
    #[error("no .{extension} archives found in {path}")]
    NoArchives {
        /// Source directory.
        path: PathBuf,
        /// Extension that was searched for.
        extension: String,
    },
}

impl BenchError {
    /// Returns the archive or directory this error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Discovery { path, .. }
            | Self::Read { path, .. }
            | Self::TempDir { path, .. }
            | Self::Extraction { path, .. }
            | Self::NoArchives { path, .. } => path,
        }
    }
}
