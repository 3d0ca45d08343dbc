//! Validated entry path type for archive extraction.

use crate::ExtractionError;
use crate::Result;
use crate::config::ExtractConfig;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;

/// An archive entry name that is safe to join onto a [`DestDir`].
///
/// `SafePath` represents a relative path that has been validated to not
/// contain:
/// - Parent directory segments (`..`)
/// - Root or drive prefixes
/// - Null bytes
/// - More than `max_path_depth` components
///
/// It can only be built through [`SafePath::validate`]; there is no
/// `From<PathBuf>`. `.` segments are dropped.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use unzipbench_core::config::ExtractConfig;
/// use unzipbench_core::types::DestDir;
/// use unzipbench_core::types::SafePath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp")?;
/// let config = ExtractConfig::default();
///
/// let safe = SafePath::validate(Path::new("foo/./bar.txt"), &dest, &config)?;
/// assert_eq!(safe.as_path(), Path::new("foo/bar.txt"));
///
/// assert!(SafePath::validate(Path::new("../etc/passwd"), &dest, &config).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validates an entry name and constructs a `SafePath`.
    ///
    /// Validation is purely lexical: the extractor never creates symlinks,
    /// so a relative path made only of normal components cannot leave the
    /// destination.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::PathTraversal` for `..`, absolute paths, drive
    ///   prefixes, and names that normalize to nothing
    /// - `ExtractionError::SecurityViolation` for null bytes or excessive depth
    pub fn validate(path: &Path, dest: &DestDir, config: &ExtractConfig) -> Result<Self> {
        if has_null_bytes(path) {
            return Err(ExtractionError::SecurityViolation {
                reason: format!("path contains null bytes: {}", path.display()),
            });
        }

        let traversal = || ExtractionError::PathTraversal {
            path: path.to_path_buf(),
        };

        let mut normalized = PathBuf::new();
        let mut depth = 0;

        for component in path.components() {
            match component {
                Component::Normal(comp) => {
                    depth += 1;
                    normalized.push(comp);
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(traversal());
                }
            }
        }

        if depth == 0 {
            return Err(traversal());
        }

        if depth > config.max_path_depth {
            return Err(ExtractionError::SecurityViolation {
                reason: format!(
                    "path depth {depth} exceeds maximum {}",
                    config.max_path_depth
                ),
            });
        }

        if !dest.as_path().join(&normalized).starts_with(dest.as_path()) {
            return Err(traversal());
        }

        Ok(Self(normalized))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

#[cfg(unix)]
fn has_null_bytes(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().contains(&b'\0')
}

#[cfg(not(unix))]
fn has_null_bytes(path: &Path) -> bool {
    path.to_str().is_none_or(|s| s.contains('\0'))
}
