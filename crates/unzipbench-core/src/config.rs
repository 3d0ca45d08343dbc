//! Benchmark and extraction configuration.

use std::path::PathBuf;

/// What a run does when one archive fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing archive and return its error.
    #[default]
    Abort,
    /// Record the failure, log it, and carry on with the next archive.
    Continue,
}

/// Settings for extracting a single archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Maximum number of normal components in an entry name.
    pub max_path_depth: usize,

    /// Create files with the Unix mode recorded in the archive. When off, or
    /// when the archive records no mode, files get `0o644`.
    pub preserve_permissions: bool,
}

impl Default for ExtractConfig {
    /// Default values:
    /// - `max_path_depth`: 128
    /// - `preserve_permissions`: true
    fn default() -> Self {
        Self {
            max_path_depth: 128,
            preserve_permissions: true,
        }
    }
}

/// Configuration for a benchmark run.
///
/// # Examples
///
/// ```
/// use unzipbench_core::BenchConfig;
/// use unzipbench_core::config::FailurePolicy;
///
/// let config = BenchConfig {
///     failure_policy: FailurePolicy::Continue,
///     ..Default::default()
/// };
/// assert_eq!(config.extension, "zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// File extension (without the dot) of archives to pick up. Matching is
    /// case-sensitive.
    pub extension: String,

    /// Name prefix of the per-archive scratch directories.
    pub temp_prefix: String,

    /// Parent of the scratch directories; `None` uses the system temp root.
    pub temp_root: Option<PathBuf>,

    /// Behaviour when an archive fails.
    pub failure_policy: FailurePolicy,

    /// Per-archive extraction settings.
    pub extract: ExtractConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            extension: "zip".to_string(),
            temp_prefix: "extracthere".to_string(),
            temp_root: None,
            failure_policy: FailurePolicy::Abort,
            extract: ExtractConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Returns `true` if `file_name` matches `*.<extension>`.
    #[must_use]
    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.extension.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.extension, "zip");
        assert_eq!(config.temp_prefix, "extracthere");
        assert!(config.temp_root.is_none());
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.extract.max_path_depth, 128);
        assert!(config.extract.preserve_permissions);
    }

    #[test]
    fn test_matches_extension() {
        let config = BenchConfig::default();
        assert!(config.matches_extension("a.zip"));
        assert!(config.matches_extension("symbols.tar.zip"));
        assert!(!config.matches_extension("a.ZIP"));
        assert!(!config.matches_extension("a.zipx"));
        assert!(!config.matches_extension("azip"));
        assert!(config.matches_extension(".zip"));
    }
}
