//! # Conversion Configuration
//!
//! Where to read from, where to write to, and what to do when a file fails.

use std::path::{Path, PathBuf};

/// File name suffix of eligible source files.
pub const DEFAULT_SUFFIX: &str = ".jsonlines";

/// Name of the label list artifact.
pub const TAG_FILE_NAME: &str = "tag.txt";

/// What happens when a single source file cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole run; nothing is written.
    #[default]
    FailFast,
    /// Drop the failing file entirely, log it, and keep going.
    SkipFile,
}

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory scanned for source files (not recursive).
    pub input_dir: PathBuf,
    /// Directory the split files and `tag.txt` are written to.
    pub output_dir: PathBuf,
    /// Only directory entries whose name ends with this are read.
    pub suffix: String,
    pub error_policy: ErrorPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            error_policy: ErrorPolicy::FailFast,
        }
    }
}

impl ConvertConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory to scan for source files.
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the directory output artifacts are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the source file suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the per-file error policy.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Path of the label list artifact.
    pub fn tag_path(&self) -> PathBuf {
        self.output_dir.join(TAG_FILE_NAME)
    }

    /// Returns `true` if `file_name` should be read as a source file.
    pub fn is_source_name(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix)
    }

    pub(crate) fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_current_dir() {
        let config = ConvertConfig::new();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.suffix, ".jsonlines");
        assert_eq!(config.error_policy, ErrorPolicy::FailFast);
        assert_eq!(config.tag_path(), PathBuf::from("./tag.txt"));
    }

    #[test]
    fn builder_setters() {
        let config = ConvertConfig::new()
            .with_input_dir("corpus/genia")
            .with_output_dir("out")
            .with_suffix(".jsonl")
            .with_error_policy(ErrorPolicy::SkipFile);
        assert_eq!(config.input_dir, PathBuf::from("corpus/genia"));
        assert_eq!(config.tag_path(), PathBuf::from("out/tag.txt"));
        assert_eq!(config.error_policy, ErrorPolicy::SkipFile);
        assert!(config.is_source_name("a.jsonl"));
        assert!(!config.is_source_name("a.jsonlines.bak"));
    }

    #[test]
    fn suffix_is_literal() {
        let config = ConvertConfig::new();
        assert!(config.is_source_name("train.jsonlines"));
        assert!(config.is_source_name(".jsonlines"));
        assert!(!config.is_source_name("train.JSONLINES"));
        assert!(!config.is_source_name("train.json"));
    }
}
