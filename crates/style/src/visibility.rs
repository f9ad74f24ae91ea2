use std::path::Path;

use glob::Pattern;

/// Decides whether a file is subject to the line-separator check.
///
/// Consulted before the separator comparison; rejected files terminate the
/// check for that file with no report.
pub trait FileVisibilityPolicy: std::fmt::Debug + Send + Sync {
    fn should_process(&self, relative_path: &Path, preview: &[u8]) -> bool;
}

/// Default policy: excludes configured ignore globs and binary content.
#[derive(Debug, Default)]
pub struct DefaultVisibilityPolicy {
    ignore: Vec<Pattern>,
}

impl DefaultVisibilityPolicy {
    #[must_use]
    pub fn new(ignore_globs: &[String]) -> Self {
        Self {
            ignore: ignore_globs
                .iter()
                .filter_map(|glob| Pattern::new(glob).ok())
                .collect(),
        }
    }
}

impl FileVisibilityPolicy for DefaultVisibilityPolicy {
    fn should_process(&self, relative_path: &Path, preview: &[u8]) -> bool {
        if self
            .ignore
            .iter()
            .any(|pattern| pattern.matches_path(relative_path))
        {
            return false;
        }
        // NUL in the leading bytes marks the file as binary
        !preview.iter().take(4096).any(|b| *b == 0)
    }
}
