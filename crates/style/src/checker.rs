use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use buildcheck_core::{Checker, LineSeparator, Problem};
use buildcheck_utils::escape_separators;
use tokio::fs::read;

use crate::converter::LineSeparatorConverter;
use crate::fix::ConvertSeparatorsFix;
use crate::visibility::FileVisibilityPolicy;

/// Outcome of classifying one file against the project default separator.
///
/// Transient: re-derived on every pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorState {
    /// No default configured; the check does not apply to the project.
    NoProjectDefault,
    /// The visibility policy rejected the file.
    NotApplicable,
    /// Separator undetectable or already matching the default.
    Consistent,
    /// Mismatch: a problem with an attached fix is reported.
    Inconsistent {
        found: LineSeparator,
        expected: LineSeparator,
    },
}

impl SeparatorState {
    #[must_use]
    pub fn classify(
        default: Option<LineSeparator>,
        visible: bool,
        detected: Option<LineSeparator>,
    ) -> Self {
        let Some(expected) = default else {
            return Self::NoProjectDefault;
        };
        if !visible {
            return Self::NotApplicable;
        }
        match detected {
            Some(found) if found != expected => Self::Inconsistent { found, expected },
            _ => Self::Consistent,
        }
    }
}

/// Flags files whose line separators differ from the project default.
#[derive(Debug)]
pub struct LineSeparatorCheck {
    default: Option<LineSeparator>,
    policy: Box<dyn FileVisibilityPolicy>,
    converter: Arc<dyn LineSeparatorConverter>,
    problems: Vec<Problem>,
}

impl LineSeparatorCheck {
    #[must_use]
    pub fn new(
        default: Option<LineSeparator>,
        policy: Box<dyn FileVisibilityPolicy>,
        converter: Arc<dyn LineSeparatorConverter>,
    ) -> Self {
        Self {
            default,
            policy,
            converter,
            problems: Vec::new(),
        }
    }

    async fn classify_file(&self, path: &Path, relative_path: &Path) -> Result<SeparatorState> {
        if self.default.is_none() {
            return Ok(SeparatorState::NoProjectDefault);
        }

        let bytes = match read(path).await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "failed to read file for the line-separator check"
                );
                return Ok(SeparatorState::NotApplicable);
            }
        };
        let visible = self.policy.should_process(relative_path, &bytes);
        let detected = if visible {
            LineSeparator::detect(&String::from_utf8_lossy(&bytes))
        } else {
            None
        };

        Ok(SeparatorState::classify(self.default, visible, detected))
    }
}

#[async_trait]
impl Checker for LineSeparatorCheck {
    fn name(&self) -> &'static str {
        "line-separators"
    }

    fn problems(&self) -> Vec<&Problem> {
        self.problems.iter().collect()
    }

    fn take_problems(&mut self) -> Vec<Problem> {
        std::mem::take(&mut self.problems)
    }

    async fn visit(&mut self, path: &Path, relative_path: &Path) -> Result<()> {
        let state = self.classify_file(path, relative_path).await?;
        if let SeparatorState::Inconsistent { found, expected } = state {
            self.problems.push(
                Problem::new(
                    path.to_path_buf(),
                    relative_path.to_path_buf(),
                    format!(
                        "Line separators in the current file ({}) differ from the project default ({})",
                        escape_separators(found.as_str()),
                        escape_separators(expected.as_str()),
                    ),
                )
                .with_fix(Box::new(ConvertSeparatorsFix::new(
                    path.to_path_buf(),
                    expected,
                    Arc::clone(&self.converter),
                ))),
            );
        }
        Ok(())
    }
}
