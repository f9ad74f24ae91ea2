use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use buildcheck_core::{LineSeparator, QuickFix};

use crate::converter::LineSeparatorConverter;

/// Fix that converts a file to the project default line separator.
///
/// Delegates the rewrite to the converter collaborator; silently no-ops when
/// the target stopped being a regular file between detection and application.
#[derive(Debug)]
pub struct ConvertSeparatorsFix {
    path: PathBuf,
    target: LineSeparator,
    converter: Arc<dyn LineSeparatorConverter>,
}

impl ConvertSeparatorsFix {
    #[must_use]
    pub fn new(path: PathBuf, target: LineSeparator, converter: Arc<dyn LineSeparatorConverter>) -> Self {
        Self {
            path,
            target,
            converter,
        }
    }
}

#[async_trait]
impl QuickFix for ConvertSeparatorsFix {
    fn describe(&self) -> String {
        format!("Convert to project line separators ({})", self.target)
    }

    async fn is_applicable(&self) -> bool {
        self.path.is_file()
    }

    async fn apply(&self) -> Result<()> {
        if !self.path.is_file() {
            return Ok(());
        }
        self.converter.convert(&self.path, self.target).await
    }
}
