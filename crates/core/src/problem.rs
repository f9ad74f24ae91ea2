use colored::Colorize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::fix::QuickFix;

/// A problem reported by a checker for one file.
#[derive(Debug)]
pub struct Problem {
    path: PathBuf,
    relative_path: PathBuf,
    message: String,
    fix: Option<Box<dyn QuickFix>>,
}

impl Problem {
    #[must_use]
    pub fn new(path: PathBuf, relative_path: PathBuf, message: String) -> Self {
        Self {
            path,
            relative_path,
            message,
            fix: None,
        }
    }

    #[must_use]
    pub fn with_fix(mut self, fix: Box<dyn QuickFix>) -> Self {
        self.fix = Some(fix);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn fix(&self) -> Option<&dyn QuickFix> {
        self.fix.as_deref()
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            format!("./{}", self.relative_path.display()).cyan().bold(),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " {}", format!("(fix: {})", fix.describe()).green())?;
        }
        Ok(())
    }
}
