use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use buildcheck_core::{Checker, InstallationSettings, Problem};

use crate::fix::CreateWrapperPropertiesFix;
use crate::version::wrapper_version;

const SUGGESTED_WRAPPER_VERSION: &str = "8.7";

/// Reports Gradle build scripts whose project pins no wrapper version.
///
/// Skipped entirely when the settings prefer a local installation: a missing
/// wrapper is then the expected state, not a problem.
#[derive(Debug)]
pub struct WrapperCheck {
    settings: InstallationSettings,
    project_files: Vec<&'static str>,
    seen_projects: HashSet<PathBuf>,
    problems: Vec<Problem>,
}

impl WrapperCheck {
    #[must_use]
    pub fn new(settings: InstallationSettings) -> Self {
        Self {
            settings,
            project_files: vec!["build.gradle.kts", "build.gradle"],
            seen_projects: HashSet::new(),
            problems: Vec::new(),
        }
    }

    fn suggested_version(&self) -> &str {
        self.settings
            .suggested_wrapper_version
            .as_deref()
            .unwrap_or(SUGGESTED_WRAPPER_VERSION)
    }
}

#[async_trait]
impl Checker for WrapperCheck {
    fn name(&self) -> &'static str {
        "gradle-wrapper"
    }

    fn problems(&self) -> Vec<&Problem> {
        self.problems.iter().collect()
    }

    fn take_problems(&mut self) -> Vec<Problem> {
        std::mem::take(&mut self.problems)
    }

    async fn visit(&mut self, path: &Path, relative_path: &Path) -> Result<()> {
        if self.settings.prefer_local_installation_to_wrapper {
            return Ok(());
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .context(format!("File name not found - {}", path.display()))?;
        if !path.is_file() || !self.project_files.contains(&file_name) {
            return Ok(());
        }

        let project_dir = path
            .parent()
            .context(format!("Parent not found - {}", path.display()))?;
        if !self.seen_projects.insert(project_dir.to_path_buf()) {
            return Ok(());
        }

        if wrapper_version(path).await.is_none() {
            let version = self.suggested_version().to_string();
            self.problems.push(
                Problem::new(
                    path.to_path_buf(),
                    relative_path.to_path_buf(),
                    "No Gradle wrapper version is pinned for this build script".to_string(),
                )
                .with_fix(Box::new(CreateWrapperPropertiesFix::new(
                    project_dir.to_path_buf(),
                    version,
                ))),
            );
        }

        Ok(())
    }
}
