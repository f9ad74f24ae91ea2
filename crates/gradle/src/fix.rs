use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use buildcheck_core::QuickFix;
use tokio::fs::{create_dir_all, write};

const REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// Fix that creates `gradle/wrapper/gradle-wrapper.properties` pinning a
/// suggested Gradle version for a project that has no wrapper.
///
/// Availability is re-checked against the file system at most once per
/// [`REFRESH_INTERVAL`]; tests bypass the cache so they never observe a stale
/// "available" answer.
#[derive(Debug)]
pub struct CreateWrapperPropertiesFix {
    project_dir: PathBuf,
    version: String,
    availability: Mutex<Availability>,
}

#[derive(Debug)]
struct Availability {
    available: bool,
    checked_at: Instant,
}

impl CreateWrapperPropertiesFix {
    #[must_use]
    pub fn new(project_dir: PathBuf, version: String) -> Self {
        let available = !properties_path(&project_dir).is_file();
        Self {
            project_dir,
            version,
            availability: Mutex::new(Availability {
                available,
                checked_at: Instant::now(),
            }),
        }
    }

    fn properties_path(&self) -> PathBuf {
        properties_path(&self.project_dir)
    }

    fn wrapper_properties_content(&self) -> String {
        format!(
            "distributionBase=GRADLE_USER_HOME\n\
             distributionPath=wrapper/dists\n\
             distributionUrl=https\\://services.gradle.org/distributions/gradle-{}-bin.zip\n\
             zipStoreBase=GRADLE_USER_HOME\n\
             zipStorePath=wrapper/dists\n",
            self.version
        )
    }
}

fn properties_path(project_dir: &Path) -> PathBuf {
    project_dir.join("gradle/wrapper/gradle-wrapper.properties")
}

#[async_trait]
impl QuickFix for CreateWrapperPropertiesFix {
    fn describe(&self) -> String {
        format!(
            "Create gradle/wrapper/gradle-wrapper.properties pinning Gradle {}",
            self.version
        )
    }

    async fn is_applicable(&self) -> bool {
        let mut state = self
            .availability
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        if cfg!(test) || now.duration_since(state.checked_at) > REFRESH_INTERVAL {
            state.available = state.available && !self.properties_path().is_file();
            state.checked_at = now;
        }
        state.available
    }

    async fn apply(&self) -> Result<()> {
        let path = self.properties_path();
        if path.is_file() {
            // Someone created it since detection; nothing to do.
            return Ok(());
        }
        create_dir_all(self.project_dir.join("gradle/wrapper")).await?;
        write(&path, self.wrapper_properties_content()).await?;
        Ok(())
    }
}
