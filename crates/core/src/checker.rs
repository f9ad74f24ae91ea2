use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::problem::Problem;

/// Visitor pattern for build-hygiene checks over a file tree.
///
/// Each check implements this trait and accumulates [`Problem`]s as files are
/// visited. The `visit` method is called once for every file the walker yields.
#[async_trait]
pub trait Checker: std::fmt::Debug + Send + Sync {
    /// Short identifier used in command output (e.g. "gradle-wrapper").
    fn name(&self) -> &'static str;

    fn problems(&self) -> Vec<&Problem>;

    /// Drain accumulated problems, transferring fix ownership to the caller.
    fn take_problems(&mut self) -> Vec<Problem>;

    /// # Errors
    /// Returns error if the file visitation fails.
    async fn visit(&mut self, path: &Path, relative_path: &Path) -> Result<()>;

    /// Post-visit hook called once after all `visit()` calls complete.
    /// # Errors
    /// Returns error if finalization fails.
    async fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}
