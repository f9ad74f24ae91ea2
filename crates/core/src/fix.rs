use anyhow::Result;
use async_trait::async_trait;

/// A quick fix attached to a reported problem.
///
/// Fixes are plain values with exactly three capabilities: describe themselves,
/// report whether they can still run, and run. Commands compose them through
/// this trait only, never through concrete types.
#[async_trait]
pub trait QuickFix: std::fmt::Debug + Send + Sync {
    /// Human-readable action name shown before applying (e.g. in a confirm prompt).
    fn describe(&self) -> String;

    /// Whether the fix can still be applied. State may have changed between
    /// detection and application, so this is re-checked at apply time.
    async fn is_applicable(&self) -> bool;

    /// Apply the fix. Silently no-ops when the target is no longer in a fixable
    /// state rather than failing.
    ///
    /// # Errors
    /// Returns error only on I/O failures while rewriting the target.
    async fn apply(&self) -> Result<()>;
}
