use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use buildcheck_core::LineSeparator;
use tokio::fs::{read_to_string, write};

/// Performs the in-place rewrite when the separator fix is applied.
///
/// The check itself never touches file contents; it only hands the target
/// separator to this collaborator.
#[async_trait]
pub trait LineSeparatorConverter: std::fmt::Debug + Send + Sync {
    /// # Errors
    /// Returns error if reading or writing the file fails.
    async fn convert(&self, path: &Path, target: LineSeparator) -> Result<()>;
}

/// Rewrite every line break in `content` to `target`.
#[must_use]
pub fn normalize_separators(content: &str, target: LineSeparator) -> String {
    let target = target.as_str();
    let mut out = String::with_capacity(content.len());
    let bytes = content.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                out.push_str(target);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 2;
                } else {
                    i += 1;
                }
            }
            b'\n' => {
                out.push_str(target);
                i += 1;
            }
            _ => {
                // Separators are single-byte; anything else copies through
                // untouched, multi-byte sequences included.
                let start = i;
                while i < bytes.len() && bytes[i] != b'\r' && bytes[i] != b'\n' {
                    i += 1;
                }
                out.push_str(&content[start..i]);
            }
        }
    }
    out
}

/// File-system-backed converter used by the CLI.
#[derive(Debug, Default)]
pub struct FsLineSeparatorConverter;

#[async_trait]
impl LineSeparatorConverter for FsLineSeparatorConverter {
    async fn convert(&self, path: &Path, target: LineSeparator) -> Result<()> {
        let content = read_to_string(path).await?;
        let normalized = normalize_separators(&content, target);
        if normalized != content {
            write(path, normalized).await?;
        }
        Ok(())
    }
}
