use std::path::{Path, PathBuf};

/// Walk ancestors of `start` looking for a workspace marker.
///
/// A `.buildcheck` directory anywhere up the tree wins over the nearest `.git`
/// directory; with neither present, `start` itself is the root.
#[must_use]
pub fn find_workspace_root(start: &Path) -> PathBuf {
    let mut git_root = None;
    for dir in start.ancestors() {
        if dir.join(".buildcheck").is_dir() {
            return dir.to_path_buf();
        }
        if git_root.is_none() && dir.join(".git").is_dir() {
            git_root = Some(dir.to_path_buf());
        }
    }
    git_root.unwrap_or_else(|| start.to_path_buf())
}
