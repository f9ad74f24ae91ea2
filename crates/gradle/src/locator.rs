use std::path::{Path, PathBuf};

use tokio::fs::read_dir;

/// Locate the wrapper properties file for the build script at `script_path`.
///
/// Looks for `<scriptDir>/gradle/wrapper/*.properties` and returns the single
/// candidate, or `None` when the script, the directory layout, or exactly one
/// candidate is missing. Zero or multiple candidates log a warning, as does a
/// wrapper directory that exists but cannot be listed; none of these
/// conditions is an error.
pub async fn locate_wrapper_properties(script_path: &Path) -> Option<PathBuf> {
    if !script_path.is_file() {
        return None;
    }

    let script_dir = script_path.parent()?;
    let gradle_dir = script_dir.join("gradle");
    if !gradle_dir.is_dir() {
        return None;
    }

    let wrapper_dir = gradle_dir.join("wrapper");
    let mut entries = match read_dir(&wrapper_dir).await {
        Ok(entries) => entries,
        // A missing wrapper directory is the ordinary negative result
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
        Err(error) => {
            tracing::warn!(
                dir = %wrapper_dir.display(),
                %error,
                "failed to list the gradle wrapper directory"
            );
            return None;
        }
    };

    let mut candidates = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        if path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".properties"))
        {
            candidates.push(path);
        }
    }

    if candidates.len() != 1 {
        tracing::warn!(
            dir = %wrapper_dir.display(),
            count = candidates.len(),
            "expected exactly one *.properties file in the gradle wrapper directory"
        );
        return None;
    }

    candidates.pop()
}
