use std::path::{Path, PathBuf};

use anyhow::Result;

/// Relative path of `path` inside `root`.
///
/// # Errors
/// Returns error if `path` is not located under `root`.
pub fn get_relative_path(root: &Path, path: &Path) -> Result<PathBuf> {
    match path.strip_prefix(root) {
        Ok(relative) => Ok(relative.to_path_buf()),
        Err(_) => Err(anyhow::anyhow!(
            "Path {} is outside the workspace root {}",
            path.display(),
            root.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_inside_root() {
        let relative =
            get_relative_path(Path::new("/proj"), Path::new("/proj/gradle/wrapper")).unwrap();
        assert_eq!(relative, PathBuf::from("gradle/wrapper"));
    }

    #[test]
    fn test_path_equal_to_root() {
        let relative = get_relative_path(Path::new("/proj"), Path::new("/proj")).unwrap();
        assert_eq!(relative, PathBuf::from(""));
    }

    #[test]
    fn test_path_outside_root() {
        let result = get_relative_path(Path::new("/proj"), Path::new("/other/file.txt"));
        assert!(result.is_err());
    }
}
