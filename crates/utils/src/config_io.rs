use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use buildcheck_core::Config;
use tokio::fs::{create_dir_all, read_to_string, write};

/// The `.buildcheck` directory under the workspace root.
#[must_use]
pub fn get_buildcheck_dir(root: &Path) -> PathBuf {
    root.join(".buildcheck")
}

/// Load `.buildcheck/config.json`, falling back to defaults when missing.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn load_config(root: &Path) -> Result<Config> {
    let config_file = get_buildcheck_dir(root).join("config.json");
    if !config_file.is_file() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .context(format!("Failed to read {}", config_file.display()))?;
    serde_json::from_str(&content).context(format!("Invalid config {}", config_file.display()))
}

/// Write `config` to `.buildcheck/config.json`, creating the directory.
///
/// # Errors
/// Returns error if the directory or file cannot be written.
pub async fn write_config(root: &Path, config: &Config) -> Result<()> {
    let dir = get_buildcheck_dir(root);
    create_dir_all(&dir).await?;
    let content = serde_json::to_string_pretty(config)?;
    write(dir.join("config.json"), content).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildcheck_core::LineSeparator;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_config_missing_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(temp_dir.path()).await.unwrap();
        assert_eq!(config, Config::default());
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_config_invalid_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dir = get_buildcheck_dir(temp_dir.path());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), "{not json").unwrap();

        assert!(load_config(temp_dir.path()).await.is_err());
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_write_then_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            ignore: vec!["build/**".to_string()],
            line_separator: Some(LineSeparator::Lf),
            ..Config::default()
        };

        write_config(temp_dir.path(), &config).await.unwrap();
        let loaded = load_config(temp_dir.path()).await.unwrap();
        assert_eq!(loaded, config);
        temp_dir.close().unwrap();
    }
}
