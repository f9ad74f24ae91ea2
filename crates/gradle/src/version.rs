use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tokio::fs::read_to_string;

use crate::locator::locate_wrapper_properties;
use crate::properties::parse_properties;

const WRAPPER_VERSION_PROPERTY_KEY: &str = "distributionUrl";

// Full-string match; `(?s)` so the dot crosses path separators like the
// original pattern does.
static WRAPPER_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^.*gradle-(.+)-bin\.zip$").expect("hardcoded regex must compile")
});

/// Gradle version pinned by the wrapper of the project whose build script is at
/// `script_path`, if any.
///
/// Locates the wrapper properties file alongside the script and parses the
/// version out of its `distributionUrl`. Every failure mode (missing files,
/// unreadable properties, non-matching URL) degrades to `None`; the caller's
/// local-installation fallback stays available.
pub async fn wrapper_version(script_path: &Path) -> Option<String> {
    let properties_path = locate_wrapper_properties(script_path).await?;
    wrapper_version_in(&properties_path).await
}

/// Parse the pinned version out of the wrapper properties file itself.
pub async fn wrapper_version_in(properties_path: &Path) -> Option<String> {
    let content = match read_to_string(properties_path).await {
        Ok(content) => content,
        Err(error) => {
            tracing::warn!(
                path = %properties_path.display(),
                %error,
                "failed to read gradle wrapper properties file"
            );
            return None;
        }
    };

    let properties = parse_properties(&content);
    let value = properties.get(WRAPPER_VERSION_PROPERTY_KEY)?;
    if value.is_empty() {
        return None;
    }

    WRAPPER_VERSION_PATTERN
        .captures(value)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn write_wrapper(temp_dir: &TempDir, properties: &str) -> std::path::PathBuf {
        let root = temp_dir.path();
        let script = root.join("build.gradle");
        fs::write(&script, "// build script").unwrap();
        let wrapper_dir = root.join("gradle/wrapper");
        fs::create_dir_all(&wrapper_dir).unwrap();
        fs::write(wrapper_dir.join("gradle-wrapper.properties"), properties).unwrap();
        script
    }

    #[tokio::test]
    async fn test_parses_version_from_escaped_url() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_wrapper(
            &temp_dir,
            "distributionUrl=https\\://services.gradle.org/distributions/gradle-7.4-bin.zip\n",
        );

        assert_eq!(wrapper_version(&script).await.as_deref(), Some("7.4"));
        temp_dir.close().unwrap();
    }

    #[rstest]
    #[case("https://services.gradle.org/distributions/gradle-7.4-bin.zip", Some("7.4"))]
    #[case("https://services.gradle.org/distributions/gradle-8.11.1-bin.zip", Some("8.11.1"))]
    #[case("https://host/gradle-7.0-rc-1-bin.zip", Some("7.0-rc-1"))]
    #[case("file:/opt/dists/gradle-6.8-bin.zip", Some("6.8"))]
    #[case("https://services.gradle.org/distributions/gradle-7.4-all.zip", None)]
    #[case("https://example.com/other.zip", None)]
    #[case("", None)]
    #[tokio::test]
    async fn test_distribution_url_pattern(#[case] url: &str, #[case] expected: Option<&str>) {
        let temp_dir = TempDir::new().unwrap();
        let script = write_wrapper(&temp_dir, &format!("distributionUrl={url}\n"));

        assert_eq!(wrapper_version(&script).await.as_deref(), expected);
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_missing_distribution_url_key() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_wrapper(&temp_dir, "distributionBase=GRADLE_USER_HOME\n");

        assert_eq!(wrapper_version(&script).await, None);
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_unreadable_properties_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gradle-wrapper.properties");

        assert_eq!(wrapper_version_in(&missing).await, None);
        temp_dir.close().unwrap();
    }
}
