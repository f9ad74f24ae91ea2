use std::path::{Path, PathBuf};

use async_trait::async_trait;
use buildcheck_core::{InstallationSettings, Lazy};

use crate::version::wrapper_version;

/// Dependency injection seam for wrapper lookups.
///
/// Production code uses [`FsWrapperProbe`]; tests use recording probes to
/// verify that short-circuit paths never touch the file system.
#[async_trait]
pub trait WrapperProbe: Send + Sync {
    async fn wrapper_defined(&self, script_path: &Path) -> bool;
}

/// Probe backed by the real wrapper locator and version parser.
#[derive(Debug, Default)]
pub struct FsWrapperProbe;

#[async_trait]
impl WrapperProbe for FsWrapperProbe {
    async fn wrapper_defined(&self, script_path: &Path) -> bool {
        wrapper_version(script_path).await.is_some()
    }
}

/// Locates a local Gradle installation home.
///
/// Consulted only when the wrapper is not preferred or not defined.
pub trait InstallationHomeLocator: Send + Sync {
    fn gradle_home(&self) -> Option<PathBuf>;
}

/// Default locator: honors the `GRADLE_HOME` environment variable.
#[derive(Debug, Default)]
pub struct EnvInstallationLocator;

impl InstallationHomeLocator for EnvInstallationLocator {
    fn gradle_home(&self) -> Option<PathBuf> {
        let home = std::env::var_os("GRADLE_HOME").filter(|v| !v.is_empty())?;
        let home = PathBuf::from(home);
        home.is_dir().then_some(home)
    }
}

/// Decides whether a project should run through its wrapper or a local
/// Gradle installation.
pub struct InstallationPreferencePolicy {
    probe: Box<dyn WrapperProbe>,
    // Constructed on first use: locating an installation can be expensive in
    // restricted execution contexts.
    installations: Lazy<Box<dyn InstallationHomeLocator>>,
}

impl Default for InstallationPreferencePolicy {
    fn default() -> Self {
        Self::new(Box::new(FsWrapperProbe), || {
            Box::new(EnvInstallationLocator)
        })
    }
}

impl InstallationPreferencePolicy {
    pub fn new(
        probe: Box<dyn WrapperProbe>,
        installations: impl Fn() -> Box<dyn InstallationHomeLocator> + Send + Sync + 'static,
    ) -> Self {
        Self {
            probe,
            installations: Lazy::new(installations),
        }
    }

    /// Whether a wrapper is pinned at the given build-script path.
    ///
    /// `None` short-circuits to `false` without any file-system access.
    pub async fn wrapper_defined(&self, script_path: Option<&Path>) -> bool {
        match script_path {
            Some(script_path) => self.probe.wrapper_defined(script_path).await,
            None => false,
        }
    }

    /// True iff the wrapper is not locally overridden and is defined for the
    /// linked project. A `false` answer means the caller should fall back to a
    /// local installation.
    pub async fn should_use_wrapper(&self, settings: &InstallationSettings) -> bool {
        if settings.prefer_local_installation_to_wrapper {
            return false;
        }
        self.wrapper_defined(settings.linked_project_path.as_deref())
            .await
    }

    /// Whether Gradle can run at all: the wrapper applies, or a local
    /// installation home exists.
    pub async fn gradle_available(&self, settings: &InstallationSettings) -> bool {
        if self.should_use_wrapper(settings).await {
            return true;
        }
        self.installations.value().gradle_home().is_some()
    }
}

impl std::fmt::Debug for InstallationPreferencePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallationPreferencePolicy")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    #[derive(Debug, Default)]
    struct RecordingProbe {
        calls: Arc<AtomicUsize>,
        defined: bool,
    }

    #[async_trait]
    impl WrapperProbe for RecordingProbe {
        async fn wrapper_defined(&self, _script_path: &Path) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.defined
        }
    }

    struct FixedLocator(Option<PathBuf>);

    impl InstallationHomeLocator for FixedLocator {
        fn gradle_home(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn settings(prefer_local: bool, linked: Option<&str>) -> InstallationSettings {
        InstallationSettings {
            prefer_local_installation_to_wrapper: prefer_local,
            linked_project_path: linked.map(PathBuf::from),
            suggested_wrapper_version: None,
        }
    }

    fn policy_with(probe: RecordingProbe, home: Option<PathBuf>) -> InstallationPreferencePolicy {
        InstallationPreferencePolicy::new(Box::new(probe), move || {
            Box::new(FixedLocator(home.clone()))
        })
    }

    #[tokio::test]
    async fn test_should_use_wrapper_when_defined_and_not_overridden() {
        let policy = policy_with(
            RecordingProbe {
                defined: true,
                ..RecordingProbe::default()
            },
            None,
        );
        assert!(
            policy
                .should_use_wrapper(&settings(false, Some("/proj/build.gradle")))
                .await
        );
    }

    #[tokio::test]
    async fn test_prefer_local_wins_regardless_of_wrapper() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = policy_with(
            RecordingProbe {
                calls: Arc::clone(&calls),
                defined: true,
            },
            None,
        );
        assert!(
            !policy
                .should_use_wrapper(&settings(true, Some("/proj/build.gradle")))
                .await
        );
        // Preference short-circuits before the probe is ever consulted
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_linked_path_short_circuits_without_probe_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let policy = policy_with(
            RecordingProbe {
                calls: Arc::clone(&calls),
                defined: true,
            },
            None,
        );

        assert!(!policy.should_use_wrapper(&settings(false, None)).await);
        assert!(!policy.wrapper_defined(None).await);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gradle_available_falls_back_to_local_home() {
        let temp_dir = TempDir::new().unwrap();
        let policy = policy_with(
            RecordingProbe::default(),
            Some(temp_dir.path().to_path_buf()),
        );

        assert!(policy.gradle_available(&settings(false, None)).await);
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_gradle_unavailable_without_wrapper_or_home() {
        let policy = policy_with(RecordingProbe::default(), None);
        assert!(!policy.gradle_available(&settings(false, None)).await);
    }

    #[tokio::test]
    async fn test_end_to_end_with_real_probe() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let script = root.join("build.gradle");
        fs::write(&script, "// build script").unwrap();
        let wrapper_dir = root.join("gradle/wrapper");
        fs::create_dir_all(&wrapper_dir).unwrap();
        fs::write(
            wrapper_dir.join("gradle-wrapper.properties"),
            "distributionUrl=https\\://services.gradle.org/distributions/gradle-7.4-bin.zip\n",
        )
        .unwrap();

        let policy = InstallationPreferencePolicy::default();
        assert!(policy.wrapper_defined(Some(&script)).await);
        assert!(
            policy
                .should_use_wrapper(&settings(false, script.to_str()))
                .await
        );
        assert!(
            !policy
                .should_use_wrapper(&settings(true, script.to_str()))
                .await
        );
        temp_dir.close().unwrap();
    }
}
