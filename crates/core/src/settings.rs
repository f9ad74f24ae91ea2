use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gradle installation preferences for the linked project.
///
/// Read-only from the policy's perspective; the caller owns the snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstallationSettings {
    /// Prefer a locally installed Gradle over the project wrapper.
    #[serde(default)]
    pub prefer_local_installation_to_wrapper: bool,

    /// Path to the linked project's build script, if any.
    #[serde(default)]
    pub linked_project_path: Option<PathBuf>,

    /// Wrapper version suggested when the create-wrapper fix is offered.
    #[serde(default)]
    pub suggested_wrapper_version: Option<String>,
}
