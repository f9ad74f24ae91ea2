use serde::{Deserialize, Serialize};

use crate::separator::LineSeparator;
use crate::settings::InstallationSettings;

/// Loaded from `.buildcheck/config.json`, controls ignore patterns, the project
/// default line separator, and Gradle installation preferences.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for files to ignore (e.g., "target/**")
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Project default line separator; absent disables the separator check.
    #[serde(default)]
    pub line_separator: Option<LineSeparator>,

    /// Gradle installation preferences for the linked project.
    #[serde(default)]
    pub gradle: InstallationSettings,
}
