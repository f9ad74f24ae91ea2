use std::path::PathBuf;

use anyhow::Result;
use buildcheck_gradle::{InstallationPreferencePolicy, wrapper_version};
use buildcheck_utils::{find_workspace_root, load_config};
use clap::Args;
use colored::Colorize;

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "Resolve the pinned Gradle wrapper version for the linked project")]
pub struct WrapperArgs {
    /// Build script to inspect; defaults to the configured linked project path
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    #[arg(short, long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Print the wrapper version and installation decision for the linked project.
pub async fn handle_wrapper(args: &WrapperArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let root = find_workspace_root(&current_dir);
    let config = load_config(&root).await?;

    let mut settings = config.gradle.clone();
    if let Some(script) = &args.script {
        settings.linked_project_path = Some(script.clone());
    }

    let version = match settings.linked_project_path.as_deref() {
        Some(script) => wrapper_version(script).await,
        None => None,
    };

    let policy = InstallationPreferencePolicy::default();
    let use_wrapper = policy.should_use_wrapper(&settings).await;
    let available = policy.gradle_available(&settings).await;

    let stdout_msg = match &version {
        Some(version) => format!(
            "Wrapper version: {}\nUse wrapper: {}\nGradle available: {}",
            version.green().bold(),
            use_wrapper,
            available
        ),
        None => format!(
            "{}\nUse wrapper: {}\nGradle available: {}",
            "No wrapper version defined".yellow().bold(),
            use_wrapper,
            available
        ),
    };
    let json_msg = serde_json::json!({
        "wrapperVersion": version,
        "useWrapper": use_wrapper,
        "gradleAvailable": available,
    })
    .to_string();

    args.format.print(&stdout_msg, &json_msg);
    Ok(())
}
