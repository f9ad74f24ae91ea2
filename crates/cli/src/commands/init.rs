use anyhow::Result;
use buildcheck_core::{Config, LineSeparator};
use buildcheck_utils::{find_workspace_root, get_buildcheck_dir, write_config};
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Initialize a buildcheck config")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Initialize `.buildcheck/config.json` with a default configuration
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let root = find_workspace_root(&current_dir);
    let config_file = get_buildcheck_dir(&root).join("config.json");
    if config_file.exists() {
        Err(anyhow::anyhow!("buildcheck already initialized"))
    } else {
        if !args.dry_run {
            let config = Config {
                line_separator: Some(LineSeparator::Lf),
                ..Config::default()
            };
            write_config(&root, &config).await?;
        }

        println!("buildcheck initialized in {}", root.display());

        Ok(())
    }
}
