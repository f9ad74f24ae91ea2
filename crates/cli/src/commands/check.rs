use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::context::CommandContext;

#[derive(Args, Debug, Default)]
#[command(about = "Report build-hygiene problems without changing anything")]
pub struct CheckArgs {}

/// Walk the workspace and report every problem the checkers find.
pub async fn handle_check(_args: &CheckArgs) -> Result<()> {
    let mut context = CommandContext::new().await?;
    let problems = context.run_checks().await?;

    if problems.is_empty() {
        println!("{}", "No problems found".green().bold());
        return Ok(());
    }

    for problem in &problems {
        println!("{problem}");
    }
    anyhow::bail!("{} problem(s) found", problems.len())
}
