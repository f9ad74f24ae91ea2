use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::commands::{
    CheckArgs, FixArgs, InitArgs, WrapperArgs, handle_check, handle_fix, handle_init,
    handle_wrapper,
};
pub mod checkers;
pub mod commands;
pub mod context;
pub mod options;
pub mod prompter;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "buildcheck",
    author,
    version,
    about = "A build-hygiene checker for Gradle projects: wrapper pinning and line separators",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Check(CheckArgs),
    Fix(FixArgs),
    Wrapper(WrapperArgs),
}

/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Init(args) => handle_init(&args).await?,
            Commands::Check(args) => handle_check(&args).await?,
            Commands::Fix(args) => handle_fix(&args).await?,
            Commands::Wrapper(args) => handle_wrapper(&args).await?,
        }
    } else {
        handle_check(&CheckArgs::default()).await?;
    }
    Ok(())
}
