use crate::checkers::get_checkers;
use anyhow::Result;
use buildcheck_core::{Checker, Config, Problem};
use buildcheck_utils::{find_workspace_root, load_config, visit_files};
use std::path::PathBuf;

pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub checkers: Vec<Box<dyn Checker>>,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory or config cannot be read.
    pub async fn new() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let root = find_workspace_root(&current_dir);
        let config = load_config(&root).await?;
        let checkers = get_checkers(&config);

        Ok(Self {
            root,
            config,
            checkers,
        })
    }

    /// Walk the tree once and drain every checker's problems.
    ///
    /// # Errors
    /// Returns error if the walk or any checker fails.
    pub async fn run_checks(&mut self) -> Result<Vec<Problem>> {
        visit_files(&self.root, &mut self.checkers).await?;
        Ok(self
            .checkers
            .iter_mut()
            .flat_map(|checker| checker.take_problems())
            .collect())
    }
}
