use anyhow::Result;
use buildcheck_core::Problem;
use clap::Args;
use colored::Colorize;

use crate::context::CommandContext;
use crate::prompter::{InquirePrompter, Prompter, UserCancelled};

#[derive(Args, Debug)]
#[command(about = "Apply quick fixes for reported problems")]
pub struct FixArgs {
    /// Apply all fixes without prompting
    #[arg(short, long, default_value = "false")]
    pub yes: bool,
}

/// Find problems and apply their fixes, interactively unless `--yes`.
pub async fn handle_fix(args: &FixArgs) -> Result<()> {
    let mut context = CommandContext::new().await?;
    let problems = context.run_checks().await?;
    let prompter = InquirePrompter;

    match apply_fixes(&problems, args.yes, &prompter).await {
        Ok(applied) => {
            println!("{}", format!("Applied {applied} fix(es)").green().bold());
            Ok(())
        }
        Err(e) if e.downcast_ref::<UserCancelled>().is_some() => {
            println!("Cancelled");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

async fn apply_fixes(problems: &[Problem], yes: bool, prompter: &dyn Prompter) -> Result<usize> {
    let fixable = problems
        .iter()
        .filter(|problem| problem.fix().is_some())
        .collect::<Vec<_>>();
    if fixable.is_empty() {
        println!("No fixable problems found");
        return Ok(0);
    }

    let selected = if yes {
        fixable
    } else {
        let defaults = (0..fixable.len()).collect::<Vec<_>>();
        prompter.multi_select("Select fixes to apply", fixable, defaults)?
    };

    let mut applied = 0;
    for problem in selected {
        let Some(fix) = problem.fix() else {
            continue;
        };
        // State may have changed since detection
        if !fix.is_applicable().await {
            continue;
        }
        fix.apply().await?;
        applied += 1;
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::test_support::MockPrompter;
    use anyhow::Result;
    use async_trait::async_trait;
    use buildcheck_core::QuickFix;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CountingFix {
        applied: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl QuickFix for CountingFix {
        fn describe(&self) -> String {
            "Counting fix".to_string()
        }
        async fn is_applicable(&self) -> bool {
            true
        }
        async fn apply(&self) -> Result<()> {
            self.applied.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn problem_with_fix(applied: &Arc<AtomicUsize>) -> Problem {
        Problem::new(
            PathBuf::from("/proj/a.txt"),
            PathBuf::from("a.txt"),
            "message".to_string(),
        )
        .with_fix(Box::new(CountingFix {
            applied: Arc::clone(applied),
        }))
    }

    #[tokio::test]
    async fn test_yes_applies_all_fixes() {
        let applied = Arc::new(AtomicUsize::new(0));
        let problems = vec![problem_with_fix(&applied), problem_with_fix(&applied)];
        let prompter = MockPrompter {
            confirm_response: true,
            select_all: true,
        };

        let count = apply_fixes(&problems, true, &prompter).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(applied.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_selection_applies_nothing() {
        let applied = Arc::new(AtomicUsize::new(0));
        let problems = vec![problem_with_fix(&applied)];
        let prompter = MockPrompter {
            confirm_response: true,
            select_all: false,
        };

        let count = apply_fixes(&problems, false, &prompter).await.unwrap();
        assert_eq!(count, 0);
        assert_eq!(applied.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_problems_without_fixes_are_skipped() {
        let problems = vec![Problem::new(
            PathBuf::from("/proj/a.txt"),
            PathBuf::from("a.txt"),
            "unfixable".to_string(),
        )];
        let prompter = MockPrompter {
            confirm_response: true,
            select_all: true,
        };

        let count = apply_fixes(&problems, false, &prompter).await.unwrap();
        assert_eq!(count, 0);
    }
}
