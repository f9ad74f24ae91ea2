use std::path::Path;

use anyhow::Result;
use buildcheck_core::Checker;
use ignore::WalkBuilder;

use crate::get_relative_path;

/// Walk the workspace tree and feed every file to every checker.
///
/// Hidden files and anything matched by `.gitignore` are skipped, so generated
/// and VCS-internal files never reach the checkers.
///
/// # Errors
/// Returns error if a checker fails while visiting a file.
pub async fn visit_files(root: &Path, checkers: &mut [Box<dyn Checker>]) -> Result<()> {
    let walker = WalkBuilder::new(root).build();

    for entry in walker {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative_path = get_relative_path(root, path)?;

        futures::future::join_all(
            checkers
                .iter_mut()
                .map(|checker| checker.visit(path, &relative_path)),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    }

    for checker in checkers.iter_mut() {
        checker.finalize().await?;
    }

    Ok(())
}
