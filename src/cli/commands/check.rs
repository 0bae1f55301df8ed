use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    context::CommandContext,
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};
use crate::{
    core::KeyTree,
    issues::{EmptyInputIssue, Issue, missing_key_issues},
};

/// Merge the locale files and report problems without writing anything.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let output = ctx.output_path();
    let scan = ctx.scan(Some(output.as_path()))?;

    let mut issues: Vec<Issue> = scan.warnings.iter().cloned().map(Issue::from).collect();
    let mut key_count = 0;

    if scan.documents.is_empty() {
        issues.push(Issue::EmptyInput(EmptyInputIssue {
            locales_dir: ctx.config.locales_root.clone(),
            files_found: scan.files_found,
        }));
    } else {
        match KeyTree::from_documents(&scan.documents) {
            Ok(tree) => {
                issues.extend(missing_key_issues(&tree.coverage_gaps()));
                key_count = tree.leaf_count();
            }
            Err(error) => issues.push(error.into()),
        }
    }

    let summary = CheckSummary {
        locales: scan.locales().into_iter().map(String::from).collect(),
        key_count,
    };

    Ok(finish(
        CommandSummary::Check(summary),
        issues,
        true,
        ctx.quiet,
    ))
}
