use std::fs;

use anyhow::{Context as _, Result};

use super::super::args::GenerateCommand;
use super::{
    context::CommandContext,
    helper::finish,
    {CommandResult, CommandSummary, GenerateSummary},
};
use crate::{
    core::{GenerateError, generate as generate_module},
    issues::{EmptyInputIssue, Issue, missing_key_issues},
};

/// Merge the locale files and write the output module.
///
/// The output file is written only when generation succeeds. Conflicts and
/// an empty locales directory are reported as errors (exit code 1); a
/// failure to write is an internal error (exit code 2).
pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let mut ctx = CommandContext::new(&cmd.common)?;
    ctx.apply_generate_overrides(&cmd)?;

    let output = ctx.output_path();
    let scan = ctx.scan(Some(output.as_path()))?;
    let locales: Vec<String> = scan.locales().into_iter().map(String::from).collect();

    let mut issues: Vec<Issue> = scan.warnings.iter().cloned().map(Issue::from).collect();
    let mut summary = GenerateSummary {
        output: None,
        locales,
        key_count: 0,
    };

    match generate_module(&scan.documents, &ctx.config.emit_options()) {
        Ok(generated) => {
            if let Some(parent) = output.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&output, &generated.content)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            tracing::debug!(path = %output.display(), bytes = generated.content.len(), "wrote output");

            issues.extend(missing_key_issues(&generated.tree.coverage_gaps()));
            summary.key_count = generated.tree.leaf_count();
            summary.output = Some(output.to_string_lossy().to_string());
        }
        Err(GenerateError::Conflict(error)) => issues.push(error.into()),
        Err(GenerateError::EmptyInput) => issues.push(Issue::EmptyInput(EmptyInputIssue {
            locales_dir: ctx.config.locales_root.clone(),
            files_found: scan.files_found,
        })),
        Err(err @ GenerateError::Serialize(_)) => return Err(err.into()),
    }

    Ok(finish(
        CommandSummary::Generate(summary),
        issues,
        true,
        ctx.quiet,
    ))
}
