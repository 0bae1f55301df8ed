use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    /// Output file as given by the user, set only when it was written.
    pub output: Option<String>,
    pub locales: Vec<String>,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub locales: Vec<String>,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a type-locales command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found, errors first.
    pub issues: Vec<Issue>,
    /// Print errors only.
    pub quiet: bool,
}
