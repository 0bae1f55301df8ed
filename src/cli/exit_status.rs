use std::process::ExitCode;

/// Exit status of a type-locales run.
///
/// - `Success` (0): output generated, or check passed; warnings allowed
/// - `Failure` (1): a conflict or an empty locales directory stopped the run
/// - `Error` (2): configuration, I/O or argument error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
