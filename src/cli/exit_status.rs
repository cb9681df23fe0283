use std::process::ExitCode;

/// Process exit status, following the usual linter convention.
///
/// - `Success` (0): no errors found, or the command completed
/// - `Failure` (1): errors were found, or the command was refused
/// - `Error` (2): the command could not run (bad config, unknown type, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
