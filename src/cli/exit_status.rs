use std::process::ExitCode;

/// Exit status of the CLI.
///
/// Missing translations are reported, not failed on, so a finished run is
/// always `Success`.
///
/// - `Success` (0): Run completed, whatever was found missing
/// - `Error` (2): Run aborted (bad config, unwritable output directory, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Run aborted on an unrecoverable error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
