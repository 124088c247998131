//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit codes
//! - `report`: console output
//! - `run`: command dispatch

use anyhow::Result;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use run::CommandResult;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::Success)
}
