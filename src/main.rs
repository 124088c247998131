use std::process::ExitCode;

use clap::Parser;
use i18n_extract::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match i18n_extract::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            i18n_extract::cli::report::print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
