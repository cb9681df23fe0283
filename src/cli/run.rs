//! Dispatches a parsed command line to its command handler.
//!
//! `check` results are printed here; `resolve` and `init` print their own
//! output and return an exit status directly.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, resolve::resolve},
    exit_code::exit_status_from_result,
    exit_status::ExitStatus,
    report,
};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    match args.command {
        Some(Command::Check(cmd)) => {
            let result = check(cmd)?;
            report::print(&result, verbose);
            Ok(exit_status_from_result(&result))
        }
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
