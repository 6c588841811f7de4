//! Interactive launcher for the daily solutions in this workspace.
//!
//! Asks for a year and a day, finds `<year>/<dd>/<entry point>` under the
//! workspace root and runs it, exiting with the solution's exit code.

use std::io::{BufRead, Write};

use miette::IntoDiagnostic;

pub mod config;
pub mod dispatch;
pub mod prompt;
pub mod selection;

use config::LauncherConfig;
use dispatch::DispatchError;

/// Exit code used when the launcher itself could not run a solution.
pub const FAILURE: i32 = 1;

/// Run one prompt-and-dispatch round, returning the code to exit with.
///
/// A missing solution is reported on `output` and yields [`FAILURE`]; every
/// other failure is returned as an error.
pub fn run<R, W>(config: &LauncherConfig, input: &mut R, output: &mut W) -> miette::Result<i32>
where
    R: BufRead,
    W: Write,
{
    let selection = prompt::select(config, input, output)?;
    match dispatch::dispatch(config, &selection, output) {
        Ok(code) => Ok(code),
        Err(err @ DispatchError::NotFound { .. }) => {
            tracing::debug!(%selection, "no solution on disk");
            writeln!(output, "{err}").into_diagnostic()?;
            Ok(FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

/// Log an unexpected failure on the error stream and pick the exit code.
pub fn report_failure(report: &miette::Report) -> i32 {
    tracing::error!("{report:?}");
    FAILURE
}
