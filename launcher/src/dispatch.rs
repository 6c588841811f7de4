//! Hand-off from a selection to the solution's process.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use miette::Diagnostic;
use thiserror::Error;

use crate::config::{LauncherConfig, Runner};
use crate::selection::Selection;

#[derive(Debug, Error, Diagnostic)]
pub enum DispatchError {
    #[error("No solution found for year {year} day {day} yet ({})", .path.display())]
    #[diagnostic(code(launcher::not_found))]
    NotFound { year: u64, day: u32, path: PathBuf },

    #[error("failed to launch {}", .path.display())]
    #[diagnostic(code(launcher::spawn))]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to the terminal")]
    #[diagnostic(code(launcher::dispatch_io))]
    Io(#[from] io::Error),
}

/// Resolve the selection and check the entry point is there.
pub fn locate(config: &LauncherConfig, selection: &Selection) -> Result<PathBuf, DispatchError> {
    let path = selection.resolve(config);
    tracing::debug!(path = %path.display(), "resolved entry point");
    if !path.exists() {
        return Err(DispatchError::NotFound {
            year: selection.year.get(),
            day: selection.day.get(),
            path,
        });
    }
    Ok(path)
}

/// Run `entry_point` with the parent's standard streams and wait for it.
pub fn launch(runner: &Runner, entry_point: &Path) -> Result<ExitStatus, DispatchError> {
    Command::new(&runner.program)
        .args(&runner.args)
        .arg(entry_point)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| DispatchError::Spawn {
            path: entry_point.to_path_buf(),
            source,
        })
}

/// A child killed by a signal has no code and counts as success.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(0)
}

/// Locate, announce, and run the selected solution, returning its exit code.
///
/// Nothing is spawned when the entry point is missing.
#[tracing::instrument(skip_all, fields(%selection))]
pub fn dispatch<W: io::Write>(
    config: &LauncherConfig,
    selection: &Selection,
    output: &mut W,
) -> Result<i32, DispatchError> {
    let entry_point = locate(config, selection)?;

    writeln!(output, "Running {selection}")?;
    output.flush()?;

    let status = launch(&config.runner, &entry_point)?;
    tracing::debug!(%status, "solution finished");
    Ok(exit_code(status))
}
