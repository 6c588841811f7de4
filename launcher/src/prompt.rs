//! Line based prompts that keep asking until the answer validates.

use std::io::{self, BufRead, Write};

use miette::Diagnostic;
use thiserror::Error;

use crate::config::LauncherConfig;
use crate::selection::{validate_day, validate_year, Selection, ValidationError};

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("failed to talk to the terminal")]
    #[diagnostic(code(launcher::prompt_io))]
    Io(#[from] io::Error),

    #[error("input closed before a {label} was entered")]
    #[diagnostic(code(launcher::input_closed))]
    Closed { label: String },
}

/// Ask for a value until `validate` accepts it.
///
/// An empty answer takes `default`. Rejections are written back to the operator
/// and the question is asked again, with no retry limit.
pub fn ask<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: u32,
    mut validate: F,
) -> Result<T, PromptError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T, ValidationError>,
{
    let mut line = String::new();
    loop {
        write!(output, "{label} [{default}]: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed {
                label: label.to_lowercase(),
            });
        }

        let answer = match line.trim() {
            "" => default.to_string(),
            answer => answer.to_string(),
        };

        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(%answer, %err, "rejected {label}");
                writeln!(output, "  {err}")?;
            }
        }
    }
}

/// Prompt for the year, then the day.
#[tracing::instrument(skip_all)]
pub fn select<R, W>(
    config: &LauncherConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Selection, PromptError>
where
    R: BufRead,
    W: Write,
{
    let year = ask(input, output, "Year", config.default_year, |answer| {
        validate_year(config, answer)
    })?;
    let day = ask(input, output, "Day", config.default_day, |answer| {
        validate_day(config, answer)
    })?;
    Ok(Selection { year, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn config() -> LauncherConfig {
        LauncherConfig::with_base_dir("/aoc")
    }

    fn run(answers: &str) -> (Result<Selection, PromptError>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = select(&config(), &mut input, &mut output);
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn reprompts_until_year_and_day_are_valid() -> miette::Result<()> {
        let (result, output) = run("2023\nsoon\n2024\n26\n1\n");
        let selection = result?;

        assert_eq!(selection.to_string(), "Year 2024 Day 1");
        assert_eq!(output.matches("Year [2024]: ").count(), 3);
        assert_eq!(output.matches("Day [1]: ").count(), 2);
        assert!(output.contains("year must be 2024 or later"));
        assert!(output.contains("\"soon\" is not a number"));
        assert!(output.contains("day must be between 1 and 25"));
        Ok(())
    }

    #[test]
    fn empty_answers_take_defaults() -> miette::Result<()> {
        let (result, output) = run("\n\n");
        assert_eq!(result?.to_string(), "Year 2024 Day 1");
        assert!(!output.contains("must be"));
        Ok(())
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = run("2024\n");
        assert!(matches!(
            result,
            Err(PromptError::Closed { ref label }) if label == "day"
        ));
    }

    #[test]
    fn defaults_still_go_through_validation() {
        let mut input = Cursor::new(b"\n2025\n".to_vec());
        let mut output = Vec::new();
        let year = ask(&mut input, &mut output, "Year", 1999, |answer| {
            validate_year(&config(), answer)
        });
        assert_eq!(year.map(|year| year.get()).ok(), Some(2025));
        assert!(String::from_utf8_lossy(&output).contains("year must be 2024 or later"));
    }
}
